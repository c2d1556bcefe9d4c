use crate::bitstream::BitWriter;
use crate::dct::BlockDct;
use crate::error::{DaxError, Result};
use crate::header::StreamHeader;
use crate::quantizer::{low_mask, quantize};
use std::io::Write;

/// Encoder for the block-transform format. Holds the coding parameters;
/// each call to [`TransformEncoder::encode`] produces one complete stream.
pub struct TransformEncoder {
    block_size: u16,
    kept_coeffs: u16,
    quant_bits: u8,
}

impl TransformEncoder {
    /// Build an encoder, rejecting parameter combinations no decoder would
    /// accept.
    pub fn new(block_size: u16, kept_coeffs: u16, quant_bits: u8) -> Result<Self> {
        if block_size == 0 {
            return Err(DaxError::MalformedHeader("block size is zero".to_string()));
        }
        if kept_coeffs > block_size {
            return Err(DaxError::MalformedHeader(format!(
                "kept coefficients {} exceed block size {}",
                kept_coeffs, block_size
            )));
        }
        if quant_bits == 0 || quant_bits > 64 {
            return Err(DaxError::MalformedHeader(format!(
                "quantizer bits {} outside 1..=64",
                quant_bits
            )));
        }
        Ok(TransformEncoder {
            block_size,
            kept_coeffs,
            quant_bits,
        })
    }

    pub fn block_size(&self) -> u16 {
        self.block_size
    }

    pub fn kept_coeffs(&self) -> u16 {
        self.kept_coeffs
    }

    pub fn quant_bits(&self) -> u8 {
        self.quant_bits
    }

    /// Encode mono 16-bit samples into `sink`. The final partial block is
    /// zero-padded; the header records the true frame count so the decoder
    /// can drop the padding again.
    pub fn encode<W: Write>(&self, samples: &[i16], sample_rate: u32, sink: W) -> Result<W> {
        if samples.is_empty() {
            return Err(DaxError::MalformedHeader(
                "no samples to encode".to_string(),
            ));
        }
        let total_frames = u32::try_from(samples.len()).map_err(|_| {
            DaxError::MalformedHeader(format!("{} frames exceed the 32-bit limit", samples.len()))
        })?;

        let header = StreamHeader {
            sample_rate,
            block_size: self.block_size,
            kept_coeffs: self.kept_coeffs,
            quant_bits: self.quant_bits,
            total_frames,
        };
        header.validate()?;

        let bs = self.block_size as usize;
        let kept = self.kept_coeffs as usize;
        let mask = low_mask(self.quant_bits);

        let mut bits = BitWriter::new(sink);
        header.write_to(&mut bits)?;

        let mut dct = BlockDct::new(bs);
        let mut block = vec![0.0f64; bs];
        let mut coeffs = vec![0.0f64; bs];

        for chunk in samples.chunks(bs) {
            for (dst, &s) in block.iter_mut().zip(chunk) {
                *dst = s as f64;
            }
            // zero-pad the tail of the last block
            for dst in block.iter_mut().skip(chunk.len()) {
                *dst = 0.0;
            }

            dct.forward(&block, &mut coeffs);

            for &c in &coeffs[..kept] {
                let code = (quantize(c) as u64) & mask;
                bits.write_n_bits(code, self.quant_bits as u32)?;
            }
        }

        bits.finish()
    }

    /// Convenience wrapper encoding into a fresh byte vector.
    pub fn encode_to_vec(&self, samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
        self.encode(samples, sample_rate, Vec::new())
    }
}
