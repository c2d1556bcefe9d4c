use crate::bitstream::BitWriter;
use crate::error::{DaxError, Result};
use crate::quantizer::quantize_sample;
use crate::uniform::UniformHeader;
use std::io::Write;

/// Encoder for the uniform format.
pub struct UniformEncoder {
    quant_bits: u8,
}

impl UniformEncoder {
    pub fn new(quant_bits: u8) -> Result<Self> {
        if quant_bits == 0 || quant_bits > 16 {
            return Err(DaxError::MalformedHeader(format!(
                "quantizer bits {} outside 1..=16",
                quant_bits
            )));
        }
        Ok(UniformEncoder { quant_bits })
    }

    pub fn quant_bits(&self) -> u8 {
        self.quant_bits
    }

    /// Encode interleaved 16-bit samples. `samples.len()` must be a whole
    /// number of frames.
    pub fn encode<W: Write>(
        &self,
        samples: &[i16],
        sample_rate: u32,
        channels: u16,
        mut sink: W,
    ) -> Result<W> {
        if channels == 0 {
            return Err(DaxError::MalformedHeader("channel count is zero".to_string()));
        }
        if samples.len() % channels as usize != 0 {
            return Err(DaxError::MalformedHeader(format!(
                "{} samples do not interleave into {} channels",
                samples.len(),
                channels
            )));
        }
        let total_frames =
            u32::try_from(samples.len() / channels as usize).map_err(|_| {
                DaxError::MalformedHeader("frame count exceeds the 32-bit limit".to_string())
            })?;

        let header = UniformHeader {
            sample_rate,
            channels,
            quant_bits: self.quant_bits,
            total_frames,
        };
        header.validate()?;
        header.write_to(&mut sink)?;

        let mut bits = BitWriter::new(sink);
        for &s in samples {
            let index = quantize_sample(s, self.quant_bits);
            bits.write_n_bits(index, self.quant_bits as u32)?;
        }

        bits.finish()
    }

    pub fn encode_to_vec(
        &self,
        samples: &[i16],
        sample_rate: u32,
        channels: u16,
    ) -> Result<Vec<u8>> {
        self.encode(samples, sample_rate, channels, Vec::new())
    }
}
