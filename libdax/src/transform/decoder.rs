use crate::bitstream::BitReader;
use crate::dct::BlockDct;
use crate::error::Result;
use crate::header::StreamHeader;
use crate::quantizer::dequantize;
use std::io::Read;

/// Decoder for the block-transform format. Stateless; every stream carries
/// its own parameters in the header.
#[derive(Default)]
pub struct TransformDecoder;

impl TransformDecoder {
    pub fn new() -> Self {
        TransformDecoder
    }

    /// Decode a complete stream, returning the reconstructed samples and
    /// the header they were coded under.
    ///
    /// A stream that ends before `num_blocks * K` coefficients have been
    /// read is corrupt and fails with `EndOfStream`.
    pub fn decode<R: Read>(&self, src: R) -> Result<(Vec<i16>, StreamHeader)> {
        let mut bits = BitReader::new(src);
        let header = StreamHeader::read_from(&mut bits)?;

        let bs = header.block_size as usize;
        let kept = header.kept_coeffs as usize;
        let q = header.quant_bits as u32;
        let num_blocks = header.num_blocks();

        let mut dct = BlockDct::new(bs);
        let mut coeffs = vec![0.0f64; bs];
        let mut block = vec![0.0f64; bs];
        let mut samples = Vec::with_capacity(num_blocks as usize * bs);

        for _ in 0..num_blocks {
            for c in coeffs.iter_mut().take(kept) {
                let code = bits.read_n_bits(q)?;
                *c = dequantize(code, header.quant_bits);
            }
            // discarded high-frequency coefficients decode as silence
            for c in coeffs.iter_mut().skip(kept) {
                *c = 0.0;
            }

            dct.inverse(&coeffs, &mut block);

            for &x in &block {
                samples.push(x.round().clamp(-32768.0, 32767.0) as i16);
            }
        }

        // drop the final block's zero-padding
        samples.truncate(header.total_frames as usize);

        Ok((samples, header))
    }
}
