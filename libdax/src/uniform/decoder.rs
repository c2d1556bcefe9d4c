use crate::bitstream::BitReader;
use crate::error::Result;
use crate::quantizer::reconstruct_sample;
use crate::uniform::UniformHeader;
use std::io::Read;

/// Decoder for the uniform format.
#[derive(Default)]
pub struct UniformDecoder;

impl UniformDecoder {
    pub fn new() -> Self {
        UniformDecoder
    }

    /// Decode a complete stream into interleaved samples.
    ///
    /// Running out of bits before `total_frames * channels` indices have
    /// been read fails with `EndOfStream`; partial output is not returned.
    pub fn decode<R: Read>(&self, mut src: R) -> Result<(Vec<i16>, UniformHeader)> {
        let header = UniformHeader::read_from(&mut src)?;

        let total = header.total_frames as usize * header.channels as usize;
        let mut bits = BitReader::new(src);
        let mut samples = Vec::with_capacity(total);

        for _ in 0..total {
            let index = bits.read_n_bits(header.quant_bits as u32)?;
            samples.push(reconstruct_sample(index, header.quant_bits));
        }

        Ok((samples, header))
    }
}
