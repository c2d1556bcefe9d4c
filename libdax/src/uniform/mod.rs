//! Time-domain uniform quantization codec.
//!
//! The simpler companion to the transform path: no frequency analysis,
//! every sample is independently requantized to `2^Q` levels and the level
//! indices are bit-packed. Supports interleaved multi-channel audio, since
//! there is no block structure to keep mono.

mod decoder;
mod encoder;

pub use decoder::UniformDecoder;
pub use encoder::UniformEncoder;

use crate::error::{DaxError, Result};
use std::io::{Read, Write};

/// Container signature for uniform streams.
pub const MAGIC: [u8; 4] = *b"WQ01";

const MAX_FRAMES: u32 = 1_000_000_000;

/// Byte-aligned header preceding the packed indices. All multi-byte fields
/// are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformHeader {
    pub sample_rate: u32,
    pub channels: u16,
    /// bits per stored sample, 1..=16
    pub quant_bits: u8,
    /// frames per channel
    pub total_frames: u32,
}

impl UniformHeader {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(DaxError::MalformedHeader("sample rate is zero".to_string()));
        }
        if self.channels == 0 || self.channels > 8 {
            return Err(DaxError::MalformedHeader(format!(
                "channel count {} outside 1..=8",
                self.channels
            )));
        }
        if self.quant_bits == 0 || self.quant_bits > 16 {
            return Err(DaxError::MalformedHeader(format!(
                "quantizer bits {} outside 1..=16",
                self.quant_bits
            )));
        }
        if self.total_frames == 0 || self.total_frames > MAX_FRAMES {
            return Err(DaxError::MalformedHeader(format!(
                "frame count {} outside 1..={}",
                self.total_frames, MAX_FRAMES
            )));
        }
        Ok(())
    }

    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        sink.write_all(&MAGIC)?;
        sink.write_all(&self.sample_rate.to_le_bytes())?;
        sink.write_all(&self.channels.to_le_bytes())?;
        sink.write_all(&[self.quant_bits])?;
        sink.write_all(&self.total_frames.to_le_bytes())?;
        Ok(())
    }

    pub fn read_from<R: Read>(src: &mut R) -> Result<Self> {
        let mut magic = [0u8; 4];
        read_exact_header(src, &mut magic)?;
        if magic != MAGIC {
            return Err(DaxError::MalformedHeader(
                "missing WQ01 signature".to_string(),
            ));
        }

        let mut buf4 = [0u8; 4];
        let mut buf2 = [0u8; 2];
        let mut buf1 = [0u8; 1];

        read_exact_header(src, &mut buf4)?;
        let sample_rate = u32::from_le_bytes(buf4);
        read_exact_header(src, &mut buf2)?;
        let channels = u16::from_le_bytes(buf2);
        read_exact_header(src, &mut buf1)?;
        let quant_bits = buf1[0];
        read_exact_header(src, &mut buf4)?;
        let total_frames = u32::from_le_bytes(buf4);

        let header = UniformHeader {
            sample_rate,
            channels,
            quant_bits,
            total_frames,
        };
        header.validate()?;
        Ok(header)
    }
}

// A short read inside the header means the file is not a uniform stream at
// all, so it reports as malformed rather than end-of-stream.
fn read_exact_header<R: Read>(src: &mut R, buf: &mut [u8]) -> Result<()> {
    src.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            DaxError::MalformedHeader("truncated header".to_string())
        } else {
            DaxError::Io(e)
        }
    })
}
