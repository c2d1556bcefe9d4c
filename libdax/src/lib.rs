//! # libdax-audio
//!
//! Encoder and decoder for the dax lossy audio formats.
//!
//! Two codecs share a bit-level container layer:
//!
//! * **transform** — mono audio cut into fixed blocks, DCT'd, truncated to
//!   the lowest-frequency coefficients, and bit-packed. This is the format
//!   the crate exists for.
//! * **uniform** — interleaved samples requantized to `2^Q` levels with no
//!   frequency analysis. Useful as a bitrate baseline and for multi-channel
//!   material.
//!
//! The two formats are self-describing but not interchangeable; a stream
//! must be decoded by the codec that produced it.
//!
//! ```no_run
//! use libdax_audio::{TransformDecoder, TransformEncoder};
//!
//! # fn main() -> libdax_audio::Result<()> {
//! let samples: Vec<i16> = vec![0; 44100];
//! let encoder = TransformEncoder::new(1024, 205, 16)?;
//! let encoded = encoder.encode_to_vec(&samples, 44100)?;
//!
//! let (decoded, header) = TransformDecoder::new().decode(&encoded[..])?;
//! assert_eq!(decoded.len() as u32, header.total_frames);
//! # Ok(())
//! # }
//! ```

pub mod bitstream;
pub mod dct;
pub mod error;
pub mod header;
pub mod quantizer;
pub mod transform;
pub mod uniform;

pub use bitstream::{BitReader, BitWriter};
pub use dct::BlockDct;
pub use error::{DaxError, Result};
pub use header::{StreamHeader, HEADER_BITS};
pub use transform::{TransformDecoder, TransformEncoder};
pub use uniform::{UniformDecoder, UniformEncoder, UniformHeader};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-shot transform encode into a byte vector.
pub fn encode_transform(
    samples: &[i16],
    sample_rate: u32,
    block_size: u16,
    kept_coeffs: u16,
    quant_bits: u8,
) -> Result<Vec<u8>> {
    TransformEncoder::new(block_size, kept_coeffs, quant_bits)?
        .encode_to_vec(samples, sample_rate)
}

/// One-shot transform decode.
pub fn decode_transform(data: &[u8]) -> Result<(Vec<i16>, StreamHeader)> {
    TransformDecoder::new().decode(data)
}

/// One-shot uniform encode into a byte vector.
pub fn encode_uniform(
    samples: &[i16],
    sample_rate: u32,
    channels: u16,
    quant_bits: u8,
) -> Result<Vec<u8>> {
    UniformEncoder::new(quant_bits)?.encode_to_vec(samples, sample_rate, channels)
}

/// One-shot uniform decode.
pub fn decode_uniform(data: &[u8]) -> Result<(Vec<i16>, UniformHeader)> {
    UniformDecoder::new().decode(data)
}
