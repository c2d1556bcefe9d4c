//! Fixed stream header for the transform format.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{DaxError, Result};
use std::io::{Read, Write};

/// Total header size in bits: 32 + 16 + 16 + 8 + 32.
pub const HEADER_BITS: u32 = 104;

/// Parameters written at the front of every transform stream. The decoder
/// is driven entirely by these five fields; nothing else is negotiated.
///
/// Field order on the wire matches the struct declaration order, each field
/// written MSB-first at its natural width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHeader {
    pub sample_rate: u32,
    /// samples per block (B)
    pub block_size: u16,
    /// coefficients kept per block (K), low-frequency first
    pub kept_coeffs: u16,
    /// bits per quantized coefficient (Q)
    pub quant_bits: u8,
    /// frames of real audio; the last block's padding is not counted
    pub total_frames: u32,
}

impl StreamHeader {
    /// Check field consistency. Used on both sides: the encoder refuses to
    /// produce a stream no decoder would accept.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(DaxError::MalformedHeader("sample rate is zero".to_string()));
        }
        if self.block_size == 0 {
            return Err(DaxError::MalformedHeader("block size is zero".to_string()));
        }
        if self.kept_coeffs > self.block_size {
            return Err(DaxError::MalformedHeader(format!(
                "kept coefficients {} exceed block size {}",
                self.kept_coeffs, self.block_size
            )));
        }
        if self.quant_bits == 0 || self.quant_bits > 64 {
            return Err(DaxError::MalformedHeader(format!(
                "quantizer bits {} outside 1..=64",
                self.quant_bits
            )));
        }
        if self.total_frames == 0 {
            return Err(DaxError::MalformedHeader("stream holds no frames".to_string()));
        }
        Ok(())
    }

    /// Number of coded blocks, last one padded.
    pub fn num_blocks(&self) -> u32 {
        self.total_frames.div_ceil(self.block_size as u32)
    }

    pub fn write_to<W: Write>(&self, bits: &mut BitWriter<W>) -> Result<()> {
        bits.write_n_bits(self.sample_rate as u64, 32)?;
        bits.write_n_bits(self.block_size as u64, 16)?;
        bits.write_n_bits(self.kept_coeffs as u64, 16)?;
        bits.write_n_bits(self.quant_bits as u64, 8)?;
        bits.write_n_bits(self.total_frames as u64, 32)?;
        Ok(())
    }

    /// Parse and validate a header from the front of a stream.
    pub fn read_from<R: Read>(bits: &mut BitReader<R>) -> Result<Self> {
        let header = StreamHeader {
            sample_rate: bits.read_n_bits(32)? as u32,
            block_size: bits.read_n_bits(16)? as u16,
            kept_coeffs: bits.read_n_bits(16)? as u16,
            quant_bits: bits.read_n_bits(8)? as u8,
            total_frames: bits.read_n_bits(32)? as u32,
        };
        header.validate()?;
        Ok(header)
    }
}
