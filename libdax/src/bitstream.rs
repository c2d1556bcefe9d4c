//! Bit-level I/O over byte-oriented sinks and sources.
//!
//! Header fields and quantized coefficients have arbitrary non-byte widths,
//! so the container cannot be parsed with ordinary byte-aligned reads. All
//! bit-offset arithmetic lives here; the rest of the codec only ever asks
//! for "the next n bits".
//!
//! Bit order is MSB-first and identical on both sides: `write_n_bits(v, n)`
//! followed by `read_n_bits(n)` always returns `v` (for pre-masked `v`).

use crate::error::{DaxError, Result};
use std::io::{Read, Write};

const BUF_SIZE: usize = 4096;

/// Bit-level writer. Completed bytes are staged in an internal buffer and
/// flushed to the sink in `BUF_SIZE` chunks.
///
/// A writer must be consumed with [`BitWriter::finish`] to emit the final
/// partial byte; dropping one mid-stream loses the tail bits.
pub struct BitWriter<W: Write> {
    sink: W,
    buf: Vec<u8>,
    /// partial byte being assembled, valid bits in the low `acc_bits`
    acc: u64,
    /// always in [0, 8) between calls
    acc_bits: u32,
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        BitWriter {
            sink,
            buf: Vec::with_capacity(BUF_SIZE),
            acc: 0,
            acc_bits: 0,
        }
    }

    /// Append the low `n` bits of `value`, MSB-first.
    ///
    /// `n` must be in `1..=64`. Bits of `value` above the low `n` must be
    /// zero — callers pre-mask, this is not checked here.
    pub fn write_n_bits(&mut self, value: u64, n: u32) -> Result<()> {
        assert!((1..=64).contains(&n), "bit count {} out of range", n);

        let mut remaining = n;
        while remaining > 0 {
            let take = remaining.min(8 - self.acc_bits);
            let chunk = (value >> (remaining - take)) & ((1u64 << take) - 1);
            self.acc = (self.acc << take) | chunk;
            self.acc_bits += take;

            if self.acc_bits == 8 {
                let byte = self.acc as u8;
                self.push_byte(byte)?;
                self.acc = 0;
                self.acc_bits = 0;
            }

            remaining -= take;
        }

        Ok(())
    }

    /// Zero-pad the final partial byte, flush everything, and return the
    /// sink. Consuming `self` makes skipping the final flush impossible.
    pub fn finish(mut self) -> Result<W> {
        if self.acc_bits > 0 {
            let byte = (self.acc << (8 - self.acc_bits)) as u8;
            self.push_byte(byte)?;
            self.acc = 0;
            self.acc_bits = 0;
        }
        self.flush_buf()?;
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn push_byte(&mut self, byte: u8) -> Result<()> {
        self.buf.push(byte);
        if self.buf.len() == BUF_SIZE {
            self.flush_buf()?;
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        if !self.buf.is_empty() {
            self.sink.write_all(&self.buf)?;
            self.buf.clear();
        }
        Ok(())
    }
}

/// Bit-level reader.
pub struct BitReader<R: Read> {
    src: R,
    buf: Vec<u8>,
    pos: usize,
    filled: usize,
    /// bits pulled from the source but not yet consumed, right-aligned
    acc: u64,
    /// always in [0, 8) between calls
    acc_bits: u32,
}

impl<R: Read> BitReader<R> {
    pub fn new(src: R) -> Self {
        BitReader {
            src,
            buf: vec![0u8; BUF_SIZE],
            pos: 0,
            filled: 0,
            acc: 0,
            acc_bits: 0,
        }
    }

    /// Read `n` bits (`1..=64`) and return them right-aligned.
    ///
    /// Fails with [`DaxError::EndOfStream`] if the source exhausts first.
    /// Bits consumed before the failure are lost; callers treat this as a
    /// fatal decode error.
    pub fn read_n_bits(&mut self, n: u32) -> Result<u64> {
        assert!((1..=64).contains(&n), "bit count {} out of range", n);

        let mut out = 0u64;
        let mut remaining = n;
        while remaining > 0 {
            if self.acc_bits == 0 {
                self.acc = self.next_byte()? as u64;
                self.acc_bits = 8;
            }

            let take = remaining.min(self.acc_bits);
            let shift = self.acc_bits - take;
            let chunk = (self.acc >> shift) & ((1u64 << take) - 1);
            out = (out << take) | chunk;

            self.acc_bits -= take;
            self.acc &= (1u64 << self.acc_bits) - 1;
            remaining -= take;
        }

        Ok(out)
    }

    /// Release the underlying source.
    pub fn into_inner(self) -> R {
        self.src
    }

    fn next_byte(&mut self) -> Result<u8> {
        if self.pos == self.filled {
            loop {
                match self.src.read(&mut self.buf) {
                    Ok(0) => return Err(DaxError::EndOfStream),
                    Ok(k) => {
                        self.filled = k;
                        self.pos = 0;
                        break;
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            }
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_image() {
        // 101 + 01 + 100 = 10101100
        let mut bits = BitWriter::new(Vec::new());
        bits.write_n_bits(0b101, 3).unwrap();
        bits.write_n_bits(0b01, 2).unwrap();
        bits.write_n_bits(0b100, 3).unwrap();
        let bytes = bits.finish().unwrap();
        assert_eq!(bytes, vec![0b1010_1100]);
    }

    #[test]
    fn final_byte_zero_padded() {
        let mut bits = BitWriter::new(Vec::new());
        bits.write_n_bits(0b11, 2).unwrap();
        let bytes = bits.finish().unwrap();
        assert_eq!(bytes, vec![0b1100_0000]);
    }
}
