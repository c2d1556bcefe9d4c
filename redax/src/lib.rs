//! redax - WAV converter library for the dax audio formats
//!
//! Wraps libdax-audio with WAV input/output so the encoder and decoder can
//! be used on ordinary audio files, from the CLI or as a library.

pub mod audio;

use anyhow::{bail, Context, Result};
use libdax_audio::{
    StreamHeader, TransformDecoder, TransformEncoder, UniformDecoder, UniformEncoder,
    UniformHeader,
};

/// Which of the two dax codecs a stream uses. The formats are not
/// interchangeable, so every operation is explicit about the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Transform,
    Uniform,
}

impl Mode {
    pub fn parse(s: &str) -> Result<Mode> {
        match s.to_lowercase().as_str() {
            "transform" | "dct" => Ok(Mode::Transform),
            "uniform" | "quant" => Ok(Mode::Uniform),
            _ => bail!("Invalid mode: {}. Use: transform, uniform", s),
        }
    }
}

/// Encoding options for converting WAV audio to a dax stream.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub mode: Mode,
    /// Samples per transform block
    pub block_size: u16,
    /// Fraction of coefficients to keep per block (0.0, 1.0]
    pub kept_fraction: f64,
    /// Bits per quantized value
    pub quant_bits: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Transform,
            block_size: 1024,
            kept_fraction: 0.2,
            quant_bits: 32,
        }
    }
}

impl EncodeOptions {
    /// Transform-mode options with the stock block size and truncation.
    pub fn transform() -> Self {
        Self::default()
    }

    /// Uniform-mode options at the given resolution (1-16 bits).
    pub fn uniform(quant_bits: u8) -> Self {
        Self {
            mode: Mode::Uniform,
            quant_bits,
            ..Self::default()
        }
    }

    /// Coefficients kept per block, derived from the fraction.
    pub fn kept_coeffs(&self) -> Result<u16> {
        if !(self.kept_fraction > 0.0 && self.kept_fraction <= 1.0) {
            bail!(
                "Kept fraction {} outside (0.0, 1.0]",
                self.kept_fraction
            );
        }
        let kept = (self.block_size as f64 * self.kept_fraction).round() as u16;
        Ok(kept.max(1))
    }
}

/// Information parsed from a dax stream header, without decoding the audio.
#[derive(Debug, Clone)]
pub struct StreamInfo {
    pub mode: Mode,
    pub sample_rate: u32,
    pub channels: u16,
    pub quant_bits: u8,
    pub total_frames: u32,
    pub duration_secs: f64,
    pub file_size: usize,
    pub compression_ratio: f64,
    /// Transform mode only
    pub block_size: Option<u16>,
    /// Transform mode only
    pub kept_coeffs: Option<u16>,
}

/// Encode WAV file bytes to a dax stream.
///
/// Transform mode codes mono audio; multi-channel input is downmixed by
/// averaging. Uniform mode keeps the channels interleaved.
pub fn encode_from_wav(wav_bytes: &[u8], options: &EncodeOptions) -> Result<Vec<u8>> {
    let (samples, sample_rate, channels) =
        audio::read_wav_from_bytes(wav_bytes).context("Failed to read audio file")?;
    encode_from_samples(&samples, sample_rate, channels, options)
}

/// Encode interleaved 16-bit samples to a dax stream.
pub fn encode_from_samples(
    samples: &[i16],
    sample_rate: u32,
    channels: usize,
    options: &EncodeOptions,
) -> Result<Vec<u8>> {
    match options.mode {
        Mode::Transform => {
            let mono = audio::downmix_to_mono(samples, channels);
            let encoder =
                TransformEncoder::new(options.block_size, options.kept_coeffs()?, options.quant_bits)
                    .context("Invalid encoder parameters")?;
            encoder
                .encode_to_vec(&mono, sample_rate)
                .context("Failed to encode audio")
        }
        Mode::Uniform => {
            let channels = u16::try_from(channels).context("Too many channels")?;
            let encoder =
                UniformEncoder::new(options.quant_bits).context("Invalid encoder parameters")?;
            encoder
                .encode_to_vec(samples, sample_rate, channels)
                .context("Failed to encode audio")
        }
    }
}

/// Decode a dax stream to WAV bytes.
pub fn decode_to_wav(data: &[u8], mode: Mode) -> Result<Vec<u8>> {
    match mode {
        Mode::Transform => {
            let (samples, header) = TransformDecoder::new()
                .decode(data)
                .context("Failed to decode stream")?;
            audio::write_wav_to_bytes(&samples, header.sample_rate, 1)
        }
        Mode::Uniform => {
            let (samples, header) = UniformDecoder::new()
                .decode(data)
                .context("Failed to decode stream")?;
            audio::write_wav_to_bytes(&samples, header.sample_rate, header.channels as usize)
        }
    }
}

/// Parse a stream's header and report its parameters.
pub fn stream_info(data: &[u8], mode: Mode) -> Result<StreamInfo> {
    match mode {
        Mode::Transform => {
            let mut bits = libdax_audio::BitReader::new(data);
            let header =
                StreamHeader::read_from(&mut bits).context("Invalid transform stream")?;
            Ok(transform_info(&header, data.len()))
        }
        Mode::Uniform => {
            let mut src: &[u8] = data;
            let header =
                UniformHeader::read_from(&mut src).context("Invalid uniform stream")?;
            Ok(uniform_info(&header, data.len()))
        }
    }
}

fn transform_info(header: &StreamHeader, file_size: usize) -> StreamInfo {
    // the source was 16-bit mono PCM
    let original_size = header.total_frames as f64 * 2.0;
    StreamInfo {
        mode: Mode::Transform,
        sample_rate: header.sample_rate,
        channels: 1,
        quant_bits: header.quant_bits,
        total_frames: header.total_frames,
        duration_secs: header.total_frames as f64 / header.sample_rate as f64,
        file_size,
        compression_ratio: ratio(original_size, file_size),
        block_size: Some(header.block_size),
        kept_coeffs: Some(header.kept_coeffs),
    }
}

fn uniform_info(header: &UniformHeader, file_size: usize) -> StreamInfo {
    let original_size = header.total_frames as f64 * header.channels as f64 * 2.0;
    StreamInfo {
        mode: Mode::Uniform,
        sample_rate: header.sample_rate,
        channels: header.channels,
        quant_bits: header.quant_bits,
        total_frames: header.total_frames,
        duration_secs: header.total_frames as f64 / header.sample_rate as f64,
        file_size,
        compression_ratio: ratio(original_size, file_size),
        block_size: None,
        kept_coeffs: None,
    }
}

fn ratio(original_size: f64, file_size: usize) -> f64 {
    if file_size > 0 {
        original_size / file_size as f64
    } else {
        0.0
    }
}
