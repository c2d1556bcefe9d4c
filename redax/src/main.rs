use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use redax::{EncodeOptions, Mode};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "redax")]
#[command(version = "0.1.0")]
#[command(about = "dax audio format converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a WAV file to a dax stream
    Encode {
        /// Input WAV file (16-bit PCM)
        input: PathBuf,
        /// Output dax file
        output: PathBuf,
        /// Codec mode (transform, uniform)
        #[arg(long, default_value = "transform")]
        mode: String,
        /// Samples per block (transform mode)
        #[arg(short, long, default_value = "1024")]
        block_size: u16,
        /// Fraction of coefficients to keep per block (transform mode)
        #[arg(short, long, default_value = "0.2")]
        frac: f64,
        /// Bits per quantized value (transform: 1-64, uniform: 1-16)
        #[arg(short, long)]
        qbits: Option<u8>,
    },
    /// Decode a dax stream to WAV
    Decode {
        /// Input dax file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Codec mode (transform, uniform)
        #[arg(long, default_value = "transform")]
        mode: String,
    },
    /// Show information about a dax stream
    Info {
        /// Input dax file
        input: PathBuf,
        /// Codec mode (transform, uniform)
        #[arg(long, default_value = "transform")]
        mode: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            mode,
            block_size,
            frac,
            qbits,
        } => {
            let mode = Mode::parse(&mode)?;
            encode(&input, &output, mode, block_size, frac, qbits)?;
        }
        Commands::Decode {
            input,
            output,
            mode,
        } => {
            let mode = Mode::parse(&mode)?;
            decode(&input, &output, mode)?;
        }
        Commands::Info { input, mode } => {
            let mode = Mode::parse(&mode)?;
            info(&input, mode)?;
        }
    }

    Ok(())
}

fn encode(
    input: &PathBuf,
    output: &PathBuf,
    mode: Mode,
    block_size: u16,
    frac: f64,
    qbits: Option<u8>,
) -> Result<()> {
    println!("Reading {}...", input.display());

    let wav_bytes = fs::read(input).context("Failed to read input file")?;
    let (samples, sample_rate, channels) = redax::audio::read_wav_from_bytes(&wav_bytes)?;

    println!("  Sample rate: {} Hz", sample_rate);
    println!("  Channels: {}", channels);
    println!(
        "  Duration: {:.2}s",
        samples.len() as f64 / channels as f64 / sample_rate as f64
    );

    let options = match mode {
        Mode::Transform => {
            let options = EncodeOptions {
                mode,
                block_size,
                kept_fraction: frac,
                quant_bits: qbits.unwrap_or(32),
            };
            println!(
                "Encoding (transform, block {}, {} of {} coefficients, {} bits)...",
                block_size,
                options.kept_coeffs()?,
                block_size,
                options.quant_bits
            );
            if channels > 1 {
                println!("  Downmixing {} channels to mono", channels);
            }
            options
        }
        Mode::Uniform => {
            let options = EncodeOptions::uniform(qbits.unwrap_or(8));
            println!("Encoding (uniform, {} bits per sample)...", options.quant_bits);
            options
        }
    };

    let encoded = redax::encode_from_samples(&samples, sample_rate, channels, &options)?;

    fs::write(output, &encoded).context("Failed to write output file")?;

    let original_size = samples.len() * 2;
    let ratio = original_size as f64 / encoded.len() as f64;

    println!("Done!");
    println!("  Output: {}", output.display());
    println!("  Size: {} bytes ({:.1}x compression)", encoded.len(), ratio);

    Ok(())
}

fn decode(input: &PathBuf, output: &PathBuf, mode: Mode) -> Result<()> {
    println!("Reading {}...", input.display());

    let data = fs::read(input).context("Failed to read dax file")?;

    let stream = redax::stream_info(&data, mode)?;
    println!("  Sample rate: {} Hz", stream.sample_rate);
    println!("  Channels: {}", stream.channels);
    println!("  Duration: {:.2}s", stream.duration_secs);

    println!("Decoding...");

    let wav_bytes = redax::decode_to_wav(&data, mode)?;

    println!("Writing WAV...");

    fs::write(output, wav_bytes).context("Failed to write WAV file")?;

    println!("Done!");
    println!("  Output: {}", output.display());

    Ok(())
}

fn info(input: &PathBuf, mode: Mode) -> Result<()> {
    let data = fs::read(input).context("Failed to read dax file")?;

    let stream = redax::stream_info(&data, mode)?;

    println!("dax Audio Stream");
    println!("───────────────────────────────");
    println!(
        "  Mode:        {}",
        match stream.mode {
            Mode::Transform => "transform",
            Mode::Uniform => "uniform",
        }
    );
    println!("  Sample rate: {} Hz", stream.sample_rate);
    println!("  Channels:    {}", stream.channels);
    println!("  Quant bits:  {}", stream.quant_bits);
    println!("  Duration:    {:.2}s", stream.duration_secs);
    println!("  Frames:      {}", stream.total_frames);
    println!("  File size:   {} bytes", stream.file_size);
    println!("  Compression: {:.1}x", stream.compression_ratio);
    if let (Some(bs), Some(kept)) = (stream.block_size, stream.kept_coeffs) {
        println!("  Block size:  {}", bs);
        println!("  Kept coeffs: {} of {}", kept, bs);
    }

    Ok(())
}
