use crate::config::{CodecConfig, DelimiterChoice};
use crate::error::RleError;
use crate::pipeline::{self, CodecStats};
use crate::transforms::{analyze, find_unused_delimiter, DEFAULT_MAX_DECODED_LEN};
use clap::{Parser, Subcommand};
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = "Smart run-length encoding: output is never larger than the input")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encodes a file
    Encode {
        /// Input file to encode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Delimiter byte: one character, a hex byte like 0x00, or auto
        #[arg(short, long, default_value = ".")]
        delimiter: DelimiterChoice,
    },
    /// Decodes a file
    Decode {
        /// Input file to decode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Delimiter byte the file was encoded with
        #[arg(short, long, default_value = ".")]
        delimiter: DelimiterChoice,

        /// Refuse to produce more than this many bytes
        #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_DECODED_LEN)]
        max_output: usize,
    },
    /// Reports the runs in a file and what encoding would save
    Inspect {
        /// File to inspect
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Delimiter byte to evaluate
        #[arg(short, long, default_value = ".")]
        delimiter: DelimiterChoice,
    },
}

pub fn run() -> Result<(), RleError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode { input, output, delimiter } => {
            println!("Encoding {} to {}...", input.display(), output.display());
            let config = CodecConfig::default().with_delimiter(*delimiter);

            let mut in_file = BufReader::new(File::open(input)?);
            let stats = write_on_success(output, |out| {
                pipeline::encode_stream(&mut in_file, out, &config)
            })?;

            println!("Encoding successful!");
            println!("  Delimiter:     {}", DelimiterChoice::Fixed(stats.delimiter));
            println!("  Original Size: {} bytes", stats.input_size);
            println!("  Encoded Size:  {} bytes", stats.output_size);
            println!("  Ratio:         {:.2}x", stats.ratio);
            println!("  Elapsed Time:  {:.2?}", stats.elapsed);
        }
        Commands::Decode { input, output, delimiter, max_output } => {
            println!("Decoding {} to {}...", input.display(), output.display());
            let config = CodecConfig::default()
                .with_delimiter(*delimiter)
                .with_max_decoded_len(*max_output);

            let mut in_file = BufReader::new(File::open(input)?);
            let stats = write_on_success(output, |out| {
                pipeline::decode_stream(&mut in_file, out, &config)
            })?;

            println!("Decoding successful!");
            println!("  Decoded Size: {} bytes", stats.output_size);
            println!("  Elapsed Time: {:.2?}", stats.elapsed);
        }
        Commands::Inspect { input, delimiter } => {
            let data = std::fs::read(input)?;
            debug!("Read {} bytes from {}", data.len(), input.display());
            let delimiter = match delimiter {
                DelimiterChoice::Fixed(b) => *b,
                DelimiterChoice::Auto => find_unused_delimiter(&data).ok_or(RleError::NoFreeDelimiter)?,
            };
            let profile = analyze(&data, delimiter);

            println!("{}", input.display());
            println!("  Size:          {} bytes", profile.input_len);
            println!("  Runs:          {}", profile.runs);
            println!("  Escaped Runs:  {}", profile.escaped_runs);
            println!("  Longest Run:   {}", profile.longest_run);
            if profile.delimiter_present {
                println!("  Delimiter {} occurs in the file; encoding would fail", DelimiterChoice::Fixed(delimiter));
            } else {
                println!("  Encoded Size:  {} bytes", profile.encoded_len);
                println!("  Ratio:         {:.2}x", profile.ratio());
            }
            match find_unused_delimiter(&data) {
                Some(b) => println!("  Free Delimiter: {}", DelimiterChoice::Fixed(b)),
                None => println!("  Free Delimiter: none"),
            }
        }
    }

    Ok(())
}

/// Runs `transform` into memory and only creates `output` once it succeeded,
/// so a failed run leaves no file behind.
fn write_on_success<F>(output: &Path, transform: F) -> Result<CodecStats, RleError>
where
    F: FnOnce(&mut Vec<u8>) -> Result<CodecStats, RleError>,
{
    let mut buffer = Vec::new();
    let stats = transform(&mut buffer)?;

    let mut out_file = BufWriter::new(File::create(output)?);
    out_file.write_all(&buffer)?;
    out_file.flush()?;
    debug!("Wrote {} bytes to {}", buffer.len(), output.display());
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_failed_encode_leaves_no_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("out.srle");
        let config = CodecConfig::default();

        let err = write_on_success(&output, |out| {
            pipeline::encode_stream(&mut Cursor::new(b"a.b".to_vec()), out, &config)
        })
        .unwrap_err();
        assert!(matches!(err, RleError::DelimiterFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_failed_decode_leaves_no_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("out.bin");
        let config = CodecConfig::default();

        let err = write_on_success(&output, |out| {
            pipeline::decode_stream(&mut Cursor::new(b"asdf.4.".to_vec()), out, &config)
        })
        .unwrap_err();
        assert!(err.is_malformed());
        assert!(!output.exists());
    }

    #[test]
    fn test_successful_encode_writes_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("out.srle");
        let config = CodecConfig::default();

        let stats = write_on_success(&output, |out| {
            pipeline::encode_stream(&mut Cursor::new(b"asddddf".to_vec()), out, &config)
        })
        .unwrap();
        assert_eq!(stats.output_size, 7);
        assert_eq!(std::fs::read(&output).unwrap(), b"as.4.df");
    }
}
