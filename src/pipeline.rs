use crate::config::{CodecConfig, DelimiterChoice};
use crate::error::{Result, RleError};
use crate::transforms::{analyzer, rle};
use log::{debug, info};
use std::io::{Read, Write};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct CodecStats {
	pub input_size: u64,
	pub output_size: u64,
	/// Decoded size over encoded size.
	pub ratio: f64,
	/// The delimiter that was used, after resolving `auto`.
	pub delimiter: u8,
	pub elapsed: Duration,
}

pub fn encode_stream<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	config: &CodecConfig,
) -> Result<CodecStats> {
	let start = Instant::now();
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;

	let delimiter = match config.delimiter {
		DelimiterChoice::Fixed(b) => b,
		DelimiterChoice::Auto => {
			let picked = analyzer::find_unused_delimiter(&buffer).ok_or(RleError::NoFreeDelimiter)?;
			debug!("Picked delimiter 0x{:02x} for {} input bytes", picked, buffer.len());
			picked
		}
	};

	let encoded = rle::encode(&buffer, delimiter)?;
	writer.write_all(&encoded)?;
	writer.flush()?;

	let stats = CodecStats {
		input_size: buffer.len() as u64,
		output_size: encoded.len() as u64,
		ratio: ratio(buffer.len(), encoded.len()),
		delimiter,
		elapsed: start.elapsed(),
	};
	info!("Encoded {} -> {} bytes ({:.2}x)", stats.input_size, stats.output_size, stats.ratio);
	Ok(stats)
}

pub fn decode_stream<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	config: &CodecConfig,
) -> Result<CodecStats> {
	let start = Instant::now();
	let delimiter = match config.delimiter {
		DelimiterChoice::Fixed(b) => b,
		DelimiterChoice::Auto => {
			return Err(RleError::ConfigError("Decoding needs an explicit delimiter".to_string()))
		}
	};

	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;
	debug!("Decoding {} bytes with delimiter 0x{:02x}, limit {} bytes", buffer.len(), delimiter, config.max_decoded_len);

	let decoded = rle::decode_with_limit(&buffer, delimiter, config.max_decoded_len)?;
	writer.write_all(&decoded)?;
	writer.flush()?;

	let stats = CodecStats {
		input_size: buffer.len() as u64,
		output_size: decoded.len() as u64,
		ratio: ratio(decoded.len(), buffer.len()),
		delimiter,
		elapsed: start.elapsed(),
	};
	info!("Decoded {} -> {} bytes", stats.input_size, stats.output_size);
	Ok(stats)
}

fn ratio(decoded: usize, encoded: usize) -> f64 {
	if encoded > 0 { decoded as f64 / encoded as f64 } else { 1.0 }
}
