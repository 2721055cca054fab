use srle::config::{CodecConfig, DelimiterChoice};
use srle::{pipeline, RleError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};

fn sparse_buffer() -> Vec<u8> {
	let mut data = Vec::new();
	for i in 0..64u8 {
		data.extend(std::iter::repeat(0u8).take(200 + i as usize));
		data.extend_from_slice(b"mask-edge");
		data.push(i.wrapping_mul(7) | 1);
	}
	data
}

#[test]
fn round_trip_small_buffer() {
	let input_data = sparse_buffer();
	let cfg = CodecConfig::default();

	let mut compressed = Vec::new();
	let stats = pipeline::encode_stream(&mut Cursor::new(input_data.clone()), &mut compressed, &cfg).unwrap();
	assert!(stats.output_size < stats.input_size);
	assert!(stats.ratio > 1.0);

	let mut restored = Vec::new();
	pipeline::decode_stream(&mut Cursor::new(compressed), &mut restored, &cfg).unwrap();
	assert_eq!(restored, input_data);
}

#[test]
fn round_trip_files() {
	let dir = tempfile::TempDir::new().unwrap();
	let input_path = dir.path().join("input.bin");
	let encoded_path = dir.path().join("input.srle");
	let output_path = dir.path().join("output.bin");

	let input_data = sparse_buffer();
	File::create(&input_path).unwrap().write_all(&input_data).unwrap();

	let cfg = CodecConfig::default().with_delimiter("0xff".parse().unwrap());
	{
		let mut reader = BufReader::new(File::open(&input_path).unwrap());
		let mut writer = BufWriter::new(File::create(&encoded_path).unwrap());
		pipeline::encode_stream(&mut reader, &mut writer, &cfg).unwrap();
	}
	{
		let mut reader = BufReader::new(File::open(&encoded_path).unwrap());
		let mut writer = BufWriter::new(File::create(&output_path).unwrap());
		pipeline::decode_stream(&mut reader, &mut writer, &cfg).unwrap();
	}

	assert_eq!(std::fs::read(&output_path).unwrap(), input_data);
	assert!(std::fs::metadata(&encoded_path).unwrap().len() < input_data.len() as u64);
}

#[test]
fn auto_delimiter_is_reported_and_decodes() {
	let input_data = b"padding........................end".to_vec();
	let encode_cfg = CodecConfig::default().with_delimiter(DelimiterChoice::Auto);

	let mut compressed = Vec::new();
	let stats = pipeline::encode_stream(&mut Cursor::new(input_data.clone()), &mut compressed, &encode_cfg).unwrap();
	assert_ne!(stats.delimiter, b'.');
	assert!(!input_data.contains(&stats.delimiter));

	let decode_cfg = CodecConfig::default().with_delimiter(DelimiterChoice::Fixed(stats.delimiter));
	let mut restored = Vec::new();
	pipeline::decode_stream(&mut Cursor::new(compressed), &mut restored, &decode_cfg).unwrap();
	assert_eq!(restored, input_data);
}

#[test]
fn auto_delimiter_fails_when_every_byte_is_used() {
	let input_data: Vec<u8> = (0u8..=255).collect();
	let cfg = CodecConfig::default().with_delimiter(DelimiterChoice::Auto);
	let err = pipeline::encode_stream(&mut Cursor::new(input_data), &mut Vec::new(), &cfg).unwrap_err();
	assert!(matches!(err, RleError::NoFreeDelimiter));
}

#[test]
fn decode_limit_is_enforced() {
	let cfg = CodecConfig::default().with_max_decoded_len(1000);
	let mut restored = Vec::new();
	let err = pipeline::decode_stream(&mut Cursor::new(b".ZZ.a".to_vec()), &mut restored, &cfg).unwrap_err();
	assert!(matches!(err, RleError::OutputLimitExceeded { limit: 1000 }));
	assert!(restored.is_empty());
}

#[test]
fn malformed_stream_is_rejected() {
	let cfg = CodecConfig::default();
	let mut restored = Vec::new();
	let err = pipeline::decode_stream(&mut Cursor::new(b"asdf.4.".to_vec()), &mut restored, &cfg).unwrap_err();
	assert!(err.is_malformed());
	assert!(restored.is_empty());
}
