use srle::config::{CodecConfig, DelimiterChoice};
use srle::pipeline;

fn main() {
	let data = b"hello.....world\x00\x00\x00\x00\x00\x00\x00\x00".to_vec();
	let mut input = std::io::Cursor::new(data);
	let mut encoded = Vec::new();
	let cfg = CodecConfig::default().with_delimiter(DelimiterChoice::Auto);
	let stats = pipeline::encode_stream(&mut input, &mut encoded, &cfg).unwrap();
	println!("encoded {} -> {} with delimiter 0x{:02x}", stats.input_size, stats.output_size, stats.delimiter);

	let mut enc_cur = std::io::Cursor::new(encoded);
	let mut restored = Vec::new();
	let cfg = cfg.with_delimiter(DelimiterChoice::Fixed(stats.delimiter));
	pipeline::decode_stream(&mut enc_cur, &mut restored, &cfg).unwrap();
	println!("restored {} bytes", restored.len());
}
