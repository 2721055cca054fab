//! # srle (Smart Run-Length Encoding)
//!
//! A lossless byte codec that collapses runs of repeated bytes while
//! guaranteeing the output is never longer than the input.
//!
//! A run is written as `<delim><length><delim><byte>` only when that is shorter
//! than writing the run out; everything else is copied through unchanged. The
//! length is a base-62 numeral (`0-9a-zA-Z`), so a run of up to 61 bytes needs
//! a single digit and a run of up to 3843 bytes needs two.
//!
//! The delimiter is a byte that never occurs in the data being encoded. It is
//! not stored in the output; the decoder has to be given the same one.
//!
//! ## Quick Start
//!
//! ```rust
//! use srle::{decode, encode};
//!
//! let encoded = encode(b"asddddf", b'.').unwrap();
//! assert_eq!(encoded, b"as.4.df");
//!
//! let decoded = decode(&encoded, b'.').unwrap();
//! assert_eq!(decoded, b"asddddf");
//! ```
//!
//! ### Picking a delimiter
//!
//! ```rust
//! use srle::{encode, find_unused_delimiter, RleError};
//!
//! let data = b"log line....\x00\x00\x00\x00\x00\x00";
//! assert!(matches!(encode(data, b'.'), Err(RleError::DelimiterFound { .. })));
//!
//! let delim = find_unused_delimiter(data).unwrap();
//! let encoded = encode(data, delim).unwrap();
//! assert!(encoded.len() <= data.len());
//! ```
//!
//! ### Working with Files
//!
//! ```rust
//! use srle::{pipeline, CodecConfig};
//! use std::fs::File;
//! use std::io::{BufReader, BufWriter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CodecConfig::default();
//!
//! let mut reader = BufReader::new(File::open("input.bin")?);
//! let mut writer = BufWriter::new(File::create("output.srle")?);
//!
//! let stats = pipeline::encode_stream(&mut reader, &mut writer, &config)?;
//! println!("Compression ratio: {:.2}x", stats.ratio);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transforms;

// Re-export commonly used types for convenience
pub use config::{CodecConfig, DelimiterChoice};
pub use error::{Result, RleError};
pub use pipeline::{decode_stream, encode_stream, CodecStats};
pub use transforms::{
    analyze, decode, decode_with_limit, encode, find_unused_delimiter, from_base62, from_radix,
    to_base62, to_radix, Run, RunProfile, Runs, DEFAULT_MAX_DECODED_LEN,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
