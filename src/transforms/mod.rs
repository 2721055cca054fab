pub mod analyzer;
pub mod base62;
pub mod rle;
pub mod runs;

pub use analyzer::{analyze, find_unused_delimiter, RunProfile};
pub use base62::{from_base62, from_radix, to_base62, to_radix};
pub use rle::{decode, decode_with_limit, encode, DEFAULT_MAX_DECODED_LEN};
pub use runs::{Run, Runs};
