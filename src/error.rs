use thiserror::Error;

#[derive(Error, Debug)]
pub enum RleError {
	#[error("Delimiter byte 0x{delimiter:02x} found in the input at offset {offset}")]
	DelimiterFound { delimiter: u8, offset: usize },

	#[error("Malformed input: {0}")]
	MalformedInput(String),

	#[error("Invalid base {0}: must be between 2 and 62")]
	InvalidBase(u32),

	#[error("Run length '{0}' does not fit in a machine word")]
	RunLengthOverflow(String),

	#[error("Decoded output would exceed the limit of {limit} bytes")]
	OutputLimitExceeded { limit: usize },

	#[error("No free delimiter: every byte value occurs in the input")]
	NoFreeDelimiter,

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

pub type Result<T> = std::result::Result<T, RleError>;

impl RleError {
	/// Whether the error describes encoded data that does not follow the wire format.
	pub fn is_malformed(&self) -> bool {
		matches!(self, RleError::MalformedInput(_) | RleError::RunLengthOverflow(_))
	}
}
