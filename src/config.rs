use crate::error::RleError;
use crate::transforms::DEFAULT_MAX_DECODED_LEN;
use std::fmt;
use std::str::FromStr;

/// How the delimiter byte is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterChoice {
    Fixed(u8),
    /// Pick a byte absent from the input. Only meaningful when encoding.
    Auto,
}

#[derive(Debug, Clone)]
pub struct CodecConfig {
    pub delimiter: DelimiterChoice,
    pub max_decoded_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            delimiter: DelimiterChoice::Fixed(b'.'),
            max_decoded_len: DEFAULT_MAX_DECODED_LEN,
        }
    }
}

impl CodecConfig {
    pub fn with_delimiter(mut self, delimiter: DelimiterChoice) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_max_decoded_len(mut self, max_decoded_len: usize) -> Self {
        self.max_decoded_len = max_decoded_len;
        self
    }
}

/// Accepts `auto`, a single ASCII character (`.`), or a hex byte (`0x00`).
impl FromStr for DelimiterChoice {
    type Err = RleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(DelimiterChoice::Auto);
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u8::from_str_radix(hex, 16)
                .map(DelimiterChoice::Fixed)
                .map_err(|_| RleError::ConfigError(format!("Invalid hex delimiter: {}", s)));
        }
        match s.as_bytes() {
            [b] if b.is_ascii() => Ok(DelimiterChoice::Fixed(*b)),
            _ => Err(RleError::ConfigError(format!(
                "Invalid delimiter: {} (expected one ASCII character, a hex byte like 0x00, or auto)",
                s
            ))),
        }
    }
}

impl fmt::Display for DelimiterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterChoice::Auto => write!(f, "auto"),
            DelimiterChoice::Fixed(b) if b.is_ascii_graphic() => write!(f, "{}", *b as char),
            DelimiterChoice::Fixed(b) => write!(f, "0x{:02x}", b),
        }
    }
}
