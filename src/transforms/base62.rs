//! Base-62 numerals used to spell run lengths inside escape sequences.
//!
//! Digit values: `0`-`9` are 0-9, `a`-`z` are 10-35 and `A`-`Z` are 36-61.
//! Numerals are written most-significant digit first with no leading zeros.
//! The conversion itself is available for any base in `2..=62` through
//! [`to_radix`] and [`from_radix`], which read a prefix of the same alphabet.

use crate::error::{Result, RleError};

/// Digit symbols, indexed by their value.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const BASE: u32 = 62;

const MIN_BASE: u32 = 2;
const NOT_A_DIGIT: u8 = 0xFF;

/// Reverse lookup from byte to digit value.
const DIGIT_VALUES: [u8; 256] = build_digit_values();

const fn build_digit_values() -> [u8; 256] {
    let mut table = [NOT_A_DIGIT; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the value of `byte` as a base-62 digit, if it is one.
pub fn digit_value(byte: u8) -> Option<u32> {
    match DIGIT_VALUES[byte as usize] {
        NOT_A_DIGIT => None,
        value => Some(value as u32),
    }
}

/// Converts `value` to its base-62 numeral. Zero is written as `"0"`.
pub fn to_base62(value: u64) -> String {
    write_digits(value, BASE)
}

/// Parses a base-62 numeral.
///
/// An empty string parses as zero; the decoder rejects empty length fields
/// before they get here.
pub fn from_base62(digits: &str) -> Result<u64> {
    from_radix(digits, BASE)
}

/// Number of base-62 digits needed to write `value`.
pub fn base62_len(mut value: u64) -> usize {
    let mut len = 1;
    while value >= BASE as u64 {
        value /= BASE as u64;
        len += 1;
    }
    len
}

pub fn to_radix(value: u64, base: u32) -> Result<String> {
    check_base(base)?;
    Ok(write_digits(value, base))
}

pub fn from_radix(digits: &str, base: u32) -> Result<u64> {
    from_radix_bytes(digits.as_bytes(), base)
}

/// Byte-slice form of [`from_radix`], used on raw length fields.
pub(crate) fn from_radix_bytes(digits: &[u8], base: u32) -> Result<u64> {
    check_base(base)?;
    digits.iter().enumerate().try_fold(0u64, |acc, (position, &byte)| {
        let digit = match digit_value(byte) {
            Some(value) if value < base => u64::from(value),
            _ => {
                return Err(RleError::MalformedInput(format!(
                    "byte 0x{:02x} at position {} is not a base-{} digit",
                    byte, position, base
                )))
            }
        };
        acc.checked_mul(u64::from(base))
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or_else(|| {
                let numeral = String::from_utf8_lossy(digits).into_owned();
                RleError::RunLengthOverflow(numeral)
            })
    })
}

fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=BASE).contains(&base) {
        Ok(())
    } else {
        Err(RleError::InvalidBase(base))
    }
}

fn write_digits(mut value: u64, base: u32) -> String {
    let base = u64::from(base);
    // u64::MAX needs 64 digits in base 2
    let mut buf = [0u8; 64];
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = ALPHABET[(value % base) as usize];
        value /= base;
        if value == 0 {
            break;
        }
    }
    buf[start..].iter().map(|&b| b as char).collect()
}
