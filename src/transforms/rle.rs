//! Smart run-length encoding.
//!
//! A run of identical bytes is replaced by `<delim><length><delim><byte>` only
//! when that is shorter than writing the run out, so the output is never longer
//! than the input. The length is a base-62 numeral. The delimiter must not
//! occur in the data being encoded.
//!
//! Examples with `.` as the delimiter:
//! `asdf` -> `asdf`, `asdddf` -> `asdddf`, `asddddf` -> `as.4.df`.

use super::base62::{self, base62_len, to_base62};
use super::runs::Runs;
use crate::error::{Result, RleError};

/// Decoded output limit used by [`decode`]: 1 GiB.
pub const DEFAULT_MAX_DECODED_LEN: usize = 1 << 30;

/// Whether an escape sequence is chosen for a run of `run_len` bytes.
///
/// Compares the numeral plus both delimiters against the run length; the
/// trailing value byte is left out of the cost. Changing this changes the
/// wire format.
pub fn escape_pays_off(run_len: usize) -> bool {
    base62_len(run_len as u64) + 2 < run_len
}

/// Bytes emitted for a single run.
pub(crate) fn encoded_run_len(run_len: usize) -> usize {
    if escape_pays_off(run_len) {
        base62_len(run_len as u64) + 3
    } else {
        run_len
    }
}

pub fn encode(data: &[u8], delimiter: u8) -> Result<Vec<u8>> {
    let mut encoded = Vec::with_capacity(data.len());

    for run in Runs::new(data) {
        if run.value == delimiter {
            return Err(RleError::DelimiterFound { delimiter, offset: run.start });
        }

        if escape_pays_off(run.len) {
            encoded.push(delimiter);
            encoded.extend_from_slice(to_base62(run.len as u64).as_bytes());
            encoded.push(delimiter);
            encoded.push(run.value);
        } else {
            encoded.extend(std::iter::repeat(run.value).take(run.len));
        }
    }

    Ok(encoded)
}

/// Decodes with the [`DEFAULT_MAX_DECODED_LEN`] output limit.
pub fn decode(data: &[u8], delimiter: u8) -> Result<Vec<u8>> {
    decode_with_limit(data, delimiter, DEFAULT_MAX_DECODED_LEN)
}

/// Decodes `data`, failing before any allocation that would take the output
/// past `max_len` bytes.
pub fn decode_with_limit(data: &[u8], delimiter: u8, max_len: usize) -> Result<Vec<u8>> {
    let mut decoded = Vec::with_capacity(data.len().min(max_len));
    let mut i = 0;

    while i < data.len() {
        if data[i] != delimiter {
            let literal_len = data[i..]
                .iter()
                .position(|&b| b == delimiter)
                .unwrap_or(data.len() - i);
            check_limit(decoded.len(), literal_len, max_len)?;
            decoded.extend_from_slice(&data[i..i + literal_len]);
            i += literal_len;
            continue;
        }

        let escape_start = i;
        let (run_len, consumed) = next_run_length(&data[i..], delimiter, escape_start)?;
        i += consumed;

        let value = *data.get(i).ok_or_else(|| {
            RleError::MalformedInput(format!(
                "escape sequence at offset {} has no value byte",
                escape_start
            ))
        })?;
        let run_len = usize::try_from(run_len)
            .map_err(|_| RleError::RunLengthOverflow(run_len.to_string()))?;
        check_limit(decoded.len(), run_len, max_len)?;
        decoded.resize(decoded.len() + run_len, value);
        i += 1;
    }

    Ok(decoded)
}

/// Parses the escape sequence at the start of `escape`.
///
/// Returns the run length and the number of bytes taken by the numeral and
/// both delimiters. The value byte after the closing delimiter is left to the
/// caller. `offset` locates `escape` in the full input for error messages.
fn next_run_length(escape: &[u8], delimiter: u8, offset: usize) -> Result<(u64, usize)> {
    if escape.len() < 3 || escape[0] != delimiter {
        return Err(malformed(offset, "truncated escape sequence"));
    }

    let digits_len = escape[1..]
        .iter()
        .position(|&b| b == delimiter)
        .ok_or_else(|| malformed(offset, "escape sequence is not terminated"))?;
    if digits_len == 0 {
        return Err(malformed(offset, "escape sequence has an empty run length"));
    }

    let digits = &escape[1..=digits_len];
    let run_len = base62::from_radix_bytes(digits, base62::BASE).map_err(|e| match e {
        RleError::MalformedInput(reason) => malformed(offset, &reason),
        other => other,
    })?;

    Ok((run_len, digits_len + 2))
}

fn check_limit(current: usize, additional: usize, limit: usize) -> Result<()> {
    match current.checked_add(additional) {
        Some(total) if total <= limit => Ok(()),
        _ => Err(RleError::OutputLimitExceeded { limit }),
    }
}

fn malformed(offset: usize, reason: &str) -> RleError {
    RleError::MalformedInput(format!("escape sequence at offset {}: {}", offset, reason))
}
