use super::rle::{encoded_run_len, escape_pays_off};
use super::runs::Runs;

/// What [`encode`](super::rle::encode) would do to a buffer, computed without
/// building the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunProfile {
    pub input_len: usize,
    pub runs: usize,
    /// Runs that would be written as escape sequences.
    pub escaped_runs: usize,
    pub longest_run: usize,
    pub encoded_len: usize,
    /// The delimiter occurs in the input, so encoding would fail.
    pub delimiter_present: bool,
}

impl RunProfile {
    pub fn ratio(&self) -> f64 {
        if self.encoded_len == 0 {
            1.0
        } else {
            self.input_len as f64 / self.encoded_len as f64
        }
    }
}

pub fn analyze(data: &[u8], delimiter: u8) -> RunProfile {
    let mut profile = RunProfile { input_len: data.len(), ..Default::default() };

    for run in Runs::new(data) {
        profile.runs += 1;
        profile.longest_run = profile.longest_run.max(run.len);
        profile.encoded_len += encoded_run_len(run.len);
        if escape_pays_off(run.len) {
            profile.escaped_runs += 1;
        }
        if run.value == delimiter {
            profile.delimiter_present = true;
        }
    }

    profile
}

/// Picks a byte that does not occur in `data`.
///
/// Tries `.` first, then the other ASCII punctuation, then any byte value.
pub fn find_unused_delimiter(data: &[u8]) -> Option<u8> {
    let mut seen = [false; 256];
    for &b in data {
        seen[b as usize] = true;
    }

    let punctuation = (0x21u8..=0x7E).filter(u8::is_ascii_punctuation);
    std::iter::once(b'.')
        .chain(punctuation)
        .chain(0u8..=255)
        .find(|&b| !seen[b as usize])
}
