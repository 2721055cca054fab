/// A maximal stretch of identical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub value: u8,
    /// Offset of the first byte of the run in the input.
    pub start: usize,
    pub len: usize,
}

/// Splits a byte slice into maximal runs, in order.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Runs<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let value = *self.data.get(self.pos)?;
        let start = self.pos;
        let len = self.data[start..].iter().take_while(|&&b| b == value).count();
        self.pos += len;
        Some(Run { value, start, len })
    }
}

impl std::iter::FusedIterator for Runs<'_> {}
