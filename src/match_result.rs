use std::ops::Range;

///
/// One occurrence of the pattern in the searched buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    ///
    /// Offset of the first matched byte, from the start of the buffer
    pub offset: usize,
    ///
    /// Length of the match, so the pattern length
    pub len: usize,
}

impl Match {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
    ///
    /// Offset just after the last matched byte
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}
