/// a (start, length) range of bytes; length may be zero for absent fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, length: usize) -> Self {
        Span { start, length }
    }

    #[must_use]
    pub fn empty(start: usize) -> Self {
        Span { start, length: 0 }
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// the spanned bytes
    ///
    /// # Panics
    /// if the span does not lie within `bytes`
    #[must_use]
    pub fn of<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        &bytes[self.start..self.end()]
    }
}
