/// Byte range of a token inside its format string.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Span {
    pub from: usize,
    pub to: usize,
}

impl Span {
    pub const fn new(from: usize, to: usize) -> Self {
        assert!(to >= from);
        Self { from, to }
    }

    pub fn select<'a>(&self, source: &'a str) -> &'a str {
        &source[self.from..self.to]
    }
}
