use crate::error::{ContextError, FormatError, FormatResult};
use crate::{Divisor, FormatInfo, FormatNode, Span};

/// A format string split into its nodes, plus the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFormat {
    pub nodes: Vec<FormatNode>,
    pub info: FormatInfo,
}

impl ParsedFormat {
    /// Nodes that bind an attribute, in order.
    pub fn attributes(&self) -> impl Iterator<Item = &FormatNode> {
        self.nodes.iter().filter(|node| !node.is_padding())
    }
}

/// Parses a whole format string, keeping every node and the position of
/// the first error.
pub fn parse_format(source: &str) -> FormatResult<'_, ParsedFormat> {
    let mut nodes = Vec::new();
    let info = FormatIterator::new(source).run(|node| nodes.push(node))?;
    Ok(ParsedFormat { nodes, info })
}

/// Cursor over the tokens of a format string.
///
/// Yields `Some(Ok(node))` per token, `Some(Err(_))` once on malformed input
/// and `None` at the end of the tokens. The divisor suffix is not a token;
/// the iterator stops in front of it and [`FormatIterator::info`] reads it.
#[derive(Debug, Clone)]
pub struct FormatIterator<'a> {
    source: &'a str,
    index: usize,
    token_start: usize,
    failed: bool,
}

impl<'a> Iterator for FormatIterator<'a> {
    type Item = FormatResult<'a, FormatNode>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.scan_one() {
            Ok(node) => node.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(self.error_at(error)))
            }
        }
    }
}

impl<'a> FormatIterator<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            index: 0,
            token_start: 0,
            failed: false,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.index
    }

    /// Text not consumed yet.
    pub fn remainder(&self) -> &'a str {
        &self.source[self.index..]
    }

    /// Summarizes the whole string from a fresh cursor.
    ///
    /// Any syntax error, a malformed divisor or text after the divisor gives
    /// [`FormatInfo::INVALID`].
    pub fn info(&self) -> FormatInfo {
        FormatIterator::new(self.source)
            .run(|_| {})
            .unwrap_or(FormatInfo::INVALID)
    }

    fn run(mut self, mut on_node: impl FnMut(FormatNode)) -> FormatResult<'a, FormatInfo> {
        let mut size = 0u32;
        let mut nodes = 0u32;

        while let Some(node) = self.next() {
            let node = node?;
            size = size
                .checked_add(node.size)
                .ok_or_else(|| self.error_at(FormatError::CountOverflow))?;
            if !node.is_padding() {
                nodes += 1;
            }
            on_node(node);
        }

        let divisor = self.scan_divisor().map_err(|error| self.error_at(error))?;

        Ok(FormatInfo {
            size,
            nodes,
            divisor,
            valid: true,
        })
    }

    /// Reads the optional `/v`, `/i` or `/r` suffix. Expects the token loop
    /// to have stopped at the end or at the slash.
    fn scan_divisor(&mut self) -> Result<Divisor, FormatError> {
        self.token_start = self.index;
        if !self.advance_if_eq(b'/') {
            return match self.peek() {
                None => Ok(Divisor::PerVertex),
                Some(byte) => Err(FormatError::UnexpectedByte(byte)),
            };
        }

        if self.index >= 2 && self.source.as_bytes()[self.index - 2] == b' ' {
            self.index -= 1;
            return Err(FormatError::SpaceBeforeDivisor);
        }

        let divisor = self
            .peek()
            .and_then(Divisor::from_suffix)
            .ok_or(FormatError::BadDivisor)?;
        self.move_by(1);

        match self.peek() {
            None => Ok(divisor),
            Some(_) => Err(FormatError::TrailingAfterDivisor),
        }
    }

    fn scan_one(&mut self) -> Result<Option<FormatNode>, FormatError> {
        let mut count = 0u32;
        let mut has_count = false;

        loop {
            if !has_count {
                self.token_start = self.index;
            }

            let Some(byte) = self.peek() else {
                return Self::end_of_tokens(count);
            };

            match byte {
                b'0'..=b'9' => {
                    self.move_by(1);
                    count = count
                        .checked_mul(10)
                        .and_then(|count| count.checked_add(u32::from(byte - b'0')))
                        .ok_or(FormatError::CountOverflow)?;
                    has_count = true;
                }
                b' ' if count != 0 => return Err(FormatError::DanglingCount),
                b' ' => {
                    self.move_by(1);
                    count = 0;
                    has_count = false;
                }
                b'/' => return Self::end_of_tokens(count),
                b'f' | b'i' | b'u' | b'x' => {
                    self.move_by(1);
                    let count = if has_count { count } else { 1 };
                    return self.scan_kind(byte, count).map(Some);
                }
                byte => return Err(FormatError::UnknownKind(byte)),
            }
        }
    }

    /// A pending count of zero is dropped, any other count needs a kind.
    fn end_of_tokens(count: u32) -> Result<Option<FormatNode>, FormatError> {
        match count {
            0 => Ok(None),
            _ => Err(FormatError::DanglingCount),
        }
    }

    /// Expects `self.index` to be right after the kind letter.
    fn scan_kind(&mut self, letter: u8, count: u32) -> Result<FormatNode, FormatError> {
        let width = self.peek().filter(u8::is_ascii_digit);
        if width.is_some() {
            self.move_by(1);
        }

        let (kind, width_bytes, normalize) = FormatNode::from_parts(letter, width).ok_or_else(|| {
            self.index -= 1;
            FormatError::BadWidth {
                kind: letter,
                width: width.unwrap_or(b'0'),
            }
        })?;

        match self.peek() {
            None | Some(b' ' | b'/') => {}
            Some(byte) => return Err(FormatError::UnexpectedByte(byte)),
        }

        let size = count
            .checked_mul(width_bytes)
            .ok_or(FormatError::CountOverflow)?;

        Ok(FormatNode {
            size,
            count,
            width: width_bytes,
            kind,
            normalize,
            letter,
            span: Span::new(self.token_start, self.index),
        })
    }

    fn error_at(&self, error: FormatError) -> ContextError<'a, FormatError> {
        let index = match error {
            FormatError::DanglingCount | FormatError::CountOverflow => self.token_start,
            _ => self.index,
        };
        ContextError {
            string: self.source,
            index,
            error,
        }
    }
}

impl FormatIterator<'_> {
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.index).copied()
    }

    fn advance_if_eq(&mut self, byte: u8) -> bool {
        let matches = self.peek() == Some(byte);
        if matches {
            self.move_by(1);
        }
        matches
    }

    fn move_by(&mut self, by: usize) {
        self.index += by;
    }
}
