use color_eyre::owo_colors::OwoColorize;
use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;

pub type FormatResult<'a, T> = Result<T, ContextError<'a, FormatError>>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown attribute kind: {:?} (byte {}), expected one of f, i, u, x", char::from(*.0), .0)]
    UnknownKind(u8),
    #[error("invalid width {:?} for kind {:?}", char::from(*.width), char::from(*.kind))]
    BadWidth { kind: u8, width: u8 },
    #[error("unexpected {:?} after token, expected a space, a divisor or the end", char::from(*.0))]
    UnexpectedByte(u8),
    #[error("count is not followed by an attribute kind")]
    DanglingCount,
    #[error("count or token size does not fit in 32 bits")]
    CountOverflow,
    #[error("divisor must directly follow the last token")]
    SpaceBeforeDivisor,
    #[error("invalid divisor, should be /v, /i or /r")]
    BadDivisor,
    #[error("unexpected text after the divisor")]
    TrailingAfterDivisor,
}

/// An error together with the source string and the byte it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextError<'a, T> {
    pub string: &'a str,
    pub index: usize,
    pub error: T,
}

impl<T: Display + Debug> StdError for ContextError<'_, T> {}

impl<T: Display> Display for ContextError<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = self.string;
        let index = self.index.min(string.len());

        let (string, index, ellipses) = if index < 40 {
            (string, index, "")
        } else {
            let start = char_boundary_before(string, index - 37);
            (&string[start..], index - start + 3, "...")
        };

        let (string, after_ellipses) = if string.len() < 80 {
            (string, "")
        } else {
            (&string[..char_boundary_before(string, 80)], "...")
        };

        let bar = "|".white();
        writeln!(f, "{}: {}", "error".bright_red().bold(), self.error.bold())?;
        writeln!(f, "{bar}  ")?;
        writeln!(f, "{bar}  {ellipses}{string}{after_ellipses}")?;

        write!(f, "{bar}  ")?;
        write!(f, "{}", " ".repeat(index))?;
        writeln!(f, "{}", "^".bright_red().bold())?;

        write!(f, "{bar}  ")?;
        write!(f, "{}", " ".repeat(index))?;
        write!(f, "{}", "| here".bright_red().bold())
    }
}

fn char_boundary_before(string: &str, at: usize) -> usize {
    (0..=at)
        .rev()
        .find(|&i| string.is_char_boundary(i))
        .unwrap_or(0)
}
