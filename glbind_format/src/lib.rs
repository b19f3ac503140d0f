//! Parser for the compact vertex format language.
//!
//! A format string lists one token per attribute chunk, `[count]kind[width]`,
//! separated by spaces and optionally followed by a divisor suffix:
//!
//! ```text
//! 3f 2f1 1x4 4u2/i
//! ```
//!
//! [`FormatIterator`] walks the tokens one at a time and [`FormatIterator::info`]
//! summarizes a whole string into a [`FormatInfo`].

mod error;
mod format;
mod span;

pub use error::{ContextError, FormatError, FormatResult};
pub use format::info::{Divisor, FormatInfo};
pub use format::iter::{parse_format, FormatIterator, ParsedFormat};
pub use format::node::{AttribFunc, FormatNode, NodeKind, ScalarType};
pub use span::Span;

#[cfg(test)]
mod tests;
