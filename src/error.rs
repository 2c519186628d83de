//! Error types produced by the decoder.

use thiserror::Error;

/// An error raised while decoding a TOON string.
///
/// Every variant that can be localized to a line carries a 1-based
/// `line` number. All variants here are `strict`-mode failures; in
/// lenient mode ([`DecoderOptions::strict`](crate::DecoderOptions) set
/// to `false`) the decoder absorbs the equivalent local failure into a
/// `Null` sub-value instead of returning an `Err`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Leading whitespace at `line` is not a multiple of the configured
    /// `indent`.
    #[error("invalid indentation at line {line}: not a multiple of the configured indent")]
    InvalidIndentation { line: usize },

    /// The first content line of the document is already indented.
    #[error("unexpected indentation at line {line}: root content must start at depth 0")]
    UnexpectedRootIndentation { line: usize },

    /// An array header (`[...]` with optional `{fields}`) could not be
    /// parsed.
    #[error("invalid array header at line {line}: {reason}")]
    InvalidArrayHeader { line: usize, reason: String },

    /// The header's own decoration (the `#` length marker or the
    /// in-bracket delimiter character) disagrees with the configured
    /// `length_marker`/`delimiter`.
    #[error("mismatched configuration at line {line}: {reason}")]
    MismatchedConfiguration { line: usize, reason: String },

    /// An escape sequence inside a quoted string is not one of
    /// `\n \r \t \" \\`.
    #[error("invalid escape sequence at line {line}: \\{sequence}")]
    InvalidEscapeSequence { line: usize, sequence: String },

    /// An array's actual element count does not match its declared size.
    #[error("array length mismatch at line {line}: expected {expected}, found {found}")]
    ArrayLengthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A tabular row has a different number of columns than the header.
    #[error("row width mismatch at line {line}: expected {expected} fields, found {found}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A line at the expected depth is neither a key-value pair nor a
    /// recognized array header.
    #[error("invalid line at {line}: {content}")]
    InvalidLine { line: usize, content: String },

    /// Catch-all for local failures not covered by a more specific
    /// variant (e.g. an unterminated quoted string).
    #[error("parse error: {0}")]
    ParseError(String),
}
