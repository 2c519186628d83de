//! String and key formatting rules shared by the encoder and the decoder.
//!
//! The encoder asks [`format_key`] and [`format_value_string`] whether a
//! bare token is safe to emit unquoted; the decoder asks [`unescape`] to
//! invert the quoting this module applies.

use crate::common::Delimiter;

const RESERVED_LITERALS: [&str; 3] = ["true", "false", "null"];

/// Formats an object key, quoting it if it does not match the bare
/// identifier grammar `[A-Za-z_][A-Za-z0-9_.]*`.
pub(crate) fn format_key(key: &str) -> String {
    if is_bare_identifier(key) {
        key.to_string()
    } else {
        quote_and_escape(key)
    }
}

fn is_bare_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Formats a string value under the active delimiter, quoting it whenever
/// any of the eight ambiguity rules applies.
pub(crate) fn format_value_string(value: &str, delimiter: Delimiter) -> String {
    if needs_quoting(value, delimiter) {
        quote_and_escape(value)
    } else {
        value.to_string()
    }
}

fn needs_quoting(value: &str, delimiter: Delimiter) -> bool {
    value.is_empty()
        || has_ascii_space_padding(value)
        || contains_structural_char(value, delimiter)
        || is_reserved_literal(value)
        || is_number_like(value)
        || is_leading_zero_run(value)
        || looks_structural_token(value)
        || value.starts_with('-')
}

fn has_ascii_space_padding(value: &str) -> bool {
    value.starts_with(' ') || value.ends_with(' ')
}

fn contains_structural_char(value: &str, delimiter: Delimiter) -> bool {
    value.contains(|c| matches!(c, ':' | '"' | '\\' | '\n' | '\r' | '\t' | '[' | ']' | '{' | '}'))
        || value.contains(delimiter.as_char())
}

fn is_reserved_literal(value: &str) -> bool {
    RESERVED_LITERALS.contains(&value)
}

/// Grammar: optional sign, digits, optional fractional part, optional
/// exponent — the JSON number grammar, minus the "no leading zero" rule
/// (handled separately by [`is_leading_zero_run`]).
fn is_number_like(value: &str) -> bool {
    let bytes = value.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }
    if i < len && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == len
}

/// A run of the form `0\d+` (e.g. `007`) is ambiguous even though it is not
/// a valid JSON number literal, since the decoder's leading-zero-tolerant
/// integer parser would otherwise swallow it as a number.
fn is_leading_zero_run(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() > 1 && bytes[0] == b'0' && bytes[1].is_ascii_digit()
}

fn looks_structural_token(value: &str) -> bool {
    value.starts_with("- ") || looks_like_array_header(value) || looks_like_map_braces(value)
}

fn looks_like_map_braces(value: &str) -> bool {
    value.starts_with('{') && value.ends_with('}') && value.len() >= 2
}

/// Matches `[digits]` or `[digits]:...`.
fn looks_like_array_header(value: &str) -> bool {
    if !value.starts_with('[') {
        return false;
    }
    let Some(close) = value.find(']') else {
        return false;
    };
    let inside = &value[1..close];
    if inside.is_empty() || !inside.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let rest = &value[close + 1..];
    rest.is_empty() || rest.starts_with(':')
}

/// Wraps `s` in double quotes, escaping `"`, `\`, LF, CR, and TAB in that
/// scan order.
pub(crate) fn quote_and_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Outcome of unescaping the interior of a quoted string.
pub(crate) enum Unescaped {
    Ok(String),
    /// `strict = false`: the offending escape was emitted literally rather
    /// than rejected; `.0` is the recovered string.
    Lenient(String),
    /// `strict = true`: an escape sequence other than `\n \r \t \" \\` or an
    /// unterminated trailing backslash was found. `.0` is the 1-based
    /// column within the quoted interior (for diagnostics).
    InvalidEscape(char),
    UnterminatedEscape,
}

/// Unescapes the interior of a quoted string (the content between the
/// surrounding `"` characters, already stripped by the caller).
pub(crate) fn unescape_interior(inner: &str, strict: bool) -> Unescaped {
    if !inner.contains('\\') {
        return Unescaped::Ok(inner.to_string());
    }

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    let mut lenient_fallback = false;

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some(other) => {
                if strict {
                    return Unescaped::InvalidEscape(other);
                }
                result.push('\\');
                result.push(other);
                lenient_fallback = true;
            }
            None => {
                if strict {
                    return Unescaped::UnterminatedEscape;
                }
                result.push('\\');
                lenient_fallback = true;
            }
        }
    }

    if lenient_fallback {
        Unescaped::Lenient(result)
    } else {
        Unescaped::Ok(result)
    }
}
