//! Common types and utilities shared between the encoder and decoder.

/// Delimiter used to separate inline array values and tabular-row columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
    Pipe,
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Comma
    }
}

impl Delimiter {
    /// Returns the character representation.
    pub(crate) fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the header decoration symbol (empty for comma, the literal
    /// character for tab/pipe).
    pub(crate) fn header_symbol(&self) -> &'static str {
        match self {
            Delimiter::Comma => "",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Infers the delimiter that produced a given header decoration symbol.
    pub(crate) fn from_header_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

/// Converts a JSON number literal (as produced by `serde_json`'s
/// `arbitrary_precision` feature, which preserves the exact source digits)
/// into plain-decimal text: no exponent, no trailing fractional zeroes.
///
/// `s` is assumed to already match the JSON number grammar
/// (`-?\d+(\.\d+)?([eE][+-]?\d+)?`).
pub(crate) fn decimal_to_plain(s: &str) -> String {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s),
    };

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(idx) => {
            let exp_str = &rest[idx + 1..];
            let exp: i64 = exp_str.parse().unwrap_or(0);
            (&rest[..idx], exp)
        }
        None => (rest, 0),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(idx) => (&mantissa[..idx], &mantissa[idx + 1..]),
        None => (mantissa, ""),
    };

    let digits: String = format!("{int_part}{frac_part}");
    let point_pos = int_part.len() as i64 + exponent;

    let mut result = if point_pos <= 0 {
        let zeros = "0".repeat((-point_pos) as usize);
        format!("0.{zeros}{digits}")
    } else if (point_pos as usize) >= digits.len() {
        let zeros = "0".repeat(point_pos as usize - digits.len());
        format!("{digits}{zeros}")
    } else {
        let (whole, frac) = digits.split_at(point_pos as usize);
        format!("{whole}.{frac}")
    };

    if result.contains('.') {
        result = result.trim_end_matches('0').to_string();
        if result.ends_with('.') {
            result.pop();
        }
    }

    // Strip redundant leading zeroes in the integer part (keep at least one digit).
    if let Some(dot) = result.find('.') {
        let (whole, rest) = result.split_at(dot);
        let trimmed_whole = whole.trim_start_matches('0');
        result = format!(
            "{}{}",
            if trimmed_whole.is_empty() { "0" } else { trimmed_whole },
            rest
        );
    } else {
        let trimmed = result.trim_start_matches('0');
        result = if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() };
    }

    if result.is_empty() {
        result = "0".to_string();
    }

    if negative && result != "0" {
        format!("-{result}")
    } else {
        result
    }
}
