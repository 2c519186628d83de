//! TOON text to JSON value decoder.

use crate::common::Delimiter;
use crate::error::DecodeError;
use crate::format::{unescape_interior, Unescaped};
use serde_json::Value;

/// Decoder configuration options.
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Spaces per indentation level (default: 2).
    pub indent: usize,
    /// Delimiter the input is expected to use; checked against each array
    /// header's own decoration (default: Comma).
    pub delimiter: Delimiter,
    /// Whether array headers are expected to carry a `#` length marker;
    /// checked against each header's own decoration (default: false).
    pub length_marker: bool,
    /// If true, malformed input is rejected. If false, the decoder makes
    /// best-effort progress, substituting `Null` for failed sub-parses
    /// (default: true).
    pub strict: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            delimiter: Delimiter::Comma,
            length_marker: false,
            strict: true,
        }
    }
}

/// Decodes TOON text into a JSON value.
pub fn decode(input: &str, options: &DecoderOptions) -> Result<Value, DecodeError> {
    let mut decoder = Decoder::new(input, options)?;
    decoder.decode()
}

struct Decoder<'a> {
    lines: Vec<Line>,
    options: &'a DecoderOptions,
    pos: usize,
}

#[derive(Debug, Clone)]
struct Line {
    content: String,
    depth: usize,
    line_num: usize,
}

/// An array header's own decoration, as found in the text, independent of
/// what the decoder was configured to expect.
struct HeaderInfo {
    length: usize,
    delimiter: Delimiter,
    fields: Vec<String>,
    /// Byte offset, within the header string passed to `parse_array_header`,
    /// right after the closing `]` (or closing `}` for a tabular header).
    /// A header string may or may not continue with a `:` here — the key
    /// parser upstream already consumes that `:` as the key/value
    /// separator whenever there is no inline body on the header's own line.
    end: usize,
}

impl<'a> Decoder<'a> {
    fn new(input: &str, options: &'a DecoderOptions) -> Result<Self, DecodeError> {
        let lines = Self::parse_lines(input, options)?;
        Ok(Self {
            lines,
            options,
            pos: 0,
        })
    }

    fn parse_lines(input: &str, options: &DecoderOptions) -> Result<Vec<Line>, DecodeError> {
        let mut lines = Vec::new();
        for (i, raw) in input.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            let leading_spaces = raw.len() - raw.trim_start().len();
            let line_num = i + 1;

            let depth = if leading_spaces % options.indent == 0 {
                leading_spaces / options.indent
            } else if options.strict {
                return Err(DecodeError::InvalidIndentation { line: line_num });
            } else {
                leading_spaces / options.indent
            };

            lines.push(Line {
                content: raw.trim().to_string(),
                depth,
                line_num,
            });
        }
        Ok(lines)
    }

    fn decode(&mut self) -> Result<Value, DecodeError> {
        if self.lines.is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        if self.lines[0].depth != 0 {
            if self.options.strict {
                return Err(DecodeError::UnexpectedRootIndentation {
                    line: self.lines[0].line_num,
                });
            }
            return Ok(Value::Null);
        }

        if self.is_root_array() {
            self.decode_array()
        } else if self.lines.len() == 1 && !self.is_key_value(&self.lines[0].content) {
            let line = self.lines[0].clone();
            self.parse_primitive(&line.content, line.line_num)
        } else {
            self.decode_object(0)
        }
    }

    fn is_root_array(&self) -> bool {
        let content = &self.lines[0].content;
        content.starts_with('[') && content.contains(']')
    }

    /// Whether `line` contains a `:` outside of any quoted span.
    fn is_key_value(&self, line: &str) -> bool {
        find_unquoted(line, ':').is_some()
    }

    /// Decodes an object made of sibling `key: value` / keyed-array lines,
    /// all at exactly `start_depth`.
    fn decode_object(&mut self, start_depth: usize) -> Result<Value, DecodeError> {
        let mut obj = serde_json::Map::new();

        while self.pos < self.lines.len() {
            let depth = self.lines[self.pos].depth;

            if depth < start_depth {
                break;
            }
            if depth > start_depth {
                self.pos += 1;
                continue;
            }

            let line_num = self.lines[self.pos].line_num;
            let content = self.lines[self.pos].content.clone();

            let Some((key, value_part)) = self.parse_key_value(&content, line_num)? else {
                return Err(DecodeError::InvalidLine {
                    line: line_num,
                    content,
                });
            };
            self.pos += 1;

            let (field_name, value) =
                self.decode_field_value(key, value_part, start_depth, line_num)?;
            obj.insert(field_name, value);
        }

        Ok(Value::Object(obj))
    }

    /// Decodes the value side of one `key[...]: ...` / `key: value` line,
    /// given that the key has already been consumed from the cursor.
    fn decode_field_value(
        &mut self,
        key: String,
        value_part: String,
        parent_depth: usize,
        line_num: usize,
    ) -> Result<(String, Value), DecodeError> {
        if let Some(bracket_pos) = key.find('[') {
            let actual_key = key[..bracket_pos].to_string();
            let header = &key[bracket_pos..];
            let full_header = if value_part.is_empty() {
                header.to_string()
            } else {
                format!("{header}:{value_part}")
            };
            let value = self.decode_array_from_header(&full_header, parent_depth, line_num)?;
            return Ok((actual_key, value));
        }

        if value_part.is_empty() {
            let value = if self.pos < self.lines.len() && self.lines[self.pos].depth > parent_depth
            {
                self.decode_object(parent_depth + 1)?
            } else {
                Value::Object(serde_json::Map::new())
            };
            return Ok((key, value));
        }

        if value_part.starts_with('[') {
            let value = self.decode_array_from_header(&value_part, parent_depth, line_num)?;
            return Ok((key, value));
        }

        Ok((key, self.parse_primitive(&value_part, line_num)?))
    }

    /// Parses an array header (with the `:` and whatever followed it on the
    /// same source line) and decodes the full array value, consuming any
    /// body lines it needs at `parent_depth + 1`.
    fn decode_array_from_header(
        &mut self,
        header_part: &str,
        parent_depth: usize,
        line_num: usize,
    ) -> Result<Value, DecodeError> {
        let info = match self.parse_array_header(header_part, line_num) {
            Ok(info) => info,
            Err(e) => {
                if self.options.strict {
                    return Err(e);
                }
                return Ok(Value::Null);
            }
        };

        let after_header = &header_part[info.end..];
        let after_colon = after_header.strip_prefix(':').map(str::trim).unwrap_or("");
        if !after_colon.is_empty() {
            return self.decode_inline_array(after_colon, info.delimiter, info.length, line_num);
        }

        if !info.fields.is_empty() {
            return self.decode_tabular_array(
                parent_depth + 1,
                info.length,
                info.delimiter,
                &info.fields,
                line_num,
            );
        }

        // Simple-array body (SPEC_FULL.md §4.3): no inline content on the
        // header's own line and no tabular `{fields}`. If the next line is a
        // list item, parse list form; otherwise that single next line is
        // itself one more delimited inline line.
        let body_depth = parent_depth + 1;
        if self.pos < self.lines.len() && self.lines[self.pos].depth == body_depth {
            if self.lines[self.pos].content.starts_with("- ") {
                self.decode_list_array(body_depth, info.length, line_num)
            } else {
                let body_line = self.lines[self.pos].clone();
                self.pos += 1;
                self.decode_inline_array(
                    &body_line.content,
                    info.delimiter,
                    info.length,
                    body_line.line_num,
                )
            }
        } else {
            self.decode_list_array(body_depth, info.length, line_num)
        }
    }

    /// Parses `[<#?><digits><delim-char?>]{fields?}` ending in `:`, and
    /// validates the header's own decoration against the configured
    /// options in strict mode.
    fn parse_array_header(&self, header: &str, line_num: usize) -> Result<HeaderInfo, DecodeError> {
        if !header.starts_with('[') {
            return Err(DecodeError::InvalidArrayHeader {
                line: line_num,
                reason: "does not start with '['".to_string(),
            });
        }
        let bracket_end = header.find(']').ok_or_else(|| DecodeError::InvalidArrayHeader {
            line: line_num,
            reason: "missing closing ']'".to_string(),
        })?;
        let mut bracket_content = &header[1..bracket_end];

        let length_marker = bracket_content.starts_with('#');
        if length_marker {
            bracket_content = &bracket_content[1..];
        }

        let (digits, delimiter) = if let Some(stripped) = bracket_content.strip_suffix('\t') {
            (stripped, Delimiter::Tab)
        } else if let Some(stripped) = bracket_content.strip_suffix('|') {
            (stripped, Delimiter::Pipe)
        } else {
            (bracket_content, Delimiter::Comma)
        };

        let length: usize = digits.parse().map_err(|_| DecodeError::InvalidArrayHeader {
            line: line_num,
            reason: format!("invalid array length '{digits}'"),
        })?;

        if self.options.strict {
            if delimiter != self.options.delimiter {
                return Err(DecodeError::MismatchedConfiguration {
                    line: line_num,
                    reason: "header delimiter decoration does not match configured delimiter"
                        .to_string(),
                });
            }
            if length_marker != self.options.length_marker {
                return Err(DecodeError::MismatchedConfiguration {
                    line: line_num,
                    reason: "header length-marker decoration does not match configured option"
                        .to_string(),
                });
            }
        }

        let after_bracket = &header[bracket_end + 1..];
        let mut fields = Vec::new();
        let mut end = bracket_end + 1;
        if let Some(rest) = after_bracket.strip_prefix('{') {
            let close = rest.find('}').ok_or_else(|| DecodeError::InvalidArrayHeader {
                line: line_num,
                reason: "missing closing '}' in tabular header".to_string(),
            })?;
            let fields_str = &rest[..close];
            for token in self.split_by_delimiter(fields_str, delimiter) {
                fields.push(self.unescape_token(&token, line_num)?);
            }
            end = bracket_end + 1 + 1 + close + 1;
        }

        Ok(HeaderInfo {
            length,
            delimiter,
            fields,
            end,
        })
    }

    fn decode_inline_array(
        &self,
        values_str: &str,
        delimiter: Delimiter,
        expected_len: usize,
        line_num: usize,
    ) -> Result<Value, DecodeError> {
        let tokens = self.split_by_delimiter(values_str, delimiter);

        if self.options.strict && tokens.len() != expected_len {
            return Err(DecodeError::ArrayLengthMismatch {
                line: line_num,
                expected: expected_len,
                found: tokens.len(),
            });
        }

        let values: Result<Vec<Value>, _> = tokens
            .iter()
            .map(|t| self.parse_primitive(t, line_num))
            .collect();
        Ok(Value::Array(values?))
    }

    fn decode_tabular_array(
        &mut self,
        row_depth: usize,
        expected_rows: usize,
        delimiter: Delimiter,
        fields: &[String],
        header_line_num: usize,
    ) -> Result<Value, DecodeError> {
        let mut rows = Vec::new();

        while self.pos < self.lines.len() && self.lines[self.pos].depth == row_depth {
            let line = self.lines[self.pos].clone();
            let tokens = self.split_by_delimiter(&line.content, delimiter);

            if self.options.strict && tokens.len() != fields.len() {
                return Err(DecodeError::RowWidthMismatch {
                    line: line.line_num,
                    expected: fields.len(),
                    found: tokens.len(),
                });
            }

            let mut obj = serde_json::Map::new();
            for (field, token) in fields.iter().zip(tokens.iter()) {
                obj.insert(field.clone(), self.parse_primitive(token, line.line_num)?);
            }
            rows.push(Value::Object(obj));
            self.pos += 1;
        }

        if self.options.strict && rows.len() != expected_rows {
            return Err(DecodeError::ArrayLengthMismatch {
                line: header_line_num,
                expected: expected_rows,
                found: rows.len(),
            });
        }

        Ok(Value::Array(rows))
    }

    fn decode_list_array(
        &mut self,
        item_depth: usize,
        expected_len: usize,
        header_line_num: usize,
    ) -> Result<Value, DecodeError> {
        let mut items = Vec::new();

        while self.pos < self.lines.len() && self.lines[self.pos].depth == item_depth {
            if !self.lines[self.pos].content.starts_with("- ") {
                break;
            }
            let line = self.lines[self.pos].clone();
            let item_content = line.content[2..].to_string();
            self.pos += 1;

            let value = if item_content.starts_with('[') {
                self.decode_array_from_header(&item_content, item_depth, line.line_num)?
            } else if let Some((key, value_part)) =
                self.parse_key_value(&item_content, line.line_num)?
            {
                Value::Object(self.decode_list_item_object(
                    key,
                    value_part,
                    item_depth,
                    line.line_num,
                )?)
            } else {
                self.parse_primitive(&item_content, line.line_num)?
            };

            items.push(value);
        }

        if self.options.strict && items.len() != expected_len {
            return Err(DecodeError::ArrayLengthMismatch {
                line: header_line_num,
                expected: expected_len,
                found: items.len(),
            });
        }

        Ok(Value::Array(items))
    }

    /// Decodes an object that begins on a `- ` list-item line: `first_key`
    /// shares that line, and subsequent `key: value` siblings at
    /// `item_depth + 1` are folded into the same map.
    fn decode_list_item_object(
        &mut self,
        first_key: String,
        first_value: String,
        item_depth: usize,
        line_num: usize,
    ) -> Result<serde_json::Map<String, Value>, DecodeError> {
        let mut obj = serde_json::Map::new();
        let (name, value) =
            self.decode_field_value(first_key, first_value, item_depth, line_num)?;
        obj.insert(name, value);

        while self.pos < self.lines.len()
            && self.lines[self.pos].depth == item_depth + 1
            && !self.lines[self.pos].content.starts_with("- ")
        {
            let field_line = self.lines[self.pos].clone();
            let Some((key, value_part)) =
                self.parse_key_value(&field_line.content, field_line.line_num)?
            else {
                break;
            };
            self.pos += 1;
            let (name, value) = self.decode_field_value(
                key,
                value_part,
                item_depth + 1,
                field_line.line_num,
            )?;
            obj.insert(name, value);
        }

        Ok(obj)
    }

    fn decode_array(&mut self) -> Result<Value, DecodeError> {
        let line = self.lines[0].clone();
        self.pos = 1;
        self.decode_array_from_header(&line.content, 0, line.line_num)
    }

    /// Splits `line` on the first unquoted `:` into `(key, value)`, the key
    /// unescaped if quoted. Returns `None` if there is no unquoted `:`.
    fn parse_key_value(
        &self,
        line: &str,
        line_num: usize,
    ) -> Result<Option<(String, String)>, DecodeError> {
        let Some(pos) = find_unquoted(line, ':') else {
            return Ok(None);
        };
        let key = self.unescape_token(line[..pos].trim(), line_num)?;
        let value = line[pos + 1..].trim().to_string();
        Ok(Some((key, value)))
    }

    /// Splits `s` on `delimiter`, respecting quoted spans and backslash
    /// escapes, trimming whitespace from each resulting token.
    fn split_by_delimiter(&self, s: &str, delimiter: Delimiter) -> Vec<String> {
        let delim_char = delimiter.as_char();
        let mut result = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = s.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '\\' if in_quotes => {
                    current.push(ch);
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                }
                '"' => {
                    in_quotes = !in_quotes;
                    current.push(ch);
                }
                c if c == delim_char && !in_quotes => {
                    result.push(current.trim().to_string());
                    current.clear();
                }
                c => current.push(c),
            }
        }
        result.push(current.trim().to_string());
        result
    }

    /// Coerces an already-delimiter-split, possibly quoted token into a
    /// value: `null`/`true`/`false`, a quoted string, a JSON number literal
    /// (arbitrary precision), or the raw string as fallback.
    fn parse_primitive(&self, token: &str, line_num: usize) -> Result<Value, DecodeError> {
        let trimmed = token.trim();

        if trimmed.is_empty() {
            return Ok(Value::String(String::new()));
        }
        if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
            return Ok(Value::String(self.unescape_token(trimmed, line_num)?));
        }

        match trimmed {
            "null" => return Ok(Value::Null),
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            _ => {}
        }

        if let Ok(Value::Number(n)) = serde_json::from_str::<Value>(trimmed) {
            return Ok(Value::Number(n));
        }

        Ok(Value::String(trimmed.to_string()))
    }

    /// Unescapes `s`: if quoted, strips the quotes and inverts the TOON
    /// escape table; otherwise returns it unchanged.
    fn unescape_token(&self, s: &str, line_num: usize) -> Result<String, DecodeError> {
        let trimmed = s.trim();
        if !(trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2) {
            return Ok(trimmed.to_string());
        }
        let inner = &trimmed[1..trimmed.len() - 1];
        match unescape_interior(inner, self.options.strict) {
            Unescaped::Ok(s) | Unescaped::Lenient(s) => Ok(s),
            Unescaped::InvalidEscape(c) => Err(DecodeError::InvalidEscapeSequence {
                line: line_num,
                sequence: c.to_string(),
            }),
            Unescaped::UnterminatedEscape => Err(DecodeError::ParseError(
                "unterminated escape sequence".to_string(),
            )),
        }
    }
}

/// Finds the first occurrence of `needle` in `s` that is not inside a
/// `"`-quoted span (a bare, unescaped `\` toggling nothing — quotes alone
/// delimit the span, matching the encoder's own escaping, which never
/// leaves an unescaped `"` inside a quoted value).
fn find_unquoted(s: &str, needle: char) -> Option<usize> {
    let mut in_quotes = false;
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\\' && in_quotes {
            chars.next();
            continue;
        }
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == needle && !in_quotes {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode, EncoderOptions};
    use serde_json::json;

    fn opts() -> DecoderOptions {
        DecoderOptions::default()
    }

    #[test]
    fn decode_empty_is_empty_object() {
        assert_eq!(decode("", &opts()).unwrap(), json!({}));
    }

    #[test]
    fn decode_simple_object() {
        let toon = "name: Alice\nage: 30\nactive: true";
        assert_eq!(
            decode(toon, &opts()).unwrap(),
            json!({"name": "Alice", "age": 30, "active": true})
        );
    }

    #[test]
    fn decode_nested_object() {
        let toon = "user:\n  id: 123\n  name: Bob";
        assert_eq!(
            decode(toon, &opts()).unwrap(),
            json!({"user": {"id": 123, "name": "Bob"}})
        );
    }

    #[test]
    fn decode_primitive_array() {
        let toon = "tags[3]: admin,user,dev";
        assert_eq!(
            decode(toon, &opts()).unwrap(),
            json!({"tags": ["admin", "user", "dev"]})
        );
    }

    #[test]
    fn decode_tabular_array() {
        let toon = "users[2]{id,name,active}:\n  1,Alice,true\n  2,Bob,false";
        assert_eq!(
            decode(toon, &opts()).unwrap(),
            json!({
                "users": [
                    {"id": 1, "name": "Alice", "active": true},
                    {"id": 2, "name": "Bob", "active": false}
                ]
            })
        );
    }

    #[test]
    fn decode_quoted_colon_value() {
        let toon = r#"url: "http://example.com:8080""#;
        assert_eq!(
            decode(toon, &opts()).unwrap(),
            json!({"url": "http://example.com:8080"})
        );
    }

    #[test]
    fn decode_escape_sequences() {
        let toon = r#"text: "Line1\nLine2\tTab""#;
        assert_eq!(decode(toon, &opts()).unwrap(), json!({"text": "Line1\nLine2\tTab"}));
    }

    #[test]
    fn round_trip_through_encode() {
        let original = json!({
            "name": "Test",
            "items": [
                {"id": 1, "value": "A"},
                {"id": 2, "value": "B"}
            ]
        });
        let toon = encode(&original, &EncoderOptions::default());
        assert_eq!(decode(&toon, &opts()).unwrap(), original);
    }

    #[test]
    fn decode_mixed_scalar_array() {
        let toon = "items[3]: 42,text,true";
        assert_eq!(decode(toon, &opts()).unwrap(), json!({"items": [42, "text", true]}));
    }

    #[test]
    fn decode_list_shaped_array() {
        let toon = "items[2]:\n  - id: 1\n    name: First\n  - id: 2\n    name: Second\n    extra: true";
        assert_eq!(
            decode(toon, &opts()).unwrap(),
            json!({"items": [
                {"id": 1, "name": "First"},
                {"id": 2, "name": "Second", "extra": true}
            ]})
        );
    }

    #[test]
    fn decode_unicode() {
        let toon = "message: Hello 世界 👋";
        assert_eq!(decode(toon, &opts()).unwrap(), json!({"message": "Hello 世界 👋"}));
    }

    #[test]
    fn decode_length_marker() {
        let toon = "tags[#2]: a,b";
        let options = DecoderOptions {
            length_marker: true,
            ..opts()
        };
        assert_eq!(decode(toon, &options).unwrap(), json!({"tags": ["a", "b"]}));
    }

    #[test]
    fn decode_tab_delimiter() {
        let toon = "items[2\t]{id\tname}:\n  1\tA\n  2\tB";
        let options = DecoderOptions {
            delimiter: Delimiter::Tab,
            ..opts()
        };
        assert_eq!(
            decode(toon, &options).unwrap(),
            json!({"items": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]})
        );
    }

    #[test]
    fn invalid_indentation_is_strict_error() {
        let toon = "user:\n   id: 1";
        let err = decode(toon, &opts()).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidIndentation { line: 2 }));
    }

    #[test]
    fn invalid_indentation_floor_divides_in_lenient_mode() {
        let toon = "user:\n   id: 1";
        let options = DecoderOptions {
            strict: false,
            ..opts()
        };
        assert!(decode(toon, &options).is_ok());
    }

    #[test]
    fn array_length_mismatch_inline() {
        let toon = "tags[2]: one,two,three";
        let err = decode(toon, &opts()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::ArrayLengthMismatch {
                line: 1,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn simple_array_body_falls_back_to_inline_next_line() {
        let toon = "items[3]:\n  a,b,c";
        assert_eq!(
            decode(toon, &opts()).unwrap(),
            json!({"items": ["a", "b", "c"]})
        );
    }

    #[test]
    fn root_simple_array_body_falls_back_to_inline_next_line() {
        let toon = "[3]:\n  a,b,c";
        assert_eq!(decode(toon, &opts()).unwrap(), json!(["a", "b", "c"]));
    }

    #[test]
    fn row_width_mismatch_tabular() {
        let toon = "users[1]{id,name}:\n  1,Alice,admin";
        let err = decode(toon, &opts()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::RowWidthMismatch {
                line: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn mismatched_delimiter_configuration_is_strict_error() {
        let toon = "tags[3\t]: a\tb\tc";
        let err = decode(toon, &opts()).unwrap_err();
        assert!(matches!(err, DecodeError::MismatchedConfiguration { .. }));
    }

    #[test]
    fn mismatched_delimiter_tolerated_in_lenient_mode() {
        let toon = "tags[3\t]: a\tb\tc";
        let options = DecoderOptions {
            strict: false,
            ..opts()
        };
        assert_eq!(decode(toon, &options).unwrap(), json!({"tags": ["a", "b", "c"]}));
    }

    #[test]
    fn malformed_array_header_is_strict_error() {
        let toon = "tags[abc]: a,b";
        let err = decode(toon, &opts()).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidArrayHeader { .. }));
    }

    #[test]
    fn malformed_array_header_becomes_null_in_lenient_mode() {
        let toon = "tags[abc]: a,b";
        let options = DecoderOptions {
            strict: false,
            ..opts()
        };
        assert_eq!(decode(toon, &options).unwrap(), json!({"tags": null}));
    }

    #[test]
    fn unexpected_root_indentation_is_strict_error() {
        let toon = "  name: Alice";
        let err = decode(toon, &opts()).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedRootIndentation { line: 1 }));
    }

    #[test]
    fn invalid_escape_sequence_is_strict_error() {
        let toon = r#"text: "a\qb""#;
        let err = decode(toon, &opts()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidEscapeSequence { line: 1, .. }
        ));
    }

    #[test]
    fn invalid_escape_sequence_is_literal_in_lenient_mode() {
        let toon = r#"text: "a\qb""#;
        let options = DecoderOptions {
            strict: false,
            ..opts()
        };
        assert_eq!(decode(toon, &options).unwrap(), json!({"text": "a\\qb"}));
    }

    #[test]
    fn arbitrary_precision_decimal_round_trips_exactly() {
        let toon = "value: 123456789012345678901234567890.123456789";
        let decoded = decode(toon, &opts()).unwrap();
        let re_encoded = encode(&decoded, &EncoderOptions::default());
        assert_eq!(re_encoded, toon);
    }

    #[test]
    fn root_level_primitive_array() {
        let toon = "[3]: a,b,c";
        assert_eq!(decode(toon, &opts()).unwrap(), json!(["a", "b", "c"]));
    }

    #[test]
    fn root_level_bare_scalar() {
        assert_eq!(decode("42", &opts()).unwrap(), json!(42));
        assert_eq!(decode("true", &opts()).unwrap(), json!(true));
        assert_eq!(decode("\"hello\"", &opts()).unwrap(), json!("hello"));
    }
}
