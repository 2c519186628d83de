//! JSON value to TOON text encoder.

use crate::common::{decimal_to_plain, Delimiter};
use crate::format::{format_key, format_value_string};
use crate::normalize::normalize;
use serde_json::Value;

/// Encoder configuration options.
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Spaces per indentation level (default: 2).
    pub indent: usize,
    /// Delimiter used in inline/tabular rows and tabular headers (default: Comma).
    pub delimiter: Delimiter,
    /// If true, array headers are prefixed with `#` before the size
    /// (default: false).
    pub length_marker: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            delimiter: Delimiter::Comma,
            length_marker: false,
        }
    }
}

/// Encodes a JSON value to TOON text.
///
/// The value is normalized first (see [`crate::normalize`]): non-finite
/// floats become `null` and negative zero becomes `0`.
pub fn encode(value: &Value, options: &EncoderOptions) -> String {
    let normalized = normalize(value);
    let mut encoder = Encoder::new(options);
    encoder.encode_value(&normalized, 0);
    encoder.output
}

struct Encoder<'a> {
    options: &'a EncoderOptions,
    output: String,
}

impl<'a> Encoder<'a> {
    fn new(options: &'a EncoderOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    /// Entry point for any value at the root (depth 0) or as a list item's
    /// nested container.
    fn encode_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Object(obj) if obj.is_empty() => {
                // Root empty object -> empty document; nested case is
                // handled by the caller before recursing here.
            }
            Value::Object(obj) => self.encode_object(obj, depth),
            Value::Array(arr) => self.encode_array(arr, depth),
            _ => self.output.push_str(&self.format_scalar(value)),
        }
    }

    fn encode_object(&mut self, obj: &serde_json::Map<String, Value>, depth: usize) {
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 || depth > 0 {
                self.output.push('\n');
            }
            self.indent(depth);
            self.output.push_str(&format_key(key));

            match value {
                Value::Object(nested) if nested.is_empty() => {
                    self.output.push(':');
                }
                Value::Object(nested) => {
                    self.output.push(':');
                    self.encode_object(nested, depth + 1);
                }
                Value::Array(arr) => {
                    self.encode_array_with_key(arr, depth);
                }
                _ => {
                    self.output.push(':');
                    self.output.push(' ');
                    self.output.push_str(&self.format_scalar(value));
                }
            }
        }
    }

    /// Encodes an array at root/list-item position (no key has been written).
    fn encode_array(&mut self, arr: &[Value], depth: usize) {
        self.encode_array_body(arr, depth, false);
    }

    /// Encodes an array as an object field: the key has already been
    /// written, the header follows directly with no intervening space.
    fn encode_array_with_key(&mut self, arr: &[Value], depth: usize) {
        self.encode_array_body(arr, depth, true);
    }

    fn encode_array_body(&mut self, arr: &[Value], depth: usize, _keyed: bool) {
        let delim = self.options.delimiter;

        if let Some(fields) = detect_tabular(arr) {
            self.write_array_header(arr.len(), Some(&fields));
            for item in arr {
                self.output.push('\n');
                self.indent(depth + 1);
                if let Value::Object(map) = item {
                    for (j, field) in fields.iter().enumerate() {
                        if j > 0 {
                            self.output.push(delim.as_char());
                        }
                        if let Some(val) = map.get(field) {
                            self.output.push_str(&self.format_scalar(val));
                        }
                    }
                }
            }
        } else if is_primitive_array(arr) {
            self.write_array_header(arr.len(), None);
            if !arr.is_empty() {
                self.output.push(' ');
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        self.output.push(delim.as_char());
                    }
                    self.output.push_str(&self.format_scalar(val));
                }
            }
        } else {
            self.write_array_header(arr.len(), None);
            for item in arr {
                self.output.push('\n');
                self.indent(depth + 1);
                self.output.push_str("- ");
                self.encode_list_item(item, depth + 1);
            }
        }
    }

    /// Encodes one element of a list-shaped array, right after its `- `.
    fn encode_list_item(&mut self, item: &Value, item_depth: usize) {
        match item {
            Value::Object(obj) if !obj.is_empty() => self.encode_object_as_list_item(obj, item_depth),
            Value::Array(inner) => self.encode_array(inner, item_depth),
            _ => self.output.push_str(&self.format_scalar(item)),
        }
    }

    /// Encodes an object whose first field shares the `- ` line and whose
    /// remaining fields follow at `depth + 1`.
    fn encode_object_as_list_item(&mut self, obj: &serde_json::Map<String, Value>, depth: usize) {
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
                self.indent(depth + 1);
            }
            self.output.push_str(&format_key(key));

            match value {
                Value::Object(nested) if nested.is_empty() => {
                    self.output.push(':');
                }
                Value::Object(nested) => {
                    self.output.push(':');
                    // The first field shares the `- key:` line, so its body
                    // is one level shallower than a later field's body.
                    let body_depth = if i == 0 { depth + 1 } else { depth + 2 };
                    self.encode_object(nested, body_depth);
                }
                Value::Array(arr) => {
                    // First field's container starts on the `- key:` line,
                    // its body recurses one level deeper than a plain field.
                    let body_depth = if i == 0 { depth } else { depth + 1 };
                    self.encode_array_with_key(arr, body_depth);
                }
                _ => {
                    self.output.push(':');
                    self.output.push(' ');
                    self.output.push_str(&self.format_scalar(value));
                }
            }
        }
    }

    fn write_array_header(&mut self, len: usize, fields: Option<&[String]>) {
        self.output.push('[');
        if self.options.length_marker {
            self.output.push('#');
        }
        self.output.push_str(&len.to_string());
        self.output.push_str(self.options.delimiter.header_symbol());
        self.output.push(']');
        if let Some(fields) = fields {
            self.output.push('{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    self.output.push(self.options.delimiter.as_char());
                }
                self.output.push_str(&format_key(field));
            }
            self.output.push('}');
        }
        self.output.push(':');
    }

    /// Formats a scalar value (Null/Bool/Number/String); containers are
    /// never passed here.
    fn format_scalar(&self, value: &Value) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(n),
            Value::String(s) => format_value_string(s, self.options.delimiter),
            Value::Array(_) | Value::Object(_) => unreachable!("containers are not scalars"),
        }
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..(depth * self.options.indent) {
            self.output.push(' ');
        }
    }
}

/// Formats a number in plain-decimal form, no scientific notation, no
/// trailing fractional zeroes. Relies on `arbitrary_precision` preserving
/// the exact source digits in `n.to_string()` so large decimals never pass
/// through a lossy `f64` conversion.
fn format_number(n: &serde_json::Number) -> String {
    decimal_to_plain(&n.to_string())
}

/// An array is tabular when non-empty, every element is a non-empty map,
/// every map has exactly the same keys in the same insertion order as the
/// first element, and every value in every map is a scalar.
fn detect_tabular(arr: &[Value]) -> Option<Vec<String>> {
    if arr.is_empty() {
        return None;
    }

    let first = arr[0].as_object()?;
    if first.is_empty() {
        return None;
    }
    let fields: Vec<String> = first.keys().cloned().collect();

    for item in arr {
        let obj = item.as_object()?;
        if obj.len() != fields.len() {
            return None;
        }
        for (key, expected) in obj.keys().zip(fields.iter()) {
            if key != expected {
                return None;
            }
        }
        for value in obj.values() {
            if !is_scalar(value) {
                return None;
            }
        }
    }

    Some(fields)
}

/// An array is primitive when every element individually is a scalar. This
/// holds for an empty array and for arrays mixing scalar types.
fn is_primitive_array(arr: &[Value]) -> bool {
    arr.iter().all(is_scalar)
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}
