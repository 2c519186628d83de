//! Value tree normalization, run before encoding.
//!
//! Produces a fresh `serde_json::Value` tree with non-finite floats and
//! negative zero cleaned up; everything else passes through unchanged.
//! `serde_json::Value` already enforces the rest of the model's invariants
//! (string-only map keys, no sets, no cycles), so there is nothing else for
//! this pass to do.

use crate::common::decimal_to_plain;
use serde_json::{Map, Number, Value};

/// Normalizes `value` into a fresh tree suitable for encoding.
pub(crate) fn normalize(value: &Value) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => value.clone(),
        Value::Number(n) => normalize_number(n),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (k, v) in map {
                out.insert(k.clone(), normalize(v));
            }
            Value::Object(out)
        }
    }
}

fn normalize_number(n: &Number) -> Value {
    if n.as_i64().is_some() || n.as_u64().is_some() {
        return Value::Number(n.clone());
    }

    // `serde_json::Number` can never hold NaN or ±Infinity: the JSON grammar
    // has no token for them, and `Number::from_f64` refuses to construct one.
    // So anything past the integer check above is a finite decimal, possibly
    // one whose magnitude overflows `f64` (arbitrary precision keeps it as
    // exact digit text regardless). Deciding zero-ness from `as_f64()` would
    // wrongly treat that overflow-to-infinity as "non-finite" and null out a
    // legitimate huge decimal, so zero-ness is read off the plain-decimal
    // digits instead.
    if decimal_to_plain(&n.to_string()) == "0" {
        return Value::Number(Number::from(0));
    }

    Value::Number(n.clone())
}
