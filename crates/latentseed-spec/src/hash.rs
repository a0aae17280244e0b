//! Canonical request hashing.
//!
//! A request hash identifies the exact field a request produces:
//!
//! ```text
//! request_hash = hex(BLAKE3(canonical_json(request)))
//! ```
//!
//! Canonical JSON sorts object keys and drops whitespace, so two requests with
//! equal fields hash equally regardless of how their JSON was written.

use crate::error::SpecError;
use crate::request::NoiseRequest;

/// Computes the canonical BLAKE3 hash of a request.
///
/// # Example
/// ```
/// use latentseed_spec::{NoiseFamily, NoiseRequest};
/// use latentseed_spec::hash::canonical_request_hash;
///
/// let request = NoiseRequest::new(512, 512, NoiseFamily::Pink, 42);
/// let hash = canonical_request_hash(&request).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_request_hash(request: &NoiseRequest) -> Result<String, SpecError> {
    let value = request.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Renders a JSON value with sorted keys and no whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Null => out.push_str("null"),
        serde_json::Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        serde_json::Value::Number(n) => out.push_str(&format_number(n)),
        serde_json::Value::String(s) => write_string(s, out),
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            if f == 0.0 {
                "0".to_string()
            } else if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", f as i64)
            } else {
                format!("{}", f)
            }
        }
        _ => "null".to_string(),
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
