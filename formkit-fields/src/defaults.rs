//! Initial form values derived from a compiled schema.

use tracing::{debug, trace};

use crate::kind::{CompiledSchema, FieldKind};
use crate::value::{FieldValue, FormValues};

/// Derive the values a form should start with.
///
/// Walks the schema's fields in declaration order. An override counts as
/// present unless it is missing or `Null`.
///
/// - objects recurse, using the override when it is itself an object
/// - arrays are always empty, overrides are ignored
/// - default wrappers use the override, else their declared fallback
/// - strings and booleans use the override, else `""` and `false`
/// - numbers parse textual overrides with [`parse_float`], pass other
///   overrides through, else `0`
/// - nullables are always `Null`, overrides are ignored
/// - unknown kinds get no entry
pub fn derive_defaults(schema: &CompiledSchema, overrides: Option<&FormValues>) -> FormValues {
    let mut values = FormValues::with_capacity(schema.len());

    for (name, kind) in schema.fields() {
        let given = overrides
            .and_then(|o| o.get(name))
            .filter(|v| !v.is_null());

        let value = match kind {
            FieldKind::Object(nested) => {
                FieldValue::Object(derive_defaults(nested, given.and_then(FieldValue::as_object)))
            }
            FieldKind::Array => FieldValue::Array(Vec::new()),
            FieldKind::DefaultWrapped(fallback) => given.unwrap_or(fallback).clone(),
            FieldKind::String => given.cloned().unwrap_or_else(|| FieldValue::from("")),
            FieldKind::Boolean => given.cloned().unwrap_or(FieldValue::Bool(false)),
            FieldKind::Number => match given {
                Some(FieldValue::String(text)) => FieldValue::Number(parse_float(text)),
                Some(other) => other.clone(),
                None => FieldValue::Number(0.0),
            },
            FieldKind::Nullable => FieldValue::Null,
            FieldKind::Unknown => {
                trace!(field = name, "skipping field of unrecognized kind");
                continue;
            }
        };

        values.insert(name.to_string(), value);
    }

    debug!(
        fields = schema.len(),
        derived = values.len(),
        overrides = overrides.map_or(0, |o| o.len()),
        "derived form defaults"
    );
    values
}

/// Parse the longest leading decimal number in `text`.
///
/// Leading whitespace is skipped, trailing garbage is ignored, and
/// `Infinity` is accepted with an optional sign. Returns NaN when no
/// number can be read.
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start_matches(is_leading_space);
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Whitespace and line terminators skipped before a number: Unicode
/// `White_Space` minus NEL (U+0085), plus the byte order mark.
fn is_leading_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
