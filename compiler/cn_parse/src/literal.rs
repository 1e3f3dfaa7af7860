//! Literal text to [`Value`].
//!
//! An ordered recognizer: the first rule that matches decides the variant.
//!
//! | Text | Value |
//! |---|---|
//! | empty, `null` | `Null` |
//! | `true`, `false` | `Bool` |
//! | `'…'`, `"…"` | `Str` (no escapes) |
//! | `[…]` | `List` of recursively parsed elements |
//! | `#…` | `Color` from hex digits |
//! | `…f` | `Float` |
//! | `0x…` | `Int` from hex digits |
//! | `(…)` with 2-4 reals | `Vec2`/`Vec3`/`Vec4`, other arities `Null` |
//! | keyword | `Keyword` |
//! | integer | `Int` |
//! | real | `Float` |
//! | anything else | `Null` |
//!
//! Numeric steps never fail: text that does not parse becomes the type's
//! zero. Note that the float rule precedes the hex rule, so lowercase hex
//! ending in `f` (`0xff`) reads as a float.

use cn_ir::{Color, Keyword, Value};
use cn_stack::ensure_sufficient_stack;

use crate::scanner::split_top_level;

/// Parse one literal. Surrounding whitespace is ignored.
pub fn parse_value(text: &str) -> Value {
    let text = text.trim();

    match text {
        "" | "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Some(content) = unquote(text) {
        return Value::string(content);
    }
    if let Some(inner) = enclosed(text, '[', ']') {
        return parse_list(inner);
    }
    if let Some(digits) = text.strip_prefix('#') {
        return Value::Color(Color::from_hex_digits(digits));
    }
    if let Some(real) = text.strip_suffix('f') {
        return Value::Float(parse_real(real));
    }
    if let Some(digits) = text.strip_prefix("0x") {
        return Value::Int(parse_hex(digits));
    }
    if let Some(inner) = enclosed(text, '(', ')') {
        return parse_vector(inner);
    }
    if let Some(keyword) = Keyword::from_name(text) {
        return Value::Keyword(keyword);
    }
    if let Ok(n) = text.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(f) = text.parse::<f64>() {
        return Value::Float(f);
    }
    Value::Null
}

/// Content of a string wrapped in a matching pair of quotes.
fn unquote(text: &str) -> Option<&str> {
    let quote = text.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    if text.len() < 2 || !text.ends_with(quote) {
        return None;
    }
    Some(&text[1..text.len() - 1])
}

fn enclosed(text: &str, open: char, close: char) -> Option<&str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

fn parse_list(inner: &str) -> Value {
    if inner.trim().is_empty() {
        return Value::list(Vec::new());
    }
    let items = split_top_level(inner)
        .into_iter()
        .map(|element| ensure_sufficient_stack(|| parse_value(element)))
        .collect();
    Value::list(items)
}

fn parse_vector(inner: &str) -> Value {
    let parts = split_top_level(inner);
    let mut components = [0.0; 4];
    if !(2..=4).contains(&parts.len()) {
        return Value::Null;
    }
    for (slot, part) in components.iter_mut().zip(&parts) {
        let part = part.trim();
        *slot = parse_real(part.strip_suffix('f').unwrap_or(part));
    }
    match parts.len() {
        2 => Value::Vec2([components[0], components[1]]),
        3 => Value::Vec3([components[0], components[1], components[2]]),
        _ => Value::Vec4(components),
    }
}

fn parse_real(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Hex digits as a 64-bit two's complement integer.
#[expect(
    clippy::cast_possible_wrap,
    reason = "digits at or above 0x8000000000000000 wrap to negative values"
)]
fn parse_hex(digits: &str) -> i64 {
    u64::from_str_radix(digits, 16).map_or(0, |n| n as i64)
}

#[cfg(test)]
mod tests;
