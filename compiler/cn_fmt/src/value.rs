//! [`Value`] to literal text.

use std::fmt::Write;

use cn_ir::{Color, Value};
use cn_stack::ensure_sufficient_stack;

use crate::FormatConfig;

/// Serialize one value.
pub fn value_to_text(value: &Value, config: &FormatConfig) -> String {
    let mut out = String::new();
    write_value(&mut out, value, config);
    out
}

/// Append the literal form of `value` to `out`.
///
/// `Calculated` values are written as their resolved value; the notation has
/// no syntax for a computed value.
pub fn write_value(out: &mut String, value: &Value, config: &FormatConfig) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Float(f) => write_float(out, *f, config),
        Value::Str(s) => write_string(out, s),
        Value::Color(c) => write_color(out, *c, config),
        Value::Vec2(v) => write_vector(out, v, config),
        Value::Vec3(v) => write_vector(out, v, config),
        Value::Vec4(v) => write_vector(out, v, config),
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                ensure_sufficient_stack(|| write_value(out, item, config));
            }
            out.push(']');
        }
        Value::Keyword(k) => out.push_str(k.as_str()),
        Value::Calculated(c) => write_value(out, &c.resolve_concrete(), config),
    }
}

fn write_float(out: &mut String, f: f64, config: &FormatConfig) {
    let _ = match config.float_precision {
        Some(precision) => write!(out, "{f:.precision$}f"),
        None => write!(out, "{f}f"),
    };
}

/// Strings are never escaped: the quote character is chosen so the content
/// can be read back, which fails only when both quote characters appear.
fn write_string(out: &mut String, s: &str) {
    let quote = if s.contains('"') { '\'' } else { '"' };
    out.push(quote);
    out.push_str(s);
    out.push(quote);
}

fn write_color(out: &mut String, color: Color, config: &FormatConfig) {
    out.push_str(&color.to_hex(config.emit_alpha));
}

fn write_vector(out: &mut String, components: &[f64], config: &FormatConfig) {
    out.push('(');
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_float(out, *component, config);
    }
    out.push(')');
}
