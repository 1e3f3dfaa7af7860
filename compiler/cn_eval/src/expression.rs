//! Single-operator expressions: `lhs op rhs`.
//!
//! Hosts store conditions and effects as short strings such as
//! `score >= 10` or `tags |= 'boss'`, with the left side already substituted
//! by a literal. Splitting happens at the first operator token outside
//! quotes, parentheses and brackets; at each position the longest symbol
//! wins, so `>=` is never read as `>`.

use cn_ir::{Operator, Value};
use cn_parse::parse_value;
use tracing::trace;

use crate::{compare, transform};

/// Result of evaluating one expression.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// A comparison operator was applied.
    Condition(bool),
    /// An assignment operator was applied; the value to store.
    Assigned(Value),
    /// No operator, or an operator neither engine evaluates.
    Ignored,
}

/// Split `text` at its first top-level operator.
///
/// Returns the untrimmed left and right sides. Text without an operator
/// outside quotes and brackets yields `None`.
pub fn split_expression(text: &str) -> Option<(&str, Operator, &str)> {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = None;
    let mut depth = 0usize;

    for (pos, &byte) in bytes.iter().enumerate() {
        if let Some(open) = quote {
            if byte == open {
                quote = None;
            }
            continue;
        }
        match byte {
            b'\'' | b'"' => quote = Some(byte),
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                let rest = &bytes[pos..];
                if let Some(op) = Operator::SYMBOLIC
                    .into_iter()
                    .find(|op| rest.starts_with(op.as_symbol().as_bytes()))
                {
                    let end = pos + op.as_symbol().len();
                    return Some((&text[..pos], op, &text[end..]));
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse both sides of `text` as literals and apply its operator.
#[tracing::instrument(level = "trace", skip_all, fields(text = %text))]
pub fn evaluate_expression(text: &str) -> Outcome {
    let Some((lhs, op, rhs)) = split_expression(text) else {
        trace!("no operator");
        return Outcome::Ignored;
    };
    let left = parse_value(lhs);
    let right = parse_value(rhs);

    if op.is_comparison() {
        Outcome::Condition(compare(&left, &right, op))
    } else if op.is_transform() {
        Outcome::Assigned(transform(&left, &right, op))
    } else {
        Outcome::Ignored
    }
}
