//! Transform engine.
//!
//! `transform(target, source, op)` returns the value to store into the
//! target slot. A `Null` target first takes the zero value of the source's
//! variant, so `null += 5` is `5` and `null += "a"` is `"a"`.
//!
//! Integer arithmetic wraps. Integer division or remainder by zero, and the
//! truncating `Int` by `Float` path with a zero divisor, leave the target
//! unchanged. A `Calculated` target is mutated through its own hooks and the
//! same handle is returned.

use cn_ir::{Calculated, Operator, Value};
use tracing::trace;

use crate::element_key;

/// Binary arithmetic operator behind the `+=`..`%=` family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Arith {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

/// Binary bitwise operator behind `&=`, `|=` and `^=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bitwise {
    And,
    Or,
    Xor,
}

/// Apply an assignment operator. Undefined pairings and non-assignment
/// operators return the target unchanged.
pub fn transform(target: &Value, source: &Value, op: Operator) -> Value {
    let defaulted;
    let target = if target.is_null() {
        defaulted = source.zero_like();
        &defaulted
    } else {
        target
    };

    let result = match op {
        Operator::Assign => Some(source.resolved().deep_clone()),
        Operator::NegativeAssign => negate(source),
        Operator::Increment => step(target, Arith::Add),
        Operator::Decrement => step(target, Arith::Sub),
        Operator::AdditionAssign => arithmetic(target, source, Arith::Add),
        Operator::SubtractionAssign => arithmetic(target, source, Arith::Sub),
        Operator::MultiplicationAssign => arithmetic(target, source, Arith::Mul),
        Operator::DivisionAssign => arithmetic(target, source, Arith::Div),
        Operator::ModuloAssign => arithmetic(target, source, Arith::Rem),
        Operator::BitwiseAndAssign => bitwise(target, source, Bitwise::And),
        Operator::BitwiseOrAssign => bitwise(target, source, Bitwise::Or),
        Operator::BitwiseXorAssign => bitwise(target, source, Bitwise::Xor),
        Operator::EqualTo
        | Operator::NotEqualTo
        | Operator::GreaterThan
        | Operator::GreaterThanOrEqualTo
        | Operator::LessThan
        | Operator::LessThanOrEqualTo
        | Operator::BitwiseAnd
        | Operator::BitwiseOr
        | Operator::BitwiseXor
        | Operator::None
        | Operator::Unknown => None,
    };

    result.unwrap_or_else(|| {
        trace!(
            ?op,
            target = target.type_name(),
            source = source.type_name(),
            "transform undefined for operands"
        );
        target.clone()
    })
}

/// `=-`: the negated source. A calculated source yields its negative clone.
fn negate(source: &Value) -> Option<Value> {
    match source {
        Value::Int(n) => Some(Value::Int(n.wrapping_neg())),
        Value::Float(f) => Some(Value::Float(-f)),
        Value::Calculated(c) => Some(Value::Calculated(c.negative_clone())),
        _ => None,
    }
}

/// `++` and `--`.
fn step(target: &Value, op: Arith) -> Option<Value> {
    match target {
        Value::Int(_) | Value::Float(_) | Value::Calculated(_) => {
            arithmetic(target, &Value::Int(1), op)
        }
        _ => None,
    }
}

fn arithmetic(target: &Value, source: &Value, op: Arith) -> Option<Value> {
    let source = source.resolved();
    match (target, &*source) {
        (Value::Calculated(c), _) => calculated_arithmetic(c, &source, op),
        (Value::Int(a), Value::Int(b)) => int_arithmetic(*a, *b, op).map(Value::Int),
        (Value::Int(a), Value::Float(b)) => truncating_arithmetic(*a, *b, op).map(Value::Int),
        (Value::Float(a), Value::Int(_) | Value::Float(_)) => {
            let b = source.as_float()?;
            Some(Value::Float(float_arithmetic(*a, b, op)))
        }
        (Value::Str(a), _) if op == Arith::Add => {
            let mut joined = a.clone();
            match &*source {
                Value::Str(b) => joined.push_str(b),
                other => joined.push_str(&element_key(other)),
            }
            Some(Value::Str(joined))
        }
        (Value::List(items), _) if op == Arith::Add => {
            let mut items = items.clone();
            items.push(source.deep_clone());
            Some(Value::List(items))
        }
        (Value::List(items), _) if op == Arith::Sub => {
            let key = element_key(&source);
            let mut items = items.clone();
            if let Some(index) = items.iter().position(|item| element_key(item) == key) {
                items.remove(index);
            }
            Some(Value::List(items))
        }
        _ => None,
    }
}

/// Arithmetic on a calculated target goes through its mutation hooks.
/// Remainder has no hook and is computed on the resolved value.
fn calculated_arithmetic(target: &Calculated, source: &Value, op: Arith) -> Option<Value> {
    match op {
        Arith::Add => target.increment(source),
        Arith::Sub => target.decrement(source),
        Arith::Mul => target.multiply(source),
        Arith::Div => target.divide(source),
        Arith::Rem => return arithmetic(&target.resolve_concrete(), source, op),
    }
    Some(Value::Calculated(target.clone()))
}

fn int_arithmetic(a: i64, b: i64, op: Arith) -> Option<i64> {
    match op {
        Arith::Add => Some(a.wrapping_add(b)),
        Arith::Sub => Some(a.wrapping_sub(b)),
        Arith::Mul => Some(a.wrapping_mul(b)),
        Arith::Div => (b != 0).then(|| a.wrapping_div(b)),
        Arith::Rem => (b != 0).then(|| a.wrapping_rem(b)),
    }
}

/// `Int` target with a `Float` source: computed in floating point, stored
/// truncated (saturating at the `i64` range).
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "the result is stored back into an integer slot"
)]
fn truncating_arithmetic(a: i64, b: f64, op: Arith) -> Option<i64> {
    if matches!(op, Arith::Div | Arith::Rem) && b == 0.0 {
        return None;
    }
    Some(float_arithmetic(a as f64, b, op) as i64)
}

fn float_arithmetic(a: f64, b: f64, op: Arith) -> f64 {
    match op {
        Arith::Add => a + b,
        Arith::Sub => a - b,
        Arith::Mul => a * b,
        Arith::Div => a / b,
        Arith::Rem => a % b,
    }
}

fn bitwise(target: &Value, source: &Value, op: Bitwise) -> Option<Value> {
    let source = source.resolved();
    match (target, &*source) {
        (Value::Int(a), Value::Int(b)) => Some(Value::Int(match op {
            Bitwise::And => a & b,
            Bitwise::Or => a | b,
            Bitwise::Xor => a ^ b,
        })),
        (Value::Bool(a), Value::Bool(b)) => Some(Value::Bool(match op {
            Bitwise::And => *a && *b,
            Bitwise::Or => *a || *b,
            Bitwise::Xor => a ^ b,
        })),
        (Value::List(items), _) if op == Bitwise::Or => {
            let key = element_key(&source);
            let mut items = items.clone();
            if !items.iter().any(|item| element_key(item) == key) {
                items.push(source.deep_clone());
            }
            Some(Value::List(items))
        }
        (Value::Calculated(c), Value::Int(_)) => match c.resolve_concrete() {
            resolved @ Value::Int(_) => bitwise(&resolved, &source, op),
            _ => None,
        },
        _ => None,
    }
}
