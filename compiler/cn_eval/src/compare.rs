//! Boxed comparison engine.
//!
//! Operands are normalized before dispatch:
//!
//! 1. `Calculated` operands resolve to their concrete value.
//! 2. `Null` against `Int`, `Float` or `Bool` becomes that type's zero.
//! 3. `Bool` against `Int` or `Float` compares the number's truthiness
//!    (strictly positive).
//!
//! Equality covers matching scalar types, numeric cross-comparison, vectors
//! of equal arity, keyword identity and `Int` parity against `even`/`odd`.
//! Ordering covers `Int`/`Float` pairs only. `&` and `^` on a list test
//! membership and non-membership by serialized form.

use std::borrow::Cow;
use std::cmp::Ordering;

use cn_ir::{Operator, TypeTag, Value};
use tracing::trace;

use crate::element_key;

/// Evaluate a comparison operator. Undefined pairings and non-comparison
/// operators are `false`.
pub fn compare(left: &Value, right: &Value, op: Operator) -> bool {
    let (left, right) = coerce(left.resolved(), right.resolved());
    let result = match op {
        Operator::EqualTo => equal(&left, &right),
        Operator::NotEqualTo => equal(&left, &right).map(|eq| !eq),
        Operator::GreaterThan => order(&left, &right).map(Ordering::is_gt),
        Operator::GreaterThanOrEqualTo => order(&left, &right).map(Ordering::is_ge),
        Operator::LessThan => order(&left, &right).map(Ordering::is_lt),
        Operator::LessThanOrEqualTo => order(&left, &right).map(Ordering::is_le),
        Operator::BitwiseAnd => contains(&left, &right),
        Operator::BitwiseXor => contains(&left, &right).map(|found| !found),
        _ => None,
    };
    result.unwrap_or_else(|| {
        trace!(
            ?op,
            left = left.type_name(),
            right = right.type_name(),
            "comparison undefined for operands"
        );
        false
    })
}

fn coerce<'a>(left: Cow<'a, Value>, right: Cow<'a, Value>) -> (Cow<'a, Value>, Cow<'a, Value>) {
    match (left.tag(), right.tag()) {
        (TypeTag::Null, TypeTag::Int | TypeTag::Float | TypeTag::Bool) => {
            (Cow::Owned(right.zero_like()), right)
        }
        (TypeTag::Int | TypeTag::Float | TypeTag::Bool, TypeTag::Null) => {
            let zero = left.zero_like();
            (left, Cow::Owned(zero))
        }
        (TypeTag::Bool, TypeTag::Int | TypeTag::Float) => {
            let truthy = right.is_truthy();
            (left, Cow::Owned(Value::Bool(truthy)))
        }
        (TypeTag::Int | TypeTag::Float, TypeTag::Bool) => {
            (Cow::Owned(Value::Bool(left.is_truthy())), right)
        }
        _ => (left, right),
    }
}

/// `None` when equality is undefined for the pair.
#[allow(clippy::float_cmp, reason = "notation equality is exact")]
pub(crate) fn equal(left: &Value, right: &Value) -> Option<bool> {
    let eq = match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            left.as_float() == right.as_float()
        }
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Color(a), Value::Color(b)) => a == b,
        (Value::Vec2(a), Value::Vec2(b)) => a == b,
        (Value::Vec3(a), Value::Vec3(b)) => a == b,
        (Value::Vec4(a), Value::Vec4(b)) => a == b,
        (Value::Int(n), Value::Keyword(k)) | (Value::Keyword(k), Value::Int(n)) => {
            return k.matches_parity(*n);
        }
        (Value::Keyword(a), Value::Keyword(b)) => a == b,
        _ => return None,
    };
    Some(eq)
}

fn order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            left.as_float()?.partial_cmp(&right.as_float()?)
        }
        _ => None,
    }
}

fn contains(list: &Value, item: &Value) -> Option<bool> {
    let Value::List(items) = list else {
        return None;
    };
    let key = element_key(item);
    Some(items.iter().any(|element| element_key(element) == key))
}
