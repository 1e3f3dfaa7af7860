//! Tag-accelerated comparison.
//!
//! An [`Operand`] captures a value's type tag together with a cached scalar
//! once, so a host comparing the same pair repeatedly skips re-inspecting
//! the value:
//!
//! | Tag | Cached scalar |
//! |---|---|
//! | `Int` | the integer |
//! | `Bool` | `0` or `1` |
//! | `Str` | `FxHash` of the content |
//! | other | unused |
//!
//! Same-tag `Int`, `Bool` and `Str` pairs are decided from the cache; every
//! other pairing defers to [`compare`]. Results always agree with the boxed
//! engine. String equality checks the hash first and confirms the content on
//! a hash match, so a collision cannot produce a false positive.

use std::hash::BuildHasher;

use cn_ir::{Operator, TypeTag, Value};
use rustc_hash::FxBuildHasher;

use crate::compare;

/// A value prepared for repeated comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Operand<'a> {
    tag: TypeTag,
    value: &'a Value,
    cached: i64,
}

impl<'a> Operand<'a> {
    pub fn new(value: &'a Value) -> Self {
        let cached = match value {
            Value::Int(n) => *n,
            Value::Bool(b) => i64::from(*b),
            Value::Str(s) => string_hash(s),
            _ => 0,
        };
        Operand {
            tag: value.tag(),
            value,
            cached,
        }
    }

    #[inline]
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    #[inline]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    #[inline]
    pub fn cached(&self) -> i64 {
        self.cached
    }
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(value: &'a Value) -> Self {
        Operand::new(value)
    }
}

#[expect(
    clippy::cast_possible_wrap,
    reason = "the hash is only compared for equality"
)]
fn string_hash(s: &str) -> i64 {
    FxBuildHasher.hash_one(s) as i64
}

/// Evaluate a comparison operator over prepared operands.
pub fn compare_tagged(left: &Operand<'_>, right: &Operand<'_>, op: Operator) -> bool {
    match (left.tag, right.tag) {
        (TypeTag::Int, TypeTag::Int) => {
            let (a, b) = (left.cached, right.cached);
            match op {
                Operator::EqualTo => a == b,
                Operator::NotEqualTo => a != b,
                Operator::GreaterThan => a > b,
                Operator::GreaterThanOrEqualTo => a >= b,
                Operator::LessThan => a < b,
                Operator::LessThanOrEqualTo => a <= b,
                _ => false,
            }
        }
        (TypeTag::Bool, TypeTag::Bool) => match op {
            Operator::EqualTo => left.cached == right.cached,
            Operator::NotEqualTo => left.cached != right.cached,
            _ => false,
        },
        (TypeTag::Str, TypeTag::Str) => match op {
            Operator::EqualTo => same_string(left, right),
            Operator::NotEqualTo => !same_string(left, right),
            _ => false,
        },
        _ => compare(left.value, right.value, op),
    }
}

fn same_string(left: &Operand<'_>, right: &Operand<'_>) -> bool {
    left.cached == right.cached && left.value.as_str() == right.value.as_str()
}

#[cfg(test)]
mod tests;
