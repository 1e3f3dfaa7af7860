//! Test helpers for engine unit tests.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use cn_ir::{CalculatedValue, Value};

/// Mock calculated value holding an integer that the mutation hooks update.
///
/// Hook amounts are read as integers; anything else counts as zero (one for
/// `multiply` and `divide`).
#[derive(Debug, Clone, Copy)]
pub struct Scaled(pub i64);

impl CalculatedValue for Scaled {
    fn resolve(&self) -> Value {
        Value::Int(self.0)
    }

    fn clone_boxed(&self) -> Box<dyn CalculatedValue> {
        Box::new(*self)
    }

    fn negative_clone(&self) -> Box<dyn CalculatedValue> {
        Box::new(Scaled(-self.0))
    }

    fn increment(&mut self, amount: &Value) {
        self.0 += amount.as_int().unwrap_or(0);
    }

    fn decrement(&mut self, amount: &Value) {
        self.0 -= amount.as_int().unwrap_or(0);
    }

    fn multiply(&mut self, factor: &Value) {
        self.0 *= factor.as_int().unwrap_or(1);
    }

    fn divide(&mut self, divisor: &Value) {
        match divisor.as_int() {
            Some(0) | None => {}
            Some(d) => self.0 /= d,
        }
    }
}

/// Current integer value behind a calculated handle.
pub fn resolved_int(value: &Value) -> Option<i64> {
    match value {
        Value::Calculated(c) => c.resolve_concrete().as_int(),
        _ => None,
    }
}
