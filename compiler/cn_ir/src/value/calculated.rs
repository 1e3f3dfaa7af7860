//! Extension point for host-computed values.
//!
//! The notation never interprets a calculated value's representation. It only
//! asks it to resolve to a concrete [`Value`], to copy itself, and to apply
//! the four arithmetic mutation hooks used by the transform engine.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::Value;

/// Resolution chains longer than this are treated as cyclic and resolve to
/// `Null`.
const MAX_RESOLVE_DEPTH: usize = 32;

/// Capability interface implemented by host-supplied dynamic values.
pub trait CalculatedValue: fmt::Debug + Send {
    /// Current concrete value.
    fn resolve(&self) -> Value;

    /// Independent copy of this value.
    fn clone_boxed(&self) -> Box<dyn CalculatedValue>;

    /// Independent copy whose resolved value is negated.
    fn negative_clone(&self) -> Box<dyn CalculatedValue>;

    fn increment(&mut self, amount: &Value);

    fn decrement(&mut self, amount: &Value);

    fn multiply(&mut self, factor: &Value);

    fn divide(&mut self, divisor: &Value);
}

/// Shared handle to a [`CalculatedValue`].
///
/// Cloning the handle shares the underlying value, so a mutation hook applied
/// through one handle is observed through every clone. Use
/// [`Calculated::deep_clone`] for an independent copy.
#[derive(Clone)]
pub struct Calculated(Arc<Mutex<Box<dyn CalculatedValue>>>);

impl Calculated {
    pub fn new(value: impl CalculatedValue + 'static) -> Self {
        Self::from_boxed(Box::new(value))
    }

    pub fn from_boxed(value: Box<dyn CalculatedValue>) -> Self {
        Calculated(Arc::new(Mutex::new(value)))
    }

    /// Resolve one level. May itself return a `Calculated`.
    pub fn resolve(&self) -> Value {
        self.0.lock().resolve()
    }

    /// Resolve until a concrete (non-calculated) value is reached.
    pub fn resolve_concrete(&self) -> Value {
        let mut current = self.resolve();
        for _ in 0..MAX_RESOLVE_DEPTH {
            let Value::Calculated(inner) = &current else {
                return current;
            };
            current = inner.resolve();
        }
        Value::Null
    }

    pub fn deep_clone(&self) -> Self {
        Self::from_boxed(self.0.lock().clone_boxed())
    }

    pub fn negative_clone(&self) -> Self {
        Self::from_boxed(self.0.lock().negative_clone())
    }

    pub fn increment(&self, amount: &Value) {
        self.0.lock().increment(amount);
    }

    pub fn decrement(&self, amount: &Value) {
        self.0.lock().decrement(amount);
    }

    pub fn multiply(&self, factor: &Value) {
        self.0.lock().multiply(factor);
    }

    pub fn divide(&self, divisor: &Value) {
        self.0.lock().divide(divisor);
    }

    /// Whether both handles point at the same underlying value.
    #[inline]
    pub fn ptr_eq(&self, other: &Calculated) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Calculated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Calculated({:?})", &**self.0.lock())
    }
}
