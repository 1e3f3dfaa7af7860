//! Typed values carried by declaration members.
//!
//! `Value` is a closed sum type: every operator/type pairing handled by the
//! evaluation engines is an exhaustive `match` over it. The single open end is
//! [`Value::Calculated`], a shared handle to a host-supplied dynamic value
//! that is resolved on demand.
//!
//! # Calculated Values
//!
//! A calculated value must be resolved (see [`Value::resolved`]) before it
//! takes part in any comparison or transform branch that is not explicitly
//! written for it.
//!
//! # Nesting
//!
//! Lists nest to any depth. `Clone`, equality and `Debug` grow the stack per
//! list level, and `Drop` flattens nested lists onto a work stack.

mod calculated;
mod color;
mod keyword;

use std::borrow::Cow;
use std::fmt;

use cn_stack::ensure_sufficient_stack;

pub use calculated::{Calculated, CalculatedValue};
pub use color::Color;
pub use keyword::Keyword;

/// A single literal value.
pub enum Value {
    /// Absent value (`null` or empty text).
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// String value (quotes stripped).
    Str(String),
    /// RGBA color.
    Color(Color),
    /// Two-component vector.
    Vec2([f64; 2]),
    /// Three-component vector.
    Vec3([f64; 3]),
    /// Four-component vector.
    Vec4([f64; 4]),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Symbolic keyword from the fixed set.
    Keyword(Keyword),
    /// Host-computed value, resolved on demand.
    Calculated(Calculated),
}

/// Discriminant of a [`Value`], used by the accelerated comparison path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Color,
    Vec2,
    Vec3,
    Vec4,
    List,
    Keyword,
    Calculated,
}

impl TypeTag {
    /// Returns true for `Int` and `Float`.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, TypeTag::Int | TypeTag::Float)
    }
}

// Factory Methods

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Wrap a host-supplied dynamic value.
    #[inline]
    pub fn calculated(value: impl CalculatedValue + 'static) -> Self {
        Value::Calculated(Calculated::new(value))
    }
}

// Value Methods

impl Value {
    /// The variant's type tag.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Str(_) => TypeTag::Str,
            Value::Color(_) => TypeTag::Color,
            Value::Vec2(_) => TypeTag::Vec2,
            Value::Vec3(_) => TypeTag::Vec3,
            Value::Vec4(_) => TypeTag::Vec4,
            Value::List(_) => TypeTag::List,
            Value::Keyword(_) => TypeTag::Keyword,
            Value::Calculated(_) => TypeTag::Calculated,
        }
    }

    /// Get the type name for diagnostics and tree dumps.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Color(_) => "color",
            Value::Vec2(_) => "vec2",
            Value::Vec3(_) => "vec3",
            Value::Vec4(_) => "vec4",
            Value::List(_) => "list",
            Value::Keyword(_) => "keyword",
            Value::Calculated(_) => "calculated",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is truthy.
    ///
    /// Numbers are truthy when strictly positive, matching how booleans are
    /// compared against numbers.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n > 0,
            Value::Float(f) => *f > 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Calculated(c) => c.resolve_concrete().is_truthy(),
            Value::Color(_)
            | Value::Vec2(_)
            | Value::Vec3(_)
            | Value::Vec4(_)
            | Value::Keyword(_) => true,
        }
    }

    /// Try to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to convert to a float. Integers widen.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integers above 2^53 lose precision, as in any numeric comparison"
    )]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert to a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Resolve a calculated value to its concrete value, borrowing any
    /// other variant unchanged.
    pub fn resolved(&self) -> Cow<'_, Value> {
        match self {
            Value::Calculated(c) => Cow::Owned(c.resolve_concrete()),
            other => Cow::Borrowed(other),
        }
    }

    /// The zero value of this value's variant.
    ///
    /// Null targets of a transform default to this before the operator is
    /// applied. Keywords have no zero and yield `Null`.
    pub fn zero_like(&self) -> Value {
        match self {
            Value::Null | Value::Keyword(_) => Value::Null,
            Value::Bool(_) => Value::Bool(false),
            Value::Int(_) => Value::Int(0),
            Value::Float(_) => Value::Float(0.0),
            Value::Str(_) => Value::Str(String::new()),
            Value::Color(_) => Value::Color(Color::TRANSPARENT),
            Value::Vec2(_) => Value::Vec2([0.0; 2]),
            Value::Vec3(_) => Value::Vec3([0.0; 3]),
            Value::Vec4(_) => Value::Vec4([0.0; 4]),
            Value::List(_) => Value::List(Vec::new()),
            Value::Calculated(c) => c.resolve_concrete().zero_like(),
        }
    }

    /// Copy this value without sharing any calculated handle.
    ///
    /// `Clone` shares calculated handles (mutations through one copy are
    /// visible through the other); `deep_clone` asks each handle for an
    /// independent copy instead.
    pub fn deep_clone(&self) -> Value {
        match self {
            Value::List(items) => ensure_sufficient_stack(|| {
                Value::List(items.iter().map(Value::deep_clone).collect())
            }),
            Value::Calculated(c) => Value::Calculated(c.deep_clone()),
            other => other.clone(),
        }
    }
}

// Trait Implementations

/// Float equality that treats two NaNs as equal so `Value` equality stays
/// reflexive for parsed literals.
#[inline]
fn float_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn components_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| float_eq(*x, *y))
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Int(n) => Value::Int(*n),
            Value::Float(f) => Value::Float(*f),
            Value::Str(s) => Value::Str(s.clone()),
            Value::Color(c) => Value::Color(*c),
            Value::Vec2(v) => Value::Vec2(*v),
            Value::Vec3(v) => Value::Vec3(*v),
            Value::Vec4(v) => Value::Vec4(*v),
            Value::List(items) => ensure_sufficient_stack(|| Value::List(items.clone())),
            Value::Keyword(k) => Value::Keyword(*k),
            Value::Calculated(c) => Value::Calculated(c.clone()),
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        let Value::List(items) = self else {
            return;
        };
        let mut pending = std::mem::take(items);
        while let Some(mut item) = pending.pop() {
            if let Value::List(inner) = &mut item {
                pending.append(inner);
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_eq(*a, *b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Color(a), Value::Color(b)) => a == b,
            (Value::Vec2(a), Value::Vec2(b)) => components_eq(a, b),
            (Value::Vec3(a), Value::Vec3(b)) => components_eq(a, b),
            (Value::Vec4(a), Value::Vec4(b)) => components_eq(a, b),
            (Value::List(a), Value::List(b)) => ensure_sufficient_stack(|| a == b),
            (Value::Keyword(a), Value::Keyword(b)) => a == b,
            (Value::Calculated(a), Value::Calculated(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Color(c) => write!(f, "Color({}, {}, {}, {})", c.r, c.g, c.b, c.a),
            Value::Vec2([x, y]) => write!(f, "Vec2({x}, {y})"),
            Value::Vec3([x, y, z]) => write!(f, "Vec3({x}, {y}, {z})"),
            Value::Vec4([x, y, z, w]) => write!(f, "Vec4({x}, {y}, {z}, {w})"),
            Value::List(items) => ensure_sufficient_stack(|| write!(f, "List({items:?})")),
            Value::Keyword(k) => write!(f, "Keyword({})", k.as_str()),
            Value::Calculated(c) => write!(f, "{c:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Value::Color(c)
    }
}

impl From<Keyword> for Value {
    fn from(k: Keyword) -> Self {
        Value::Keyword(k)
    }
}

#[cfg(test)]
mod tests;
