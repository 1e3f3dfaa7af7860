//! CN Eval - operator semantics over Component Notation values.
//!
//! Two engines share the [`Operator`](cn_ir::Operator) set:
//!
//! - **Comparison** ([`compare`], [`compare_tagged`]): pure relational and
//!   set-membership tests. Every pairing that has no defined meaning is
//!   `false`.
//! - **Transform** ([`transform`]): assignment, arithmetic and bitwise
//!   operators producing the new value for a target slot. Every pairing that
//!   has no defined meaning returns the target unchanged.
//!
//! Neither engine fails or mutates a [`Value`](cn_ir::Value) in place. The
//! exception is a `Calculated` target, whose own mutation hooks are invoked
//! and whose handle is returned.
//!
//! [`split_expression`] and [`evaluate_expression`] apply the engines to a
//! single `lhs op rhs` text, the form used by host condition and effect
//! strings.

mod compare;
mod expression;
mod operand;
mod transform;

#[cfg(test)]
mod test_helpers;

pub use compare::compare;
pub use expression::{evaluate_expression, split_expression, Outcome};
pub use operand::{compare_tagged, Operand};
pub use transform::transform;

use cn_fmt::{value_to_text, FormatConfig};
use cn_ir::Value;

/// Serialized form used by list membership, list removal and set union.
///
/// Two values are the "same element" when they serialize identically under
/// the default format.
fn element_key(value: &Value) -> String {
    value_to_text(value, &FormatConfig::default())
}
