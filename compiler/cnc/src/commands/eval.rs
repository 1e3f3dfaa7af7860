//! The `eval` command: evaluate one `lhs op rhs` expression.

use cn_eval::{evaluate_expression, Outcome};
use cn_fmt::{value_to_text, FormatConfig};

use crate::CommandError;

/// Evaluate an expression and render the outcome.
///
/// A comparison renders as `true`/`false`; an assignment renders the new
/// value in notation syntax.
pub fn eval_expression(text: &str, config: &FormatConfig) -> Result<String, CommandError> {
    match evaluate_expression(text) {
        Outcome::Condition(result) => Ok(result.to_string()),
        Outcome::Assigned(value) => Ok(value_to_text(&value, config)),
        Outcome::Ignored => Err(CommandError::Usage(format!(
            "no comparison or assignment operator in '{text}'"
        ))),
    }
}
