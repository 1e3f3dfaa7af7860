//! CN Parse - text to declaration trees.
//!
//! Two layers, neither backed by a tokenizer:
//!
//! - [`parse_value`]: ordered recognizer turning one literal into a [`Value`]
//! - [`parse_declaration`]: single left-to-right scan over a declaration,
//!   tracking delimiter depth and quote state, delegating member values to
//!   `parse_value` and child text to itself
//!
//! # Failure Policy
//!
//! Both entry points are best-effort decoders. Bad numbers degrade to the
//! type's zero, and unbalanced delimiters or unterminated quotes degrade the
//! tree shape instead of failing. Callers that want malformed text rejected
//! use [`parse_declaration_strict`] or [`check_declaration`].
//!
//! # Tracing
//!
//! `RUST_LOG=cn_parse=trace` logs every declaration split;
//! `RUST_LOG=cn_parse=debug` logs defects tolerated by the lenient parser.

mod declaration;
mod error;
mod literal;
mod scanner;

pub use cn_ir::{Declaration, Member, Value};
pub use declaration::{check_declaration, parse_declaration, parse_declaration_strict};
pub use error::ParseError;
pub use literal::parse_value;
pub use scanner::split_top_level;
