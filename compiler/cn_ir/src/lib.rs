//! CN IR - data model for Component Notation.
//!
//! Component Notation describes trees of named declarations, each carrying an
//! ordered list of typed key/value members and an ordered list of nested
//! child declarations:
//!
//! ```text
//! Panel(width=120, tint=#FF8800, visible)[Label(text="Hello"), Spacer]
//! ```
//!
//! This crate holds the types shared by the parser, the serializer and the
//! evaluation engines:
//!
//! - [`Value`]: closed tagged union of every literal the notation can express,
//!   plus the [`Calculated`] extension point for host-computed values
//! - [`Declaration`] / [`Member`]: the parsed tree
//! - [`Operator`]: relational and assignment operators understood by the
//!   evaluation layer
//!
//! Nothing here parses or formats text; see `cn_parse` and `cn_fmt`.

mod declaration;
mod operator;
mod value;

pub use declaration::{Declaration, Member, Walk};
pub use operator::Operator;
pub use value::{Calculated, CalculatedValue, Color, Keyword, TypeTag, Value};
