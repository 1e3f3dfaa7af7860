//! CN Fmt - values and declarations back to notation text.
//!
//! The serializer is the left inverse of `cn_parse`: for every value except
//! the two documented lossy cases, parsing the output reproduces the value.
//!
//! # Lossy Cases
//!
//! - Strings are not escaped. A string containing `"` is wrapped in single
//!   quotes, so a string containing both quote characters cannot round-trip.
//! - Colors are written as `#RRGGBB`, dropping alpha, unless
//!   [`FormatConfig::emit_alpha`] is set.
//!
//! # Formatting Context
//!
//! Every entry point takes a [`FormatConfig`] by reference. There is no
//! ambient formatting state, so concurrent callers with different settings
//! cannot interfere.

mod config;
mod declaration;
mod value;

pub use config::{FormatConfig, Layout, INDENT_WIDTH, MAX_LINE_WIDTH};
pub use declaration::declaration_to_text;
pub use value::{value_to_text, write_value};
