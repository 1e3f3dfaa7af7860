//! Stack growth for deeply nested notation.
//!
//! The structural parser recurses once per nested child declaration and the
//! literal parser once per nested list, so hand-written or generated notation
//! with thousands of nesting levels would otherwise exhaust the thread stack.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: no-op passthrough.

/// Grow when less than this remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
///
/// Wrap every recursive step that follows nesting in the input:
///
/// ```text
/// fn parse_child(text: &str) -> Declaration {
///     ensure_sufficient_stack(|| parse_declaration(text))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
