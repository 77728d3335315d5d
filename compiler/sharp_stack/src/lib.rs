//! Stack growth guard for recursive parsing.
//!
//! The pattern and expression grammars recurse into each other for every
//! nested bracket, combinator and operand. The parser's own nesting limit
//! bounds the depth; this guard makes sure the native stack can hold that
//! depth on any thread, including small rayon worker stacks.
//!
//! Native targets grow the stack with `stacker` when less than
//! [`RED_ZONE`] bytes remain. WASM calls through directly.

/// Grow when less than this much stack remains (100KB).
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
pub const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
