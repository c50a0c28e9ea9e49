//! Parser configuration.
//!
//! Recursion depth grows with input nesting, so adversarial input such as
//! `[[[[...` can exhaust the stack. [`Limits`] caps it.

/// Default maximum nesting depth for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of arrays and objects. The outermost container
    /// is depth 1; scalars do not count.
    pub max_depth: usize,
}

impl Limits {
    /// Limits with a specific maximum nesting depth.
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// No depth limit; nesting is bounded only by the stack.
    pub const fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}
