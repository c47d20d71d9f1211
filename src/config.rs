//! Minimization configuration (ambient — §5, §4.11)
//!
//! Mirrors the teacher's `EspressoConfig`: a small, `Default`-able struct of
//! tunables threaded through the minimization entry points rather than a pile
//! of separate function arguments.

/// Recursion depth bound used by [`crate::decision::is_tautology`] and
/// [`crate::complement::complement_by_cofactor`] when a caller does not
/// supply their own via [`MinimizeConfig`].
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 2000;

/// Tunables for the minimization pipeline ([`crate::minimize::Minimizable`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizeConfig {
    /// Override the automatic unate/binate decision for whether
    /// [`crate::sharp::subtract`] should run multi-cube containment on every
    /// inner iteration (§4.7 "Policy"). `None` lets the subtract step decide
    /// for itself from the subtrahend's unate/binate classification.
    pub force_mcc: Option<bool>,
    /// Recursion depth bound for tautology and cofactor-complement
    /// decision procedures.
    pub max_recursion_depth: usize,
    /// Seed for the random-tautology generator (§4.12), threaded through
    /// explicitly so regression tests are reproducible.
    pub seed: Option<u64>,
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        MinimizeConfig {
            force_mcc: None,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            seed: None,
        }
    }
}
