//! Candidate pool sizing.
//!
//! The vector store is asked for more candidates than the caller wants so
//! that topic boosting can promote matching documents from just below the cut.

use solace_core::config::RetrievalConfig;

/// `top_k × candidate_multiplier`, saturating.
///
/// With a validated config (both ≥ 1) the result is always ≥ `top_k`.
pub fn candidate_count(config: &RetrievalConfig) -> usize {
    config.top_k.saturating_mul(config.candidate_multiplier)
}
