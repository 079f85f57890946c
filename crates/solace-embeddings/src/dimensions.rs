//! Dimension checks and vector math shared by providers and indexes.

use solace_core::errors::{EmbeddingError, SolaceResult};

/// Validate that an embedding has the expected dimensions.
///
/// # Errors
/// Returns `DimensionMismatch` if dimensions don't match.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> SolaceResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}

/// L2-normalize in place. Zero vectors are left untouched.
pub fn normalize(vec: &mut [f32]) {
    let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vec.iter_mut() {
            *v /= norm;
        }
    }
}
