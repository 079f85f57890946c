//! Deterministic bag-of-words hashing embedding.
//!
//! Needs no model or network. Texts sharing vocabulary land close together,
//! which is enough for offline runs and tests. Not a semantic model.

use async_trait::async_trait;
use solace_core::errors::SolaceResult;
use solace_core::traits::IEmbeddingProvider;

use crate::dimensions::normalize;

/// Local hashing embedding provider.
///
/// Tokens are hashed into `dimensions` buckets with FNV-1a; bucket weights are
/// sublinear term frequencies, and the final vector is L2-normalized.
pub struct HashingEmbeddingProvider {
    dimensions: usize,
}

impl HashingEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Synchronous core, shared by `embed` and `embed_batch`.
    pub fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return vec;
        }

        let tokens = tokenize(text);
        if tokens.is_empty() {
            return vec;
        }

        let mut counts = vec![0u32; self.dimensions];
        for token in &tokens {
            let bucket = (hash_term(token) as usize) % self.dimensions;
            counts[bucket] += 1;
        }
        for (slot, &count) in vec.iter_mut().zip(&counts) {
            if count > 0 {
                *slot = 1.0 + (count as f32).ln();
            }
        }

        normalize(&mut vec);
        vec
    }
}

#[async_trait]
impl IEmbeddingProvider for HashingEmbeddingProvider {
    async fn embed(&self, text: &str) -> SolaceResult<Vec<f32>> {
        Ok(self.embed_sync(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> SolaceResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_sync(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }
}

/// Lower-cased alphanumeric tokens of at least two characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() >= 2)
        .map(|s| s.to_lowercase())
        .collect()
}

/// FNV-1a 64-bit.
fn hash_term(term: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in term.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
