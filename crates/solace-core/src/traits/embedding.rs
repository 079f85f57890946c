use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::SolaceResult;

/// Embedding generation provider.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of `dimensions()` floats.
    async fn embed(&self, text: &str) -> SolaceResult<Vec<f32>>;

    /// Embed a batch of texts. Defaults to one call per text.
    async fn embed_batch(&self, texts: &[String]) -> SolaceResult<Vec<Vec<f32>>> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(text).await?);
        }
        Ok(out)
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: IEmbeddingProvider + ?Sized> IEmbeddingProvider for Arc<T> {
    async fn embed(&self, text: &str) -> SolaceResult<Vec<f32>> {
        (**self).embed(text).await
    }

    async fn embed_batch(&self, texts: &[String]) -> SolaceResult<Vec<Vec<f32>>> {
        (**self).embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        (**self).dimensions()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
