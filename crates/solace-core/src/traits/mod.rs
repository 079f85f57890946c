mod embedding;
mod observer;
mod retriever;
mod vector_search;

pub use embedding::IEmbeddingProvider;
pub use observer::{IRetrievalObserver, NoopObserver};
pub use retriever::IRetriever;
pub use vector_search::IVectorSearch;
