/// Solace system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Metadata key holding the topic label of a stored chunk.
pub const METADATA_TOPIC_KEY: &str = "topic";

/// Metadata key holding the source filename of a stored chunk.
pub const METADATA_SOURCE_KEY: &str = "source";

/// Metadata key holding the chunk position within its source document.
pub const METADATA_CHUNK_INDEX_KEY: &str = "chunk_index";

/// Batch size used when loading chunks into a vector index.
pub const INSERT_BATCH_SIZE: usize = 100;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "SOLACE_";
