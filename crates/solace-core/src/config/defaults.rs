// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.4;
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 3;
pub const DEFAULT_TOPIC_BOOST_FACTOR: f64 = 0.15;
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 10_000;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashing";
pub const DEFAULT_EMBEDDING_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_EMBEDDING_CACHE_ENABLED: bool = true;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 8_000;

// --- Vector store ---
pub const DEFAULT_VECTOR_BACKEND: &str = "memory";
pub const DEFAULT_MATCH_FUNCTION: &str = "match_therapy_chunks";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const DEFAULT_QUERY_LOG_CAPACITY: usize = 10_000;

// --- Topics (declaration order is match priority) ---
pub const DEFAULT_DEPRESSION_PATTERNS: &[&str] = &[
    r"\b(depress(ed|ion|ive)?|sad(ness)?|hopeless(ness)?|suicid(al|e)?)\b",
    r"\bfeeling down\b",
    r"\bno motivation\b",
];
pub const DEFAULT_ANXIETY_PATTERNS: &[&str] = &[
    r"\b(anxious|anxiety|anxieties|panic|worried|worry(ing)?)\b",
    r"\bpanic attacks?\b",
    r"\bfeeling nervous\b",
];
pub const DEFAULT_STRESS_PATTERNS: &[&str] = &[
    r"\b(stress(ed|ful)?|overwhelm(ed|ing)?|pressure|tense|tension)\b",
    r"\bstressed out\b",
    r"\btoo much\b.*\b(work|responsibilities)\b",
];
pub const DEFAULT_BREATHING_PATTERNS: &[&str] = &[
    r"\b(breath(e|ing)?|respiratory)\b",
    r"\bbreathing (exercise|technique)s?\b",
    r"\bcalm(ing)? breath\b",
];
pub const DEFAULT_CBT_PATTERNS: &[&str] = &[
    r"\b(cbt|cognitive behavioral|thought patterns?|negative thoughts?)\b",
    r"\bchanging thoughts\b",
];
