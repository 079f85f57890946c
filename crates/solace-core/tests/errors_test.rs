use solace_core::errors::*;

#[test]
fn retrieval_error_converts_to_solace_error() {
    let err: SolaceError = RetrievalError::EmbeddingUnavailable {
        reason: "provider down".into(),
    }
    .into();
    assert!(matches!(err, SolaceError::RetrievalError(_)));
    assert!(err.is_retrieval_unavailable());
    assert!(err.to_string().contains("provider down"));
}

#[test]
fn cancelled_is_not_unavailable() {
    let err: SolaceError = RetrievalError::Cancelled.into();
    assert!(!err.is_retrieval_unavailable());
    assert_eq!(RetrievalError::Cancelled.kind(), "cancelled");
}

#[test]
fn embedding_error_converts_to_solace_error() {
    let emb_err = EmbeddingError::DimensionMismatch {
        expected: 384,
        actual: 1536,
    };
    let msg = emb_err.to_string();
    assert!(msg.contains("384"));
    assert!(msg.contains("1536"));
    let err: SolaceError = emb_err.into();
    assert!(matches!(err, SolaceError::EmbeddingError(_)));
    assert!(!err.is_retrieval_unavailable());
}

#[test]
fn search_error_converts_to_solace_error() {
    let err: SolaceError = SearchError::Timeout {
        backend: "supabase".into(),
        timeout_ms: 500,
    }
    .into();
    assert!(matches!(err, SolaceError::SearchError(_)));
    assert!(err.to_string().contains("500ms"));
}

#[test]
fn config_error_carries_field() {
    let err = ConfigError::ValidationFailed {
        field: "retrieval.top_k".into(),
        message: "must be at least 1".into(),
    };
    assert!(err.to_string().contains("retrieval.top_k"));
    let err: SolaceError = err.into();
    assert!(matches!(err, SolaceError::ConfigError(_)));
}

#[test]
fn invalid_pattern_carries_topic_and_pattern() {
    let err = ConfigError::InvalidPattern {
        topic: "anxiety".into(),
        pattern: "(unclosed".into(),
        reason: "unclosed group".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("anxiety"));
    assert!(msg.contains("(unclosed"));
}

#[test]
fn serialization_error_converts_to_solace_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: SolaceError = json_err.into();
    assert!(matches!(err, SolaceError::SerializationError(_)));
}
