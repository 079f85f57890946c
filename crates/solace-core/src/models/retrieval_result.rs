use serde::{Deserialize, Serialize};

use crate::models::Document;
use crate::topic::Topic;

/// Ranked documents handed to the generation stage.
///
/// Ordered by descending (possibly boosted) score, at most `top_k` long,
/// no duplicate ids. Empty means "no relevant documents", not a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub documents: Vec<Document>,
    /// Topic inferred from the query, if any.
    pub query_topic: Option<Topic>,
    /// Size of the candidate pool the reranker worked from.
    pub candidates_examined: usize,
}

impl RetrievalResult {
    pub fn empty(query_topic: Option<Topic>) -> Self {
        Self {
            documents: Vec::new(),
            query_topic,
            candidates_examined: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.documents.iter().map(|d| d.score).collect()
    }

    pub fn topics(&self) -> Vec<Option<Topic>> {
        self.documents.iter().map(|d| d.topic).collect()
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }

    /// Render the documents as numbered context passages for the generator.
    ///
    /// Each passage is headed by its rank and source (when known).
    pub fn context_block(&self) -> String {
        self.documents
            .iter()
            .enumerate()
            .map(|(i, doc)| match doc.source() {
                Some(source) => format!("[{}] ({}) {}", i + 1, source, doc.content.trim()),
                None => format!("[{}] {}", i + 1, doc.content.trim()),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
