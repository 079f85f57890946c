use std::collections::HashSet;

use solace_core::models::Document;

/// Drop repeated ids, keeping the first occurrence. Order is preserved.
pub fn deduplicate(candidates: Vec<Document>) -> Vec<Document> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|doc| seen.insert(doc.id.clone()))
        .collect()
}
