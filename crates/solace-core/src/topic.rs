//! Topic vocabulary shared by documents and queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse subject-matter label from a fixed vocabulary.
///
/// Stored chunks carry one in their metadata; queries get one inferred from
/// their text. "No topic" is modelled as `Option<Topic>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Depression,
    Anxiety,
    Stress,
    Breathing,
    Cbt,
    General,
}

impl Topic {
    /// All topics, in declaration order.
    pub const ALL: [Topic; 6] = [
        Topic::Depression,
        Topic::Anxiety,
        Topic::Stress,
        Topic::Breathing,
        Topic::Cbt,
        Topic::General,
    ];

    /// Wire label used in chunk metadata and structured events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Depression => "depression",
            Topic::Anxiety => "anxiety",
            Topic::Stress => "stress",
            Topic::Breathing => "breathing",
            Topic::Cbt => "cbt",
            Topic::General => "general",
        }
    }

    /// Lenient parse for labels coming from untrusted metadata.
    ///
    /// Trims and lower-cases the label; anything outside the vocabulary
    /// (including "none"/"unknown") yields `None`.
    pub fn from_label(label: &str) -> Option<Topic> {
        label.trim().to_ascii_lowercase().parse().ok()
    }

    /// Render an optional topic the way events and logs expect it.
    pub fn label_or_none(topic: Option<Topic>) -> &'static str {
        topic.map(|t| t.as_str()).unwrap_or("none")
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label is not part of the topic vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topic label: {0}")]
pub struct UnknownTopic(pub String);

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}
