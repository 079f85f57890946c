use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::topic::Topic;

/// One row of the topic pattern table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRule {
    pub topic: Topic,
    /// Regexes matched against the lower-cased query. Any match selects the topic.
    pub patterns: Vec<String>,
}

impl TopicRule {
    pub fn new(topic: Topic, patterns: &[&str]) -> Self {
        Self {
            topic,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Ordered topic pattern table. Earlier rules win when several match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    pub rules: Vec<TopicRule>,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                TopicRule::new(Topic::Depression, defaults::DEFAULT_DEPRESSION_PATTERNS),
                TopicRule::new(Topic::Anxiety, defaults::DEFAULT_ANXIETY_PATTERNS),
                TopicRule::new(Topic::Stress, defaults::DEFAULT_STRESS_PATTERNS),
                TopicRule::new(Topic::Breathing, defaults::DEFAULT_BREATHING_PATTERNS),
                TopicRule::new(Topic::Cbt, defaults::DEFAULT_CBT_PATTERNS),
            ],
        }
    }
}

impl TopicConfig {
    /// Structural checks. Regex compilation is checked when the classifier is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.rules {
            if rule.patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("topics.rules[{}].patterns", rule.topic),
                    message: "patterns must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
