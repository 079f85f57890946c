//! Topic classification from query text via an ordered regex table.

use std::sync::LazyLock;

use regex::Regex;
use solace_core::config::TopicConfig;
use solace_core::errors::ConfigError;
use solace_core::topic::Topic;

#[derive(Clone)]
struct CompiledRule {
    topic: Topic,
    patterns: Vec<Regex>,
}

/// Ordered `(topic, patterns)` table. The first rule with any matching
/// pattern decides the topic.
///
/// Patterns are matched against the lower-cased query. The `regex` crate
/// runs in linear time, so arbitrary user text cannot cause blowup.
#[derive(Clone)]
pub struct TopicClassifier {
    rules: Vec<CompiledRule>,
}

static DEFAULT_CLASSIFIER: LazyLock<TopicClassifier> = LazyLock::new(|| {
    let config = TopicConfig::default();
    let rules = config
        .rules
        .iter()
        .map(|rule| CompiledRule {
            topic: rule.topic,
            patterns: rule
                .patterns
                .iter()
                .filter_map(|p| Regex::new(p).ok())
                .collect(),
        })
        .collect();
    TopicClassifier { rules }
});

impl TopicClassifier {
    /// Compile a topic table. Any invalid regex is a configuration error.
    pub fn from_config(config: &TopicConfig) -> Result<Self, ConfigError> {
        let mut rules = Vec::with_capacity(config.rules.len());
        for rule in &config.rules {
            let mut patterns = Vec::with_capacity(rule.patterns.len());
            for pattern in &rule.patterns {
                let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                    topic: rule.topic.to_string(),
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;
                patterns.push(regex);
            }
            rules.push(CompiledRule {
                topic: rule.topic,
                patterns,
            });
        }
        Ok(Self { rules })
    }

    /// The built-in table, compiled once per process.
    pub fn builtin() -> &'static TopicClassifier {
        &DEFAULT_CLASSIFIER
    }

    /// Infer the topic of `query`, or `None` when nothing matches.
    pub fn infer(&self, query: &str) -> Option<Topic> {
        if query.trim().is_empty() {
            return None;
        }
        let lowered = query.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.patterns.iter().any(|re| re.is_match(&lowered)))
            .map(|rule| rule.topic)
    }

    /// Topics in priority order.
    pub fn topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.rules.iter().map(|r| r.topic)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Infer a query topic with the built-in table.
pub fn infer_topic(query: &str) -> Option<Topic> {
    TopicClassifier::builtin().infer(query)
}
