//! Query topic inference.

mod classifier;

pub use classifier::{infer_topic, TopicClassifier};
