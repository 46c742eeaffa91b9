use serde::{Deserialize, Serialize};

use super::gate::DEFAULT_CONFIRM_THRESHOLD;

/// Quiz behaviour settings.
///
/// Example YAML:
/// ```yaml
/// quiz:
///   confirm_threshold: 0.7
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    /// Completion ratio below which the user must confirm before getting a
    /// result (default: 0.7)
    #[serde(default)]
    pub confirm_threshold: Option<f64>,
}

impl QuizConfig {
    pub fn effective_threshold(&self) -> f64 {
        self.confirm_threshold.unwrap_or(DEFAULT_CONFIRM_THRESHOLD)
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            confirm_threshold: Some(DEFAULT_CONFIRM_THRESHOLD),
        }
    }
}
