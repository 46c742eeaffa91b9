use serde::{Deserialize, Serialize};

use crate::quiz::QuizConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub quiz: Option<QuizConfig>,
    #[serde(default)]
    pub history: Option<HistoryConfig>,
    #[serde(default)]
    pub site: Option<SiteConfig>,
}

impl Config {
    pub fn quiz_threshold(&self) -> f64 {
        self.quiz.clone().unwrap_or_default().effective_threshold()
    }

    pub fn history_limits(&self) -> (usize, usize) {
        let history = self.history.clone().unwrap_or_default();
        (
            history.quiz_limit.unwrap_or(DEFAULT_QUIZ_LIMIT),
            history.click_limit.unwrap_or(DEFAULT_CLICK_LIMIT),
        )
    }

    pub fn base_url(&self) -> Option<&str> {
        self.site.as_ref().and_then(|s| s.base_url.as_deref())
    }
}

pub const DEFAULT_QUIZ_LIMIT: usize = 50;
pub const DEFAULT_CLICK_LIMIT: usize = 100;

/// Caps on the interaction history; the oldest entries are dropped first.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    #[serde(default)]
    pub quiz_limit: Option<usize>,
    #[serde(default)]
    pub click_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Prefix for career track pages, e.g. "https://example.org/compass"
    #[serde(default)]
    pub base_url: Option<String>,
}
