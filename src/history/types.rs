use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::QuizResult;

pub const HISTORY_VERSION: u32 = 1;

/// Locally stored record of quiz results and internship link clicks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryState {
    pub version: u32,
    #[serde(default)]
    pub quiz_results: Vec<QuizResult>,
    #[serde(default)]
    pub internship_clicks: Vec<InternshipClick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipClick {
    pub key: String,
    pub title: String,
    pub clicked_at: DateTime<Utc>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `item`, then drop the oldest entries so at most `limit` remain.
fn push_bounded<T>(items: &mut Vec<T>, item: T, limit: usize) {
    items.push(item);
    if items.len() > limit {
        let excess = items.len() - limit;
        items.drain(..excess);
    }
}

impl HistoryState {
    /// Create a new empty history with the current version
    pub fn new() -> Self {
        Self {
            version: HISTORY_VERSION,
            quiz_results: Vec::new(),
            internship_clicks: Vec::new(),
        }
    }

    pub fn record_quiz(&mut self, result: QuizResult, limit: usize) {
        push_bounded(&mut self.quiz_results, result, limit);
    }

    pub fn record_click(&mut self, key: &str, title: &str, limit: usize) {
        let click = InternshipClick {
            key: key.to_string(),
            title: title.to_string(),
            clicked_at: Utc::now(),
        };
        push_bounded(&mut self.internship_clicks, click, limit);
    }

    /// Most recent quiz result, if any
    pub fn last_quiz(&self) -> Option<&QuizResult> {
        self.quiz_results.last()
    }

    /// Up to `limit` quiz results, newest first
    pub fn recent_quizzes(&self, limit: usize) -> impl Iterator<Item = &QuizResult> {
        self.quiz_results.iter().rev().take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Category, Tally};

    fn sample_result(category: Category, percent: u32) -> QuizResult {
        QuizResult {
            category,
            tally: Tally::new(1, 1, 1),
            completion_percent: percent,
            answers: vec![1, 2, 3, 0, 0, 0, 0, 0, 0],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_new_state_empty() {
        let state = HistoryState::new();
        assert_eq!(state.version, 1);
        assert!(state.quiz_results.is_empty());
        assert!(state.internship_clicks.is_empty());
        assert!(state.last_quiz().is_none());
    }

    #[test]
    fn test_record_quiz_evicts_oldest() {
        let mut state = HistoryState::new();
        for percent in [10, 20, 30, 40] {
            state.record_quiz(sample_result(Category::Science, percent), 3);
        }
        let percents: Vec<u32> = state
            .quiz_results
            .iter()
            .map(|r| r.completion_percent)
            .collect();
        assert_eq!(percents, vec![20, 30, 40]);
        assert_eq!(state.last_quiz().unwrap().completion_percent, 40);
    }

    #[test]
    fn test_record_click_evicts_oldest() {
        let mut state = HistoryState::new();
        state.record_click("cuny", "CUNY", 2);
        state.record_click("metro", "Metro", 2);
        state.record_click("microsoft", "Microsoft", 2);
        let keys: Vec<&str> = state
            .internship_clicks
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["metro", "microsoft"]);
    }

    #[test]
    fn test_recent_quizzes_newest_first() {
        let mut state = HistoryState::new();
        state.record_quiz(sample_result(Category::Science, 10), 10);
        state.record_quiz(sample_result(Category::Technology, 20), 10);
        state.record_quiz(sample_result(Category::Mathematics, 30), 10);

        let recent: Vec<Category> = state.recent_quizzes(2).map(|r| r.category).collect();
        assert_eq!(recent, vec![Category::Mathematics, Category::Technology]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let state: HistoryState = serde_json::from_str(r#"{"version": 1}"#).unwrap();
        assert!(state.quiz_results.is_empty());
        assert!(state.internship_clicks.is_empty());
    }
}
