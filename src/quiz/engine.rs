use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::category::Category;
use super::error::QuizError;

/// Number of questions in the assessment
pub const QUESTION_COUNT: usize = 9;

/// The user's answers, one slot per question. `None` means unanswered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    slots: [Option<Category>; QUESTION_COUNT],
}

impl AnswerSet {
    /// An answer set with every question unanswered
    pub fn empty() -> Self {
        Self {
            slots: [None; QUESTION_COUNT],
        }
    }

    /// Build an answer set from raw selection indices (0 = unanswered, 1..=3 = category).
    ///
    /// Each element is the selection read from one question's input control; `None`
    /// means the control itself could not be found. Missing controls, including any
    /// trailing questions beyond the end of `selections`, count as unanswered and are
    /// logged as warnings.
    pub fn from_selections(selections: &[Option<u8>]) -> Result<Self, QuizError> {
        if selections.len() > QUESTION_COUNT {
            return Err(QuizError::TooManyAnswers {
                expected: QUESTION_COUNT,
                got: selections.len(),
            });
        }

        let mut slots = [None; QUESTION_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            let question = i + 1;
            match selections.get(i).copied().flatten() {
                None => {
                    warn!("Question Q{} not found, treating as unanswered", question);
                }
                Some(0) => {}
                Some(index) => {
                    *slot = Some(
                        Category::from_selection(index)
                            .ok_or(QuizError::InvalidSelection { question, index })?,
                    );
                }
            }
        }

        Ok(Self { slots })
    }

    /// Set or clear the answer for a 1-based question number
    pub fn set(&mut self, question: usize, answer: Option<Category>) {
        if let Some(slot) = question.checked_sub(1).and_then(|i| self.slots.get_mut(i)) {
            *slot = answer;
        }
    }

    pub fn get(&self, question: usize) -> Option<Category> {
        question
            .checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .copied()
            .flatten()
    }

    pub fn slots(&self) -> &[Option<Category>] {
        &self.slots
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// 1-based numbers of the questions still unanswered
    pub fn unanswered_questions(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Selection indices as entered, keyed by question, for history records
    pub fn selections(&self) -> Vec<u8> {
        self.slots
            .iter()
            .map(|s| s.map(Category::selection_index).unwrap_or(0))
            .collect()
    }
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Per-category answer counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    #[serde(rename = "S")]
    pub science: u32,
    #[serde(rename = "T")]
    pub technology: u32,
    #[serde(rename = "M")]
    pub mathematics: u32,
}

impl Tally {
    pub fn new(science: u32, technology: u32, mathematics: u32) -> Self {
        Self {
            science,
            technology,
            mathematics,
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Science => self.science,
            Category::Technology => self.technology,
            Category::Mathematics => self.mathematics,
        }
    }

    fn increment(&mut self, category: Category) {
        match category {
            Category::Science => self.science += 1,
            Category::Technology => self.technology += 1,
            Category::Mathematics => self.mathematics += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.science + self.technology + self.mathematics
    }

    /// Largest single count, used to scale breakdown bars
    pub fn max(&self) -> u32 {
        self.science.max(self.technology).max(self.mathematics)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub tally: Tally,
    pub answered: usize,
    pub completion_ratio: f64,
}

impl ScoreResult {
    /// Completion as a whole percentage, rounded the way it is shown to the user
    pub fn completion_percent(&self) -> u32 {
        (self.completion_ratio * 100.0).round() as u32
    }
}

/// Tally the answered questions.
///
/// Fails with `NoAnswers` when nothing has been answered.
pub fn score(answers: &AnswerSet) -> Result<ScoreResult, QuizError> {
    let tally = answers
        .slots()
        .iter()
        .flatten()
        .fold(Tally::default(), |mut tally, category| {
            tally.increment(*category);
            tally
        });

    let answered = answers.answered_count();
    if answered == 0 {
        return Err(QuizError::NoAnswers);
    }

    let completion_ratio = answered as f64 / QUESTION_COUNT as f64;
    debug!(
        "Scored {}/{} answers: S={} T={} M={}",
        answered, QUESTION_COUNT, tally.science, tally.technology, tally.mathematics
    );

    Ok(ScoreResult {
        tally,
        answered,
        completion_ratio,
    })
}

/// Pick the recommended category from a tally.
///
/// A strict maximum wins. Two-way ties at the top go S/T -> T, S/M -> S,
/// T/M -> T. Everything else (three-way tie, all zero) falls back to T.
pub fn resolve(tally: &Tally) -> Category {
    let (s, t, m) = (tally.science, tally.technology, tally.mathematics);

    if s > t && s > m {
        Category::Science
    } else if m > s && m > t {
        Category::Mathematics
    } else if s == m && s > t {
        Category::Science
    } else {
        // T strictly ahead, T tied for the lead, or no leader at all
        Category::Technology
    }
}

/// A finished quiz: the recommendation plus what it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub category: Category,
    pub tally: Tally,
    pub completion_percent: u32,
    /// Selection index per question (0 = unanswered)
    pub answers: Vec<u8>,
    pub timestamp: DateTime<Utc>,
}

impl QuizResult {
    pub fn new(answers: &AnswerSet, score: &ScoreResult, category: Category) -> Self {
        Self {
            category,
            tally: score.tally,
            completion_percent: score.completion_percent(),
            answers: answers.selections(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(selections: &[u8]) -> AnswerSet {
        let raw: Vec<Option<u8>> = selections.iter().map(|s| Some(*s)).collect();
        AnswerSet::from_selections(&raw).unwrap()
    }

    #[test]
    fn test_score_partial_answers() {
        let set = answers(&[2, 2, 1, 0, 0, 0, 0, 0, 0]);
        let result = score(&set).unwrap();
        assert_eq!(result.tally, Tally::new(2, 0, 1));
        assert_eq!(result.answered, 3);
        assert!((result.completion_ratio - 3.0 / 9.0).abs() < 1e-9);
        assert_eq!(result.completion_percent(), 33);
    }

    #[test]
    fn test_score_all_unanswered_is_no_answers() {
        let set = answers(&[0; QUESTION_COUNT]);
        assert_eq!(score(&set), Err(QuizError::NoAnswers));
        assert_eq!(score(&AnswerSet::empty()), Err(QuizError::NoAnswers));
    }

    #[test]
    fn test_score_full_answers() {
        let set = answers(&[1, 2, 3, 3, 3, 2, 1, 3, 2]);
        let result = score(&set).unwrap();
        assert_eq!(result.tally, Tally::new(3, 4, 2));
        assert_eq!(result.completion_percent(), 100);
    }

    #[test]
    fn test_score_is_idempotent() {
        let set = answers(&[3, 1, 2, 0, 3, 0, 1, 0, 2]);
        let first = score(&set).unwrap();
        let second = score(&set).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tally_sums_to_answered() {
        let set = answers(&[3, 1, 2, 0, 3, 0, 1, 0, 2]);
        let result = score(&set).unwrap();
        assert_eq!(result.tally.total() as usize, result.answered);
    }

    #[test]
    fn test_missing_controls_are_unanswered() {
        let set = AnswerSet::from_selections(&[Some(3), None, Some(2)]).unwrap();
        assert_eq!(set.answered_count(), 2);
        assert_eq!(set.get(1), Some(Category::Technology));
        assert_eq!(set.get(2), None);
        assert_eq!(set.get(3), Some(Category::Science));
        assert_eq!(set.unanswered_questions(), vec![2, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_invalid_selection_rejected() {
        let result = AnswerSet::from_selections(&[Some(1), Some(4)]);
        assert_eq!(
            result,
            Err(QuizError::InvalidSelection { question: 2, index: 4 })
        );
    }

    #[test]
    fn test_too_many_answers_rejected() {
        let raw = vec![Some(1); QUESTION_COUNT + 1];
        assert_eq!(
            AnswerSet::from_selections(&raw),
            Err(QuizError::TooManyAnswers { expected: 9, got: 10 })
        );
    }

    #[test]
    fn test_set_and_selections() {
        let mut set = AnswerSet::empty();
        set.set(1, Some(Category::Mathematics));
        set.set(9, Some(Category::Technology));
        set.set(0, Some(Category::Science)); // ignored
        set.set(10, Some(Category::Science)); // ignored
        assert_eq!(set.selections(), vec![1, 0, 0, 0, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn test_resolve_all_zero() {
        assert_eq!(resolve(&Tally::new(0, 0, 0)), Category::Technology);
    }

    #[test]
    fn test_resolve_two_way_ties() {
        assert_eq!(resolve(&Tally::new(5, 5, 0)), Category::Technology);
        assert_eq!(resolve(&Tally::new(5, 0, 5)), Category::Science);
        assert_eq!(resolve(&Tally::new(0, 5, 5)), Category::Technology);
    }

    #[test]
    fn test_resolve_strict_max() {
        assert_eq!(resolve(&Tally::new(3, 1, 1)), Category::Science);
        assert_eq!(resolve(&Tally::new(1, 3, 1)), Category::Technology);
        assert_eq!(resolve(&Tally::new(1, 1, 3)), Category::Mathematics);
    }

    #[test]
    fn test_resolve_three_way_tie() {
        assert_eq!(resolve(&Tally::new(3, 3, 3)), Category::Technology);
    }

    #[test]
    fn test_resolve_total_over_grid() {
        for s in 0..=9 {
            for t in 0..=9 {
                for m in 0..=9 {
                    let tally = Tally::new(s, t, m);
                    let winner = resolve(&tally);
                    // Winner always holds the maximum count
                    assert_eq!(tally.get(winner), tally.max(), "tally {:?}", tally);
                    // A strict maximum is always chosen
                    for other in Category::ALL {
                        if other != winner {
                            assert!(tally.get(other) <= tally.get(winner));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_quiz_result_records_answers() {
        let set = answers(&[2, 2, 1, 0, 0, 0, 0, 0, 0]);
        let scored = score(&set).unwrap();
        let result = QuizResult::new(&set, &scored, resolve(&scored.tally));
        assert_eq!(result.category, Category::Science);
        assert_eq!(result.completion_percent, 33);
        assert_eq!(result.answers, vec![2, 2, 1, 0, 0, 0, 0, 0, 0]);
    }
}
