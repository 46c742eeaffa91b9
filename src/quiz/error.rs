use thiserror::Error;

/// Quiz engine errors. All of these are recoverable by asking the user
/// for more or different answers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Please answer the questions!")]
    NoAnswers,

    #[error("Only {percent}% of the questions were answered")]
    LowCompletion { percent: u32 },

    #[error("Question {question}: selection {index} is not a valid option (expected 0-3)")]
    InvalidSelection { question: usize, index: u8 },

    #[error("Expected at most {expected} answers, got {got}")]
    TooManyAnswers { expected: usize, got: usize },
}

impl QuizError {
    /// Whether the user can recover by answering more questions
    pub fn needs_more_answers(&self) -> bool {
        matches!(self, QuizError::NoAnswers | QuizError::LowCompletion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_answers_display() {
        assert_eq!(QuizError::NoAnswers.to_string(), "Please answer the questions!");
    }

    #[test]
    fn test_needs_more_answers() {
        assert!(QuizError::NoAnswers.needs_more_answers());
        assert!(QuizError::LowCompletion { percent: 33 }.needs_more_answers());
        assert!(!QuizError::InvalidSelection { question: 1, index: 7 }.needs_more_answers());
        assert!(!QuizError::TooManyAnswers { expected: 9, got: 10 }.needs_more_answers());
    }
}
