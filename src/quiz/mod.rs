pub mod category;
pub mod config;
pub mod engine;
pub mod error;
pub mod gate;
pub mod input;
pub mod validation;

pub use category::Category;
pub use config::QuizConfig;
pub use engine::{resolve, score, AnswerSet, QuizResult, ScoreResult, Tally, QUESTION_COUNT};
pub use error::QuizError;
pub use gate::{
    evaluate, gate_on_completion, Confirm, FixedConfirm, Gate, GateError, PromptConfirm,
    QuizOutcome, DEFAULT_CONFIRM_THRESHOLD,
};
pub use input::{parse_selections, prompt_answers};
pub use validation::validate_config;
