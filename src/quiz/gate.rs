use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

use super::engine::{resolve, score, AnswerSet, QuizResult};
use super::error::QuizError;

/// Default share of questions that must be answered before a result is
/// given without asking.
pub const DEFAULT_CONFIRM_THRESHOLD: f64 = 0.70;

/// Decision on whether a partially answered quiz may be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    ConfirmRequired { percent: u32 },
}

/// Check the completion ratio against the confirmation threshold.
pub fn gate_on_completion(completion_ratio: f64, threshold: f64) -> Gate {
    if completion_ratio < threshold {
        Gate::ConfirmRequired {
            percent: (completion_ratio * 100.0).round() as u32,
        }
    } else {
        Gate::Proceed
    }
}

/// Asks the user whether to continue with a low-completion quiz.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Always answers the same way (`--yes`, or non-interactive input)
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// Asks on stdout and reads a y/N answer from stdin.
#[derive(Debug, Default)]
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("{} [y/N]: ", prompt);
        std::io::stdout()
            .flush()
            .context("Failed to flush stdout")?;
        let mut input = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read input")?;
        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Result<bool>,
{
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self(prompt)
    }
}

/// Message shown when asking to continue a low-completion quiz
pub fn confirmation_prompt(percent: u32) -> String {
    format!(
        "You've only answered {}% of the questions. Would you like to continue anyway?",
        percent
    )
}

/// Pass the gate, asking for confirmation when required.
/// Declining yields `LowCompletion`.
pub fn ensure_proceed(gate: Gate, confirm: &mut dyn Confirm) -> Result<(), GateError> {
    match gate {
        Gate::Proceed => Ok(()),
        Gate::ConfirmRequired { percent } => {
            if confirm.confirm(&confirmation_prompt(percent))? {
                Ok(())
            } else {
                Err(GateError::Quiz(QuizError::LowCompletion { percent }))
            }
        }
    }
}

/// Failure while passing the completion gate
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Prompt(#[from] anyhow::Error),
}

/// Outcome of a full quiz evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum QuizOutcome {
    Recommended(QuizResult),
    /// The user declined to continue with a partially answered quiz
    NeedsMoreAnswers {
        percent: u32,
        unanswered: Vec<usize>,
    },
}

/// Score, gate, and resolve a set of answers.
///
/// `NoAnswers` is returned as an error; a declined confirmation is returned
/// as `QuizOutcome::NeedsMoreAnswers`.
pub fn evaluate(
    answers: &AnswerSet,
    threshold: f64,
    confirm: &mut dyn Confirm,
) -> Result<QuizOutcome, GateError> {
    let scored = score(answers)?;

    match ensure_proceed(gate_on_completion(scored.completion_ratio, threshold), confirm) {
        Ok(()) => {}
        Err(GateError::Quiz(QuizError::LowCompletion { percent })) => {
            info!("User declined to continue at {}% completion", percent);
            return Ok(QuizOutcome::NeedsMoreAnswers {
                percent,
                unanswered: answers.unanswered_questions(),
            });
        }
        Err(e) => return Err(e),
    }

    let category = resolve(&scored.tally);
    info!("Quiz resolved to {} ({})", category, category.display_name());
    Ok(QuizOutcome::Recommended(QuizResult::new(
        answers, &scored, category,
    )))
}
