//! Trait definitions for the collaborators of the quiz loop.
//!
//! The runner pulls questions from a [`QuestionSource`], waits on an
//! [`AnswerSource`] for each reply, and tells a [`QuizReporter`] what to show.

use async_trait::async_trait;

use crate::error::QuizError;
use crate::model::{QuestionAnswer, QuizOutcome};

// ---------------------------------------------------------------------------
// Question source
// ---------------------------------------------------------------------------

/// Anything that can produce the ordered list of questions for a quiz.
pub trait QuestionSource {
    /// Load every question, preserving source order.
    fn load(&self) -> Result<Vec<QuestionAnswer>, QuizError>;
}

impl QuestionSource for [QuestionAnswer] {
    fn load(&self) -> Result<Vec<QuestionAnswer>, QuizError> {
        Ok(self.to_vec())
    }
}

impl QuestionSource for Vec<QuestionAnswer> {
    fn load(&self) -> Result<Vec<QuestionAnswer>, QuizError> {
        Ok(self.clone())
    }
}

// ---------------------------------------------------------------------------
// Answer source
// ---------------------------------------------------------------------------

/// Supplies one line of user input per question.
///
/// The future returned by [`AnswerSource::next_answer`] may never resolve
/// (the user walks away). The runner drops it when the deadline wins, so
/// implementations must tolerate being cancelled at any await point.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait for the next answer. An empty string stands for "no answer"
    /// (end of input, read failure) and is scored as incorrect.
    async fn next_answer(&mut self) -> String;
}

// ---------------------------------------------------------------------------
// Reporter
// ---------------------------------------------------------------------------

/// Receives everything the quiz shows to the user.
pub trait QuizReporter: Send {
    /// A question is about to be answered. `number` is 1-based.
    fn on_question(&mut self, number: usize, question: &QuestionAnswer);

    /// The session reached a terminal state.
    fn on_finish(&mut self, outcome: &QuizOutcome);
}

/// Reporter that shows nothing.
pub struct NoopReporter;

impl QuizReporter for NoopReporter {
    fn on_question(&mut self, _: usize, _: &QuestionAnswer) {}
    fn on_finish(&mut self, _: &QuizOutcome) {}
}
