//! Core data model types for timequiz.
//!
//! A quiz is an ordered list of [`QuestionAnswer`] pairs; a run of the quiz
//! loop produces a [`QuizOutcome`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single question and the answer that scores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    /// Text shown to the user.
    pub prompt: String,
    /// Answer that counts as correct, compared byte-for-byte.
    pub expected: String,
}

impl QuestionAnswer {
    pub fn new(prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected: expected.into(),
        }
    }

    /// Exact, case-sensitive comparison. No normalization is applied.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.expected
    }
}

/// Lifecycle of one quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    Expired,
    Completed,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionEnd {
    /// Every question was answered before the deadline.
    Completed,
    /// The deadline fired first.
    Expired,
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEnd::Completed => write!(f, "completed"),
            SessionEnd::Expired => write!(f, "expired"),
        }
    }
}

/// Final tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    /// Answers that matched exactly.
    pub correct: usize,
    /// Prompts shown before the session ended.
    pub asked: usize,
    /// Questions available in the quiz.
    pub total: usize,
    /// Terminal state of the session.
    pub end: SessionEnd,
}

impl QuizOutcome {
    /// The one-line summary printed at the end of every session.
    pub fn summary(&self) -> String {
        format!("You scored {} out of {}", self.correct, self.asked)
    }
}
