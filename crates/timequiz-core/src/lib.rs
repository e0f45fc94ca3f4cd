//! timequiz-core — Question loading and the timed quiz loop.
//!
//! This crate defines the question model, the CSV loader, and the runner that
//! races each pending answer against one session-wide deadline.

pub mod console;
pub mod engine;
pub mod error;
pub mod mock;
pub mod model;
pub mod parser;
pub mod traits;

pub use engine::{QuizRunner, QuizSession, DEFAULT_TIME_LIMIT};
pub use error::QuizError;
pub use model::{QuestionAnswer, QuizOutcome, SessionEnd};
