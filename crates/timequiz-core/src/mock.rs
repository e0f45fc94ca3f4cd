//! Scripted answer source for testing.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::AnswerSource;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum ScriptedAnswer {
    /// Reply after `delay` of (tokio) time.
    Reply { delay: Duration, text: String },
    /// Never reply; the request stays pending until it is dropped.
    Never,
}

impl ScriptedAnswer {
    pub fn immediate(text: impl Into<String>) -> Self {
        Self::delayed(Duration::ZERO, text)
    }

    pub fn delayed(delay: Duration, text: impl Into<String>) -> Self {
        ScriptedAnswer::Reply {
            delay,
            text: text.into(),
        }
    }
}

/// An answer source that plays back a fixed script.
///
/// Once the script runs out every request resolves to an empty answer, like
/// a console at end of input.
pub struct ScriptedAnswers {
    script: VecDeque<ScriptedAnswer>,
    requests: usize,
}

impl ScriptedAnswers {
    pub fn new(script: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            script: script.into_iter().collect(),
            requests: 0,
        }
    }

    /// Script that answers every request instantly.
    pub fn immediate<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(answers.into_iter().map(ScriptedAnswer::immediate))
    }

    /// Number of answers requested so far.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_answer(&mut self) -> String {
        self.requests += 1;
        match self.script.pop_front() {
            Some(ScriptedAnswer::Reply { delay, text }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                text
            }
            Some(ScriptedAnswer::Never) => std::future::pending::<String>().await,
            None => String::new(),
        }
    }
}
