//! The timed quiz loop.
//!
//! One deadline is fixed when the session starts and every question races its
//! pending answer against that same instant, so time spent on early questions
//! is gone for later ones.

use std::time::Duration;

use tokio::time::Instant;

use crate::model::{QuestionAnswer, QuizOutcome, SessionEnd, SessionState};
use crate::traits::{AnswerSource, QuizReporter};

/// Default total time budget for a quiz.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Stand-in deadline offset for budgets too large to add to the clock.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Transient state of one run of the quiz loop.
#[derive(Debug, Clone)]
pub struct QuizSession {
    deadline: Instant,
    correct: usize,
    asked: usize,
    total: usize,
    state: SessionState,
}

impl QuizSession {
    /// Create a session that has not started yet.
    pub fn new(total: usize) -> Self {
        Self {
            deadline: Instant::now(),
            correct: 0,
            asked: 0,
            total,
            state: SessionState::NotStarted,
        }
    }

    /// Fix the deadline and move to `Running`. Only the first call has any
    /// effect; the deadline is never extended.
    pub fn start(&mut self, time_budget: Duration) {
        if self.state != SessionState::NotStarted {
            return;
        }
        let now = Instant::now();
        self.deadline = now
            .checked_add(time_budget)
            .unwrap_or_else(|| now + FAR_FUTURE);
        self.state = SessionState::Running;
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_past_deadline(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// A prompt has been shown.
    fn record_prompt(&mut self) {
        self.asked += 1;
    }

    /// Score an answer to the question currently on screen.
    fn record_answer(&mut self, question: &QuestionAnswer, answer: &str) -> bool {
        let correct = question.is_correct(answer);
        if correct {
            self.correct += 1;
        }
        correct
    }

    fn expire(&mut self) {
        self.state = SessionState::Expired;
    }

    fn complete(&mut self) {
        self.state = SessionState::Completed;
    }

    fn outcome(&self) -> QuizOutcome {
        let end = match self.state {
            SessionState::Expired => SessionEnd::Expired,
            _ => SessionEnd::Completed,
        };
        QuizOutcome {
            correct: self.correct,
            asked: self.asked,
            total: self.total,
            end,
        }
    }
}

/// Drives a quiz against a single global deadline.
#[derive(Debug, Clone)]
pub struct QuizRunner {
    time_budget: Duration,
}

impl Default for QuizRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT)
    }
}

impl QuizRunner {
    pub fn new(time_budget: Duration) -> Self {
        Self { time_budget }
    }

    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }

    /// Ask every question in order until they run out or the deadline fires.
    ///
    /// Each pending answer is raced against the deadline with an unbiased
    /// `select!`. When the deadline wins the pending read is dropped, not
    /// awaited.
    pub async fn run(
        &self,
        questions: &[QuestionAnswer],
        answers: &mut dyn AnswerSource,
        reporter: &mut dyn QuizReporter,
    ) -> QuizOutcome {
        let mut session = QuizSession::new(questions.len());
        session.start(self.time_budget);
        let deadline = session.deadline();

        tracing::info!(
            questions = questions.len(),
            budget_secs = self.time_budget.as_secs_f64(),
            "quiz started"
        );

        for (index, question) in questions.iter().enumerate() {
            if session.is_past_deadline() {
                session.expire();
                break;
            }

            let number = index + 1;
            reporter.on_question(number, question);
            session.record_prompt();

            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => {
                    tracing::debug!(question = number, "deadline reached while waiting for answer");
                    session.expire();
                    break;
                }
                answer = answers.next_answer() => {
                    let correct = session.record_answer(question, &answer);
                    tracing::debug!(question = number, correct, "answer received");
                }
            }
        }

        if session.state() == SessionState::Running {
            session.complete();
        }

        let outcome = session.outcome();
        tracing::info!(
            correct = outcome.correct,
            asked = outcome.asked,
            total = outcome.total,
            end = %outcome.end,
            "quiz finished"
        );
        reporter.on_finish(&outcome);
        outcome
    }
}
