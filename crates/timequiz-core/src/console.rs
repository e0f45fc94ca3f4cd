//! Console collaborators: line-based answers and a writer-backed reporter.

use std::io::{BufRead, BufReader, Stdin, Write};
use std::sync::{Arc, Mutex};
use std::thread;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::model::{QuestionAnswer, QuizOutcome};
use crate::traits::{AnswerSource, QuizReporter};

/// Reads one line per question from a shared reader.
///
/// Every request starts a short-lived reader thread that performs the
/// blocking read and hands the line back over a oneshot channel. If the
/// runner stops waiting, the thread is left to finish (or block) on its own;
/// it is detached and dies with the process.
pub struct LineAnswers<R> {
    reader: Arc<Mutex<R>>,
}

impl LineAnswers<BufReader<Stdin>> {
    /// Answers typed on standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }
}

impl<R> LineAnswers<R>
where
    R: BufRead + Send + 'static,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader: Arc::new(Mutex::new(reader)),
        }
    }

    fn spawn_read(&self) -> std::io::Result<oneshot::Receiver<String>> {
        let (tx, rx) = oneshot::channel();
        let reader = Arc::clone(&self.reader);
        thread::Builder::new()
            .name("quiz-answer".into())
            .spawn(move || {
                let answer = read_answer(&reader);
                // The receiver is gone once the deadline has won.
                let _ = tx.send(answer);
            })?;
        Ok(rx)
    }
}

#[async_trait]
impl<R> AnswerSource for LineAnswers<R>
where
    R: BufRead + Send + 'static,
{
    async fn next_answer(&mut self) -> String {
        let rx = match self.spawn_read() {
            Ok(rx) => rx,
            Err(e) => {
                tracing::warn!("failed to start answer reader: {e}");
                return String::new();
            }
        };
        rx.await.unwrap_or_default()
    }
}

fn read_answer<R: BufRead>(reader: &Mutex<R>) -> String {
    let mut guard = reader
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut line = String::new();
    if let Err(e) = guard.read_line(&mut line) {
        tracing::debug!("failed to read answer: {e}");
        return String::new();
    }
    strip_line_ending(&mut line);
    line
}

/// Remove a single trailing `\n` or `\r\n`. Nothing else is trimmed.
fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Writes prompts and the final summary to any writer.
///
/// Prompts end with `" = "` and no newline so the user types on the same
/// line; output is flushed after every write.
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("failed to write to console: {e}");
        }
    }
}

impl<W: Write + Send> QuizReporter for ConsoleReporter<W> {
    fn on_question(&mut self, number: usize, question: &QuestionAnswer) {
        self.emit(&format!("Problem #{number}: {} = ", question.prompt));
    }

    fn on_finish(&mut self, outcome: &QuizOutcome) {
        self.emit(&outcome.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use std::time::{Duration, Instant};

    use crate::engine::QuizRunner;
    use crate::model::SessionEnd;

    #[test]
    fn strip_only_the_line_terminator() {
        let mut unix = String::from("4\n");
        strip_line_ending(&mut unix);
        assert_eq!(unix, "4");

        let mut windows = String::from(" 4 \r\n");
        strip_line_ending(&mut windows);
        assert_eq!(windows, " 4 ");

        let mut bare = String::from("4");
        strip_line_ending(&mut bare);
        assert_eq!(bare, "4");
    }

    #[tokio::test]
    async fn reads_lines_in_order_then_empty_at_eof() {
        let mut answers = LineAnswers::new(Cursor::new("4\r\nsix\n"));
        assert_eq!(answers.next_answer().await, "4");
        assert_eq!(answers.next_answer().await, "six");
        assert_eq!(answers.next_answer().await, "");
        assert_eq!(answers.next_answer().await, "");
    }

    #[test]
    fn reporter_formats_prompts_and_summary() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.on_question(1, &QuestionAnswer::new("5+5", "10"));
        reporter.on_question(2, &QuestionAnswer::new("what 2+2, sir?", "4"));
        reporter.on_finish(&QuizOutcome {
            correct: 1,
            asked: 2,
            total: 2,
            end: SessionEnd::Completed,
        });
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Problem #1: 5+5 = Problem #2: what 2+2, sir? = You scored 1 out of 2"
        );
    }

    /// Input that never delivers a byte, like a terminal nobody types into.
    struct SilentInput;

    impl Read for SilentInput {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            loop {
                thread::park();
            }
        }
    }

    impl BufRead for SilentInput {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            loop {
                thread::park();
            }
        }

        fn consume(&mut self, _: usize) {}
    }

    #[tokio::test]
    async fn deadline_abandons_blocked_reader() {
        let questions = vec![
            QuestionAnswer::new("2+2", "4"),
            QuestionAnswer::new("3+3", "6"),
        ];
        let mut answers = LineAnswers::new(SilentInput);
        let mut reporter = ConsoleReporter::new(Vec::new());

        let start = Instant::now();
        let outcome = QuizRunner::new(Duration::from_millis(200))
            .run(&questions, &mut answers, &mut reporter)
            .await;
        let elapsed = start.elapsed();

        assert_eq!(outcome.end, SessionEnd::Expired);
        assert_eq!(outcome.asked, 1);
        assert!(elapsed >= Duration::from_millis(200), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_secs(5), "elapsed {elapsed:?}");
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output, "Problem #1: 2+2 = You scored 0 out of 1");
    }

    #[tokio::test]
    async fn padded_answer_does_not_score() {
        let questions = vec![QuestionAnswer::new("2+2", "4")];
        let mut answers = LineAnswers::new(Cursor::new(" 4 \r\n"));
        let mut reporter = ConsoleReporter::new(Vec::new());

        let outcome = QuizRunner::new(Duration::from_secs(30))
            .run(&questions, &mut answers, &mut reporter)
            .await;

        assert_eq!(outcome.correct, 0);
        assert_eq!(outcome.end, SessionEnd::Completed);
    }

    #[tokio::test]
    async fn full_quiz_over_line_input() {
        let questions = vec![
            QuestionAnswer::new("2+2", "4"),
            QuestionAnswer::new("3+3", "6"),
        ];
        let mut answers = LineAnswers::new(Cursor::new("5\n6\n"));
        let mut reporter = ConsoleReporter::new(Vec::new());

        let outcome = QuizRunner::new(Duration::from_secs(30))
            .run(&questions, &mut answers, &mut reporter)
            .await;

        assert_eq!(outcome.correct, 1);
        assert_eq!(outcome.end, SessionEnd::Completed);
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Problem #1: 2+2 = Problem #2: 3+3 = You scored 1 out of 2"
        );
    }
}
