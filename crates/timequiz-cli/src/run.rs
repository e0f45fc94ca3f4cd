//! Loads the questions and runs the quiz on the console.

use std::path::PathBuf;

use anyhow::Result;

use timequiz_core::console::{ConsoleReporter, LineAnswers};
use timequiz_core::parser::CsvQuestionFile;
use timequiz_core::traits::QuestionSource;
use timequiz_core::QuizRunner;

use crate::config::load_config_from;

pub async fn execute(
    csv: Option<PathBuf>,
    time_limit_secs: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?.with_overrides(csv, time_limit_secs);
    tracing::debug!(?config, "resolved configuration");

    // Any load failure ends the process before the first prompt.
    let questions = CsvQuestionFile::new(&config.csv).load()?;

    let runner = QuizRunner::new(config.time_limit());
    let mut answers = LineAnswers::stdin();
    let mut reporter = ConsoleReporter::stdout();
    runner.run(&questions, &mut answers, &mut reporter).await;

    Ok(())
}
