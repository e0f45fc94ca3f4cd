//! CSV question parser.
//!
//! Loads `prompt,answer` records from a file or string. Every record must
//! have exactly two fields; both are trimmed of surrounding whitespace.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::QuizError;
use crate::model::QuestionAnswer;
use crate::traits::QuestionSource;

/// A CSV file of `prompt,answer` records.
#[derive(Debug, Clone)]
pub struct CsvQuestionFile {
    path: PathBuf,
}

impl CsvQuestionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for CsvQuestionFile {
    fn load(&self) -> Result<Vec<QuestionAnswer>, QuizError> {
        load_questions(&self.path)
    }
}

/// Read and parse a question file.
pub fn load_questions(path: &Path) -> Result<Vec<QuestionAnswer>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    match parse_questions(file) {
        Err(QuizError::Csv(err)) if err.is_io_error() => {
            let source = match err.into_kind() {
                csv::ErrorKind::Io(source) => source,
                kind => std::io::Error::other(format!("{kind:?}")),
            };
            Err(QuizError::SourceUnreadable {
                path: path.to_path_buf(),
                source,
            })
        }
        other => other,
    }
}

/// Parse questions from any reader of CSV text.
pub fn parse_questions<R: Read>(reader: R) -> Result<Vec<QuestionAnswer>, QuizError> {
    // Field counts are checked per record below so the error can name the line.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut questions = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 2 {
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 1);
            return Err(QuizError::Format {
                line,
                fields: record.iter().map(str::to_string).collect(),
            });
        }
        questions.push(QuestionAnswer::new(record[0].trim(), record[1].trim()));
    }

    tracing::debug!(count = questions.len(), "parsed questions");
    Ok(questions)
}

/// Parse questions from a string (useful for testing).
pub fn parse_questions_str(content: &str) -> Result<Vec<QuestionAnswer>, QuizError> {
    parse_questions(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CSV: &str = "5+5,10\n7+3,10\n1+1,2\n\"what 2+2, sir?\",4\n";

    #[test]
    fn parse_valid_csv() {
        let questions = parse_questions_str(VALID_CSV).unwrap();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0], QuestionAnswer::new("5+5", "10"));
        assert_eq!(questions[2], QuestionAnswer::new("1+1", "2"));
        assert_eq!(questions[3].prompt, "what 2+2, sir?");
        assert_eq!(questions[3].expected, "4");
    }

    #[test]
    fn fields_are_trimmed() {
        let questions = parse_questions_str("  2+2 ,  4  \n\t3+3,6\t\n").unwrap();
        assert_eq!(questions[0], QuestionAnswer::new("2+2", "4"));
        assert_eq!(questions[1], QuestionAnswer::new("3+3", "6"));
    }

    #[test]
    fn order_is_preserved() {
        let questions = parse_questions_str("c,3\na,1\nb,2\n").unwrap();
        let prompts: Vec<&str> = questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["c", "a", "b"]);
    }

    #[test]
    fn parse_is_idempotent() {
        let first = parse_questions_str(VALID_CSV).unwrap();
        let second = parse_questions_str(VALID_CSV).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_field_record_is_rejected() {
        let err = parse_questions_str("2+2,4\nonlyonefield\n").unwrap_err();
        match err {
            QuizError::Format { line, fields } => {
                assert_eq!(line, 2);
                assert_eq!(fields, vec!["onlyonefield"]);
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn format_error_reports_line_not_record_number() {
        // Blank lines are skipped, so the bad record is the 2nd but sits on line 4.
        let err = parse_questions_str("2+2,4\n\n\nonlyonefield\n").unwrap_err();
        assert!(matches!(err, QuizError::Format { line: 4, .. }), "got {err:?}");
    }

    #[test]
    fn three_field_record_is_rejected() {
        let err = parse_questions_str("2+2,4,extra\n").unwrap_err();
        assert!(matches!(err, QuizError::Format { line: 1, ref fields } if fields.len() == 3));
    }

    #[test]
    fn empty_input_yields_no_questions() {
        assert!(parse_questions_str("").unwrap().is_empty());
    }

    #[test]
    fn empty_answer_field_is_kept() {
        let questions = parse_questions_str("say nothing,\n").unwrap();
        assert_eq!(questions[0], QuestionAnswer::new("say nothing", ""));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.csv");
        std::fs::write(&path, VALID_CSV).unwrap();

        let source = CsvQuestionFile::new(&path);
        assert_eq!(source.path(), path.as_path());
        let questions = source.load().unwrap();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions, source.load().unwrap());
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_questions(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, QuizError::SourceUnreadable { .. }));
    }
}
