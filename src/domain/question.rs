use serde::{Deserialize, Serialize};

/// Fewest usable options a question may carry.
pub const MIN_OPTIONS: usize = 2;

/// Most usable options a question may carry. The preview UI labels options
/// A through D, so anything past four cannot be displayed.
pub const MAX_OPTIONS: usize = 4;

/// A validated, normalized question ready for preview and submission.
///
/// Built exclusively by the importer. The pipeline never mutates a draft
/// after creation; any later editing happens in the preview UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question_text: String,

    /// 2 to 4 non-blank options. Position implies the A/B/C/D label.
    pub options: Vec<String>,

    /// Equal to exactly one element of `options`, compared case-sensitively.
    pub correct_answer: String,

    /// Free-form difficulty, expected values "easy" | "medium" | "hard"
    pub difficulty_level: String,

    /// Bloom's taxonomy label (L1 through L6); presence is validated,
    /// enum membership is not
    pub blooms_level: String,

    /// Comma-split, trimmed tag list; may be empty
    pub tags: Vec<String>,
}

/// A data row the validator skipped, with a human-readable reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowRejection {
    /// 1-based row number relative to data rows, header excluded
    pub row: usize,

    pub reason: String,
}

impl RowRejection {
    pub fn new(row: usize, reason: impl Into<String>) -> Self {
        Self {
            row,
            reason: reason.into(),
        }
    }
}

/// Outcome of one import run.
///
/// `accepted` preserves the original row order minus rejected and duplicate
/// rows. Rejections are accumulated rather than aborting the batch, so a
/// single upload can report every failing row at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    pub accepted: Vec<QuestionDraft>,
    pub rejected: Vec<RowRejection>,
    pub duplicate_count: usize,
}

impl ImportResult {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Rows that did not reach the preview selection, for any reason.
    pub fn skipped_count(&self) -> usize {
        self.rejected.len() + self.duplicate_count
    }

    /// Single end-state message combining accepted and skipped counts.
    pub fn summary_message(&self) -> String {
        let skipped = self.skipped_count();
        if skipped == 0 {
            format!("{} questions were selected.", self.accepted.len())
        } else {
            format!(
                "{} questions were selected. {} questions were not selected due to an invalid format.",
                self.accepted.len(),
                skipped
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str) -> QuestionDraft {
        QuestionDraft {
            question_text: text.to_string(),
            options: vec!["3".to_string(), "4".to_string()],
            correct_answer: "4".to_string(),
            difficulty_level: "easy".to_string(),
            blooms_level: "L1 - Remember".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_summary_message_with_skips() {
        let result = ImportResult {
            accepted: (0..12).map(|i| draft(&format!("q{}", i))).collect(),
            rejected: vec![
                RowRejection::new(2, "insufficient options"),
                RowRejection::new(5, "missing required field 'Level'"),
            ],
            duplicate_count: 1,
        };

        assert_eq!(
            result.summary_message(),
            "12 questions were selected. 3 questions were not selected due to an invalid format."
        );
    }

    #[test]
    fn test_summary_message_clean_import() {
        let result = ImportResult {
            accepted: vec![draft("q")],
            rejected: Vec::new(),
            duplicate_count: 0,
        };

        assert_eq!(result.summary_message(), "1 questions were selected.");
    }
}
