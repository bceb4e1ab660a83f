// ============================================================
// QUESTION IMPORT USE CASE
// ============================================================
// Orchestrate decode, row validation, and duplicate removal

use tracing::{info, warn};

use crate::application::use_cases::dedup::dedupe_by_question_text;
use crate::domain::error::{AppError, Result};
use crate::domain::question::{ImportResult, QuestionDraft, RowRejection, MAX_OPTIONS, MIN_OPTIONS};
use crate::domain::spreadsheet::{RawRow, SheetData};
use crate::domain::template::ImportTemplate;
use crate::infrastructure::spreadsheet;

/// Runs the import pipeline for one template.
///
/// Stateless across imports; every call starts from the uploaded bytes and
/// returns a complete result, so no ambient state links one upload to the
/// next.
#[derive(Debug)]
pub struct QuestionImporter {
    template: ImportTemplate,
}

impl QuestionImporter {
    pub fn new(template: ImportTemplate) -> Result<Self> {
        template.validate().map_err(AppError::Config)?;
        Ok(Self { template })
    }

    /// Full pipeline over uploaded bytes: decode, validate rows, drop
    /// duplicate question texts.
    pub fn import(&self, file_name: &str, bytes: &[u8]) -> Result<ImportResult> {
        let sheet = spreadsheet::decode(file_name, bytes)?;
        let result = self.import_sheet(&sheet)?;

        info!(
            template = %self.template.name,
            accepted = result.accepted.len(),
            rejected = result.rejected_count(),
            duplicates = result.duplicate_count,
            "Import finished"
        );
        if result.accepted.is_empty() {
            warn!(file_name, "No valid questions found in upload");
        }

        Ok(result)
    }

    /// Validate decoded rows and collapse duplicates.
    ///
    /// The schema gate runs first: a header row missing required columns, or
    /// carrying fewer than two option columns, fails the whole batch before
    /// any row is examined. Per-row failures never abort the batch; they are
    /// accumulated so one upload reports every failing row at once.
    pub fn import_sheet(&self, sheet: &SheetData) -> Result<ImportResult> {
        let option_columns = self.check_schema(&sheet.headers)?;

        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for row in &sheet.rows {
            match self.validate_row(row, &option_columns) {
                Ok(draft) => accepted.push(draft),
                Err(reason) => rejected.push(RowRejection::new(row.row_number(), reason)),
            }
        }

        let (accepted, duplicate_count) = dedupe_by_question_text(accepted);

        Ok(ImportResult {
            accepted,
            rejected,
            duplicate_count,
        })
    }

    /// Header precondition check. Returns the template's option columns that
    /// are actually present, in label order.
    fn check_schema<'a>(&'a self, headers: &[String]) -> Result<Vec<&'a str>> {
        let missing: Vec<&str> = self
            .template
            .required_columns()
            .into_iter()
            .filter(|column| !headers.iter().any(|h| h == column))
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Schema(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let present: Vec<&str> = self
            .template
            .option_columns
            .iter()
            .map(String::as_str)
            .filter(|column| headers.iter().any(|h| h == column))
            .collect();

        if present.len() < MIN_OPTIONS {
            return Err(AppError::Schema(format!(
                "at least {} option columns are required, found {}",
                MIN_OPTIONS,
                present.len()
            )));
        }

        Ok(present)
    }

    /// Validate and normalize one data row. Comparisons are exact-string and
    /// case-sensitive; the only normalization is outer-whitespace trimming.
    fn validate_row(
        &self,
        row: &RawRow,
        option_columns: &[&str],
    ) -> std::result::Result<QuestionDraft, String> {
        let options: Vec<String> = option_columns
            .iter()
            .filter_map(|column| row.cell(column))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
            .collect();

        if options.len() < MIN_OPTIONS {
            return Err("insufficient options".to_string());
        }
        if options.len() > MAX_OPTIONS {
            return Err("too many options".to_string());
        }

        let question_text = self.required_cell(row, &self.template.question_column)?;
        let correct_answer = self.required_cell(row, &self.template.answer_column)?;
        let difficulty_level = self.required_cell(row, &self.template.level_column)?;
        let blooms_level = self.required_cell(row, &self.template.blooms_column)?;

        if !options.iter().any(|option| option == &correct_answer) {
            return Err("correct answer not in options".to_string());
        }

        let tags = self
            .template
            .tags_column
            .as_deref()
            .and_then(|column| row.cell(column))
            .map(split_tags)
            .unwrap_or_default();

        Ok(QuestionDraft {
            question_text,
            options,
            correct_answer,
            difficulty_level,
            blooms_level,
            tags,
        })
    }

    fn required_cell(&self, row: &RawRow, column: &str) -> std::result::Result<String, String> {
        row.cell(column)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
            .ok_or_else(|| format!("missing required field '{}'", column))
    }
}

/// Split a tags cell on commas, trimming each entry and dropping empties.
/// Duplicate tags within one row are kept as-is.
fn split_tags(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
