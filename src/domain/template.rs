// ============================================================
// IMPORT TEMPLATES
// ============================================================
// Column layouts the import pipeline accepts, one per upload call site

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::question::MIN_OPTIONS;

/// Column layout of one spreadsheet import template.
///
/// Header matching is exact-string and case-sensitive. Each template is the
/// canonical schema for its call site; capitalization variants are separate
/// templates, never reconciled silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportTemplate {
    pub name: String,

    /// Header holding the question text
    pub question_column: String,

    /// Candidate option headers in label order (first maps to A)
    pub option_columns: Vec<String>,

    /// Header holding the correct answer
    pub answer_column: String,

    /// Header holding the difficulty level
    pub level_column: String,

    /// Header holding the Bloom's taxonomy level
    pub blooms_column: String,

    /// Header holding the comma-separated tag list, if the template has one
    pub tags_column: Option<String>,
}

static TEMPLATES: Lazy<Vec<ImportTemplate>> =
    Lazy::new(|| vec![ImportTemplate::standard(), ImportTemplate::compact()]);

impl ImportTemplate {
    /// Full question-bank export layout, tags included.
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            question_column: "Question".to_string(),
            option_columns: vec![
                "Option1".to_string(),
                "Option2".to_string(),
                "Option3".to_string(),
                "Option4".to_string(),
            ],
            answer_column: "Correct_Answer".to_string(),
            level_column: "Level".to_string(),
            blooms_column: "Blooms".to_string(),
            tags_column: Some("Tags".to_string()),
        }
    }

    /// Same layout without the optional tags column.
    pub fn compact() -> Self {
        Self {
            name: "compact".to_string(),
            tags_column: None,
            ..Self::standard()
        }
    }

    /// All templates this deployment accepts.
    pub fn all() -> &'static [ImportTemplate] {
        &TEMPLATES
    }

    /// Look up a template by name.
    pub fn find(name: &str) -> Option<&'static ImportTemplate> {
        TEMPLATES.iter().find(|t| t.name == name)
    }

    /// Scalar columns that must all be present in the header row.
    pub fn required_columns(&self) -> Vec<&str> {
        vec![
            self.question_column.as_str(),
            self.answer_column.as_str(),
            self.level_column.as_str(),
            self.blooms_column.as_str(),
        ]
    }

    /// Validate template values before any import runs against it.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("template name must not be empty".to_string());
        }
        if self.option_columns.len() < MIN_OPTIONS {
            return Err(format!(
                "template must declare at least {} option columns",
                MIN_OPTIONS
            ));
        }

        let mut all_columns: Vec<&str> = self.required_columns();
        all_columns.extend(self.option_columns.iter().map(String::as_str));
        if let Some(tags) = &self.tags_column {
            all_columns.push(tags.as_str());
        }

        for column in &all_columns {
            if column.trim().is_empty() {
                return Err("template column names must not be empty".to_string());
            }
        }

        let mut seen = std::collections::HashSet::new();
        for column in &all_columns {
            if !seen.insert(*column) {
                return Err(format!("duplicate column name '{}' in template", column));
            }
        }

        Ok(())
    }
}
