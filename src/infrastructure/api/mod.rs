// ============================================================
// QUESTION BANK API
// ============================================================
// Wire schema and client seam for the remote question-bank backend

mod rest;

pub use rest::RestQuestionBankClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::Result;
use crate::domain::question::QuestionDraft;

/// Question record in the field names the backend expects.
///
/// The name translation from `QuestionDraft` lives here, at the submission
/// boundary; the import pipeline never sees these names.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WireQuestion {
    #[validate(length(min = 1))]
    pub question: String,

    #[validate(length(min = 2, max = 4))]
    pub options: Vec<String>,

    #[serde(rename = "correctAnswer")]
    #[validate(length(min = 1))]
    pub correct_answer: String,

    #[validate(length(min = 1))]
    pub level: String,

    #[validate(length(min = 1))]
    pub blooms: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<QuestionDraft> for WireQuestion {
    fn from(draft: QuestionDraft) -> Self {
        Self {
            question: draft.question_text,
            options: draft.options,
            correct_answer: draft.correct_answer,
            level: draft.difficulty_level,
            blooms: draft.blooms_level,
            tags: draft.tags,
        }
    }
}

/// Backend acknowledgement for a submitted batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub saved: usize,

    #[serde(default)]
    pub message: String,
}

/// Client seam for the remote question bank.
#[async_trait]
pub trait QuestionBankApi: Send + Sync {
    /// Submit a batch as JSON.
    async fn submit_questions(&self, questions: &[WireQuestion]) -> Result<SubmitAck>;

    /// Submit a batch re-encoded as CSV, for the bulk-upload endpoint.
    async fn upload_csv(&self, questions: &[WireQuestion]) -> Result<SubmitAck>;
}
