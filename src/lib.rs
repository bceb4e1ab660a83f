pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use application::QuestionImporter;
pub use domain::error::{AppError, Result};
pub use domain::question::{ImportResult, QuestionDraft, RowRejection};
pub use domain::template::ImportTemplate;
pub use infrastructure::api::{QuestionBankApi, RestQuestionBankClient, SubmitAck, WireQuestion};
pub use infrastructure::config::AppConfig;
pub use interfaces::http::start_server;
