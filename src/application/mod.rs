pub mod use_cases;

pub use use_cases::dedup::dedupe_by_question_text;
pub use use_cases::import_questions::QuestionImporter;
