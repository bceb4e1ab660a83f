use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use super::{QuestionBankApi, SubmitAck, WireQuestion};
use crate::domain::error::{AppError, Result};

/// Columns of the CSV bulk-upload variant, fixed to four option slots.
const CSV_HEADER: [&str; 9] = [
    "question",
    "option1",
    "option2",
    "option3",
    "option4",
    "correctAnswer",
    "level",
    "blooms",
    "tags",
];

/// REST client for the question-bank backend.
pub struct RestQuestionBankClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestQuestionBankClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn read_ack(response: reqwest::Response) -> Result<SubmitAck> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Api(format!("Backend error ({}): {}", status, text)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("Failed to parse backend response: {}", e)))
    }
}

#[async_trait]
impl QuestionBankApi for RestQuestionBankClient {
    async fn submit_questions(&self, questions: &[WireQuestion]) -> Result<SubmitAck> {
        let body = json!({
            "batchId": Uuid::new_v4().to_string(),
            "submittedAt": Utc::now().to_rfc3339(),
            "questions": questions,
        });

        let response = self
            .authorize(self.client.post(self.endpoint("questions/bulk")))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Api(format!("Request failed: {}", e)))?;

        Self::read_ack(response).await
    }

    async fn upload_csv(&self, questions: &[WireQuestion]) -> Result<SubmitAck> {
        let csv_bytes = encode_csv(questions)?;

        let part = reqwest::multipart::Part::bytes(csv_bytes)
            .file_name("questions.csv")
            .mime_str("text/csv")
            .map_err(|e| AppError::Internal(format!("Failed to build upload part: {}", e)))?;
        let form = reqwest::multipart::Form::new()
            .text("batchId", Uuid::new_v4().to_string())
            .part("file", part);

        let response = self
            .authorize(self.client.post(self.endpoint("questions/bulk-csv")))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Api(format!("Request failed: {}", e)))?;

        Self::read_ack(response).await
    }
}

/// Re-encode a batch in the backend's CSV layout. Options past the fourth
/// slot cannot occur; the validator caps usable options at four.
pub(crate) fn encode_csv(questions: &[WireQuestion]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| AppError::Internal(format!("Failed to encode CSV: {}", e)))?;

    for question in questions {
        let mut record: Vec<String> = vec![question.question.clone()];
        for slot in 0..4 {
            record.push(question.options.get(slot).cloned().unwrap_or_default());
        }
        record.push(question.correct_answer.clone());
        record.push(question.level.clone());
        record.push(question.blooms.clone());
        record.push(question.tags.join(","));

        writer
            .write_record(&record)
            .map_err(|e| AppError::Internal(format!("Failed to encode CSV: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to encode CSV: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_question() -> WireQuestion {
        WireQuestion {
            question: "What is 2+2?".to_string(),
            options: vec!["3".to_string(), "4".to_string()],
            correct_answer: "4".to_string(),
            level: "easy".to_string(),
            blooms: "L1 - Remember".to_string(),
            tags: vec!["math".to_string(), "arithmetic".to_string()],
        }
    }

    #[test]
    fn test_endpoint_joins_with_and_without_trailing_slash() {
        let with = RestQuestionBankClient::new("http://bank.local/", None);
        let without = RestQuestionBankClient::new("http://bank.local", None);

        assert_eq!(with.endpoint("questions/bulk"), "http://bank.local/questions/bulk");
        assert_eq!(without.endpoint("questions/bulk"), "http://bank.local/questions/bulk");
    }

    #[test]
    fn test_encode_csv_pads_option_slots() {
        let bytes = encode_csv(&[wire_question()]).unwrap();
        let content = String::from_utf8(bytes).unwrap();

        let mut reader = csv::Reader::from_reader(content.as_bytes());
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            CSV_HEADER.to_vec()
        );

        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.get(1), Some("3"));
        assert_eq!(record.get(2), Some("4"));
        assert_eq!(record.get(3), Some(""));
        assert_eq!(record.get(4), Some(""));
        assert_eq!(record.get(5), Some("4"));
        assert_eq!(record.get(8), Some("math,arithmetic"));
    }

    #[actix_web::test]
    async fn test_submit_questions_round_trip() {
        use actix_web::{post, web, App, HttpResponse, HttpServer, Responder};

        #[post("/questions/bulk")]
        async fn bulk(body: web::Json<serde_json::Value>) -> impl Responder {
            let count = body["questions"].as_array().map(|a| a.len()).unwrap_or(0);
            HttpResponse::Ok().json(serde_json::json!({ "saved": count, "message": "stored" }))
        }

        let server = HttpServer::new(|| App::new().service(bulk))
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        let handle = tokio::spawn(server.run());

        let client = RestQuestionBankClient::new(format!("http://{}", addr), None);
        let ack = client.submit_questions(&[wire_question()]).await.unwrap();

        assert_eq!(ack.saved, 1);
        assert_eq!(ack.message, "stored");
        handle.abort();
    }

    #[actix_web::test]
    async fn test_backend_failure_surfaces_as_api_error() {
        use actix_web::{post, App, HttpResponse, HttpServer, Responder};

        #[post("/questions/bulk")]
        async fn bulk() -> impl Responder {
            HttpResponse::UnprocessableEntity().body("duplicate question ids")
        }

        let server = HttpServer::new(|| App::new().service(bulk))
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        let handle = tokio::spawn(server.run());

        let client = RestQuestionBankClient::new(format!("http://{}", addr), None);
        match client.submit_questions(&[wire_question()]).await {
            Err(AppError::Api(msg)) => assert!(msg.contains("422")),
            other => panic!("expected Api error, got {:?}", other),
        }
        handle.abort();
    }
}
