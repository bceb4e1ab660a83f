// ============================================================
// HTTP INTERFACE
// ============================================================
// Local Actix service the staff UI talks to

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

use crate::application::QuestionImporter;
use crate::domain::error::AppError;
use crate::domain::question::{QuestionDraft, RowRejection};
use crate::domain::template::ImportTemplate;
use crate::infrastructure::api::{QuestionBankApi, WireQuestion};
use crate::infrastructure::config::AppConfig;

pub struct HttpState {
    pub config: AppConfig,
    pub bank_api: Arc<dyn QuestionBankApi>,
}

#[derive(Deserialize)]
pub struct ImportRequest {
    pub file_name: String,

    /// File bytes as sent by the browser's file reader
    pub content_base64: String,

    /// Template name; the standard layout when omitted
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub template: String,
    pub accepted: Vec<QuestionDraft>,
    pub rejected: Vec<RowRejection>,
    pub duplicate_count: usize,
    pub message: String,
    pub generated_at: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(length(min = 1, message = "at least one question must be selected"), nested)]
    pub questions: Vec<WireQuestion>,

    /// Use the CSV bulk-upload endpoint instead of JSON
    #[serde(default)]
    pub as_csv: bool,
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/templates")]
async fn templates() -> impl Responder {
    HttpResponse::Ok().json(ImportTemplate::all())
}

#[post("/questions/import")]
async fn import_questions(
    data: web::Data<HttpState>,
    req: web::Json<ImportRequest>,
) -> impl Responder {
    let template_name = req.template.as_deref().unwrap_or("standard");
    let Some(template) = ImportTemplate::find(template_name) else {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": format!("unknown template '{}'", template_name) }));
    };

    let bytes = match BASE64.decode(req.content_base64.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": format!("invalid base64 payload: {}", e) }));
        }
    };

    if bytes.len() > data.config.max_upload_bytes {
        return HttpResponse::PayloadTooLarge().json(serde_json::json!({
            "error": format!(
                "file exceeds the {} byte upload limit",
                data.config.max_upload_bytes
            )
        }));
    }

    info!(file_name = %req.file_name, template = template_name, "Import requested");

    let importer = match QuestionImporter::new(template.clone()) {
        Ok(importer) => importer,
        Err(e) => return error_response(&e),
    };

    match importer.import(&req.file_name, &bytes) {
        Ok(result) if result.accepted.is_empty() => {
            HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": "No valid questions found in the uploaded file.",
                "rejected": result.rejected,
            }))
        }
        Ok(result) => {
            let message = result.summary_message();
            HttpResponse::Ok().json(ImportResponse {
                template: template_name.to_string(),
                accepted: result.accepted,
                rejected: result.rejected,
                duplicate_count: result.duplicate_count,
                message,
                generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            })
        }
        Err(e) => {
            error!(file_name = %req.file_name, error = %e, "Import failed");
            error_response(&e)
        }
    }
}

#[post("/questions/submit")]
async fn submit_questions(
    data: web::Data<HttpState>,
    req: web::Json<SubmitRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }

    info!(
        count = req.questions.len(),
        as_csv = req.as_csv,
        "Submitting selection to backend"
    );

    let outcome = if req.as_csv {
        data.bank_api.upload_csv(&req.questions).await
    } else {
        data.bank_api.submit_questions(&req.questions).await
    };

    match outcome {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            error!(error = %e, "Backend submission failed");
            error_response(&e)
        }
    }
}

fn error_response(err: &AppError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        AppError::UnsupportedFormat(_) => HttpResponse::UnsupportedMediaType().json(body),
        AppError::Decode(_) => HttpResponse::BadRequest().json(body),
        AppError::Schema(_) | AppError::Validation(_) => {
            HttpResponse::UnprocessableEntity().json(body)
        }
        AppError::Api(_) => HttpResponse::BadGateway().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

pub fn start_server(config: AppConfig, bank_api: Arc<dyn QuestionBankApi>) -> std::io::Result<Server> {
    let bind = (config.bind_addr.clone(), config.bind_port);
    // Base64 inflates payloads by a third; leave headroom so the cap in the
    // import handler is the one that fires.
    let json_limit = config.max_upload_bytes * 2;
    let state = web::Data::new(HttpState { config, bank_api });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // local staff tool

        App::new()
            .wrap(cors)
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .service(health)
                    .service(templates)
                    .service(import_questions)
                    .service(submit_questions),
            )
    })
    .bind(bind)?
    .run();

    Ok(server)
}
