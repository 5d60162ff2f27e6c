// src/api/handlers/solve.rs
use actix_web::{HttpResponse, Result, web};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::api::AppState;
use crate::problem::{ProblemInput, SolveRequest};
use crate::providers::{SolverProvider, gemini::GeminiProvider};

#[derive(Serialize)]
pub struct SolveResponse {
    pub id: String,
    pub status: String,
    pub solution: Option<String>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

pub async fn solve(
    state: web::Data<AppState>,
    req: web::Json<SolveRequest>,
) -> Result<HttpResponse> {
    let solve_id = Uuid::new_v4().to_string();

    let input = match req.into_inner().into_problem() {
        Ok(input) => input,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(SolveResponse {
                id: solve_id,
                status: "invalid".to_string(),
                solution: None,
                error: Some(e.user_message()),
                latency_ms: None,
                timestamp: None,
            }));
        }
    };

    // One submission at a time. The permit is released when this handler
    // finishes, including when the client goes away mid-request.
    let _permit = match state.begin_solve() {
        Some(permit) => permit,
        None => {
            return Ok(HttpResponse::TooManyRequests().json(SolveResponse {
                id: solve_id,
                status: "busy".to_string(),
                solution: None,
                error: Some("A solve request is already in progress.".to_string()),
                latency_ms: None,
                timestamp: None,
            }));
        }
    };

    match &input {
        ProblemInput::Text(text) => {
            log::info!("[{}] solving text problem ({} chars)", solve_id, text.len())
        }
        ProblemInput::Image(image) => {
            log::info!("[{}] solving image problem ({})", solve_id, image.mime_type)
        }
    }

    let provider = GeminiProvider::new(state.client.clone(), state.config.gemini.clone());

    match provider.solve(&input).await {
        Ok((solution, latency_ms)) => Ok(HttpResponse::Ok().json(SolveResponse {
            id: solve_id,
            status: "solved".to_string(),
            // The model text is passed through untouched.
            solution: Some(solution),
            error: None,
            latency_ms: Some(latency_ms),
            timestamp: Some(Utc::now().to_rfc3339()),
        })),
        Err(e) => {
            log::error!("[{}] solve failed: {:?}", solve_id, e);

            Ok(HttpResponse::BadGateway().json(SolveResponse {
                id: solve_id,
                status: "error".to_string(),
                solution: None,
                error: Some(e.user_message()),
                latency_ms: None,
                timestamp: None,
            }))
        }
    }
}
