use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{
    compose_lender_question, compose_prequalification, interpret, EligibilityFilter,
    Interpretation, SYSTEM_PROMPT,
};
use crate::models::{
    AskLenderRequest, AskLenderResponse, ErrorResponse, FilterLendersRequest,
    FilterLendersResponse, HealthResponse, PrequalifyRequest, PrequalifyResponse,
};
use crate::services::{Catalog, ChatClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub filter: EligibilityFilter,
    pub chat: Arc<ChatClient>,
}

/// Configure all lender-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/lenders/filter", web::post().to(filter_lenders))
        .route("/lenders/ask", web::post().to(ask_lender))
        .route("/prequalify", web::post().to(prequalify));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Filter the lender catalog
///
/// POST /api/v1/lenders/filter
///
/// The body carries the (all-optional) filter criteria. An empty match list
/// is a normal outcome, not an error.
async fn filter_lenders(
    state: web::Data<AppState>,
    req: web::Json<FilterLendersRequest>,
) -> impl Responder {
    let limit = req.limit.min(200) as usize;

    let result = state
        .filter
        .filter(state.catalog.lenders(), &req.criteria);

    tracing::info!(
        "Filtered catalog: {} of {} lenders match",
        result.matches.len(),
        result.total_candidates
    );

    let total_matches = result.matches.len();
    let mut matches = result.matches;
    matches.truncate(limit);

    HttpResponse::Ok().json(FilterLendersResponse {
        matches,
        total_matches,
        total_candidates: result.total_candidates,
    })
}

/// Ask the model a free-text question about one lender
///
/// POST /api/v1/lenders/ask
async fn ask_lender(
    state: web::Data<AppState>,
    req: web::Json<AskLenderRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let lender = match state.catalog.find_by_name(&req.lender_name) {
        Some(lender) => lender,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Lender not found".to_string(),
                message: format!("No lender named '{}' in the catalog", req.lender_name),
                status_code: 404,
            });
        }
    };

    let prompt = compose_lender_question(lender, req.question.trim());

    tracing::info!("Asking about lender '{}'", lender.name);

    match state.chat.send(SYSTEM_PROMPT, &prompt).await {
        Ok(answer) => HttpResponse::Ok().json(AskLenderResponse {
            lender: lender.name.clone(),
            answer,
        }),
        Err(e) => provider_error(e),
    }
}

/// Prequalify a borrower profile (structured mode)
///
/// POST /api/v1/prequalify
///
/// The model is asked for a fixed-shape JSON object; when parsing fails even
/// after span recovery the raw reply is returned instead of an error.
async fn prequalify(
    state: web::Data<AppState>,
    req: web::Json<PrequalifyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into_profile();
    let prompt = compose_prequalification(&profile);

    tracing::info!(
        "Prequalifying borrower in {} (credit {})",
        profile.state,
        profile.credit_score
    );

    let raw = match state.chat.send(SYSTEM_PROMPT, &prompt).await {
        Ok(raw) => raw,
        Err(e) => return provider_error(e),
    };

    match interpret(&raw) {
        Interpretation::Parsed(answer) => HttpResponse::Ok().json(PrequalifyResponse {
            parsed: true,
            answer: Some(answer),
            raw: None,
        }),
        Interpretation::Unparsed(raw) => {
            tracing::warn!("Prequalification reply was not valid JSON, returning raw text");
            HttpResponse::Ok().json(PrequalifyResponse {
                parsed: false,
                answer: None,
                raw: Some(raw),
            })
        }
    }
}

/// Map a chat provider failure onto the user-visible error path.
fn provider_error(e: crate::services::ChatError) -> HttpResponse {
    tracing::error!("Chat provider call failed: {}", e);
    HttpResponse::BadGateway().json(ErrorResponse {
        error: "Provider call failed".to_string(),
        message: e.to_string(),
        status_code: 502,
    })
}
