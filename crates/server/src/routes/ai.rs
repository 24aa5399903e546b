use actix_web::{post, web, HttpResponse};
use moment_analysis::{AnalysisInput, HighlightInput};
use tracing::{debug, info};

use crate::state::AppState;
use crate::types::{HighlightRequest, SuggestRequest};

/// Register the AI endpoints under the current scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(suggest).service(highlight);
}

/// An unreadable body (over the payload limit, broken stream) is handled like an empty one
fn body_or_empty(body: Result<web::Bytes, actix_web::Error>) -> web::Bytes {
    body.unwrap_or_else(|e| {
        debug!("Request body unreadable, treated as empty: {}", e);
        web::Bytes::new()
    })
}

/// Suggest tags and friend mentions for a diary entry
#[post("/suggest")]
pub async fn suggest(
    body: Result<web::Bytes, actix_web::Error>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let input: AnalysisInput = SuggestRequest::from_body(&body_or_empty(body)).into();
    let result = state.extractor.extract(&input).await;

    info!(
        "Suggest: {} tags, {} mentions (of {} names)",
        result.tags.len(),
        result.mentions.len(),
        input.friend_names.len()
    );

    Ok(HttpResponse::Ok().json(result))
}

/// One-sentence highlight for an entry's engagement
#[post("/highlight")]
pub async fn highlight(
    body: Result<web::Bytes, actix_web::Error>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let input: HighlightInput = HighlightRequest::from_body(&body_or_empty(body)).into();
    let result = state.summarizer.summarize(&input).await;

    info!("Highlight: {} chars", result.summary.chars().count());

    Ok(HttpResponse::Ok().json(result))
}
