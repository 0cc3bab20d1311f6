// Axum request handlers: translate HTTP requests into fan-out + evaluation calls.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    routing::get,
};
use tracing::{debug, info, instrument};

use super::error::ApiError;
use super::query::{url_params, validate_urls};
use super::response::EvaluationResponse;
use crate::download::FanOutDownloader;
use crate::evaluation::{EvaluationCriteria, evaluate};
use crate::fetch::RecordSource;

/// Shared dependencies for every request.
#[derive(Clone)]
pub struct AppState {
    /// Where CSV resources are fetched from.
    pub source: Arc<dyn RecordSource>,
    /// Bounded fan-out shared by all requests.
    pub downloader: Arc<FanOutDownloader>,
    /// Year and topic the statistics are computed for.
    pub criteria: Arc<EvaluationCriteria>,
}

impl AppState {
    /// Bundles the request dependencies, wrapping shared parts in `Arc`.
    pub fn new(
        source: Arc<dyn RecordSource>,
        downloader: FanOutDownloader,
        criteria: EvaluationCriteria,
    ) -> Self {
        Self {
            source,
            downloader: Arc::new(downloader),
            criteria: Arc::new(criteria),
        }
    }
}

/// Builds the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/evaluation", get(evaluation_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// GET /evaluation?url=...&url=...: download every CSV and evaluate.
#[instrument(skip(state, query))]
async fn evaluation_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let raw_urls = url_params(query.as_deref());
    if raw_urls.is_empty() {
        debug!("no urls supplied, returning empty evaluation");
        return Ok(Json(EvaluationResponse::empty()));
    }

    let urls = validate_urls(&raw_urls)?;
    let records = state.downloader.download_all(&state.source, &urls).await?;
    let evaluation = evaluate(&records, &state.criteria)?;

    info!(
        urls = urls.len(),
        records = records.len(),
        most_speeches = ?evaluation.most_speeches,
        most_on_topic = ?evaluation.most_on_topic,
        least_wordy = ?evaluation.least_wordy,
        "evaluation served"
    );

    Ok(Json(evaluation.into()))
}

/// GET /health: liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}
