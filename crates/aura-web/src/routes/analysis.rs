//! Text analysis route handler.

use aura_core::{AnalysisRequest, AnalysisResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::state::AppState;

/// Analyze the posted text.
///
/// Every outcome is a flat `AnalysisResult` body. Only requests the client
/// must fix (undecodable body, text too short) get a 400; provider and format
/// failures are answered with 200 and the neutral fallback payload.
pub async fn process_text(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> (StatusCode, Json<AnalysisResult>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected analysis request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(AnalysisResult::failure(rejection.body_text())),
            );
        }
    };

    match aura_core::analyze_text(state.provider.as_ref(), &req.text).await {
        Ok(result) => {
            info!(
                sentiment = result.sentiment,
                emotion = result.emotion.as_str(),
                keywords = result.keywords.len(),
                "Analysis complete"
            );
            (StatusCode::OK, Json(result))
        }
        Err(err) if err.is_client_error() => {
            (StatusCode::BAD_REQUEST, Json(AnalysisResult::from_error(&err)))
        }
        Err(err) => {
            warn!(error = %err, "Analysis failed, returning fallback payload");
            (StatusCode::OK, Json(AnalysisResult::from_error(&err)))
        }
    }
}
