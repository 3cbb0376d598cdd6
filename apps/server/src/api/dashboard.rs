use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use smartedtech_core::{dashboard::DashboardSummary, performance::Performance};

use super::shared::{required, required_value, CurrentUser};
use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct PerformanceBody {
    subject: Option<String>,
    score: Option<f64>,
}

async fn get_dashboard(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<DashboardSummary>> {
    caller.ensure_user(&user_id)?;
    let summary = state.dashboard_service.get_summary(&user_id)?;
    Ok(Json(summary))
}

async fn record_performance(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(body): Json<PerformanceBody>,
) -> ApiResult<(StatusCode, Json<Performance>)> {
    caller.ensure_user(&user_id)?;
    let subject = required(body.subject, "subject")?;
    let score = required_value(body.score, "score")?;
    let performance = state
        .dashboard_service
        .record_performance(&user_id, &subject, score)
        .await?;
    Ok((StatusCode::CREATED, Json(performance)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/user/{user_id}", get(get_dashboard))
        .route(
            "/dashboard/user/{user_id}/performance",
            post(record_performance),
        )
}
