use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use smartedtech_core::boosters::{BoosterRequest, PerformanceBooster};

use super::shared::{required, required_value, CurrentUser};
use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct CreateBoosterBody {
    user_id: Option<String>,
    assignment_id: Option<String>,
    subject: Option<String>,
    assignment_title: Option<String>,
    grade: Option<f64>,
    feedback: Option<String>,
}

async fn create_booster(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(body): Json<CreateBoosterBody>,
) -> ApiResult<(StatusCode, Json<PerformanceBooster>)> {
    let user_id = required(body.user_id, "user_id")?;
    caller.ensure_user(&user_id)?;
    let request = BoosterRequest {
        user_id,
        assignment_id: required(body.assignment_id, "assignment_id")?,
        subject: required(body.subject, "subject")?,
        assignment_title: required(body.assignment_title, "assignment_title")?,
        grade: required_value(body.grade, "grade")?,
        feedback: required(body.feedback, "feedback")?,
    };
    let booster = state.booster_service.create_booster(request).await?;
    Ok((StatusCode::CREATED, Json(booster)))
}

async fn list_user_boosters(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<Vec<PerformanceBooster>>> {
    caller.ensure_user(&user_id)?;
    Ok(Json(state.booster_service.list_boosters(&user_id)?))
}

async fn get_booster(
    Path(booster_id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<PerformanceBooster>> {
    let booster = state.booster_service.get_booster(&booster_id)?;
    caller.ensure_owner(&booster.user_id, "Booster")?;
    Ok(Json(booster))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/boosters", post(create_booster))
        .route("/boosters/user/{user_id}", get(list_user_boosters))
        .route("/boosters/{booster_id}", get(get_booster))
}
