use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use smartedtech_core::{
    performance::PerformanceHistory,
    tutor::{PersonalizedTutor, QuizResult},
};

use super::shared::{required, required_value, CurrentUser};
use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct UserQuery {
    user_id: Option<String>,
}

#[derive(Deserialize)]
struct HistoryQuery {
    user_id: Option<String>,
    subject: Option<String>,
}

#[derive(Deserialize)]
struct GenerateBody {
    user_id: Option<String>,
    subject: Option<String>,
}

#[derive(Deserialize)]
struct SubmitBody {
    answers: Option<Vec<String>>,
}

fn owned_session(
    state: &AppState,
    caller: &CurrentUser,
    id: &str,
) -> ApiResult<PersonalizedTutor> {
    let session = state.tutor_service.get_session(id)?;
    caller.ensure_owner(&session.user_id, "Tutor")?;
    Ok(session)
}

async fn list_sessions(
    Query(q): Query<UserQuery>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<Vec<PersonalizedTutor>>> {
    let user_id = required(q.user_id, "user_id")?;
    caller.ensure_user(&user_id)?;
    Ok(Json(state.tutor_service.list_sessions(&user_id)?))
}

async fn get_session(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<PersonalizedTutor>> {
    Ok(Json(owned_session(&state, &caller, &id)?))
}

async fn generate_session(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(body): Json<GenerateBody>,
) -> ApiResult<(StatusCode, Json<PersonalizedTutor>)> {
    let user_id = required(body.user_id, "user_id")?;
    caller.ensure_user(&user_id)?;
    let subject = required(body.subject, "subject")?;
    let session = state
        .tutor_service
        .generate_session(&user_id, &subject)
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

async fn submit_answers(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(body): Json<SubmitBody>,
) -> ApiResult<Json<QuizResult>> {
    owned_session(&state, &caller, &id)?;
    let answers = required_value(body.answers, "answers")?;
    Ok(Json(state.tutor_service.submit_answers(&id, answers).await?))
}

async fn performance_history(
    Query(q): Query<HistoryQuery>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<Vec<PerformanceHistory>>> {
    let user_id = required(q.user_id, "user_id")?;
    caller.ensure_user(&user_id)?;
    let subject = q.subject.filter(|s| !s.trim().is_empty());
    let history = state
        .tutor_service
        .performance_history(&user_id, subject.as_deref())?;
    Ok(Json(history))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/personalized-tutor", get(list_sessions))
        .route("/personalized-tutor/generate", post(generate_session))
        .route(
            "/personalized-tutor/performance-history",
            get(performance_history),
        )
        .route("/personalized-tutor/{id}", get(get_session))
        .route("/personalized-tutor/{id}/submit", post(submit_answers))
}
