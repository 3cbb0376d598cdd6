use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use smartedtech_core::{
    grading::PracticeLevel,
    practice::{AdaptivePractice, AdaptivePracticeUpdate, NewAdaptivePractice},
};

use super::shared::{required, CurrentUser};
use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct PracticeQuery {
    user_id: Option<String>,
    subject: Option<String>,
}

#[derive(Deserialize)]
struct CreatePracticeBody {
    user_id: Option<String>,
    subject: Option<String>,
    performance_level: Option<String>,
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    #[serde(default)]
    resources: Vec<String>,
    #[serde(default)]
    completed: bool,
}

#[derive(Deserialize)]
struct UpdatePracticeBody {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    resources: Option<Vec<String>>,
    completed: Option<bool>,
    performance_level: Option<String>,
}

#[derive(Deserialize)]
struct GenerateBody {
    user_id: Option<String>,
    subject: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

fn owned_practice(
    state: &AppState,
    caller: &CurrentUser,
    id: &str,
) -> ApiResult<AdaptivePractice> {
    let practice = state.practice_service.get_practice(id)?;
    caller.ensure_owner(&practice.user_id, "Adaptive practice")?;
    Ok(practice)
}

async fn list_practices(
    Query(q): Query<PracticeQuery>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<Vec<AdaptivePractice>>> {
    let user_id = required(q.user_id, "user_id")?;
    caller.ensure_user(&user_id)?;
    let subject = q.subject.filter(|s| !s.trim().is_empty());
    let practices = state
        .practice_service
        .list_practices(&user_id, subject.as_deref())?;
    Ok(Json(practices))
}

async fn get_practice(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<AdaptivePractice>> {
    Ok(Json(owned_practice(&state, &caller, &id)?))
}

async fn create_practice(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(body): Json<CreatePracticeBody>,
) -> ApiResult<(StatusCode, Json<AdaptivePractice>)> {
    let user_id = required(body.user_id, "user_id")?;
    caller.ensure_user(&user_id)?;
    let new_practice = NewAdaptivePractice {
        user_id,
        subject: required(body.subject, "subject")?,
        performance_level: required(body.performance_level, "performance_level")?
            .parse::<PracticeLevel>()?,
        title: required(body.title, "title")?,
        description: required(body.description, "description")?,
        content: required(body.content, "content")?,
        resources: body.resources,
        completed: body.completed,
    };
    let practice = state.practice_service.create_practice(new_practice).await?;
    Ok((StatusCode::CREATED, Json(practice)))
}

async fn update_practice(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(body): Json<UpdatePracticeBody>,
) -> ApiResult<Json<AdaptivePractice>> {
    owned_practice(&state, &caller, &id)?;
    let performance_level = body
        .performance_level
        .as_deref()
        .map(str::parse::<PracticeLevel>)
        .transpose()?;
    let changes = AdaptivePracticeUpdate {
        title: body.title,
        description: body.description,
        content: body.content,
        resources: body.resources,
        completed: body.completed,
        performance_level,
    };
    Ok(Json(state.practice_service.update_practice(&id, changes).await?))
}

async fn delete_practice(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<MessageResponse>> {
    owned_practice(&state, &caller, &id)?;
    state.practice_service.delete_practice(&id).await?;
    Ok(Json(MessageResponse {
        message: "Adaptive practice deleted successfully",
    }))
}

async fn generate_practice(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(body): Json<GenerateBody>,
) -> ApiResult<(StatusCode, Json<AdaptivePractice>)> {
    let user_id = required(body.user_id, "user_id")?;
    caller.ensure_user(&user_id)?;
    let subject = required(body.subject, "subject")?;
    let practice = state
        .practice_service
        .generate_practice(&user_id, &subject)
        .await?;
    Ok((StatusCode::CREATED, Json(practice)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/adaptive-practice",
            get(list_practices).post(create_practice),
        )
        .route("/adaptive-practice/generate", post(generate_practice))
        .route(
            "/adaptive-practice/{id}",
            get(get_practice)
                .put(update_practice)
                .delete(delete_practice),
        )
}
