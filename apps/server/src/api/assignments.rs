use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use smartedtech_core::{
    assignments::{Assignment, AssignmentUpdate, NewAssignment},
    utils::parse_datetime,
};

use super::shared::{required, CurrentUser};
use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct StatusQuery {
    status: Option<String>,
}

#[derive(Deserialize)]
struct CreateAssignmentBody {
    title: Option<String>,
    subject: Option<String>,
    description: Option<String>,
    due_date: Option<String>,
}

#[derive(Deserialize)]
struct UpdateAssignmentBody {
    title: Option<String>,
    subject: Option<String>,
    description: Option<String>,
    due_date: Option<String>,
    status: Option<String>,
    score: Option<f64>,
}

#[derive(Serialize)]
struct AssignmentResponse {
    message: &'static str,
    assignment: Assignment,
}

async fn list_assignments(
    Path(user_id): Path<String>,
    Query(q): Query<StatusQuery>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
) -> ApiResult<Json<Vec<Assignment>>> {
    caller.ensure_user(&user_id)?;
    let assignments = state
        .assignment_service
        .list_assignments(&user_id, q.status.as_deref())?;
    Ok(Json(assignments))
}

async fn create_assignment(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(body): Json<CreateAssignmentBody>,
) -> ApiResult<(StatusCode, Json<AssignmentResponse>)> {
    caller.ensure_user(&user_id)?;
    let title = required(body.title, "title")?;
    let subject = required(body.subject, "subject")?;
    let due_date = parse_datetime(&required(body.due_date, "due_date")?)?;
    let assignment = state
        .assignment_service
        .create_assignment(NewAssignment {
            user_id,
            title,
            subject,
            description: body.description,
            due_date,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AssignmentResponse {
            message: "Assignment created successfully",
            assignment,
        }),
    ))
}

async fn update_assignment(
    Path((user_id, assignment_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(body): Json<UpdateAssignmentBody>,
) -> ApiResult<Json<AssignmentResponse>> {
    caller.ensure_user(&user_id)?;
    let due_date = match body.due_date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(parse_datetime(raw)?),
        _ => None,
    };
    let changes = AssignmentUpdate {
        title: body.title,
        subject: body.subject,
        description: body.description,
        due_date,
        status: body.status,
        score: body.score,
    };
    let assignment = state
        .assignment_service
        .update_assignment(&user_id, &assignment_id, changes)
        .await?;
    Ok(Json(AssignmentResponse {
        message: "Assignment updated successfully",
        assignment,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/assignments/{user_id}",
            get(list_assignments).post(create_assignment),
        )
        .route(
            "/assignments/{user_id}/{assignment_id}",
            put(update_assignment),
        )
}
