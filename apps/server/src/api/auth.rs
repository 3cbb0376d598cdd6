use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use smartedtech_core::users::{RegisterUser, User};

use super::shared::required;
use crate::{
    auth::AuthError,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct RegisterRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    avatar: Option<String>,
}

#[derive(Deserialize)]
struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
struct RegisterResponse {
    message: &'static str,
    user: User,
}

#[derive(Serialize)]
struct LoginResponse {
    message: &'static str,
    user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<u64>,
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let input = RegisterUser {
        name: required(body.name, "name")?,
        email: required(body.email, "email")?,
        password: required(body.password, "password")?,
        avatar: body.avatar,
    };
    let user = state.user_service.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully",
            user,
        }),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = required(body.email, "email")?;
    let password = required(body.password, "password")?;
    let user = state.user_service.login(&email, &password).await?;

    let mut response = LoginResponse {
        message: "Login successful",
        user,
        access_token: None,
        token_type: None,
        expires_in: None,
    };
    if let Some(auth) = state.auth.as_ref() {
        let token = auth.issue_token(&response.user.id).map_err(|err| match err {
            AuthError::Internal(msg) => ApiError::Anyhow(anyhow::anyhow!(msg)),
            AuthError::Unauthorized => ApiError::Unauthorized("Unauthorized".to_string()),
        })?;
        response.access_token = Some(token);
        response.token_type = Some("Bearer");
        response.expires_in = Some(auth.expires_in().as_secs());
    }
    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}
