use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{auth::require_jwt, config::Config, main_lib::AppState};

mod adaptive_practice;
mod assignments;
mod auth;
mod boosters;
mod dashboard;
mod health;
mod personalized_tutor;
mod shared;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    // Health and auth stay reachable without a token.
    let protected = Router::new()
        .merge(dashboard::router())
        .merge(assignments::router())
        .merge(adaptive_practice::router())
        .merge(boosters::router())
        .merge(personalized_tutor::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let api = Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(protected);

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
