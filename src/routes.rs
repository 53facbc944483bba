// src/routes.rs
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const INDEX_PATH: &str = "/polls/";

pub fn detail_path(question_id: i64) -> String {
    format!("/polls/{question_id}/")
}

pub fn results_path(question_id: i64) -> String {
    format!("/polls/{question_id}/results/")
}

pub fn vote_path(question_id: i64) -> String {
    format!("/polls/{question_id}/vote/")
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(INDEX_PATH, get(handlers::index))
        .route("/polls/{question_id}/", get(handlers::detail))
        .route("/polls/{question_id}/results/", get(handlers::results))
        .route("/polls/{question_id}/vote/", post(handlers::vote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
