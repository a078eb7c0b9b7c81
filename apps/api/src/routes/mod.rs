pub mod career;
pub mod dojo;
pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Career tools
        .route("/analyze", post(career::handle_analyze))
        .route("/roadmap", post(career::handle_roadmap))
        .route("/generate-portfolio", post(career::handle_portfolio))
        .route("/linkedin/generate", post(career::handle_linkedin))
        // DSA dojo
        .route("/dsa/generate", post(dojo::handle_dsa_generate))
        .route("/dsa/run", post(dojo::handle_dsa_run))
        .route("/dsa/yuvi", post(dojo::handle_dsa_tutor))
        // Game box
        .route("/game/generate", post(dojo::handle_game_generate))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
