use axum::{Router, routing::get};

use crate::application::http::server::app_state::AppState;

pub const GREETING: &str = "Hi! I am a merchant-service";

pub fn index_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/", root_path), get(|| async { GREETING }))
}
