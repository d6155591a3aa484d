use axum::{routing::get, Router};

use super::AppState;

pub mod content;
pub mod route;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(route::home_page))
}
