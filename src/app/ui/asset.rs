use axum::Router;
use tower_http::services::ServeDir;

use super::AppState;

/// Client script and stylesheet for the landing page.
pub fn router() -> Router<AppState> {
    Router::new().nest_service("/assets", ServeDir::new("assets"))
}
