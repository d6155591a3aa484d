use askama::Template;
use axum::{extract::State, response::IntoResponse};

use super::content::{Feature, PainPoint, FEATURES, PAIN_POINTS};
use crate::app::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub canonical_url: String,
    pub pain_points: &'static [PainPoint],
    pub features: &'static [Feature],
}

#[tracing::instrument(name = "Home page", skip(state))]
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        canonical_url: format!("{}/", state.base_url.trim_end_matches('/')),
        pain_points: PAIN_POINTS,
        features: FEATURES,
    }
}
