use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use super::AppState;
use crate::views::sitemap::render;

// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let teams = state.mlb.get_teams().await;
    (
        [(header::CONTENT_TYPE, "application/xml")],
        render(&state.public_base_url, &teams),
    )
}
