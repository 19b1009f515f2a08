use axum::{
    extract::{Query, State},
    response::{Html, Json},
};

use super::{AppState, SeasonContext, SeasonQuery};
use crate::models::StandingsData;
use crate::views::standings::render;

// GET /standings?season=2024 - Standings page split by league
pub async fn standings_page(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Html<String> {
    let ctx = SeasonContext::from(&params);
    let standings = state.mlb.get_standings(ctx.season).await;
    if standings.is_empty() {
        tracing::warn!(season = ctx.season, "No standings data available");
    }

    Html(render(ctx.season, &ctx.seasons, &standings))
}

// GET /api/standings?season=2024 - Raw division standings
pub async fn get_standings(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Json<StandingsData> {
    let ctx = SeasonContext::from(&params);
    let standings = state.mlb.get_standings(ctx.season).await;

    Json(StandingsData {
        season: ctx.season,
        standings,
    })
}
