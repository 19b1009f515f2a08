use axum::{
    extract::{Query, State},
    response::Html,
};

use super::{AppState, SeasonContext, SeasonQuery};
use crate::views::all_star::render;

// GET /all-star?season=2024 - All-Star selections by league
pub async fn all_star_page(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Html<String> {
    let ctx = SeasonContext::from(&params);
    let rosters = state.mlb.get_all_star_rosters(ctx.season).await;
    Html(render(&rosters, &ctx.seasons))
}
