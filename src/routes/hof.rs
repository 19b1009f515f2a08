use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use super::AppState;
use crate::hof::{filter_members, group_by_year, induction_years};
use crate::views::hof::{render, HofPage};

// ?q=ryan&year=1999
#[derive(Deserialize, Default)]
pub struct HofQuery {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    year: Option<String>,
}

// GET /hof - Hall of Fame inductees by class
pub async fn hof_page(
    State(state): State<AppState>,
    Query(params): Query<HofQuery>,
) -> Html<String> {
    let members = state.mlb.get_hall_of_famers().await;

    let query = params.q.unwrap_or_default();
    let year = params.year.as_deref().and_then(|y| y.trim().parse().ok());

    let filtered = filter_members(&members, &query, year);
    let classes = group_by_year(&filtered);
    let years = induction_years(&members);

    Html(render(&HofPage {
        query: &query,
        year,
        years: &years,
        classes: &classes,
        total: members.len(),
    }))
}
