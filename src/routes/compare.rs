use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use super::{AppState, SeasonContext};
use crate::compare::Comparison;
use crate::views::compare::{render, ComparePage};

// ?player1=592450&player2=665742&season=2024
#[derive(Deserialize, Default)]
pub struct CompareQuery {
    #[serde(default)]
    player1: Option<String>,
    #[serde(default)]
    player2: Option<String>,
    #[serde(default)]
    season: Option<String>,
}

fn player_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

// GET /compare - Side-by-side season comparison of two players
pub async fn compare_page(
    State(state): State<AppState>,
    Query(params): Query<CompareQuery>,
) -> Html<String> {
    let ctx = SeasonContext::resolve(params.season.as_deref());
    let id1 = player_id(params.player1.as_deref());
    let id2 = player_id(params.player2.as_deref());

    let mut missing = false;
    let comparison = match (id1, id2) {
        (Some(a), Some(b)) => {
            let (p1, p2) = tokio::join!(state.mlb.get_player(a), state.mlb.get_player(b));
            match (p1, p2) {
                (Some(p1), Some(p2)) => Some(Comparison::new(&p1, &p2, ctx.season)),
                _ => {
                    tracing::warn!(player1 = a, player2 = b, "Comparison player not found");
                    missing = true;
                    None
                }
            }
        }
        _ => None,
    };

    Html(render(&ComparePage {
        player1: id1,
        player2: id2,
        season: ctx.season,
        seasons: &ctx.seasons,
        comparison: comparison.as_ref(),
        missing,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_ids_parse_leniently() {
        assert_eq!(player_id(Some(" 592450 ")), Some(592450));
        assert_eq!(player_id(Some("judge")), None);
        assert_eq!(player_id(None), None);
    }
}
