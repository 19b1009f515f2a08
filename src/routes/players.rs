use axum::{
    extract::{Path, Query, State},
    response::{Html, Json},
};
use serde::Deserialize;
use tokio::task::JoinSet;

use super::{AppState, SeasonContext};
use crate::error::{ApiError, PageError};
use crate::mlb::{MlbClient, StatGroupKind, MIN_SEARCH_LEN};
use crate::models::{FeaturedPlayers, Leader, Player, SearchResults};
use crate::views::players::{render_detail, render_list, PlayersPage};

const FEATURED_LEADER_LIMIT: u32 = 8;
const MAX_FEATURED: usize = 12;

// Query parameters for the players page
#[derive(Deserialize, Default)]
pub struct PlayersQuery {
    #[serde(default)]
    season: Option<String>,
    #[serde(default)]
    q: Option<String>,
}

// Query parameters for searching players
#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Unique leader ids in order of appearance, capped at [`MAX_FEATURED`].
pub fn featured_ids(leader_lists: &[&[Leader]]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(MAX_FEATURED);
    for leader in leader_lists.iter().flat_map(|list| list.iter()) {
        if ids.len() == MAX_FEATURED {
            break;
        }
        if !ids.contains(&leader.person.id) {
            ids.push(leader.person.id);
        }
    }
    ids
}

/// Top home run and batting average leaders, hydrated with full profiles.
/// Players whose profile fails to load are left out.
pub async fn load_featured(client: &MlbClient, season: i32) -> Result<Vec<Player>, ApiError> {
    let (hr, avg) = tokio::join!(
        client.get_leaders(StatGroupKind::Hitting, "homeRuns", season, FEATURED_LEADER_LIMIT),
        client.get_leaders(StatGroupKind::Hitting, "battingAverage", season, FEATURED_LEADER_LIMIT),
    );
    let ids = featured_ids(&[hr.as_slice(), avg.as_slice()]);

    let mut set = JoinSet::new();
    for (position, id) in ids.into_iter().enumerate() {
        let client = client.clone();
        set.spawn(async move { (position, client.get_player(id).await) });
    }

    let mut hydrated = Vec::new();
    while let Some(joined) = set.join_next().await {
        let (position, player) = joined.map_err(|err| {
            tracing::error!("Featured player task failed: {}", err);
            ApiError::InternalError
        })?;
        if let Some(player) = player {
            hydrated.push((position, player));
        }
    }
    hydrated.sort_by_key(|(position, _)| *position);

    Ok(hydrated.into_iter().map(|(_, player)| player).collect())
}

// GET /players?season=2024&q=judge - Featured players and search
pub async fn players_page(
    State(state): State<AppState>,
    Query(params): Query<PlayersQuery>,
) -> Result<Html<String>, PageError> {
    let ctx = SeasonContext::resolve(params.season.as_deref());
    let query = params.q.unwrap_or_default();

    let (featured, results) = tokio::join!(
        load_featured(&state.mlb, ctx.season),
        state.mlb.search_players(&query),
    );

    Ok(Html(render_list(&PlayersPage {
        season: ctx.season,
        seasons: &ctx.seasons,
        featured: &featured?,
        query: &query,
        results: &results,
    })))
}

// GET /players/{id} - Player profile
pub async fn player_page(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let player = state
        .mlb
        .get_player(player_id)
        .await
        .ok_or(ApiError::NotFound)?;

    let ctx = SeasonContext::resolve(None);
    Ok(Html(render_detail(&player, ctx.season)))
}

// GET /api/players?season=2024 - Featured players as JSON
pub async fn get_featured_players(
    State(state): State<AppState>,
    Query(params): Query<PlayersQuery>,
) -> Result<Json<FeaturedPlayers>, ApiError> {
    let ctx = SeasonContext::resolve(params.season.as_deref());
    let featured_players = load_featured(&state.mlb, ctx.season).await?;

    Ok(Json(FeaturedPlayers {
        season: ctx.season,
        featured_players,
    }))
}

// GET /api/players/search?q=judge - Search players by name
pub async fn search_players(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    let query = params.q.trim().to_string();
    if query.chars().count() < MIN_SEARCH_LEN {
        return Err(ApiError::BadRequest(
            format!("query must be at least {MIN_SEARCH_LEN} characters"),
        ));
    }

    let players = state.mlb.search_players(&query).await;
    Ok(Json(SearchResults { query, players }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaderPerson;

    fn leader(id: i64) -> Leader {
        Leader {
            person: LeaderPerson {
                id,
                full_name: String::new(),
            },
            ..Leader::default()
        }
    }

    #[test]
    fn featured_ids_dedupe_and_cap() {
        let hr: Vec<Leader> = (1..=8).map(leader).collect();
        let avg: Vec<Leader> = [3, 4, 9, 10, 11, 12, 13, 14].into_iter().map(leader).collect();

        let ids = featured_ids(&[hr.as_slice(), avg.as_slice()]);
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }
}
