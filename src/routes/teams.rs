use axum::{
    extract::{Path, Query, State},
    response::{Html, Json},
};

use super::{AppState, SeasonContext, SeasonQuery};
use crate::error::{ApiError, PageError};
use crate::models::TeamData;
use crate::roster::group_roster;
use crate::season::FIRST_SEASON;
use crate::standings::{find_team_record, group_teams_by_division};
use crate::views::teams::{render_detail, render_list, TeamPage};

// GET /teams - All teams grouped by division
pub async fn teams_page(State(state): State<AppState>) -> Html<String> {
    let teams = state.mlb.get_teams().await;
    Html(render_list(&group_teams_by_division(teams)))
}

// GET /teams/{id}?season=2024 - Team profile, roster and franchise history
pub async fn team_page(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Query(params): Query<SeasonQuery>,
) -> Result<Html<String>, PageError> {
    let ctx = SeasonContext::from(&params);
    let client = &state.mlb;

    let (team, roster, standings, team_stats, franchise) = tokio::join!(
        client.get_team(team_id),
        client.get_team_roster(team_id, ctx.season),
        client.get_standings(ctx.season),
        client.get_team_stats(team_id, ctx.season),
        client.get_franchise_history(team_id),
    );
    let team = team.ok_or(ApiError::NotFound)?;

    let history = client
        .get_franchise_team_history(&franchise.all_team_ids, FIRST_SEASON, ctx.season)
        .await;
    let grouped = group_roster(&roster);

    Ok(Html(render_detail(&TeamPage {
        team: &team,
        season: ctx.season,
        seasons: &ctx.seasons,
        record: find_team_record(&standings, team_id),
        roster: &grouped,
        team_stats: &team_stats,
        history: &history,
    })))
}

// GET /api/team/{id}?season=2024 - Team, roster and season record as JSON
pub async fn get_team_data(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<TeamData>, ApiError> {
    let ctx = SeasonContext::from(&params);
    let client = &state.mlb;

    let (team, roster, standings) = tokio::join!(
        client.get_team(team_id),
        client.get_team_roster(team_id, ctx.season),
        client.get_standings(ctx.season),
    );
    let team = team.ok_or(ApiError::NotFound)?;
    let team_record = find_team_record(&standings, team_id).cloned();

    Ok(Json(TeamData {
        season: ctx.season,
        team,
        roster,
        team_record,
    }))
}
