use axum::{
    extract::{Query, State},
    response::{Html, Json},
};

use super::{AppState, SeasonContext, SeasonQuery};
use crate::data::awards::{cy_young_winners, mvp_winners};
use crate::data::{spotlight, trivia};
use crate::mlb::{MlbClient, StatGroupKind, AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID};
use crate::models::{DashboardData, Leader, LeagueLeaders, LeaguePair};
use crate::season;
use crate::views::dashboard::{render, DashboardPage};

const LEADER_LIMIT: u32 = 10;

fn first(leaders: Vec<Leader>) -> Option<Leader> {
    leaders.into_iter().next()
}

/// Everything the dashboard shows for a season, fetched concurrently.
pub async fn load_dashboard(client: &MlbClient, season: i32) -> DashboardData {
    use StatGroupKind::{Hitting, Pitching};

    let (hr_leaders, avg_leaders, era_leaders, k_leaders, standings) = tokio::join!(
        client.get_leaders(Hitting, "homeRuns", season, LEADER_LIMIT),
        client.get_leaders(Hitting, "battingAverage", season, LEADER_LIMIT),
        client.get_leaders(Pitching, "earnedRunAverage", season, LEADER_LIMIT),
        client.get_leaders(Pitching, "strikeouts", season, LEADER_LIMIT),
        client.get_standings(season),
    );

    let (al_hr, nl_hr, al_avg, nl_avg, al_era, nl_era) = tokio::join!(
        client.get_leaders_by_league(Hitting, "homeRuns", AMERICAN_LEAGUE_ID, season, 1),
        client.get_leaders_by_league(Hitting, "homeRuns", NATIONAL_LEAGUE_ID, season, 1),
        client.get_leaders_by_league(Hitting, "battingAverage", AMERICAN_LEAGUE_ID, season, 1),
        client.get_leaders_by_league(Hitting, "battingAverage", NATIONAL_LEAGUE_ID, season, 1),
        client.get_leaders_by_league(Pitching, "earnedRunAverage", AMERICAN_LEAGUE_ID, season, 1),
        client.get_leaders_by_league(Pitching, "earnedRunAverage", NATIONAL_LEAGUE_ID, season, 1),
    );

    DashboardData {
        season,
        hr_leaders,
        avg_leaders,
        era_leaders,
        k_leaders,
        standings,
        mvp_winners: mvp_winners(),
        cy_young_winners: cy_young_winners(),
        league_leaders: LeagueLeaders {
            hr: LeaguePair {
                al: first(al_hr),
                nl: first(nl_hr),
            },
            avg: LeaguePair {
                al: first(al_avg),
                nl: first(nl_avg),
            },
            era: LeaguePair {
                al: first(al_era),
                nl: first(nl_era),
            },
        },
    }
}

// GET / - Dashboard page
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Html<String> {
    let ctx = SeasonContext::from(&params);
    let data = load_dashboard(&state.mlb, ctx.season).await;

    let today = season::league_today();
    let questions = trivia::daily_questions(today);

    Html(render(&DashboardPage {
        data: &data,
        current_year: ctx.current_year,
        seasons: &ctx.seasons,
        spotlight: spotlight::daily_player(today),
        trivia: &questions,
    }))
}

// GET /api/dashboard?season=2024 - Dashboard data as JSON
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Json<DashboardData> {
    let ctx = SeasonContext::from(&params);
    Json(load_dashboard(&state.mlb, ctx.season).await)
}
