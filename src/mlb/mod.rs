//! Typed accessors for the MLB Stats API.
//!
//! Every accessor degrades to an empty value (`Vec::new()`, `None`, default
//! struct) when the upstream call fails; failures are logged by the fetch
//! layer and never reach handlers.

pub mod fetch;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::models::*;
use fetch::{fetch_with_retry, safe_json, RetryPolicy};

/// Base path for the public MLB Stats API.
pub const MLB_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

pub const AMERICAN_LEAGUE_ID: i64 = 103;
pub const NATIONAL_LEAGUE_ID: i64 = 104;

/// Seasons requested concurrently when walking team history.
pub const HISTORY_CHUNK_SIZE: usize = 5;

const SEARCH_LIMIT: u32 = 10;
pub const MIN_SEARCH_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatGroupKind {
    Hitting,
    Pitching,
}

impl StatGroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatGroupKind::Hitting => "hitting",
            StatGroupKind::Pitching => "pitching",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadshotSize {
    Small,
    Medium,
    Large,
}

impl HeadshotSize {
    fn width(&self) -> u32 {
        match self {
            HeadshotSize::Small => 67,
            HeadshotSize::Medium => 213,
            HeadshotSize::Large => 426,
        }
    }
}

pub fn player_headshot_url(player_id: i64, size: HeadshotSize) -> String {
    format!(
        "https://img.mlbstatic.com/mlb-photos/image/upload/d_people:generic:headshot:67:current.png/w_{},q_auto:best/v1/people/{}/headshot/67/current",
        size.width(),
        player_id
    )
}

pub fn team_logo_url(team_id: i64) -> String {
    format!("https://www.mlbstatic.com/team-logos/{team_id}.svg")
}

/// Shared handle to the upstream API. Cheap to clone; handed to handlers
/// as router state.
#[derive(Debug, Clone)]
pub struct MlbClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
    history_pause: Duration,
}

impl MlbClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.mlb_base_url.clone(),
            retry: config.retry,
            history_pause: config.history_pause,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, params: &[(&str, String)]) -> Option<String> {
        let raw = format!("{}{}", self.base_url, path);
        match Url::parse_with_params(&raw, params) {
            Ok(url) => Some(url.to_string()),
            Err(err) => {
                tracing::error!(url = %raw, "Invalid upstream URL: {}", err);
                None
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Option<T> {
        let url = self.url(path, params)?;
        safe_json(fetch_with_retry(&self.http, &url, &self.retry).await).await
    }

    pub async fn search_players(&self, query: &str) -> Vec<Player> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Vec::new();
        }

        let params = [
            ("names", query.to_string()),
            ("sportId", "1".to_string()),
            ("limit", SEARCH_LIMIT.to_string()),
        ];
        self.get_json::<PeopleEnvelope>("/people/search", &params)
            .await
            .map(|e| e.people)
            .unwrap_or_default()
    }

    /// Player with current team and year-by-year hitting and pitching stats.
    pub async fn get_player(&self, player_id: i64) -> Option<Player> {
        let params = [(
            "hydrate",
            "currentTeam,stats(group=[hitting,pitching],type=[yearByYear])".to_string(),
        )];
        self.get_json::<PeopleEnvelope>(&format!("/people/{player_id}"), &params)
            .await?
            .people
            .into_iter()
            .next()
    }

    /// Season splits for a player across both stat groups.
    pub async fn get_player_stats(&self, player_id: i64, season: i32) -> Vec<StatSplit> {
        let params = [
            ("stats", "season".to_string()),
            ("season", season.to_string()),
            ("group", "hitting,pitching".to_string()),
        ];
        self.get_json::<StatsEnvelope>(&format!("/people/{player_id}/stats"), &params)
            .await
            .map(|e| e.stats.into_iter().flat_map(|g| g.splits).collect())
            .unwrap_or_default()
    }

    pub async fn get_teams(&self) -> Vec<Team> {
        self.get_json::<TeamsEnvelope>("/teams", &[("sportId", "1".to_string())])
            .await
            .map(|e| e.teams)
            .unwrap_or_default()
    }

    pub async fn get_team(&self, team_id: i64) -> Option<Team> {
        self.get_json::<TeamsEnvelope>(&format!("/teams/{team_id}"), &[])
            .await?
            .teams
            .into_iter()
            .next()
    }

    pub async fn get_standings(&self, season: i32) -> Vec<Division> {
        self.fetch_standings(season, "team(division)").await
    }

    async fn fetch_standings(&self, season: i32, hydrate: &str) -> Vec<Division> {
        let params = [
            ("leagueId", format!("{AMERICAN_LEAGUE_ID},{NATIONAL_LEAGUE_ID}")),
            ("season", season.to_string()),
            ("standingsTypes", "regularSeason".to_string()),
            ("hydrate", hydrate.to_string()),
        ];
        self.get_json::<StandingsEnvelope>("/standings", &params)
            .await
            .map(|e| e.records)
            .unwrap_or_default()
    }

    pub async fn get_leaders(
        &self,
        group: StatGroupKind,
        category: &str,
        season: i32,
        limit: u32,
    ) -> Vec<Leader> {
        self.fetch_leaders(group, category, None, season, limit).await
    }

    pub async fn get_leaders_by_league(
        &self,
        group: StatGroupKind,
        category: &str,
        league_id: i64,
        season: i32,
        limit: u32,
    ) -> Vec<Leader> {
        self.fetch_leaders(group, category, Some(league_id), season, limit)
            .await
    }

    async fn fetch_leaders(
        &self,
        group: StatGroupKind,
        category: &str,
        league_id: Option<i64>,
        season: i32,
        limit: u32,
    ) -> Vec<Leader> {
        let mut params = vec![
            ("leaderCategories", category.to_string()),
            ("season", season.to_string()),
            ("sportId", "1".to_string()),
            ("limit", limit.to_string()),
            ("statGroup", group.as_str().to_string()),
        ];
        if let Some(id) = league_id {
            params.push(("leagueId", id.to_string()));
        }

        self.get_json::<LeadersEnvelope>("/stats/leaders", &params)
            .await
            .and_then(|e| e.league_leaders.into_iter().next())
            .map(|c| c.leaders)
            .unwrap_or_default()
    }

    pub async fn get_team_roster(&self, team_id: i64, season: i32) -> Vec<Player> {
        let params = [("season", season.to_string())];
        self.get_json::<RosterEnvelope>(&format!("/teams/{team_id}/roster"), &params)
            .await
            .map(|e| e.roster.into_iter().map(|r| r.person).collect())
            .unwrap_or_default()
    }

    pub async fn get_team_stats(&self, team_id: i64, season: i32) -> Vec<StatGroup> {
        let params = [
            ("stats", "season".to_string()),
            ("season", season.to_string()),
            ("group", "hitting,pitching".to_string()),
        ];
        self.get_json::<StatsEnvelope>(&format!("/teams/{team_id}/stats"), &params)
            .await
            .map(|e| e.stats)
            .unwrap_or_default()
    }

    /// Season-by-season record for a team, newest first. Seasons are
    /// requested [`HISTORY_CHUNK_SIZE`] at a time with a pause between
    /// chunks; seasons that fail or lack the team are skipped.
    pub async fn get_team_history(
        &self,
        team_id: i64,
        start_year: i32,
        end_year: i32,
    ) -> Vec<TeamHistoricalRecord> {
        self.get_franchise_team_history(&[team_id], start_year, end_year)
            .await
    }

    /// Like [`get_team_history`](Self::get_team_history), matching a season
    /// record against any id the franchise has played under.
    pub async fn get_franchise_team_history(
        &self,
        team_ids: &[i64],
        start_year: i32,
        end_year: i32,
    ) -> Vec<TeamHistoricalRecord> {
        let team_ids: Arc<[i64]> = Arc::from(team_ids);
        let years: Vec<i32> = (start_year..=end_year).collect();
        let mut records = Vec::with_capacity(years.len());

        for (i, chunk) in years.chunks(HISTORY_CHUNK_SIZE).enumerate() {
            if i > 0 && !self.history_pause.is_zero() {
                tokio::time::sleep(self.history_pause).await;
            }

            let mut set = JoinSet::new();
            for &year in chunk {
                let client = self.clone();
                let ids = Arc::clone(&team_ids);
                set.spawn(async move { client.season_record(&ids, year).await });
            }

            while let Some(joined) = set.join_next().await {
                match joined {
                    Ok(Some(record)) => records.push(record),
                    Ok(None) => {}
                    Err(err) => tracing::error!(?team_ids, "History task failed: {}", err),
                }
            }
        }

        records.sort_by(|a, b| b.season.cmp(&a.season));
        tracing::debug!(?team_ids, seasons = records.len(), "Collected team history");
        records
    }

    async fn season_record(&self, team_ids: &[i64], season: i32) -> Option<TeamHistoricalRecord> {
        self.fetch_standings(season, "team")
            .await
            .iter()
            .flat_map(|d| d.team_records.iter())
            .find(|r| team_ids.contains(&r.team.id))
            .map(|r| TeamHistoricalRecord::from_standing(season, r))
    }

    /// All ids this franchise has played under, current id first.
    pub async fn get_franchise_history(&self, team_id: i64) -> FranchiseHistory {
        let params = [("hydrate", "previousScheduledTeams".to_string())];
        let team = self
            .get_json::<FranchiseEnvelope>(&format!("/teams/{team_id}"), &params)
            .await
            .and_then(|e| e.teams.into_iter().next());

        let mut history = FranchiseHistory {
            all_team_ids: vec![team_id],
            name: String::new(),
        };
        if let Some(team) = team {
            history
                .all_team_ids
                .extend(team.previous_scheduled_teams.iter().map(|t| t.id));
            history.name = team.name;
        }
        history
    }

    /// Hall of Fame inductees, newest class first.
    pub async fn get_hall_of_famers(&self) -> Vec<HallOfFamer> {
        let mut members: Vec<HallOfFamer> = self
            .get_json::<AwardsEnvelope>("/awards/MLBHOF/recipients", &[])
            .await
            .map(|e| e.awards.iter().filter_map(|a| a.to_hall_of_famer()).collect())
            .unwrap_or_default();

        members.sort_by(|a, b| {
            b.induction_year
                .cmp(&a.induction_year)
                .then_with(|| a.player_name.cmp(&b.player_name))
        });
        members
    }

    pub async fn get_all_star_rosters(&self, season: i32) -> AllStarRosters {
        let (al, nl) = tokio::join!(
            self.all_star_selections("ALAS", season),
            self.all_star_selections("NLAS", season),
        );
        AllStarRosters { season, al, nl }
    }

    async fn all_star_selections(&self, award_id: &str, season: i32) -> Vec<AllStarSelection> {
        let params = [("season", season.to_string())];
        self.get_json::<AwardsEnvelope>(&format!("/awards/{award_id}/recipients"), &params)
            .await
            .map(|e| e.awards.iter().map(|a| a.to_all_star_selection()).collect())
            .unwrap_or_default()
    }
}
