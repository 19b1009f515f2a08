use serde::{Deserialize, Serialize};

use crate::data::awards::LeagueAwards;

/// Any `{id, name}` reference the upstream API nests inside other objects
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub position_type: String,
    pub abbreviation: String,
}

/// Person record from `/people` and roster endpoints
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub id: i64,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub primary_number: Option<String>,
    pub birth_date: Option<String>,
    pub current_age: Option<u32>,
    pub birth_city: Option<String>,
    pub birth_country: Option<String>,
    pub height: Option<String>,
    pub weight: Option<u32>,
    pub active: bool,
    pub primary_position: Option<Position>,
    pub current_team: Option<NamedRef>,
    pub stats: Vec<StatGroup>,
}

impl Player {
    pub fn is_pitcher(&self) -> bool {
        self.primary_position
            .as_ref()
            .is_some_and(|p| p.position_type == "Pitcher")
    }

    pub fn position_abbreviation(&self) -> &str {
        self.primary_position
            .as_ref()
            .map(|p| p.abbreviation.as_str())
            .unwrap_or("")
    }

    /// Last word of the full name, used for compact chart labels
    pub fn short_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .last()
            .unwrap_or(&self.full_name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StatGroupName {
    pub display_name: String,
}

/// One `stats[]` entry: a stat group (hitting/pitching) and its splits
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StatGroup {
    pub group: Option<StatGroupName>,
    pub splits: Vec<StatSplit>,
}

impl StatGroup {
    pub fn is_group(&self, name: &str) -> bool {
        self.group.as_ref().is_some_and(|g| g.display_name == name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StatSplit {
    pub season: Option<String>,
    pub stat: StatLine,
    pub team: Option<NamedRef>,
}

/// Hitting and pitching fields as the upstream API sends them: counts are
/// numbers, rates are preformatted strings like ".301".
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StatLine {
    pub games_played: Option<i64>,
    pub ground_outs: Option<i64>,
    pub air_outs: Option<i64>,
    pub runs: Option<i64>,
    pub doubles: Option<i64>,
    pub triples: Option<i64>,
    pub home_runs: Option<i64>,
    pub strike_outs: Option<i64>,
    pub base_on_balls: Option<i64>,
    pub hits: Option<i64>,
    pub avg: Option<String>,
    pub at_bats: Option<i64>,
    pub obp: Option<String>,
    pub slg: Option<String>,
    pub ops: Option<String>,
    pub rbi: Option<i64>,
    pub stolen_bases: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub era: Option<String>,
    pub innings_pitched: Option<String>,
    pub whip: Option<String>,
    pub saves: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub team_name: String,
    pub abbreviation: String,
    pub location_name: String,
    pub division: Option<NamedRef>,
    pub league: Option<NamedRef>,
}

impl Team {
    pub fn division_name(&self) -> &str {
        self.division
            .as_ref()
            .map(|d| d.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Other")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Streak {
    pub streak_code: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StandingsRecord {
    pub team: Team,
    pub wins: i64,
    pub losses: i64,
    pub winning_percentage: String,
    pub games_back: String,
    pub runs_scored: i64,
    pub runs_allowed: i64,
    pub run_differential: i64,
    pub streak: Option<Streak>,
    pub division_rank: Option<String>,
    pub league_rank: Option<String>,
}

/// One division's block from `/standings`
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Division {
    pub division: Option<NamedRef>,
    pub league: Option<NamedRef>,
    pub team_records: Vec<StandingsRecord>,
}

impl Division {
    /// Division name, falling back to the hydrated team division when the
    /// record itself only carries an id.
    pub fn name(&self) -> &str {
        self.division
            .as_ref()
            .map(|d| d.name.as_str())
            .filter(|n| !n.is_empty())
            .or_else(|| {
                self.team_records
                    .first()
                    .and_then(|r| r.team.division.as_ref())
                    .map(|d| d.name.as_str())
            })
            .unwrap_or("")
    }

    pub fn league_id(&self) -> Option<i64> {
        self.league.as_ref().map(|l| l.id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderPerson {
    pub id: i64,
    pub full_name: String,
}

/// Ranked entry from `/stats/leaders`
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Leader {
    pub rank: u32,
    pub value: String,
    pub person: LeaderPerson,
    pub team: Option<NamedRef>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamHistoricalRecord {
    pub season: i32,
    pub wins: i64,
    pub losses: i64,
    pub winning_percentage: String,
    pub runs_scored: i64,
    pub runs_allowed: i64,
    pub run_differential: i64,
    pub division_rank: Option<u32>,
    pub league_rank: Option<u32>,
}

impl TeamHistoricalRecord {
    pub fn from_standing(season: i32, record: &StandingsRecord) -> Self {
        let winning_percentage = if record.winning_percentage.is_empty() {
            ".000".to_string()
        } else {
            record.winning_percentage.clone()
        };

        Self {
            season,
            wins: record.wins,
            losses: record.losses,
            winning_percentage,
            runs_scored: record.runs_scored,
            runs_allowed: record.runs_allowed,
            run_differential: record.run_differential,
            division_rank: record.division_rank.as_deref().and_then(|r| r.parse().ok()),
            league_rank: record.league_rank.as_deref().and_then(|r| r.parse().ok()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseHistory {
    pub all_team_ids: Vec<i64>,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFamer {
    pub player_id: i64,
    pub player_name: String,
    pub induction_year: i32,
    pub position: Option<String>,
    pub votes: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllStarSelection {
    pub player_id: i64,
    pub player_name: String,
    pub position: Option<String>,
    pub team_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllStarRosters {
    pub season: i32,
    pub al: Vec<AllStarSelection>,
    pub nl: Vec<AllStarSelection>,
}

impl AllStarRosters {
    pub fn is_empty(&self) -> bool {
        self.al.is_empty() && self.nl.is_empty()
    }
}

// Upstream envelopes

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PeopleEnvelope {
    pub people: Vec<Player>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct TeamsEnvelope {
    pub teams: Vec<Team>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct StandingsEnvelope {
    pub records: Vec<Division>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct StatsEnvelope {
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RosterEntry {
    pub person: Player,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RosterEnvelope {
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LeaderCategory {
    pub leaders: Vec<Leader>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadersEnvelope {
    pub league_leaders: Vec<LeaderCategory>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FranchiseTeam {
    pub id: i64,
    pub name: String,
    pub previous_scheduled_teams: Vec<NamedRef>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FranchiseEnvelope {
    pub teams: Vec<FranchiseTeam>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AwardPlayer {
    pub id: i64,
    pub name_first_last: String,
    pub primary_position: Option<Position>,
}

/// Entry from `/awards/{awardId}/recipients`
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AwardRecipient {
    pub id: String,
    pub name: String,
    pub date: Option<String>,
    pub season: Option<String>,
    pub team: Option<NamedRef>,
    pub player: Option<AwardPlayer>,
    pub votes: Option<i64>,
    pub notes: Option<String>,
}

impl AwardRecipient {
    fn player_id(&self) -> i64 {
        self.player.as_ref().map(|p| p.id).unwrap_or_default()
    }

    fn player_name(&self) -> String {
        self.player
            .as_ref()
            .map(|p| p.name_first_last.clone())
            .unwrap_or_default()
    }

    fn position(&self) -> Option<String> {
        self.player
            .as_ref()
            .and_then(|p| p.primary_position.as_ref())
            .map(|p| p.abbreviation.clone())
            .filter(|a| !a.is_empty())
    }

    /// Induction year from `season`, else the leading year of `date`.
    fn year(&self) -> Option<i32> {
        self.season
            .as_deref()
            .and_then(|s| s.parse().ok())
            .or_else(|| self.date.as_deref()?.get(..4)?.parse().ok())
    }

    pub fn to_hall_of_famer(&self) -> Option<HallOfFamer> {
        let player = self.player.as_ref()?;
        Some(HallOfFamer {
            player_id: player.id,
            player_name: player.name_first_last.clone(),
            induction_year: self.year()?,
            position: self.position(),
            votes: self.votes,
            notes: self.notes.clone(),
        })
    }

    pub fn to_all_star_selection(&self) -> AllStarSelection {
        AllStarSelection {
            player_id: self.player_id(),
            player_name: self.player_name(),
            position: self.position(),
            team_name: self.team.as_ref().map(|t| t.name.clone()),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AwardsEnvelope {
    pub awards: Vec<AwardRecipient>,
}

// Responses served by the JSON endpoints

#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaguePair {
    pub al: Option<Leader>,
    pub nl: Option<Leader>,
}

#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeagueLeaders {
    pub hr: LeaguePair,
    pub avg: LeaguePair,
    pub era: LeaguePair,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub season: i32,
    pub hr_leaders: Vec<Leader>,
    pub avg_leaders: Vec<Leader>,
    pub era_leaders: Vec<Leader>,
    pub k_leaders: Vec<Leader>,
    pub standings: Vec<Division>,
    pub mvp_winners: LeagueAwards,
    pub cy_young_winners: LeagueAwards,
    pub league_leaders: LeagueLeaders,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StandingsData {
    pub season: i32,
    pub standings: Vec<Division>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamData {
    pub season: i32,
    pub team: Team,
    pub roster: Vec<Player>,
    pub team_record: Option<StandingsRecord>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedPlayers {
    pub season: i32,
    pub featured_players: Vec<Player>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub players: Vec<Player>,
}
