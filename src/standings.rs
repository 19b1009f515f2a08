use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::mlb::{AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID};
use crate::models::{Division, StandingsRecord, Team};

const DIVISION_ORDER: [&str; 3] = ["East", "Central", "West"];

/// Position of a division in East, Central, West order. Names matching
/// none of them sort last.
pub fn division_rank(name: &str) -> usize {
    DIVISION_ORDER
        .iter()
        .position(|region| name.contains(region))
        .unwrap_or(DIVISION_ORDER.len())
}

/// Stable re-sort into East, Central, West.
pub fn sort_divisions<D: Borrow<Division>>(divisions: &mut [D]) {
    divisions.sort_by_key(|d| division_rank(<D as Borrow<Division>>::borrow(d).name()));
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum League {
    American,
    National,
}

impl League {
    pub fn label(&self) -> &'static str {
        match self {
            League::American => "American League",
            League::National => "National League",
        }
    }
}

/// League of a division block: by league id, else by division name.
pub fn league_of(division: &Division) -> Option<League> {
    match division.league_id() {
        Some(AMERICAN_LEAGUE_ID) => return Some(League::American),
        Some(NATIONAL_LEAGUE_ID) => return Some(League::National),
        _ => {}
    }

    let name = division.name();
    if name.contains("American") {
        Some(League::American)
    } else if name.contains("National") {
        Some(League::National)
    } else {
        None
    }
}

#[derive(Debug, Default)]
pub struct LeagueSplit<'a> {
    pub al: Vec<&'a Division>,
    pub nl: Vec<&'a Division>,
}

impl LeagueSplit<'_> {
    pub fn has_data(&self) -> bool {
        !self.al.is_empty() || !self.nl.is_empty()
    }
}

/// AL and NL divisions, each in East, Central, West order.
pub fn split_by_league(standings: &[Division]) -> LeagueSplit<'_> {
    let mut split = LeagueSplit::default();
    for division in standings {
        match league_of(division) {
            Some(League::American) => split.al.push(division),
            Some(League::National) => split.nl.push(division),
            None => {}
        }
    }
    sort_divisions(&mut split.al);
    sort_divisions(&mut split.nl);
    split
}

fn total_wins<'a>(divisions: impl Iterator<Item = &'a Division>) -> i64 {
    divisions
        .flat_map(|d| d.team_records.iter())
        .map(|r| r.wins)
        .sum()
}

/// Total wins across all AL and NL teams.
pub fn league_wins(standings: &[Division]) -> (i64, i64) {
    let split = split_by_league(standings);
    (
        total_wins(split.al.into_iter()),
        total_wins(split.nl.into_iter()),
    )
}

pub fn find_team_record(standings: &[Division], team_id: i64) -> Option<&StandingsRecord> {
    standings
        .iter()
        .flat_map(|d| d.team_records.iter())
        .find(|r| r.team.id == team_id)
}

pub fn short_division_name(name: &str) -> String {
    name.replace("American League ", "AL ")
        .replace("National League ", "NL ")
}

/// Teams grouped by division name: AL divisions first, then alphabetical;
/// teams alphabetical within each division.
pub fn group_teams_by_division(teams: Vec<Team>) -> Vec<(String, Vec<Team>)> {
    let mut groups: BTreeMap<String, Vec<Team>> = BTreeMap::new();
    for team in teams {
        groups
            .entry(team.division_name().to_string())
            .or_default()
            .push(team);
    }

    let mut grouped: Vec<(String, Vec<Team>)> = groups.into_iter().collect();
    grouped.sort_by(|(a, _), (b, _)| {
        let a_al = a.contains("American");
        let b_al = b.contains("American");
        b_al.cmp(&a_al).then_with(|| a.cmp(b))
    });
    for (_, teams) in &mut grouped {
        teams.sort_by(|a, b| a.name.cmp(&b.name));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedRef;

    fn division(name: &str, league_id: Option<i64>, wins: &[i64]) -> Division {
        Division {
            division: Some(NamedRef {
                id: 0,
                name: name.to_string(),
            }),
            league: league_id.map(|id| NamedRef {
                id,
                name: String::new(),
            }),
            team_records: wins
                .iter()
                .enumerate()
                .map(|(i, &w)| StandingsRecord {
                    team: Team {
                        id: i as i64 + 1,
                        ..Team::default()
                    },
                    wins: w,
                    ..StandingsRecord::default()
                })
                .collect(),
        }
    }

    fn names(divisions: &[&Division]) -> Vec<String> {
        divisions.iter().map(|d| d.name().to_string()).collect()
    }

    #[test]
    fn divisions_sorted_east_central_west() {
        let mut divisions = vec![
            division("American League West", None, &[]),
            division("American League East", None, &[]),
            division("American League Central", None, &[]),
        ];
        sort_divisions(&mut divisions);

        let sorted: Vec<&str> = divisions.iter().map(|d| d.name()).collect();
        assert_eq!(
            sorted,
            vec!["American League East", "American League Central", "American League West"]
        );
    }

    #[test]
    fn unknown_division_sorts_last() {
        let mut divisions = vec![
            division("Wild Card", None, &[]),
            division("National League West", None, &[]),
            division("National League East", None, &[]),
        ];
        sort_divisions(&mut divisions);
        assert_eq!(divisions[0].name(), "National League East");
        assert_eq!(divisions[2].name(), "Wild Card");
    }

    #[test]
    fn split_uses_league_id_then_name() {
        let standings = vec![
            division("NL West", Some(104), &[]),
            division("AL Central", Some(103), &[]),
            division("American League East", None, &[]),
            division("National League Central", None, &[]),
            division("Mystery", None, &[]),
        ];
        let split = split_by_league(&standings);

        assert_eq!(names(&split.al), vec!["American League East", "AL Central"]);
        assert_eq!(names(&split.nl), vec!["National League Central", "NL West"]);
        assert!(split.has_data());
    }

    #[test]
    fn wins_total_per_league() {
        let standings = vec![
            division("American League East", Some(103), &[90, 80]),
            division("National League West", Some(104), &[100, 62]),
        ];
        assert_eq!(league_wins(&standings), (170, 162));
    }

    #[test]
    fn team_record_lookup() {
        let standings = vec![division("American League East", Some(103), &[90, 80])];
        assert_eq!(find_team_record(&standings, 2).map(|r| r.wins), Some(80));
        assert!(find_team_record(&standings, 42).is_none());
    }

    #[test]
    fn short_names() {
        assert_eq!(short_division_name("American League East"), "AL East");
        assert_eq!(short_division_name("National League West"), "NL West");
    }

    #[test]
    fn teams_grouped_al_first() {
        let team = |name: &str, division: &str| Team {
            name: name.to_string(),
            division: Some(NamedRef {
                id: 0,
                name: division.to_string(),
            }),
            ..Team::default()
        };
        let grouped = group_teams_by_division(vec![
            team("Los Angeles Dodgers", "National League West"),
            team("Toronto Blue Jays", "American League East"),
            team("Baltimore Orioles", "American League East"),
            team("Houston Astros", "American League West"),
        ]);

        let order: Vec<&str> = grouped.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            order,
            vec!["American League East", "American League West", "National League West"]
        );
        assert_eq!(grouped[0].1[0].name, "Baltimore Orioles");
    }
}
