//! Head-to-head player comparison for a single season.

use crate::models::{Player, StatLine};

#[derive(Debug, Default, Clone, Copy)]
pub struct SeasonStats<'a> {
    pub hitting: Option<&'a StatLine>,
    pub pitching: Option<&'a StatLine>,
}

/// First split for `season` in each stat group of a hydrated player.
pub fn season_stats<'a>(player: &'a Player, season: &str) -> SeasonStats<'a> {
    let find = |group: &str| {
        player
            .stats
            .iter()
            .find(|g| g.is_group(group))?
            .splits
            .iter()
            .find(|s| s.season.as_deref() == Some(season))
            .map(|s| &s.stat)
    };

    SeasonStats {
        hitting: find("hitting"),
        pitching: find("pitching"),
    }
}

/// Leading numeric value of a stat, `0.0` when absent or unparseable.
pub fn parse_stat(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

fn rate(value: &Option<String>) -> f64 {
    value.as_deref().map(parse_stat).unwrap_or(0.0)
}

fn count(value: Option<i64>) -> f64 {
    value.unwrap_or(0) as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub stat: &'static str,
    pub player1: f64,
    pub player2: f64,
}

/// Scale both values to 0-100 against the larger of the two (at least 1).
pub fn normalize(v1: f64, v2: f64) -> (f64, f64) {
    let max = v1.max(v2).max(1.0);
    (v1 / max * 100.0, v2 / max * 100.0)
}

fn radar_inputs(stat: Option<&StatLine>) -> [f64; 5] {
    let Some(s) = stat else {
        return [0.0; 5];
    };
    [
        rate(&s.avg) * 1000.0,
        count(s.home_runs),
        count(s.rbi),
        count(s.stolen_bases),
        rate(&s.ops) * 1000.0,
    ]
}

/// Normalized AVG, HR, RBI, SB, OPS for a radar chart.
pub fn radar_series(a: Option<&StatLine>, b: Option<&StatLine>) -> Vec<ChartPoint> {
    const LABELS: [&str; 5] = ["AVG", "HR", "RBI", "SB", "OPS"];
    let (va, vb) = (radar_inputs(a), radar_inputs(b));

    LABELS
        .iter()
        .zip(va.iter().zip(vb.iter()))
        .map(|(&stat, (&x, &y))| {
            let (player1, player2) = normalize(x, y);
            ChartPoint {
                stat,
                player1,
                player2,
            }
        })
        .collect()
}

/// Raw home runs, RBI, hits, runs for a bar chart.
pub fn counting_series(a: Option<&StatLine>, b: Option<&StatLine>) -> Vec<ChartPoint> {
    let pick = |s: Option<&StatLine>, f: fn(&StatLine) -> Option<i64>| count(s.and_then(f));
    let fields: [(&'static str, fn(&StatLine) -> Option<i64>); 4] = [
        ("Home Runs", |s| s.home_runs),
        ("RBI", |s| s.rbi),
        ("Hits", |s| s.hits),
        ("Runs", |s| s.runs),
    ];

    fields
        .into_iter()
        .map(|(stat, f)| ChartPoint {
            stat,
            player1: pick(a, f),
            player2: pick(b, f),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
    Tie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: &'static str,
    pub value1: Option<String>,
    pub value2: Option<String>,
    pub winner: Winner,
}

pub fn pick_winner(v1: f64, v2: f64, higher_is_better: bool) -> Winner {
    let (better, worse) = if higher_is_better {
        (v1 > v2, v1 < v2)
    } else {
        (v1 < v2, v1 > v2)
    };
    if better {
        Winner::First
    } else if worse {
        Winner::Second
    } else {
        Winner::Tie
    }
}

#[derive(Clone, Copy)]
enum Field {
    Count(fn(&StatLine) -> Option<i64>),
    Rate(fn(&StatLine) -> Option<&String>),
}

impl Field {
    fn display(&self, stat: Option<&StatLine>) -> Option<String> {
        let stat = stat?;
        match self {
            Field::Count(f) => f(stat).map(|v| v.to_string()),
            Field::Rate(f) => f(stat).cloned(),
        }
    }
}

fn build_rows(
    fields: &[(&'static str, Field, bool)],
    a: Option<&StatLine>,
    b: Option<&StatLine>,
) -> Vec<StatRow> {
    fields
        .iter()
        .map(|&(label, field, higher_is_better)| {
            let value1 = field.display(a);
            let value2 = field.display(b);
            let n1 = value1.as_deref().map(parse_stat).unwrap_or(0.0);
            let n2 = value2.as_deref().map(parse_stat).unwrap_or(0.0);
            StatRow {
                label,
                winner: pick_winner(n1, n2, higher_is_better),
                value1,
                value2,
            }
        })
        .collect()
}

pub fn hitting_rows(a: Option<&StatLine>, b: Option<&StatLine>) -> Vec<StatRow> {
    let fields = [
        ("G", Field::Count(|s| s.games_played), true),
        ("AB", Field::Count(|s| s.at_bats), true),
        ("H", Field::Count(|s| s.hits), true),
        ("HR", Field::Count(|s| s.home_runs), true),
        ("RBI", Field::Count(|s| s.rbi), true),
        ("R", Field::Count(|s| s.runs), true),
        ("BB", Field::Count(|s| s.base_on_balls), true),
        ("K", Field::Count(|s| s.strike_outs), false),
        ("SB", Field::Count(|s| s.stolen_bases), true),
        ("AVG", Field::Rate(|s| s.avg.as_ref()), true),
        ("OBP", Field::Rate(|s| s.obp.as_ref()), true),
        ("SLG", Field::Rate(|s| s.slg.as_ref()), true),
        ("OPS", Field::Rate(|s| s.ops.as_ref()), true),
    ];
    build_rows(&fields, a, b)
}

pub fn pitching_rows(a: Option<&StatLine>, b: Option<&StatLine>) -> Vec<StatRow> {
    let fields = [
        ("W", Field::Count(|s| s.wins), true),
        ("L", Field::Count(|s| s.losses), false),
        ("ERA", Field::Rate(|s| s.era.as_ref()), false),
        ("G", Field::Count(|s| s.games_played), true),
        ("IP", Field::Rate(|s| s.innings_pitched.as_ref()), true),
        ("K", Field::Count(|s| s.strike_outs), true),
        ("BB", Field::Count(|s| s.base_on_balls), false),
        ("SV", Field::Count(|s| s.saves), true),
        ("WHIP", Field::Rate(|s| s.whip.as_ref()), false),
    ];
    build_rows(&fields, a, b)
}

/// Everything the compare page shows for two hydrated players.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub season: i32,
    pub name1: String,
    pub name2: String,
    pub short1: String,
    pub short2: String,
    pub radar: Vec<ChartPoint>,
    pub counting: Vec<ChartPoint>,
    pub hitting: Vec<StatRow>,
    pub pitching: Vec<StatRow>,
}

impl Comparison {
    pub fn new(p1: &Player, p2: &Player, season: i32) -> Self {
        let key = season.to_string();
        let s1 = season_stats(p1, &key);
        let s2 = season_stats(p2, &key);

        let has_hitting = s1.hitting.is_some() || s2.hitting.is_some();
        let has_pitching = s1.pitching.is_some() || s2.pitching.is_some();

        Self {
            season,
            name1: p1.full_name.clone(),
            name2: p2.full_name.clone(),
            short1: p1.short_name().to_string(),
            short2: p2.short_name().to_string(),
            radar: if has_hitting {
                radar_series(s1.hitting, s2.hitting)
            } else {
                Vec::new()
            },
            counting: if has_hitting {
                counting_series(s1.hitting, s2.hitting)
            } else {
                Vec::new()
            },
            hitting: if has_hitting {
                hitting_rows(s1.hitting, s2.hitting)
            } else {
                Vec::new()
            },
            pitching: if has_pitching {
                pitching_rows(s1.pitching, s2.pitching)
            } else {
                Vec::new()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hitting.is_empty() && self.pitching.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatGroup, StatGroupName, StatSplit};

    fn hitter(name: &str, season: &str, stat: StatLine) -> Player {
        Player {
            full_name: name.to_string(),
            stats: vec![StatGroup {
                group: Some(StatGroupName {
                    display_name: "hitting".to_string(),
                }),
                splits: vec![StatSplit {
                    season: Some(season.to_string()),
                    stat,
                    team: None,
                }],
            }],
            ..Player::default()
        }
    }

    #[test]
    fn normalize_against_larger_value() {
        assert_eq!(normalize(50.0, 25.0), (100.0, 50.0));
        assert_eq!(normalize(0.0, 0.0), (0.0, 0.0));
        assert_eq!(normalize(0.5, 0.0), (50.0, 0.0));
    }

    #[test]
    fn radar_scales_rates_by_1000() {
        let a = StatLine {
            avg: Some(".300".to_string()),
            home_runs: Some(40),
            ..StatLine::default()
        };
        let b = StatLine {
            avg: Some(".250".to_string()),
            home_runs: Some(20),
            ..StatLine::default()
        };
        let radar = radar_series(Some(&a), Some(&b));

        assert_eq!(radar[0].stat, "AVG");
        assert_eq!(radar[0].player1, 100.0);
        assert!((radar[0].player2 - 83.333).abs() < 0.01);
        assert_eq!(radar[1].player2, 50.0);
        assert!(radar.iter().all(|p| p.player1 <= 100.0 && p.player2 <= 100.0));
    }

    #[test]
    fn lower_is_better_rows() {
        assert_eq!(pick_winner(2.50, 3.10, false), Winner::First);
        assert_eq!(pick_winner(2.50, 3.10, true), Winner::Second);
        assert_eq!(pick_winner(1.0, 1.0, true), Winner::Tie);

        let a = StatLine {
            era: Some("3.10".to_string()),
            wins: Some(12),
            ..StatLine::default()
        };
        let b = StatLine {
            era: Some("2.50".to_string()),
            wins: Some(15),
            ..StatLine::default()
        };
        let rows = pitching_rows(Some(&a), Some(&b));
        let era = rows.iter().find(|r| r.label == "ERA").unwrap();
        assert_eq!(era.winner, Winner::Second);
        let wins = rows.iter().find(|r| r.label == "W").unwrap();
        assert_eq!(wins.value1.as_deref(), Some("12"));
        assert_eq!(wins.winner, Winner::Second);
    }

    #[test]
    fn missing_side_shows_none_and_counts_as_zero() {
        let a = StatLine {
            home_runs: Some(10),
            ..StatLine::default()
        };
        let rows = hitting_rows(Some(&a), None);
        let hr = rows.iter().find(|r| r.label == "HR").unwrap();
        assert_eq!(hr.value2, None);
        assert_eq!(hr.winner, Winner::First);
    }

    #[test]
    fn comparison_for_season() {
        let judge = hitter("Aaron Judge", "2024", StatLine {
            home_runs: Some(58),
            ..StatLine::default()
        });
        let soto = hitter("Juan Soto", "2024", StatLine {
            home_runs: Some(41),
            ..StatLine::default()
        });

        let cmp = Comparison::new(&judge, &soto, 2024);
        assert_eq!(cmp.short1, "Judge");
        assert_eq!(cmp.radar.len(), 5);
        assert!(cmp.pitching.is_empty());
        assert!(!cmp.is_empty());

        let other_year = Comparison::new(&judge, &soto, 2019);
        assert!(other_year.is_empty());
    }
}
