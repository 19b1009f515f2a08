use super::{empty_state, escape, layout, or_dash, season_selector, table};
use crate::models::Division;
use crate::standings::{split_by_league, League};

const HEADERS: [&str; 9] = ["Team", "W", "L", "PCT", "GB", "RS", "RA", "DIFF", "STRK"];

fn division_table(division: &Division) -> String {
    let rows: Vec<String> = division
        .team_records
        .iter()
        .map(|r| {
            format!(
                "<td><a href=\"/teams/{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{:+}</td><td>{}</td>",
                r.team.id,
                escape(&r.team.name),
                r.wins,
                r.losses,
                escape(&r.winning_percentage),
                escape(&r.games_back),
                r.runs_scored,
                r.runs_allowed,
                r.run_differential,
                or_dash(r.streak.as_ref().map(|s| s.streak_code.as_str())),
            )
        })
        .collect();
    format!("<h3>{}</h3>{}", escape(division.name()), table(&HEADERS, &rows))
}

fn league_section(league: League, divisions: &[&Division]) -> String {
    let tables: String = divisions.iter().map(|d| division_table(d)).collect();
    format!("<section><h2>{}</h2>{tables}</section>", league.label())
}

pub fn render(season: i32, seasons: &[i32], standings: &[Division]) -> String {
    let mut body = format!(
        "<h1>{season} Standings</h1>{}",
        season_selector("/standings", season, seasons)
    );

    let split = split_by_league(standings);
    if standings.is_empty() {
        body.push_str(&empty_state(&format!("Unable to load standings data for {season}")));
    } else if split.has_data() {
        body.push_str(&league_section(League::American, &split.al));
        body.push_str(&league_section(League::National, &split.nl));
    } else {
        // no league could be determined; show divisions as received
        let tables: String = standings.iter().map(division_table).collect();
        body.push_str(&format!("<section>{tables}</section>"));
    }

    layout("Standings", "/standings", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NamedRef, StandingsRecord, Team};

    fn division(name: &str, league_id: Option<i64>) -> Division {
        Division {
            division: Some(NamedRef {
                id: 0,
                name: name.to_string(),
            }),
            league: league_id.map(|id| NamedRef {
                id,
                name: String::new(),
            }),
            team_records: vec![StandingsRecord {
                team: Team {
                    id: 147,
                    name: "New York Yankees".to_string(),
                    ..Team::default()
                },
                wins: 94,
                losses: 68,
                run_differential: 164,
                ..StandingsRecord::default()
            }],
        }
    }

    #[test]
    fn empty_standings_message() {
        let html = render(2024, &[2024], &[]);
        assert!(html.contains("Unable to load standings data for 2024"));
    }

    #[test]
    fn leagues_render_east_first() {
        let standings = vec![
            division("American League West", Some(103)),
            division("American League East", Some(103)),
            division("National League Central", Some(104)),
        ];
        let html = render(2024, &[2024], &standings);

        let east = html.find("American League East").unwrap();
        let west = html.find("American League West").unwrap();
        assert!(east < west);
        assert!(html.contains("<h2>National League</h2>"));
        assert!(html.contains("+164"));
    }

    #[test]
    fn unsplittable_divisions_render_unsplit() {
        let html = render(2024, &[2024], &[division("Wild Card", None)]);
        assert!(html.contains("<h3>Wild Card</h3>"));
        assert!(!html.contains("<h2>American League</h2>"));
    }
}
