use super::{empty_state, escape, layout, or_dash, season_selector, table};
use crate::mlb::team_logo_url;
use crate::models::{Player, StandingsRecord, StatGroup, StatLine, Team, TeamHistoricalRecord};
use crate::roster::GroupedRoster;

pub fn render_list(groups: &[(String, Vec<Team>)]) -> String {
    let mut body = String::from("<h1>Teams</h1>");
    if groups.is_empty() {
        body.push_str(&empty_state("Unable to load teams"));
    }

    for (division, teams) in groups {
        let items: String = teams
            .iter()
            .map(|t| {
                format!(
                    "<li><a href=\"/teams/{id}\"><img src=\"{logo}\" alt=\"\" width=\"32\"> {name}</a></li>",
                    id = t.id,
                    logo = team_logo_url(t.id),
                    name = escape(&t.name)
                )
            })
            .collect();
        body.push_str(&format!("<section><h2>{}</h2><ul class=\"teams\">{items}</ul></section>", escape(division)));
    }

    layout("Teams", "/teams", &body)
}

pub struct TeamPage<'a> {
    pub team: &'a Team,
    pub season: i32,
    pub seasons: &'a [i32],
    pub record: Option<&'a StandingsRecord>,
    pub roster: &'a GroupedRoster<'a>,
    pub team_stats: &'a [StatGroup],
    pub history: &'a [TeamHistoricalRecord],
}

fn record_summary(record: Option<&StandingsRecord>, season: i32) -> String {
    let Some(r) = record else {
        return empty_state(&format!("No {season} record available"));
    };
    format!(
        "<p class=\"record\"><strong>{}-{}</strong> ({}) &middot; GB {} &middot; Division rank {} &middot; Streak {}</p>",
        r.wins,
        r.losses,
        escape(&r.winning_percentage),
        escape(&r.games_back),
        or_dash(r.division_rank.as_deref()),
        or_dash(r.streak.as_ref().map(|s| s.streak_code.as_str())),
    )
}

fn season_line<'a>(groups: &'a [StatGroup], name: &str) -> Option<&'a StatLine> {
    groups
        .iter()
        .find(|g| g.is_group(name))?
        .splits
        .first()
        .map(|s| &s.stat)
}

fn team_stats(groups: &[StatGroup]) -> String {
    let hitting = season_line(groups, "hitting");
    let pitching = season_line(groups, "pitching");
    if hitting.is_none() && pitching.is_none() {
        return String::new();
    }

    let mut cells: Vec<(&str, String)> = Vec::new();
    if let Some(s) = hitting {
        cells.push(("AVG", or_dash(s.avg.as_deref())));
        cells.push(("HR", or_dash(s.home_runs)));
        cells.push(("R", or_dash(s.runs)));
        cells.push(("OPS", or_dash(s.ops.as_deref())));
    }
    if let Some(s) = pitching {
        cells.push(("ERA", or_dash(s.era.as_deref())));
        cells.push(("WHIP", or_dash(s.whip.as_deref())));
        cells.push(("K", or_dash(s.strike_outs)));
        cells.push(("SV", or_dash(s.saves)));
    }
    let items: String = cells
        .iter()
        .map(|(label, value)| format!("<div><dt>{label}</dt><dd>{value}</dd></div>"))
        .collect();
    format!("<section><h2>Team Stats</h2><dl class=\"quick-view\">{items}</dl></section>")
}

fn roster_row(player: &&Player) -> String {
    format!(
        "<td>{}</td><td><a href=\"/players/{}\">{}</a></td><td>{}</td>",
        or_dash(player.primary_number.as_deref()),
        player.id,
        escape(&player.full_name),
        escape(player.position_abbreviation()),
    )
}

fn roster(grouped: &GroupedRoster<'_>) -> String {
    let mut html = String::from("<section><h2>Roster</h2>");
    let mut any = false;
    for (label, players) in grouped.sections() {
        if players.is_empty() {
            continue;
        }
        any = true;
        let rows: Vec<String> = players.iter().map(roster_row).collect();
        html.push_str(&format!("<h3>{label}</h3>{}", table(&["#", "Name", "Pos"], &rows)));
    }
    if !any {
        html.push_str(&empty_state("No roster data available"));
    }
    html.push_str("</section>");
    html
}

fn history(records: &[TeamHistoricalRecord]) -> String {
    if records.is_empty() {
        return format!("<section><h2>Franchise History</h2>{}</section>", empty_state("No historical data available"));
    }
    let rows: Vec<String> = records
        .iter()
        .map(|r| {
            format!(
                "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
                r.season,
                r.wins,
                r.losses,
                escape(&r.winning_percentage),
                r.run_differential,
                or_dash(r.division_rank),
            )
        })
        .collect();
    format!(
        "<section><h2>Franchise History</h2>{}</section>",
        table(&["Season", "W", "L", "PCT", "Run Diff", "Div Rank"], &rows)
    )
}

pub fn render_detail(page: &TeamPage<'_>) -> String {
    let team = page.team;
    let mut body = format!(
        "<section class=\"team-header\"><img src=\"{}\" alt=\"{}\" width=\"96\"><h1>{}</h1><p>{}</p></section>{}",
        team_logo_url(team.id),
        escape(&team.name),
        escape(&team.name),
        escape(team.division_name()),
        season_selector(&format!("/teams/{}", team.id), page.season, page.seasons),
    );
    body.push_str(&record_summary(page.record, page.season));
    body.push_str(&team_stats(page.team_stats));
    body.push_str(&roster(page.roster));
    body.push_str(&history(page.history));

    layout(&team.name, "/teams", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedRef;
    use crate::roster::group_roster;

    #[test]
    fn list_groups_render_in_order() {
        let team = Team {
            id: 147,
            name: "New York Yankees".to_string(),
            ..Team::default()
        };
        let html = render_list(&[("American League East".to_string(), vec![team])]);
        assert!(html.contains("<h2>American League East</h2>"));
        assert!(html.contains("/teams/147"));
    }

    #[test]
    fn detail_without_upstream_data() {
        let team = Team {
            id: 147,
            name: "New York Yankees".to_string(),
            division: Some(NamedRef {
                id: 201,
                name: "American League East".to_string(),
            }),
            ..Team::default()
        };
        let grouped = group_roster(&[]);
        let html = render_detail(&TeamPage {
            team: &team,
            season: 2024,
            seasons: &[2024],
            record: None,
            roster: &grouped,
            team_stats: &[],
            history: &[],
        });

        assert!(html.contains("No 2024 record available"));
        assert!(html.contains("No roster data available"));
        assert!(html.contains("No historical data available"));
    }
}
