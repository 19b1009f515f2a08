use super::{empty_state, escape, layout, or_dash, season_selector, table};
use crate::data::awards::AwardWinner;
use crate::data::spotlight::SpotlightPlayer;
use crate::data::trivia::TriviaQuestion;
use crate::mlb::{player_headshot_url, HeadshotSize};
use crate::models::{DashboardData, Leader, LeaguePair};
use crate::season::season_status;
use crate::standings::{league_wins, short_division_name};

const MINI_STANDINGS_DIVISIONS: usize = 2;
const MINI_STANDINGS_ROWS: usize = 5;

pub struct DashboardPage<'a> {
    pub data: &'a DashboardData,
    pub current_year: i32,
    pub seasons: &'a [i32],
    pub spotlight: Option<&'a SpotlightPlayer>,
    pub trivia: &'a [&'a TriviaQuestion],
}

fn leader_table(title: &str, leaders: &[Leader]) -> String {
    if leaders.is_empty() {
        return format!("<section><h3>{}</h3>{}</section>", escape(title), empty_state("No data available"));
    }

    let rows: Vec<String> = leaders
        .iter()
        .map(|l| {
            format!(
                "<td>{}</td><td><a href=\"/players/{}\">{}</a></td><td>{}</td><td>{}</td>",
                l.rank,
                l.person.id,
                escape(&l.person.full_name),
                or_dash(l.team.as_ref().map(|t| t.name.as_str())),
                escape(&l.value),
            )
        })
        .collect();
    format!(
        "<section><h3>{}</h3>{}</section>",
        escape(title),
        table(&["#", "Player", "Team", "Value"], &rows)
    )
}

fn pair_cell(leader: Option<&Leader>) -> String {
    match leader {
        Some(l) => format!(
            "<a href=\"/players/{}\">{}</a> ({})",
            l.person.id,
            escape(&l.person.full_name),
            escape(&l.value)
        ),
        None => "&mdash;".to_string(),
    }
}

fn league_leaders(data: &DashboardData) -> String {
    let pairs: [(&str, &LeaguePair); 3] = [
        ("Home Runs", &data.league_leaders.hr),
        ("Batting Average", &data.league_leaders.avg),
        ("ERA", &data.league_leaders.era),
    ];
    let rows: Vec<String> = pairs
        .iter()
        .map(|(label, pair)| {
            format!(
                "<td>{label}</td><td>{}</td><td>{}</td>",
                pair_cell(pair.al.as_ref()),
                pair_cell(pair.nl.as_ref())
            )
        })
        .collect();
    format!("<section><h2>League Leaders</h2>{}</section>", table(&["Category", "AL", "NL"], &rows))
}

fn mini_standings(data: &DashboardData) -> String {
    if data.standings.is_empty() {
        return format!("<section><h2>Standings</h2>{}</section>", empty_state("No standings data available"));
    }

    let mut html = String::from("<section><h2>Standings</h2>");
    for division in data.standings.iter().take(MINI_STANDINGS_DIVISIONS) {
        let rows: Vec<String> = division
            .team_records
            .iter()
            .take(MINI_STANDINGS_ROWS)
            .map(|r| {
                format!(
                    "<td><a href=\"/teams/{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td>",
                    r.team.id,
                    escape(&r.team.name),
                    r.wins,
                    r.losses,
                    escape(&r.winning_percentage)
                )
            })
            .collect();
        html.push_str(&format!(
            "<h3>{}</h3>{}",
            escape(&short_division_name(division.name())),
            table(&["Team", "W", "L", "PCT"], &rows)
        ));
    }

    let (al, nl) = league_wins(&data.standings);
    html.push_str(&format!(
        "<p class=\"league-wins\">AL wins: <strong>{al}</strong> &middot; NL wins: <strong>{nl}</strong></p></section>"
    ));
    html
}

fn award_cell(winner: Option<&AwardWinner>) -> String {
    match winner {
        Some(w) => format!(
            "<a href=\"/players/{}\">{}</a> ({})",
            w.player_id,
            escape(w.player_name),
            escape(w.team.name)
        ),
        None => "&mdash;".to_string(),
    }
}

fn awards(data: &DashboardData) -> String {
    let (mvp_al, mvp_nl) = data.mvp_winners.for_season(data.season);
    let (cy_al, cy_nl) = data.cy_young_winners.for_season(data.season);
    let rows = vec![
        format!("<td>MVP</td><td>{}</td><td>{}</td>", award_cell(mvp_al), award_cell(mvp_nl)),
        format!("<td>Cy Young</td><td>{}</td><td>{}</td>", award_cell(cy_al), award_cell(cy_nl)),
    ];
    format!(
        "<section><h2>{} Awards</h2>{}</section>",
        data.season,
        table(&["Award", "AL", "NL"], &rows)
    )
}

fn spotlight(player: Option<&SpotlightPlayer>) -> String {
    let Some(p) = player else {
        return String::new();
    };
    format!(
        "<section class=\"spotlight\"><h2>Player Spotlight</h2>\
         <img src=\"{}\" alt=\"{}\" width=\"213\">\
         <h3>{}</h3><p>{} &middot; {} &middot; {}</p><p>{}</p></section>",
        player_headshot_url(p.id, HeadshotSize::Medium),
        escape(p.name),
        escape(p.name),
        escape(p.position),
        escape(p.team),
        escape(p.years),
        escape(p.fact)
    )
}

fn trivia(questions: &[&TriviaQuestion]) -> String {
    if questions.is_empty() {
        return String::new();
    }

    let items: String = questions
        .iter()
        .map(|q| {
            let options: String = q
                .options
                .iter()
                .map(|o| format!("<li>{}</li>", escape(o)))
                .collect();
            format!(
                "<li><p>{}</p><ol type=\"A\">{options}</ol>\
                 <details><summary>Answer</summary><p><strong>{}</strong>. {}</p></details></li>",
                escape(q.question),
                escape(q.answer()),
                escape(q.explanation)
            )
        })
        .collect();
    format!("<section class=\"trivia\"><h2>Daily Trivia</h2><ol>{items}</ol></section>")
}

pub fn render(page: &DashboardPage<'_>) -> String {
    let data = page.data;
    let (status, detail) = season_status(data.season, page.current_year);

    let mut body = format!(
        "<h1>MLB Stats Dashboard</h1>{}<p class=\"season-status\">{} Season: <strong>{}</strong> ({})</p>",
        season_selector("/", data.season, page.seasons),
        data.season,
        status,
        detail
    );
    body.push_str(&spotlight(page.spotlight));
    body.push_str(&leader_table("Home Run Leaders", &data.hr_leaders));
    body.push_str(&leader_table("Batting Average Leaders", &data.avg_leaders));
    body.push_str(&leader_table("ERA Leaders", &data.era_leaders));
    body.push_str(&leader_table("Strikeout Leaders", &data.k_leaders));
    body.push_str(&league_leaders(data));
    body.push_str(&mini_standings(data));
    body.push_str(&awards(data));
    body.push_str(&trivia(page.trivia));

    layout("Dashboard", "/", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::awards::{cy_young_winners, mvp_winners};
    use crate::models::{LeagueLeaders, LeaderPerson};

    fn empty_data(season: i32) -> DashboardData {
        DashboardData {
            season,
            hr_leaders: Vec::new(),
            avg_leaders: Vec::new(),
            era_leaders: Vec::new(),
            k_leaders: Vec::new(),
            standings: Vec::new(),
            mvp_winners: mvp_winners(),
            cy_young_winners: cy_young_winners(),
            league_leaders: LeagueLeaders::default(),
        }
    }

    #[test]
    fn empty_upstream_renders_placeholders() {
        let data = empty_data(2024);
        let html = render(&DashboardPage {
            data: &data,
            current_year: 2026,
            seasons: &[2026, 2025, 2024],
            spotlight: None,
            trivia: &[],
        });

        assert!(html.contains("No standings data available"));
        assert!(html.contains("Completed"));
        assert!(html.contains("2024 Awards"));
    }

    #[test]
    fn leaders_link_to_players() {
        let mut data = empty_data(2026);
        data.hr_leaders.push(Leader {
            rank: 1,
            value: "58".to_string(),
            person: LeaderPerson {
                id: 592450,
                full_name: "Aaron Judge".to_string(),
            },
            team: None,
        });
        let html = render(&DashboardPage {
            data: &data,
            current_year: 2026,
            seasons: &[2026],
            spotlight: None,
            trivia: &[],
        });

        assert!(html.contains("<a href=\"/players/592450\">Aaron Judge</a>"));
        assert!(html.contains("In Progress"));
    }
}
