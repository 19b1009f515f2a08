use super::{empty_state, escape, layout, or_dash, season_selector, table};
use crate::models::{AllStarRosters, AllStarSelection};

fn selections(title: &str, players: &[AllStarSelection]) -> String {
    if players.is_empty() {
        return format!("<section><h2>{title}</h2>{}</section>", empty_state("No selections available"));
    }
    let rows: Vec<String> = players
        .iter()
        .map(|p| {
            format!(
                "<td><a href=\"/players/{}\">{}</a></td><td>{}</td><td>{}</td>",
                p.player_id,
                escape(&p.player_name),
                or_dash(p.position.as_deref()),
                or_dash(p.team_name.as_deref()),
            )
        })
        .collect();
    format!(
        "<section><h2>{title}</h2>{}</section>",
        table(&["Player", "Pos", "Team"], &rows)
    )
}

pub fn render(rosters: &AllStarRosters, seasons: &[i32]) -> String {
    let mut body = format!(
        "<h1>{} All-Star Rosters</h1>{}",
        rosters.season,
        season_selector("/all-star", rosters.season, seasons)
    );
    if rosters.is_empty() {
        body.push_str(&empty_state(&format!(
            "Unable to load All-Star rosters for {}",
            rosters.season
        )));
    } else {
        body.push_str(&selections("American League", &rosters.al));
        body.push_str(&selections("National League", &rosters.nl));
    }

    layout("All-Star", "/all-star", &body)
}
