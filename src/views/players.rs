use super::{empty_state, escape, layout, or_dash, season_selector, table};
use crate::compare::season_stats;
use crate::mlb::{player_headshot_url, HeadshotSize};
use crate::models::{Player, StatGroup, StatLine, StatSplit};

const HITTING_HEADERS: [&str; 11] = [
    "Season", "Team", "G", "AB", "H", "HR", "RBI", "SB", "AVG", "OBP", "OPS",
];
const PITCHING_HEADERS: [&str; 10] = [
    "Season", "Team", "G", "W", "L", "ERA", "IP", "K", "SV", "WHIP",
];

fn player_card(player: &Player) -> String {
    format!(
        "<li class=\"player-card\"><a href=\"/players/{id}\">\
         <img src=\"{img}\" alt=\"{name}\" width=\"67\"> {name}</a> \
         <span>{pos}</span> <span>{team}</span></li>",
        id = player.id,
        img = player_headshot_url(player.id, HeadshotSize::Small),
        name = escape(&player.full_name),
        pos = escape(player.position_abbreviation()),
        team = or_dash(player.current_team.as_ref().map(|t| t.name.as_str())),
    )
}

fn card_list(players: &[Player]) -> String {
    let cards: String = players.iter().map(player_card).collect();
    format!("<ul class=\"players\">{cards}</ul>")
}

pub struct PlayersPage<'a> {
    pub season: i32,
    pub seasons: &'a [i32],
    pub featured: &'a [Player],
    pub query: &'a str,
    pub results: &'a [Player],
}

pub fn render_list(page: &PlayersPage<'_>) -> String {
    let mut body = format!(
        "<h1>Players</h1>\
         <form method=\"get\" action=\"/players\"><input type=\"search\" name=\"q\" value=\"{}\" \
         placeholder=\"Search players\" minlength=\"2\"><button type=\"submit\">Search</button></form>",
        escape(page.query)
    );

    if !page.query.trim().is_empty() {
        body.push_str(&format!("<h2>Results for &quot;{}&quot;</h2>", escape(page.query.trim())));
        if page.results.is_empty() {
            body.push_str(&empty_state("No players found"));
        } else {
            body.push_str(&card_list(page.results));
        }
    }

    body.push_str(&format!(
        "<h2>Featured Players</h2>{}",
        season_selector("/players", page.season, page.seasons)
    ));
    if page.featured.is_empty() {
        body.push_str(&empty_state("No featured players available"));
    } else {
        body.push_str(&card_list(page.featured));
    }

    layout("Players", "/players", &body)
}

fn stat_group<'a>(player: &'a Player, name: &str) -> Option<&'a StatGroup> {
    player.stats.iter().find(|g| g.is_group(name))
}

fn quick_view(player: &Player, season: i32) -> String {
    let stats = season_stats(player, &season.to_string());
    let cells: Vec<(&str, String)> = if player.is_pitcher() {
        let Some(s) = stats.pitching else {
            return empty_state(&format!("No {season} statistics"));
        };
        vec![
            ("W-L", format!("{}-{}", s.wins.unwrap_or(0), s.losses.unwrap_or(0))),
            ("ERA", or_dash(s.era.as_deref())),
            ("IP", or_dash(s.innings_pitched.as_deref())),
            ("K", or_dash(s.strike_outs)),
            ("WHIP", or_dash(s.whip.as_deref())),
            ("SV", or_dash(s.saves)),
        ]
    } else {
        let Some(s) = stats.hitting else {
            return empty_state(&format!("No {season} statistics"));
        };
        vec![
            ("AVG", or_dash(s.avg.as_deref())),
            ("HR", or_dash(s.home_runs)),
            ("RBI", or_dash(s.rbi)),
            ("OPS", or_dash(s.ops.as_deref())),
            ("SB", or_dash(s.stolen_bases)),
            ("H", or_dash(s.hits)),
        ]
    };

    let items: String = cells
        .iter()
        .map(|(label, value)| format!("<div><dt>{label}</dt><dd>{value}</dd></div>"))
        .collect();
    format!("<section><h2>{season} Season</h2><dl class=\"quick-view\">{items}</dl></section>")
}

fn split_team(split: &StatSplit) -> String {
    or_dash(split.team.as_ref().map(|t| t.name.as_str()))
}

fn hitting_row(split: &StatSplit) -> String {
    let s: &StatLine = &split.stat;
    format!(
        "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
        or_dash(split.season.as_deref()),
        split_team(split),
        or_dash(s.games_played),
        or_dash(s.at_bats),
        or_dash(s.hits),
        or_dash(s.home_runs),
        or_dash(s.rbi),
        or_dash(s.stolen_bases),
        or_dash(s.avg.as_deref()),
        or_dash(s.obp.as_deref()),
        or_dash(s.ops.as_deref()),
    )
}

fn pitching_row(split: &StatSplit) -> String {
    let s: &StatLine = &split.stat;
    format!(
        "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
        or_dash(split.season.as_deref()),
        split_team(split),
        or_dash(s.games_played),
        or_dash(s.wins),
        or_dash(s.losses),
        or_dash(s.era.as_deref()),
        or_dash(s.innings_pitched.as_deref()),
        or_dash(s.strike_outs),
        or_dash(s.saves),
        or_dash(s.whip.as_deref()),
    )
}

fn career_tables(player: &Player) -> String {
    let hitting = stat_group(player, "hitting").filter(|g| !g.splits.is_empty());
    let pitching = stat_group(player, "pitching").filter(|g| !g.splits.is_empty());

    if hitting.is_none() && pitching.is_none() {
        return empty_state("No career statistics available");
    }

    let mut html = String::new();
    // pitchers list pitching first
    let order = if player.is_pitcher() {
        [("Pitching", pitching), ("Hitting", hitting)]
    } else {
        [("Hitting", hitting), ("Pitching", pitching)]
    };
    for (label, group) in order {
        let Some(group) = group else { continue };
        let section = if label == "Hitting" {
            let rows: Vec<String> = group.splits.iter().map(hitting_row).collect();
            table(&HITTING_HEADERS, &rows)
        } else {
            let rows: Vec<String> = group.splits.iter().map(pitching_row).collect();
            table(&PITCHING_HEADERS, &rows)
        };
        html.push_str(&format!("<h2>Career {label}</h2>{section}"));
    }
    html
}

pub fn render_detail(player: &Player, season: i32) -> String {
    let team = match &player.current_team {
        Some(t) => format!("<a href=\"/teams/{}\">{}</a>", t.id, escape(&t.name)),
        None => "Free agent".to_string(),
    };
    let number = player
        .primary_number
        .as_deref()
        .map(|n| format!(" #{}", escape(n)))
        .unwrap_or_default();
    let position = player
        .primary_position
        .as_ref()
        .map(|p| escape(&p.name))
        .unwrap_or_default();

    let mut body = format!(
        "<section class=\"player-header\">\
         <img src=\"{}\" alt=\"{}\" width=\"213\">\
         <h1>{}{number}</h1><p>{position} &middot; {team}</p>\
         <dl><dt>Age</dt><dd>{}</dd><dt>Born</dt><dd>{} {}</dd>\
         <dt>Height/Weight</dt><dd>{} / {}</dd></dl></section>",
        player_headshot_url(player.id, HeadshotSize::Large),
        escape(&player.full_name),
        escape(&player.full_name),
        or_dash(player.current_age),
        or_dash(player.birth_date.as_deref()),
        player
            .birth_city
            .as_deref()
            .map(|c| format!("in {}", escape(c)))
            .unwrap_or_default(),
        or_dash(player.height.as_deref()),
        or_dash(player.weight),
    );
    body.push_str(&quick_view(player, season));
    body.push_str(&career_tables(player));
    body.push_str(&format!(
        "<p><a href=\"/compare?player1={}\">Compare with another player</a></p>",
        player.id
    ));

    layout(&player.full_name, "/players", &body)
}
