use super::{empty_state, escape, layout, or_dash, table};
use crate::compare::{ChartPoint, Comparison, StatRow, Winner};

pub struct ComparePage<'a> {
    pub player1: Option<i64>,
    pub player2: Option<i64>,
    pub season: i32,
    pub seasons: &'a [i32],
    pub comparison: Option<&'a Comparison>,
    /// Set when ids were given but a player could not be loaded
    pub missing: bool,
}

fn id_value(id: Option<i64>) -> String {
    id.map(|i| i.to_string()).unwrap_or_default()
}

fn form(page: &ComparePage<'_>) -> String {
    let options: String = page
        .seasons
        .iter()
        .map(|s| {
            let sel = if *s == page.season { " selected" } else { "" };
            format!("<option value=\"{s}\"{sel}>{s}</option>")
        })
        .collect();
    format!(
        "<form method=\"get\" action=\"/compare\">\
         <label>Player 1 ID <input name=\"player1\" inputmode=\"numeric\" value=\"{}\"></label> \
         <label>Player 2 ID <input name=\"player2\" inputmode=\"numeric\" value=\"{}\"></label> \
         <label>Season <select name=\"season\">{options}</select></label> \
         <button type=\"submit\">Compare</button></form>",
        id_value(page.player1),
        id_value(page.player2),
    )
}

fn cell(value: &Option<String>, wins: bool) -> String {
    let class = if wins { " class=\"winner\"" } else { "" };
    format!("<td{class}>{}</td>", or_dash(value.as_deref()))
}

fn stat_table(title: &str, rows: &[StatRow], cmp: &Comparison) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let body: Vec<String> = rows
        .iter()
        .map(|r| {
            format!(
                "<td>{}</td>{}{}",
                r.label,
                cell(&r.value1, r.winner == Winner::First),
                cell(&r.value2, r.winner == Winner::Second)
            )
        })
        .collect();
    format!(
        "<h2>{title}</h2>{}",
        table(&["Stat", cmp.short1.as_str(), cmp.short2.as_str()], &body)
    )
}

fn chart_table(title: &str, points: &[ChartPoint], cmp: &Comparison) -> String {
    if points.is_empty() {
        return String::new();
    }
    let body: Vec<String> = points
        .iter()
        .map(|p| format!("<td>{}</td><td>{:.0}</td><td>{:.0}</td>", p.stat, p.player1, p.player2))
        .collect();
    format!(
        "<h2>{title}</h2>{}",
        table(&["Stat", cmp.short1.as_str(), cmp.short2.as_str()], &body)
    )
}

pub fn render(page: &ComparePage<'_>) -> String {
    let mut body = format!("<h1>Compare Players</h1>{}", form(page));

    match page.comparison {
        Some(cmp) if cmp.is_empty() => {
            body.push_str(&format!(
                "<h2>{} vs {}</h2>{}",
                escape(&cmp.name1),
                escape(&cmp.name2),
                empty_state(&format!("No {} statistics for either player", cmp.season))
            ));
        }
        Some(cmp) => {
            body.push_str(&format!("<h2>{} vs {} ({})</h2>", escape(&cmp.name1), escape(&cmp.name2), cmp.season));
            body.push_str(&chart_table("Profile (0-100)", &cmp.radar, cmp));
            body.push_str(&chart_table("Counting Stats", &cmp.counting, cmp));
            body.push_str(&stat_table("Hitting", &cmp.hitting, cmp));
            body.push_str(&stat_table("Pitching", &cmp.pitching, cmp));
        }
        None if page.missing => body.push_str(&empty_state("Player not found")),
        None => body.push_str(&empty_state("Enter two player IDs to compare")),
    }

    layout("Compare", "/compare", &body)
}
