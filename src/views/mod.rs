//! Server-side HTML rendering. Every page is built from plain strings and
//! wrapped in [`layout`]; all upstream text goes through [`escape`].

pub mod all_star;
pub mod compare;
pub mod dashboard;
pub mod hof;
pub mod players;
pub mod sitemap;
pub mod standings;
pub mod teams;

const NAV: [(&str, &str); 7] = [
    ("/", "Dashboard"),
    ("/players", "Players"),
    ("/teams", "Teams"),
    ("/standings", "Standings"),
    ("/compare", "Compare"),
    ("/hof", "Hall of Fame"),
    ("/all-star", "All-Star"),
];

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;background:#f5f6f8;color:#1b1f24}\
header{background:#002d72;color:#fff;padding:12px 24px}\
header a{color:#fff;margin-right:16px;text-decoration:none}\
header a.active{font-weight:700;text-decoration:underline}\
main{padding:24px;max-width:1200px;margin:0 auto}\
table{border-collapse:collapse;width:100%;margin-bottom:24px;background:#fff}\
th,td{padding:6px 10px;border-bottom:1px solid #e3e6ea;text-align:left}\
.empty{color:#6a737d;font-style:italic}\
.winner{font-weight:700;color:#0a7d32}";

/// Escape text for HTML element and attribute content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Optional value or an em dash placeholder.
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| escape(&v.to_string()))
        .unwrap_or_else(|| "&mdash;".to_string())
}

pub fn layout(title: &str, active: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| {
            let class = if *href == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | MLB Stats</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<header><nav>{nav}</nav></header>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// `<select>` of seasons submitting `?season=` back to `path`.
pub fn season_selector(path: &str, selected: i32, seasons: &[i32]) -> String {
    let options: String = seasons
        .iter()
        .map(|s| {
            let sel = if *s == selected { " selected" } else { "" };
            format!("<option value=\"{s}\"{sel}>{s}</option>")
        })
        .collect();

    format!(
        "<form method=\"get\" action=\"{path}\" class=\"season-selector\">\
         <label>Season <select name=\"season\" onchange=\"this.form.submit()\">{options}</select></label>\
         <noscript><button type=\"submit\">Go</button></noscript></form>"
    )
}

/// Table with a header row; `rows` are pre-rendered `<td>` cell lists.
pub fn table(headers: &[&str], rows: &[String]) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();
    let body: String = rows.iter().map(|r| format!("<tr>{r}</tr>")).collect();
    format!("<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>")
}

pub fn empty_state(message: &str) -> String {
    format!("<p class=\"empty\">{}</p>", escape(message))
}

pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        "<h1>{status}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to the dashboard</a></p>",
        escape(message)
    );
    layout("Error", "", &body)
}
