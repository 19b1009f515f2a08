use super::escape;
use crate::models::Team;

const STATIC_PAGES: [(&str, &str, &str); 7] = [
    ("/", "daily", "1.0"),
    ("/standings", "daily", "0.9"),
    ("/players", "daily", "0.8"),
    ("/teams", "weekly", "0.8"),
    ("/compare", "weekly", "0.6"),
    ("/hof", "monthly", "0.5"),
    ("/all-star", "monthly", "0.5"),
];

fn url_entry(base_url: &str, path: &str, changefreq: &str, priority: &str) -> String {
    format!(
        "  <url><loc>{}</loc><changefreq>{changefreq}</changefreq><priority>{priority}</priority></url>\n",
        escape(&format!("{base_url}{path}"))
    )
}

pub fn render(base_url: &str, teams: &[Team]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for (path, changefreq, priority) in STATIC_PAGES {
        xml.push_str(&url_entry(base_url, path, changefreq, priority));
    }
    for team in teams {
        xml.push_str(&url_entry(base_url, &format!("/teams/{}", team.id), "weekly", "0.7"));
    }
    xml.push_str("</urlset>\n");
    xml
}
