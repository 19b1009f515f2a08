use super::{empty_state, escape, layout, or_dash, table};
use crate::models::HallOfFamer;

pub struct HofPage<'a> {
    pub query: &'a str,
    pub year: Option<i32>,
    pub years: &'a [i32],
    pub classes: &'a [(i32, Vec<&'a HallOfFamer>)],
    pub total: usize,
}

fn filter_form(page: &HofPage<'_>) -> String {
    let any = if page.year.is_none() { " selected" } else { "" };
    let options: String = page
        .years
        .iter()
        .map(|y| {
            let sel = if Some(*y) == page.year { " selected" } else { "" };
            format!("<option value=\"{y}\"{sel}>{y}</option>")
        })
        .collect();
    format!(
        "<form method=\"get\" action=\"/hof\">\
         <input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search inductees\"> \
         <select name=\"year\"><option value=\"\"{any}>All years</option>{options}</select> \
         <button type=\"submit\">Filter</button></form>",
        escape(page.query)
    )
}

pub fn render(page: &HofPage<'_>) -> String {
    let mut body = format!("<h1>Hall of Fame</h1>{}", filter_form(page));

    let shown: usize = page.classes.iter().map(|(_, m)| m.len()).sum();
    if page.total == 0 {
        body.push_str(&empty_state("Unable to load Hall of Fame data"));
    } else if shown == 0 {
        body.push_str(&empty_state("No inductees match your search"));
    } else {
        body.push_str(&format!("<p>Showing {shown} of {} inductees</p>", page.total));
    }

    for (year, members) in page.classes {
        let rows: Vec<String> = members
            .iter()
            .map(|m| {
                format!(
                    "<td><a href=\"/players/{}\">{}</a></td><td>{}</td><td>{}</td>",
                    m.player_id,
                    escape(&m.player_name),
                    or_dash(m.position.as_deref()),
                    or_dash(m.notes.as_deref()),
                )
            })
            .collect();
        body.push_str(&format!(
            "<section><h2>Class of {year}</h2>{}</section>",
            table(&["Player", "Pos", "Notes"], &rows)
        ));
    }

    layout("Hall of Fame", "/hof", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_classes() {
        let rivera = HallOfFamer {
            player_id: 121250,
            player_name: "Mariano Rivera".to_string(),
            induction_year: 2019,
            ..HallOfFamer::default()
        };
        let classes = vec![(2019, vec![&rivera])];
        let html = render(&HofPage {
            query: "",
            year: Some(2019),
            years: &[2019],
            classes: &classes,
            total: 1,
        });

        assert!(html.contains("Class of 2019"));
        assert!(html.contains("<option value=\"2019\" selected>"));
        assert!(html.contains("Showing 1 of 1 inductees"));
    }

    #[test]
    fn upstream_failure_message() {
        let html = render(&HofPage {
            query: "",
            year: None,
            years: &[],
            classes: &[],
            total: 0,
        });
        assert!(html.contains("Unable to load Hall of Fame data"));
    }
}
