use serde::Serialize;

use crate::models::Player;

const INFIELD: [&str; 4] = ["1B", "2B", "3B", "SS"];
const OUTFIELD: [&str; 4] = ["LF", "CF", "RF", "OF"];

/// Roster split the way the team page lists it. Two-way players and
/// anyone without a recognised position appear only in `others`.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedRoster<'a> {
    pub pitchers: Vec<&'a Player>,
    pub catchers: Vec<&'a Player>,
    pub infielders: Vec<&'a Player>,
    pub outfielders: Vec<&'a Player>,
    pub designated_hitters: Vec<&'a Player>,
    pub others: Vec<&'a Player>,
}

impl<'a> GroupedRoster<'a> {
    pub fn sections(&self) -> [(&'static str, &[&'a Player]); 6] {
        [
            ("Pitchers", self.pitchers.as_slice()),
            ("Catchers", self.catchers.as_slice()),
            ("Infielders", self.infielders.as_slice()),
            ("Outfielders", self.outfielders.as_slice()),
            ("Designated Hitters", self.designated_hitters.as_slice()),
            ("Other", self.others.as_slice()),
        ]
    }
}

pub fn group_roster(roster: &[Player]) -> GroupedRoster<'_> {
    let mut grouped = GroupedRoster::default();

    for player in roster {
        let abbr = player.position_abbreviation();
        if player.is_pitcher() {
            grouped.pitchers.push(player);
        } else if abbr == "C" {
            grouped.catchers.push(player);
        } else if INFIELD.contains(&abbr) {
            grouped.infielders.push(player);
        } else if OUTFIELD.contains(&abbr) {
            grouped.outfielders.push(player);
        } else if abbr == "DH" {
            grouped.designated_hitters.push(player);
        } else {
            grouped.others.push(player);
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn player(id: i64, abbreviation: &str, position_type: &str) -> Player {
        Player {
            id,
            primary_position: Some(Position {
                abbreviation: abbreviation.to_string(),
                position_type: position_type.to_string(),
                ..Position::default()
            }),
            ..Player::default()
        }
    }

    #[test]
    fn groups_by_position() {
        let roster = vec![
            player(1, "P", "Pitcher"),
            player(2, "C", "Catcher"),
            player(3, "SS", "Infielder"),
            player(4, "CF", "Outfielder"),
            player(5, "DH", "Hitter"),
            player(6, "TWP", "Two-Way Player"),
            player(7, "1B", "Infielder"),
            Player::default(),
        ];
        let grouped = group_roster(&roster);

        let ids = |players: &[&Player]| players.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(&grouped.pitchers), vec![1]);
        assert_eq!(ids(&grouped.catchers), vec![2]);
        assert_eq!(ids(&grouped.infielders), vec![3, 7]);
        assert_eq!(ids(&grouped.outfielders), vec![4]);
        assert_eq!(ids(&grouped.designated_hitters), vec![5]);
        assert_eq!(ids(&grouped.others), vec![6, 0]);
    }
}
