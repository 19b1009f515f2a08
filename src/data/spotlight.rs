use chrono::NaiveDate;
use serde::Serialize;

use crate::daily;

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightPlayer {
    pub id: i64,
    pub name: &'static str,
    pub position: &'static str,
    pub team: &'static str,
    pub years: &'static str,
    pub fact: &'static str,
}

const fn player(
    id: i64,
    name: &'static str,
    position: &'static str,
    team: &'static str,
    years: &'static str,
    fact: &'static str,
) -> SpotlightPlayer {
    SpotlightPlayer {
        id,
        name,
        position,
        team,
        years,
        fact,
    }
}

pub static SPOTLIGHT_PLAYERS: &[SpotlightPlayer] = &[
    player(121578, "Babe Ruth", "OF/P", "Yankees", "1914-1935",
        "Started his career as a dominant pitcher before becoming baseball's greatest slugger, hitting 714 home runs."),
    player(114680, "Lou Gehrig", "1B", "Yankees", "1923-1939",
        "Played 2,130 consecutive games, a record that stood for 56 years until Cal Ripken Jr. broke it."),
    player(121314, "Jackie Robinson", "2B", "Dodgers", "1947-1956",
        "Broke baseball's color barrier on April 15, 1947, and his #42 is retired across all of MLB."),
    player(118495, "Willie Mays", "CF", "Giants", "1951-1973",
        "Made 'The Catch' in the 1954 World Series, widely considered the greatest defensive play ever."),
    player(110001, "Hank Aaron", "OF", "Braves", "1954-1976",
        "Held the career home run record (755) for 33 years and never struck out 100 times in a season."),
    player(124341, "Ted Williams", "LF", "Red Sox", "1939-1960",
        "Last player to hit .400 in a season (.406 in 1941) and lost nearly 5 prime years to military service."),
    player(112391, "Roberto Clemente", "RF", "Pirates", "1955-1972",
        "Got his 3,000th hit in his final regular-season at-bat before dying in a plane crash delivering humanitarian aid."),
    player(117277, "Sandy Koufax", "P", "Dodgers", "1955-1966",
        "Retired at 30 due to arthritis after winning 3 Cy Youngs and throwing 4 no-hitters including a perfect game."),
    player(114756, "Bob Gibson", "P", "Cardinals", "1959-1975",
        "Posted a 1.12 ERA in 1968, so dominant that MLB lowered the mound the following year."),
    player(118258, "Mickey Mantle", "CF", "Yankees", "1951-1968",
        "Won the Triple Crown in 1956 and hit 18 World Series home runs, still the record."),
    player(119602, "Stan Musial", "OF/1B", "Cardinals", "1941-1963",
        "Had exactly 1,815 hits at home and 1,815 hits on the road over 22 seasons."),
    player(121597, "Nolan Ryan", "P", "Multiple", "1966-1993",
        "Threw an MLB record 7 no-hitters and struck out 5,714 batters."),
    player(121222, "Cal Ripken Jr.", "SS", "Orioles", "1981-2001",
        "Played 2,632 consecutive games, breaking Lou Gehrig's 'unbreakable' record."),
    player(115009, "Rickey Henderson", "LF", "Multiple", "1979-2003",
        "Stole 1,406 bases, 468 more than anyone else in history."),
    player(111432, "George Brett", "3B", "Royals", "1973-1993",
        "Hit .390 in 1980, the closest anyone has come to .400 since Ted Williams."),
    player(115270, "Tony Gwynn", "RF", "Padres", "1982-2001",
        "Won 8 batting titles and struck out only 434 times in 20 seasons."),
    player(118120, "Greg Maddux", "P", "Multiple", "1986-2008",
        "Won 4 consecutive Cy Young Awards (1992-1995) with pinpoint control."),
    player(116615, "Randy Johnson", "P", "Multiple", "1988-2009",
        "At 6'10\" he struck out 4,875 batters and won 5 Cy Young Awards."),
    player(112388, "Roger Clemens", "P", "Multiple", "1984-2007",
        "Won 7 Cy Young Awards, more than any other pitcher in MLB history."),
    player(118377, "Pedro Martinez", "P", "Multiple", "1992-2009",
        "In 2000 he posted a 1.74 ERA when the league average was 4.77."),
    player(115135, "Ken Griffey Jr.", "CF", "Multiple", "1989-2010",
        "Had one of the sweetest swings in baseball history and hit 630 home runs."),
    player(111188, "Barry Bonds", "LF", "Multiple", "1986-2007",
        "Hit 73 home runs in 2001 and holds career records for home runs (762) and walks (2,558)."),
    player(116539, "Derek Jeter", "SS", "Yankees", "1995-2014",
        "Collected 3,465 hits and won 5 World Series titles, all with the Yankees."),
    player(121250, "Mariano Rivera", "P", "Yankees", "1995-2013",
        "First player unanimously elected to the Hall of Fame, saved 652 games with his cutter."),
    player(405395, "Albert Pujols", "1B", "Multiple", "2001-2022",
        "Won 3 MVPs in his first decade and finished with 703 home runs."),
    player(408234, "Miguel Cabrera", "1B", "Multiple", "2003-2023",
        "Won the Triple Crown in 2012, the first since Carl Yastrzemski in 1967."),
    player(477132, "Clayton Kershaw", "P", "Dodgers", "2008-present",
        "Won 3 Cy Young Awards and is considered the best pitcher of his generation."),
    player(545361, "Mike Trout", "CF", "Angels", "2011-present",
        "Won 3 MVPs and is often called the best player of his generation."),
    player(660271, "Shohei Ohtani", "P/DH", "Dodgers", "2018-present",
        "First player since Babe Ruth to excel as both a pitcher and hitter, with MVPs in both leagues."),
    player(592450, "Aaron Judge", "RF", "Yankees", "2016-present",
        "Set the AL single-season home run record with 62 in 2022, breaking Roger Maris's mark."),
];

/// Player of the day for `date`.
pub fn daily_player(date: NaiveDate) -> Option<&'static SpotlightPlayer> {
    daily::pick_daily(SPOTLIGHT_PLAYERS, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_player_is_stable() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        assert_eq!(daily_player(date), daily_player(date));
        assert!(daily_player(date).is_some());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<i64> = SPOTLIGHT_PLAYERS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SPOTLIGHT_PLAYERS.len());
    }
}
