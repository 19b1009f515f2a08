//! MVP and Cy Young winners by league, newest season first.

use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwardTeam {
    pub id: i64,
    pub name: &'static str,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwardWinner {
    pub player_id: i64,
    pub player_name: &'static str,
    pub season: i32,
    pub team: AwardTeam,
}

impl AwardWinner {
    const fn new(
        player_id: i64,
        player_name: &'static str,
        season: i32,
        team_id: i64,
        team_name: &'static str,
    ) -> Self {
        Self {
            player_id,
            player_name,
            season,
            team: AwardTeam {
                id: team_id,
                name: team_name,
            },
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy)]
pub struct LeagueAwards {
    pub al: &'static [AwardWinner],
    pub nl: &'static [AwardWinner],
}

impl LeagueAwards {
    pub fn for_season(&self, season: i32) -> (Option<&'static AwardWinner>, Option<&'static AwardWinner>) {
        (winner_for(self.al, season), winner_for(self.nl, season))
    }
}

pub static AL_MVP: &[AwardWinner] = &[
    AwardWinner::new(592450, "Aaron Judge", 2024, 147, "New York Yankees"),
    AwardWinner::new(660271, "Shohei Ohtani", 2023, 108, "Los Angeles Angels"),
    AwardWinner::new(592450, "Aaron Judge", 2022, 147, "New York Yankees"),
    AwardWinner::new(660271, "Shohei Ohtani", 2021, 108, "Los Angeles Angels"),
    AwardWinner::new(547989, "José Abreu", 2020, 145, "Chicago White Sox"),
    AwardWinner::new(545361, "Mike Trout", 2019, 108, "Los Angeles Angels"),
    AwardWinner::new(605141, "Mookie Betts", 2018, 111, "Boston Red Sox"),
    AwardWinner::new(514888, "José Altuve", 2017, 117, "Houston Astros"),
    AwardWinner::new(545361, "Mike Trout", 2016, 108, "Los Angeles Angels"),
    AwardWinner::new(518626, "Josh Donaldson", 2015, 141, "Toronto Blue Jays"),
    AwardWinner::new(545361, "Mike Trout", 2014, 108, "Los Angeles Angels"),
    AwardWinner::new(408234, "Miguel Cabrera", 2013, 116, "Detroit Tigers"),
    AwardWinner::new(408234, "Miguel Cabrera", 2012, 116, "Detroit Tigers"),
];

pub static NL_MVP: &[AwardWinner] = &[
    AwardWinner::new(660271, "Shohei Ohtani", 2024, 119, "Los Angeles Dodgers"),
    AwardWinner::new(660670, "Ronald Acuña Jr.", 2023, 144, "Atlanta Braves"),
    AwardWinner::new(502671, "Paul Goldschmidt", 2022, 138, "St. Louis Cardinals"),
    AwardWinner::new(547180, "Bryce Harper", 2021, 143, "Philadelphia Phillies"),
    AwardWinner::new(518692, "Freddie Freeman", 2020, 144, "Atlanta Braves"),
    AwardWinner::new(641355, "Cody Bellinger", 2019, 119, "Los Angeles Dodgers"),
    AwardWinner::new(592885, "Christian Yelich", 2018, 158, "Milwaukee Brewers"),
    AwardWinner::new(519317, "Giancarlo Stanton", 2017, 146, "Miami Marlins"),
    AwardWinner::new(592178, "Kris Bryant", 2016, 112, "Chicago Cubs"),
    AwardWinner::new(547180, "Bryce Harper", 2015, 120, "Washington Nationals"),
    AwardWinner::new(477132, "Clayton Kershaw", 2014, 119, "Los Angeles Dodgers"),
    AwardWinner::new(457705, "Andrew McCutchen", 2013, 134, "Pittsburgh Pirates"),
    AwardWinner::new(457763, "Buster Posey", 2012, 137, "San Francisco Giants"),
];

pub static AL_CY_YOUNG: &[AwardWinner] = &[
    AwardWinner::new(669373, "Tarik Skubal", 2024, 116, "Detroit Tigers"),
    AwardWinner::new(543037, "Gerrit Cole", 2023, 147, "New York Yankees"),
    AwardWinner::new(434378, "Justin Verlander", 2022, 117, "Houston Astros"),
    AwardWinner::new(592662, "Robbie Ray", 2021, 141, "Toronto Blue Jays"),
    AwardWinner::new(669456, "Shane Bieber", 2020, 114, "Cleveland Indians"),
    AwardWinner::new(434378, "Justin Verlander", 2019, 117, "Houston Astros"),
    AwardWinner::new(605483, "Blake Snell", 2018, 139, "Tampa Bay Rays"),
    AwardWinner::new(446372, "Corey Kluber", 2017, 114, "Cleveland Indians"),
    AwardWinner::new(519144, "Rick Porcello", 2016, 111, "Boston Red Sox"),
    AwardWinner::new(572971, "Dallas Keuchel", 2015, 117, "Houston Astros"),
    AwardWinner::new(446372, "Corey Kluber", 2014, 114, "Cleveland Indians"),
    AwardWinner::new(453286, "Max Scherzer", 2013, 116, "Detroit Tigers"),
    AwardWinner::new(456034, "David Price", 2012, 139, "Tampa Bay Rays"),
];

pub static NL_CY_YOUNG: &[AwardWinner] = &[
    AwardWinner::new(519242, "Chris Sale", 2024, 144, "Atlanta Braves"),
    AwardWinner::new(605483, "Blake Snell", 2023, 135, "San Diego Padres"),
    AwardWinner::new(645261, "Sandy Alcantara", 2022, 146, "Miami Marlins"),
    AwardWinner::new(669203, "Corbin Burnes", 2021, 158, "Milwaukee Brewers"),
    AwardWinner::new(545333, "Trevor Bauer", 2020, 113, "Cincinnati Reds"),
    AwardWinner::new(594798, "Jacob deGrom", 2019, 121, "New York Mets"),
    AwardWinner::new(594798, "Jacob deGrom", 2018, 121, "New York Mets"),
    AwardWinner::new(453286, "Max Scherzer", 2017, 120, "Washington Nationals"),
    AwardWinner::new(453286, "Max Scherzer", 2016, 120, "Washington Nationals"),
    AwardWinner::new(453562, "Jake Arrieta", 2015, 112, "Chicago Cubs"),
    AwardWinner::new(477132, "Clayton Kershaw", 2014, 119, "Los Angeles Dodgers"),
    AwardWinner::new(477132, "Clayton Kershaw", 2013, 119, "Los Angeles Dodgers"),
    AwardWinner::new(285079, "R.A. Dickey", 2012, 121, "New York Mets"),
];

pub fn mvp_winners() -> LeagueAwards {
    LeagueAwards {
        al: AL_MVP,
        nl: NL_MVP,
    }
}

pub fn cy_young_winners() -> LeagueAwards {
    LeagueAwards {
        al: AL_CY_YOUNG,
        nl: NL_CY_YOUNG,
    }
}

pub fn winner_for(winners: &'static [AwardWinner], season: i32) -> Option<&'static AwardWinner> {
    winners.iter().find(|w| w.season == season)
}
