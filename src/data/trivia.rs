use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::daily;

/// Questions shown per day.
pub const DAILY_QUESTION_COUNT: usize = 5;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TriviaCategory {
    History,
    Records,
    Players,
    Teams,
    Rules,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriviaQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`
    pub correct_answer: usize,
    pub explanation: &'static str,
    pub category: TriviaCategory,
}

impl TriviaQuestion {
    pub fn answer(&self) -> &'static str {
        self.options[self.correct_answer]
    }
}

use TriviaCategory::*;

pub static TRIVIA_QUESTIONS: &[TriviaQuestion] = &[
    TriviaQuestion {
        id: 1,
        question: "Who holds the record for most career home runs?",
        options: ["Babe Ruth", "Hank Aaron", "Barry Bonds", "Willie Mays"],
        correct_answer: 2,
        explanation: "Barry Bonds hit 762 career home runs, surpassing Hank Aaron's 755 in 2007.",
        category: Records,
    },
    TriviaQuestion {
        id: 2,
        question: "Which team won the first World Series in 1903?",
        options: ["New York Yankees", "Boston Americans", "Chicago Cubs", "Pittsburgh Pirates"],
        correct_answer: 1,
        explanation: "The Boston Americans (later Red Sox) defeated the Pittsburgh Pirates 5 games to 3.",
        category: History,
    },
    TriviaQuestion {
        id: 3,
        question: "Who threw the only perfect game in World Series history?",
        options: ["Sandy Koufax", "Don Larsen", "Nolan Ryan", "Randy Johnson"],
        correct_answer: 1,
        explanation: "Don Larsen pitched a perfect game for the Yankees in Game 5 of the 1956 World Series.",
        category: History,
    },
    TriviaQuestion {
        id: 4,
        question: "Which player has the most career stolen bases?",
        options: ["Ty Cobb", "Lou Brock", "Rickey Henderson", "Tim Raines"],
        correct_answer: 2,
        explanation: "Rickey Henderson stole 1,406 bases during his career, far surpassing Lou Brock's 938.",
        category: Records,
    },
    TriviaQuestion {
        id: 5,
        question: "What year did Jackie Robinson break the color barrier?",
        options: ["1945", "1947", "1949", "1951"],
        correct_answer: 1,
        explanation: "Jackie Robinson debuted for the Brooklyn Dodgers on April 15, 1947.",
        category: History,
    },
    TriviaQuestion {
        id: 6,
        question: "Which pitcher holds the record for most career strikeouts?",
        options: ["Randy Johnson", "Roger Clemens", "Nolan Ryan", "Steve Carlton"],
        correct_answer: 2,
        explanation: "Nolan Ryan struck out 5,714 batters during his 27-year career.",
        category: Records,
    },
    TriviaQuestion {
        id: 7,
        question: "How many double stitches are on a regulation MLB baseball?",
        options: ["88", "108", "128", "148"],
        correct_answer: 1,
        explanation: "Every MLB baseball has exactly 108 double stitches.",
        category: Rules,
    },
    TriviaQuestion {
        id: 8,
        question: "Which team has won the most World Series titles?",
        options: ["St. Louis Cardinals", "Boston Red Sox", "New York Yankees", "San Francisco Giants"],
        correct_answer: 2,
        explanation: "The New York Yankees have won 27 World Series championships.",
        category: Teams,
    },
    TriviaQuestion {
        id: 9,
        question: "Who hit the 'Shot Heard Round the World' in 1951?",
        options: ["Willie Mays", "Bobby Thomson", "Jackie Robinson", "Duke Snider"],
        correct_answer: 1,
        explanation: "Bobby Thomson's walk-off home run won the pennant for the Giants against the Dodgers.",
        category: History,
    },
    TriviaQuestion {
        id: 10,
        question: "What is the highest single-season batting average since 1900?",
        options: [".406", ".424", ".426", ".440"],
        correct_answer: 1,
        explanation: "Rogers Hornsby hit .424 for the Cardinals in 1924.",
        category: Records,
    },
    TriviaQuestion {
        id: 11,
        question: "Which stadium is known as 'The House That Ruth Built'?",
        options: ["Fenway Park", "Wrigley Field", "Old Yankee Stadium", "Polo Grounds"],
        correct_answer: 2,
        explanation: "The original Yankee Stadium (1923-2008) earned the nickname from Babe Ruth's star power.",
        category: Teams,
    },
    TriviaQuestion {
        id: 12,
        question: "Who was the first player to earn $1 million per year?",
        options: ["Reggie Jackson", "Pete Rose", "Nolan Ryan", "Mike Schmidt"],
        correct_answer: 2,
        explanation: "Nolan Ryan became MLB's first $1 million per year player when he signed with the Astros in 1980.",
        category: Players,
    },
    TriviaQuestion {
        id: 13,
        question: "Which player has the most Gold Glove awards?",
        options: ["Ozzie Smith", "Roberto Clemente", "Greg Maddux", "Brooks Robinson"],
        correct_answer: 2,
        explanation: "Greg Maddux won 18 Gold Glove awards as a pitcher.",
        category: Players,
    },
    TriviaQuestion {
        id: 14,
        question: "What is a 'cycle' in baseball?",
        options: [
            "Pitching 9 innings",
            "Hitting single, double, triple, and HR in one game",
            "Turning a triple play",
            "Stealing all four bases",
        ],
        correct_answer: 1,
        explanation: "Hitting for the cycle means a single, double, triple, and home run in the same game.",
        category: Rules,
    },
    TriviaQuestion {
        id: 15,
        question: "Who was the youngest player to reach 3,000 hits?",
        options: ["Ty Cobb", "Pete Rose", "Hank Aaron", "Robin Yount"],
        correct_answer: 0,
        explanation: "Ty Cobb reached 3,000 hits at age 34 in 1921.",
        category: Records,
    },
    TriviaQuestion {
        id: 16,
        question: "Which franchise moved from Milwaukee to Atlanta?",
        options: ["Brewers", "Braves", "Twins", "Orioles"],
        correct_answer: 1,
        explanation: "The Braves played in Milwaukee from 1953-1965 before moving to Atlanta in 1966.",
        category: Teams,
    },
    TriviaQuestion {
        id: 17,
        question: "What is the 'Mendoza Line' named after?",
        options: ["A famous umpire", "A light-hitting shortstop", "A stadium", "A rule change"],
        correct_answer: 1,
        explanation: "Named after Mario Mendoza, it marks a .200 batting average.",
        category: Players,
    },
    TriviaQuestion {
        id: 18,
        question: "Who holds the record for most consecutive games played?",
        options: ["Lou Gehrig", "Cal Ripken Jr.", "Pete Rose", "Steve Garvey"],
        correct_answer: 1,
        explanation: "Cal Ripken Jr. played 2,632 consecutive games from 1982 to 1998.",
        category: Records,
    },
    TriviaQuestion {
        id: 19,
        question: "What year was the designated hitter rule introduced in the AL?",
        options: ["1969", "1973", "1977", "1981"],
        correct_answer: 1,
        explanation: "The American League adopted the DH in 1973. The NL followed in 2022.",
        category: Rules,
    },
    TriviaQuestion {
        id: 20,
        question: "What is the oldest MLB stadium still in use?",
        options: ["Wrigley Field", "Fenway Park", "Dodger Stadium", "Oakland Coliseum"],
        correct_answer: 1,
        explanation: "Fenway Park opened on April 20, 1912.",
        category: Teams,
    },
    TriviaQuestion {
        id: 21,
        question: "Which player won the Triple Crown most recently before 2012?",
        options: ["Ted Williams", "Mickey Mantle", "Frank Robinson", "Carl Yastrzemski"],
        correct_answer: 3,
        explanation: "Carl Yastrzemski won it in 1967. Miguel Cabrera ended the 45-year drought in 2012.",
        category: History,
    },
    TriviaQuestion {
        id: 22,
        question: "What is the 'Green Monster'?",
        options: ["Oakland's mascot", "Fenway Park's left field wall", "A type of curveball", "Chicago's ivy walls"],
        correct_answer: 1,
        explanation: "The Green Monster is Fenway Park's 37-foot left field wall.",
        category: Teams,
    },
    TriviaQuestion {
        id: 23,
        question: "Who was the first African American manager in MLB?",
        options: ["Jackie Robinson", "Frank Robinson", "Dusty Baker", "Cito Gaston"],
        correct_answer: 1,
        explanation: "Frank Robinson became MLB's first Black manager with Cleveland in 1975.",
        category: History,
    },
    TriviaQuestion {
        id: 24,
        question: "What is the most runs scored in a single MLB game by one team since 1900?",
        options: ["27", "30", "33", "36"],
        correct_answer: 1,
        explanation: "The Texas Rangers scored 30 runs against the Baltimore Orioles on August 22, 2007.",
        category: Records,
    },
];

/// The day's question set, [`DAILY_QUESTION_COUNT`] long.
pub fn daily_questions(date: NaiveDate) -> Vec<&'static TriviaQuestion> {
    daily::daily_set(TRIVIA_QUESTIONS, date, DAILY_QUESTION_COUNT)
}

/// Single question for the current 12-hour window.
pub fn question_for_period(now: NaiveDateTime) -> Option<&'static TriviaQuestion> {
    daily::half_day_index(now, TRIVIA_QUESTIONS.len()).map(|i| &TRIVIA_QUESTIONS[i])
}
