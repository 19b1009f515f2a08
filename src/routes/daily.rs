use axum::response::Json;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::data::spotlight::{self, SpotlightPlayer};
use crate::data::trivia::{self, TriviaQuestion};
use crate::daily::next_rotation;
use crate::error::ApiError;
use crate::mlb::{player_headshot_url, HeadshotSize};
use crate::season::league_now;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightResponse {
    pub date: String,
    pub player: &'static SpotlightPlayer,
    pub headshot_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriviaResponse {
    pub date: String,
    pub questions: Vec<&'static TriviaQuestion>,
    pub featured_question: Option<&'static TriviaQuestion>,
    pub next_rotation: NaiveDateTime,
}

// GET /api/spotlight - Today's spotlight player
pub async fn get_spotlight() -> Result<Json<SpotlightResponse>, ApiError> {
    let today = league_now().date();
    let player = spotlight::daily_player(today).ok_or(ApiError::NotFound)?;

    Ok(Json(SpotlightResponse {
        date: today.to_string(),
        player,
        headshot_url: player_headshot_url(player.id, HeadshotSize::Medium),
    }))
}

// GET /api/trivia - Today's question set and the current half-day question
pub async fn get_trivia() -> Json<TriviaResponse> {
    let now = league_now();

    Json(TriviaResponse {
        date: now.date().to_string(),
        questions: trivia::daily_questions(now.date()),
        featured_question: trivia::question_for_period(now),
        next_rotation: next_rotation(now),
    })
}
