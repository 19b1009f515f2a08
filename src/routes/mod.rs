//! Axum handlers. Page handlers render HTML through `views`; `/api/*`
//! handlers return the same data as JSON.

pub mod all_star;
pub mod compare;
pub mod daily;
pub mod dashboard;
pub mod health;
pub mod hof;
pub mod players;
pub mod sitemap;
pub mod standings;
pub mod teams;

use std::sync::Arc;

use chrono::Datelike;
use serde::Deserialize;

use crate::mlb::MlbClient;
use crate::season;

/// Router state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub mlb: MlbClient,
    pub public_base_url: Arc<str>,
}

// ?season=2024; kept as a string so bad values fall back instead of rejecting
#[derive(Deserialize, Default)]
pub struct SeasonQuery {
    #[serde(default)]
    pub season: Option<String>,
}

/// Season a request asked for plus what the season selector needs.
pub struct SeasonContext {
    pub season: i32,
    pub current_year: i32,
    pub seasons: Vec<i32>,
}

impl SeasonContext {
    pub fn resolve(raw: Option<&str>) -> Self {
        let current_year = season::league_today().year();
        let fallback = season::current_default_season();
        Self {
            season: season::resolve_season(raw, fallback, current_year),
            current_year,
            seasons: season::available_seasons(current_year),
        }
    }
}

impl From<&SeasonQuery> for SeasonContext {
    fn from(query: &SeasonQuery) -> Self {
        SeasonContext::resolve(query.season.as_deref())
    }
}
