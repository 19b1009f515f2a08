//! Server-rendered MLB statistics site backed by the public MLB Stats API.

pub mod compare;
pub mod config;
pub mod daily;
pub mod data;
pub mod error;
pub mod hof;
pub mod mlb;
pub mod models;
pub mod roster;
pub mod routes;
pub mod season;
pub mod standings;
pub mod views;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::mlb::MlbClient;
use crate::routes::AppState;

/// Full application router: HTML pages, JSON endpoints, health and sitemap.
pub fn app(mlb: MlbClient, config: &Config) -> Router {
    let state = AppState {
        mlb,
        public_base_url: Arc::from(config.public_base_url.as_str()),
    };

    // JSON endpoints are read-only and public
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(routes::dashboard::dashboard_page))
        .route("/players", get(routes::players::players_page))
        .route("/players/{id}", get(routes::players::player_page))
        .route("/teams", get(routes::teams::teams_page))
        .route("/teams/{id}", get(routes::teams::team_page))
        .route("/standings", get(routes::standings::standings_page))
        .route("/compare", get(routes::compare::compare_page))
        .route("/hof", get(routes::hof::hof_page))
        .route("/all-star", get(routes::all_star::all_star_page))

        // JSON endpoints
        .route("/api/dashboard", get(routes::dashboard::get_dashboard))
        .route("/api/standings", get(routes::standings::get_standings))
        .route("/api/team/{id}", get(routes::teams::get_team_data))
        .route("/api/players", get(routes::players::get_featured_players))
        .route("/api/players/search", get(routes::players::search_players))
        .route("/api/spotlight", get(routes::daily::get_spotlight))
        .route("/api/trivia", get(routes::daily::get_trivia))

        // Health and crawlers
        .route("/health", get(routes::health::health_check))
        .route("/sitemap.xml", get(routes::sitemap::sitemap))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
