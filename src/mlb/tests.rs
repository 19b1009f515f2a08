//! Accessor tests against a mocked upstream

use super::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> MlbClient {
    let config = Config {
        mlb_base_url: server.uri(),
        retry: RetryPolicy {
            max_retries: 1,
            base_delay: Duration::from_millis(1),
        },
        history_pause: Duration::ZERO,
        ..Config::default()
    };
    MlbClient::new(&config).unwrap()
}

fn standings_body(team_id: i64, wins: i64) -> serde_json::Value {
    json!({
        "records": [{
            "division": {"id": 201, "name": "American League East"},
            "league": {"id": 103},
            "teamRecords": [
                {"team": {"id": team_id, "name": "New York Yankees"}, "wins": wins, "losses": 162 - wins,
                 "winningPercentage": ".580", "divisionRank": "1"},
                {"team": {"id": 111, "name": "Boston Red Sox"}, "wins": 81, "losses": 81}
            ]
        }]
    })
}

#[tokio::test]
async fn standings_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2024"))
        .and(query_param("leagueId", "103,104"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(147, 94)))
        .mount(&server)
        .await;

    let standings = test_client(&server).get_standings(2024).await;

    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].name(), "American League East");
    assert_eq!(standings[0].team_records[0].wins, 94);
}

#[tokio::test]
async fn unavailable_upstream_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.get_standings(2024).await.is_empty());
    assert!(client.get_teams().await.is_empty());
    assert!(client.get_player(592450).await.is_none());
    assert!(client.get_hall_of_famers().await.is_empty());
    assert!(client.get_all_star_rosters(2024).await.is_empty());

    let franchise = client.get_franchise_history(147).await;
    assert_eq!(franchise.all_team_ids, vec![147]);
    assert!(franchise.name.is_empty());
}

#[tokio::test]
async fn short_search_skips_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"people": []})))
        .expect(0)
        .mount(&server)
        .await;

    assert!(test_client(&server).search_players(" j ").await.is_empty());
}

#[tokio::test]
async fn search_passes_encoded_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/search"))
        .and(query_param("names", "Ronald Acuña"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [{"id": 660670, "fullName": "Ronald Acuña Jr."}]
        })))
        .mount(&server)
        .await;

    let players = test_client(&server).search_players("Ronald Acuña").await;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, 660670);
}

#[tokio::test]
async fn leaders_take_first_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/leaders"))
        .and(query_param("leaderCategories", "homeRuns"))
        .and(query_param("leagueId", "104"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "leagueLeaders": [{
                "leaders": [{"rank": 1, "value": "54", "person": {"id": 660271, "fullName": "Shohei Ohtani"}}]
            }]
        })))
        .mount(&server)
        .await;

    let leaders = test_client(&server)
        .get_leaders_by_league(StatGroupKind::Hitting, "homeRuns", NATIONAL_LEAGUE_ID, 2024, 1)
        .await;

    assert_eq!(leaders[0].person.full_name, "Shohei Ohtani");
    assert_eq!(leaders[0].value, "54");
}

#[tokio::test]
async fn roster_maps_person_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/147/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roster": [
                {"person": {"id": 592450, "fullName": "Aaron Judge"}},
                {"person": {"id": 543037, "fullName": "Gerrit Cole"}}
            ]
        })))
        .mount(&server)
        .await;

    let roster = test_client(&server).get_team_roster(147, 2024).await;
    let names: Vec<&str> = roster.iter().map(|p| p.full_name.as_str()).collect();
    assert_eq!(names, vec!["Aaron Judge", "Gerrit Cole"]);
}

#[tokio::test]
async fn stats_requests_both_groups() {
    let server = MockServer::start().await;
    let body = json!({
        "stats": [
            {"group": {"displayName": "hitting"}, "splits": [{"season": "2024", "stat": {"homeRuns": 58}}]},
            {"group": {"displayName": "pitching"}, "splits": []}
        ]
    });
    Mock::given(method("GET"))
        .and(path("/people/592450/stats"))
        .and(query_param("group", "hitting,pitching"))
        .and(query_param("season", "2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/teams/147/stats"))
        .and(query_param("stats", "season"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let splits = client.get_player_stats(592450, 2024).await;
    assert_eq!(splits.len(), 1);
    assert_eq!(splits[0].stat.home_runs, Some(58));

    let groups = client.get_team_stats(147, 2024).await;
    assert_eq!(groups.len(), 2);
    assert!(groups[0].is_group("hitting"));
}

#[tokio::test]
async fn team_history_skips_missing_seasons_and_sorts_newest_first() {
    let server = MockServer::start().await;
    for (season, wins) in [(2020, 33), (2021, 92), (2023, 82), (2024, 94)] {
        Mock::given(method("GET"))
            .and(path("/standings"))
            .and(query_param("season", season.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(147, wins)))
            .mount(&server)
            .await;
    }
    // 2022: upstream has data but not for this team
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2022"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(999, 80)))
        .mount(&server)
        .await;
    // 2019: upstream failure
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2019"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let history = test_client(&server).get_team_history(147, 2019, 2024).await;
    let seasons: Vec<i32> = history.iter().map(|r| r.season).collect();

    assert_eq!(seasons, vec![2024, 2023, 2021, 2020]);
    assert_eq!(history[0].wins, 94);
    assert_eq!(history[0].division_rank, Some(1));
}

#[tokio::test]
async fn franchise_history_collects_previous_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/120"))
        .and(query_param("hydrate", "previousScheduledTeams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [{"id": 120, "name": "Washington Nationals",
                       "previousScheduledTeams": [{"id": 4990, "name": "Montreal Expos"}]}]
        })))
        .mount(&server)
        .await;

    let history = test_client(&server).get_franchise_history(120).await;
    assert_eq!(history.all_team_ids, vec![120, 4990]);
    assert_eq!(history.name, "Washington Nationals");
}

#[tokio::test]
async fn franchise_team_history_matches_previous_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2004"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(4990, 67)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2005"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body(120, 81)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let history = client.get_franchise_team_history(&[120, 4990], 2004, 2005).await;
    let wins: Vec<i64> = history.iter().map(|r| r.wins).collect();
    assert_eq!(wins, vec![81, 67]);

    assert_eq!(client.get_team_history(120, 2004, 2005).await.len(), 1);
}

#[tokio::test]
async fn hall_of_famers_sorted_by_class() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/awards/MLBHOF/recipients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "awards": [
                {"id": "MLBHOF", "season": "1999", "player": {"id": 121597, "nameFirstLast": "Nolan Ryan"}},
                {"id": "MLBHOF", "season": "2019", "player": {"id": 121250, "nameFirstLast": "Mariano Rivera"}},
                {"id": "MLBHOF", "season": "1999", "player": {"id": 111432, "nameFirstLast": "George Brett"}},
                {"id": "MLBHOF", "season": "2019"}
            ]
        })))
        .mount(&server)
        .await;

    let members = test_client(&server).get_hall_of_famers().await;
    let names: Vec<&str> = members.iter().map(|m| m.player_name.as_str()).collect();
    assert_eq!(names, vec!["Mariano Rivera", "George Brett", "Nolan Ryan"]);
}

#[test]
fn image_urls() {
    assert!(player_headshot_url(592450, HeadshotSize::Large).contains("w_426"));
    assert!(player_headshot_url(592450, HeadshotSize::Small).contains("/people/592450/"));
    assert_eq!(team_logo_url(147), "https://www.mlbstatic.com/team-logos/147.svg");
}
