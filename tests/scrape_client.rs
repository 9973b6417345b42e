// tests/scrape_client.rs
//
// Client behavior against a mock scrape service: request shape, payload
// decoding, and the error contract.
//
use fixture_scrape::fixtures::FixtureTable;
use fixture_scrape::net::{NetError, ScrapeClient};
use mockito::Matcher;

#[test]
fn posts_season_as_json_exactly_once() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/scrape")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({"season": "2023-2024"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"season":"2023-2024","fixtures":[]}"#)
        .expect(1)
        .create();

    let client = ScrapeClient::new(&server.url()).unwrap();
    let payload = client.scrape("2023-2024").unwrap();

    assert_eq!(payload.season, "2023-2024");
    assert!(payload.fixtures.is_empty());
    mock.assert();
}

#[test]
fn one_fixture_renders_one_full_row() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/scrape")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"season":"2023-2024","fixtures":[
                {"date":"2023-08-12","round":"1","home":"A","away":"B","score":"2-1","venue":"Stadium"}
            ]}"#,
        )
        .create();

    let client = ScrapeClient::new(&server.url()).unwrap();
    let payload = client.scrape("2023-2024").unwrap();
    let table = FixtureTable::from_fixtures(&payload.fixtures);

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0], vec!["2023-08-12", "1", "A", "B", "2-1", "Stadium"]);
    assert_eq!(table.placeholder, None);

    let status = format!("Fetched {} fixtures for {}.", payload.fixtures.len(), payload.season);
    assert_eq!(status, "Fetched 1 fixtures for 2023-2024.");
}

#[test]
fn absent_fields_become_empty_cells() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/scrape")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"season":"2024-2025","fixtures":[{"home":"A","away":"B"}]}"#)
        .create();

    let client = ScrapeClient::new(&server.url()).unwrap();
    let payload = client.scrape("2024-2025").unwrap();
    let table = FixtureTable::from_fixtures(&payload.fixtures);

    assert_eq!(table.rows[0], vec!["", "", "A", "B", "", ""]);
}

#[test]
fn zero_fixtures_yield_the_empty_placeholder() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/scrape")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"season":"1901-1902","fixtures":[]}"#)
        .create();

    let client = ScrapeClient::new(&server.url()).unwrap();
    let payload = client.scrape("1901-1902").unwrap();
    let table = FixtureTable::from_fixtures(&payload.fixtures);

    assert!(table.rows.is_empty());
    assert_eq!(table.placeholder, Some("No fixtures returned for this season."));
}

#[test]
fn server_error_message_becomes_the_failure() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/scrape")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"X"}"#)
        .create();

    let client = ScrapeClient::new(&server.url()).unwrap();
    let err = client.scrape("nope").unwrap_err();

    assert_eq!(err.to_string(), "X");
    // failed attempts reset the table to the neutral placeholder
    let table = FixtureTable::no_data();
    assert!(table.rows.is_empty());
    assert_eq!(table.placeholder, Some("No data available."));
}

#[test]
fn error_without_message_uses_the_generic_fallback() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/scrape")
        .with_status(502)
        .with_header("content-type", "application/json")
        .with_body(r#"{}"#)
        .create();

    let client = ScrapeClient::new(&server.url()).unwrap();
    let err = client.scrape("nope").unwrap_err();

    assert_eq!(err.to_string(), "Failed to scrape fixtures.");
    assert!(matches!(err, NetError::Scrape { status: 502, .. }));
}

#[test]
fn non_json_body_is_a_parse_failure() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/scrape")
        .with_status(500)
        .with_header("content-type", "text/html")
        .with_body("<html>Internal Server Error</html>")
        .create();

    let client = ScrapeClient::new(&server.url()).unwrap();
    let err = client.scrape("nope").unwrap_err();

    assert!(matches!(err, NetError::Malformed(_)));
}
