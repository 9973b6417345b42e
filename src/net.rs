// src/net.rs
//
// JSON POST to the scrape service. One request per scrape; no retry,
// no caching. The backend owns the actual scraping.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;

use crate::config::consts::{MSG_SCRAPE_FAILED, REQUEST_TIMEOUT_SECS, SCRAPE_PATH};
use crate::fixtures::ScrapePayload;

#[derive(thiserror::Error, Debug)]
pub enum NetError {
    /// Non-2xx reply; message comes from the body's `error` field when present.
    #[error("{message}")]
    Scrape { status: u16, message: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ScrapeRequest<'a> {
    season: &'a str,
}

pub struct ScrapeClient {
    http: Client,
    base: String,
}

impl ScrapeClient {
    /// `endpoint` is the service base URL; SCRAPE_PATH is appended.
    pub fn new(endpoint: &str) -> Result<Self, NetError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, base: s!(endpoint.trim_end_matches('/')) })
    }

    pub fn scrape(&self, season: &str) -> Result<ScrapePayload, NetError> {
        let url = join!(&self.base, SCRAPE_PATH);
        let resp = self.http
            .post(&url)
            .json(&ScrapeRequest { season })
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        parse_response(status, &body)
    }
}

/// Decode one reply. The body is parsed as JSON regardless of status:
/// a failure reply carries `{"error": ...}`, a success reply the payload.
/// A body that is not JSON surfaces as Malformed either way.
pub fn parse_response(status: StatusCode, body: &str) -> Result<ScrapePayload, NetError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if !status.is_success() {
        let message = value
            .get("error")
            .and_then(|e| e.as_str())
            .unwrap_or(MSG_SCRAPE_FAILED);
        return Err(NetError::Scrape { status: status.as_u16(), message: s!(message) });
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_payload_decodes() {
        let body = r#"{"season":"2023-2024","fixtures":[{"date":"2023-08-12","round":"1","home":"A","away":"B","score":"2-1","venue":"Stadium"}]}"#;
        let payload = parse_response(StatusCode::OK, body).unwrap();
        assert_eq!(payload.season, "2023-2024");
        assert_eq!(payload.fixtures.len(), 1);
        assert_eq!(payload.fixtures[0].cells(), ["2023-08-12", "1", "A", "B", "2-1", "Stadium"]);
    }

    #[test]
    fn missing_fixtures_field_means_empty_list() {
        let payload = parse_response(StatusCode::OK, r#"{"season":"2023-2024"}"#).unwrap();
        assert!(payload.fixtures.is_empty());
    }

    #[test]
    fn error_body_message_wins() {
        let err = parse_response(StatusCode::BAD_REQUEST, r#"{"error":"Season looks wrong."}"#).unwrap_err();
        assert_eq!(err.to_string(), "Season looks wrong.");
        match err {
            NetError::Scrape { status, .. } => assert_eq!(status, 400),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_without_field_falls_back() {
        let err = parse_response(StatusCode::BAD_GATEWAY, r#"{}"#).unwrap_err();
        assert_eq!(err.to_string(), MSG_SCRAPE_FAILED);
    }

    #[test]
    fn non_json_body_is_malformed_even_on_error_status() {
        let err = parse_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, NetError::Malformed(_)));
    }
}
