// src/fixtures.rs
//
// Wire types for the scrape service plus the table form both frontends
// render. Fixtures are transient: each scrape fully replaces the previous
// table, nothing is cached.

use serde::Deserialize;

use crate::config::consts::{PLACEHOLDER_LOADING, PLACEHOLDER_NO_DATA, PLACEHOLDER_NO_FIXTURES};

/// Column order is fixed; missing fields render as empty cells.
pub const COLUMNS: [&str; 6] = ["Date", "Round", "Home", "Away", "Score", "Venue"];

/// One scheduled match as the backend reports it. Every field is optional
/// display text; a fixture has no identity beyond its position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Fixture {
    pub date: Option<String>,
    pub round: Option<String>,
    pub home: Option<String>,
    pub away: Option<String>,
    pub score: Option<String>,
    pub venue: Option<String>,
}

impl Fixture {
    /// Cells in COLUMNS order, absent fields as "".
    pub fn cells(&self) -> [&str; 6] {
        fn c(f: &Option<String>) -> &str { f.as_deref().unwrap_or("") }
        [c(&self.date), c(&self.round), c(&self.home), c(&self.away), c(&self.score), c(&self.venue)]
    }
}

/// Success body: the echoed season plus the ordered fixture list.
#[derive(Clone, Debug, Deserialize)]
pub struct ScrapePayload {
    pub season: String,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
}

/// Trim the raw season input; None means "don't even send a request".
pub fn normalize_season(raw: &str) -> Option<&str> {
    let season = raw.trim();
    if season.is_empty() { None } else { Some(season) }
}

/* ---------------- Table form ---------------- */

/// What one render cycle puts on screen: either data rows or a single
/// placeholder line. Replaced wholesale on every scrape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixtureTable {
    pub rows: Vec<Vec<String>>,
    pub placeholder: Option<&'static str>,
}

impl FixtureTable {
    /// Shown while a request is in flight.
    pub fn loading() -> Self {
        Self { rows: Vec::new(), placeholder: Some(PLACEHOLDER_LOADING) }
    }

    /// Shown after any failed attempt.
    pub fn no_data() -> Self {
        Self { rows: Vec::new(), placeholder: Some(PLACEHOLDER_NO_DATA) }
    }

    /// Batch-build all rows; an empty list gets its own placeholder.
    pub fn from_fixtures(fixtures: &[Fixture]) -> Self {
        if fixtures.is_empty() {
            return Self { rows: Vec::new(), placeholder: Some(PLACEHOLDER_NO_FIXTURES) };
        }
        let rows = fixtures
            .iter()
            .map(|f| f.cells().iter().map(|c| s!(*c)).collect())
            .collect();
        Self { rows, placeholder: None }
    }

    pub fn header_row(&self) -> Vec<String> {
        COLUMNS.iter().map(|h| s!(*h)).collect()
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
