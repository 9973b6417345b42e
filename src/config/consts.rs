// src/config/consts.rs

// Net config
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";
pub const SCRAPE_PATH: &str = "/api/scrape";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Status messages
pub const MSG_READY: &str = "Ready to scrape. Enter a season and press SCRAPE.";
pub const MSG_EMPTY_SEASON: &str = "Please enter a season like 2023-2024.";
pub const MSG_SCRAPE_FAILED: &str = "Failed to scrape fixtures.";

// Table placeholders
pub const PLACEHOLDER_LOADING: &str = "Loading...";
pub const PLACEHOLDER_NO_FIXTURES: &str = "No fixtures returned for this season.";
pub const PLACEHOLDER_NO_DATA: &str = "No data available.";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "fixtures";
