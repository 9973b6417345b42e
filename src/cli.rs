// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use crate::config::consts::{DEFAULT_ENDPOINT, DEFAULT_FILE, MSG_EMPTY_SEASON};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv;
use crate::file;
use crate::fixtures::{self, FixtureTable};
use crate::net::ScrapeClient;
use crate::status::{StatusKind, StatusSink};

/// Status lines go to stderr; the table itself goes to stdout or a file.
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn set(&mut self, kind: StatusKind, text: String) {
        eprintln!("[{kind}] {text}");
    }
}

pub struct Params {
    pub season: String,
    pub endpoint: String,
    pub out: Option<PathBuf>,
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            season: s!(),
            endpoint: s!(DEFAULT_ENDPOINT),
            out: None,
            format: ExportFormat::Csv,
            include_headers: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    run_with(params, &mut ConsoleStatus)
}

/// One-shot scrape: validate, request, write the table out.
pub fn run_with(params: Params, status: &mut dyn StatusSink) -> Result<(), Box<dyn Error>> {
    let Some(season) = fixtures::normalize_season(&params.season) else {
        status.set(StatusKind::Error, s!(MSG_EMPTY_SEASON));
        return Err(MSG_EMPTY_SEASON.into());
    };

    status.set(StatusKind::Loading, format!("Scraping fixtures for {season}..."));
    logf!("Scrape: Begin season={:?} endpoint={}", season, params.endpoint);

    let payload = ScrapeClient::new(&params.endpoint)?.scrape(season)?;
    let table = FixtureTable::from_fixtures(&payload.fixtures);

    if let Some(text) = table.placeholder {
        status.set(StatusKind::Info, s!(text));
    }

    if let Some(out) = &params.out {
        let mut export = ExportOptions::default();
        export.format = params.format;
        export.include_headers = params.include_headers;

        let resolved = file::resolve_single_out_path(
            out.to_string_lossy().as_ref(),
            &join!(DEFAULT_FILE, ".", params.format.ext()),
        )?;
        export.set_path(resolved.to_string_lossy().as_ref());

        let path = file::write_export_single(&export, &table.header_row(), &table.rows)?;
        println!("Wrote {}", path.display());
    } else {
        let stdout = io::stdout();
        let mut w = stdout.lock();
        if params.include_headers {
            csv::write_row(&mut w, &table.header_row(), params.format.delim())?;
        }
        for row in &table.rows {
            csv::write_row(&mut w, row, params.format.delim())?;
        }
        w.flush()?;
    }

    status.set(
        StatusKind::Success,
        format!("Fetched {} fixtures for {}.", payload.fixtures.len(), payload.season),
    );
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-s" | "--season" => params.season = args.next().ok_or("Missing value for --season")?,
            "--endpoint" => params.endpoint = args.next().ok_or("Missing value for --endpoint")?,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::NullStatus;

    #[test]
    fn blank_season_fails_without_request() {
        let mut params = Params::new();
        params.season = s!("   ");
        // unroutable on purpose; a request attempt would fail differently
        params.endpoint = s!("http://127.0.0.1:1");

        let err = run_with(params, &mut NullStatus).unwrap_err();
        assert_eq!(err.to_string(), MSG_EMPTY_SEASON);
    }
}
