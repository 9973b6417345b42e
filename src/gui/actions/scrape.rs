// src/gui/actions/scrape.rs
use eframe::egui;

use crate::{
    config::consts::MSG_EMPTY_SEASON,
    fixtures::{self, FixtureTable},
    gui::{app::App, worker},
    status::StatusKind,
};

/// Kick off one scrape. At most one request is in flight: the button is
/// disabled while running and repeat triggers land here and bail.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Scrape: Trigger ignored, request already in flight");
        return;
    }

    let Some(season) = fixtures::normalize_season(&app.state.gui.season) else {
        app.set_status(StatusKind::Error, s!(MSG_EMPTY_SEASON));
        return;
    };
    let season = s!(season);

    app.set_status(StatusKind::Loading, format!("Scraping fixtures for {season}..."));
    app.running = true;
    app.table = FixtureTable::loading();
    app.generation += 1;

    logf!(
        "Scrape: Begin gen={} season={:?} endpoint={}",
        app.generation, season, app.state.options.scrape.endpoint
    );

    worker::spawn(
        ctx.clone(),
        app.outcome_sender(),
        app.generation,
        app.state.options.scrape.endpoint.clone(),
        season,
    );
}
