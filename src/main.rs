// Day Calendar Application
// Main entry point

use std::env;
use std::fs;

use anyhow::{Context, Result};

use day_calendar::models::event::Event;
use day_calendar::services::layout;
use day_calendar::services::render;
use day_calendar::services::settings::SettingsService;

const SAMPLE_EVENTS: &str = include_str!("../data/sample_events.json");

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Day Calendar");

    let settings = SettingsService::load_default()?;

    let events: Vec<Event> = match env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read events from {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse events from {}", path))?
        }
        None => {
            log::info!("No events file given, using the built-in sample day");
            serde_json::from_str(SAMPLE_EVENTS).context("Built-in sample events are malformed")?
        }
    };

    let layout = layout::compute_layout(&events)?;
    print!("{}", render::render_text(&events, &layout, &settings));

    Ok(())
}
