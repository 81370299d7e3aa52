//! Rendering geometry for the day view.
//!
//! Maps layout results to drawable geometry: hour gridline blocks with
//! AM/PM labels, per-event pixel/percent rectangles, and formatted time
//! ranges. Everything here is pure computation; the actual drawing surface
//! (GUI, HTML, terminal) consumes these values. `render_text` is the
//! terminal consumer used by the demo binary.

use std::fmt::Write as _;

use chrono::{NaiveTime, Timelike};

use crate::models::event::Event;
use crate::models::layout::{EventLayout, PositionedEvent};
use crate::models::settings::ViewSettings;
use crate::utils::time;

/// One hour gridline block in the day view.
#[derive(Debug, Clone, PartialEq)]
pub struct HourBlock {
    /// Hour on the 24-hour clock.
    pub hour: u32,
    /// Display label, e.g. "9 AM".
    pub label: String,
    /// Block height in pixels.
    pub height_px: f32,
}

/// Drawable rectangle for one event block.
///
/// Vertical placement is absolute pixels from the top of the day view;
/// horizontal placement is a percentage of the available width so the
/// consumer can scale to any surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventGeometry {
    pub top_px: f32,
    pub height_px: f32,
    pub left_pct: f32,
    pub width_pct: f32,
}

/// Hour gridline blocks for the configured day window, inclusive of the
/// closing boundary hour.
pub fn hour_blocks(settings: &ViewSettings) -> Vec<HourBlock> {
    (settings.start_hour..=settings.end_hour())
        .map(|hour| HourBlock {
            hour,
            label: hour_label(hour),
            height_px: settings.hour_in_pixels,
        })
        .collect()
}

/// 12-hour label with AM/PM for a whole hour, e.g. "9 AM", "12 PM".
pub fn hour_label(hour: u32) -> String {
    time::clock_hour(hour).format("%-I %p").to_string()
}

/// Drawable rectangle for an event given its column placement.
pub fn event_geometry(
    event: &Event,
    layout: &EventLayout,
    settings: &ViewSettings,
) -> EventGeometry {
    let pixels_per_minute = settings.hour_in_pixels / 60.0;
    EventGeometry {
        top_px: pixels_per_minute * event.starts_at as f32,
        height_px: pixels_per_minute * event.duration as f32,
        left_pct: layout.left_fraction() * 100.0,
        width_pct: layout.width_fraction() * 100.0,
    }
}

/// Formatted time span for an event, e.g. "10 AM - 10:45 AM".
/// Minutes are omitted on the hour.
pub fn event_time_range(event: &Event, settings: &ViewSettings) -> String {
    format!(
        "{} - {}",
        format_clock(time::offset_to_clock(settings.start_hour, event.starts_at)),
        format_clock(time::offset_to_clock(settings.start_hour, event.end())),
    )
}

fn format_clock(clock: NaiveTime) -> String {
    if clock.minute() == 0 {
        clock.format("%-I %p").to_string()
    } else {
        clock.format("%-I:%M %p").to_string()
    }
}

/// Plain-text day view: one line per event in start-time order, with its
/// time span, lane placement, and horizontal geometry.
pub fn render_text(
    events: &[Event],
    layout: &[PositionedEvent],
    settings: &ViewSettings,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Day view: {} - {}",
        hour_label(settings.start_hour),
        hour_label(settings.end_hour())
    );

    for positioned in layout {
        let event = &events[positioned.event_index];
        let geometry = event_geometry(event, &positioned.layout, settings);
        let _ = write!(
            out,
            "{:<20} [col {}/{}, left {:.0}%, width {:.0}%]  {}",
            event_time_range(event, settings),
            positioned.layout.column + 1,
            positioned.layout.column_count,
            geometry.left_pct,
            geometry.width_pct,
            event.title.as_deref().unwrap_or("(untitled)"),
        );
        if let Some(location) = &event.location {
            let _ = write!(out, " @ {}", location);
        }
        out.push('\n');
    }

    out
}
