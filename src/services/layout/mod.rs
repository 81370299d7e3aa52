//! Overlap layout engine for the day view.
//!
//! Turns a list of timed events into per-event column placements so that
//! simultaneous events never visually collide and share horizontal space
//! evenly. `compute_layout` is the single entry point; it is a pure
//! function, so repeated calls with the same events give the same layout
//! and nothing is carried over between calls.

mod cluster;
mod columns;

use thiserror::Error;

use crate::models::event::Event;
use crate::models::layout::PositionedEvent;

/// Errors reported by the layout engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The event list was empty.
    #[error("no events supplied")]
    InvalidInput,
    /// An individual event failed validation. The whole call fails; a
    /// partially laid-out day would report column counts inconsistent
    /// with what actually got rendered.
    #[error("invalid event at index {index}: {reason}")]
    InvalidEvent { index: usize, reason: String },
}

/// Compute column placements for a day's events.
///
/// Events are validated up front, sorted by start time (ties by duration,
/// then input order), grouped into overlap clusters, and assigned columns
/// greedily within each cluster. The caller's slice is never mutated.
///
/// Results come back in start-time order; each entry's `event_index`
/// points into the input slice.
///
/// # Examples
/// ```
/// use day_calendar::models::event::Event;
/// use day_calendar::services::layout::compute_layout;
///
/// let events = vec![
///     Event::new(0, 60).unwrap(),
///     Event::new(30, 60).unwrap(),
/// ];
/// let layout = compute_layout(&events).unwrap();
/// assert_eq!(layout.len(), 2);
/// assert!(layout.iter().all(|p| p.layout.column_count == 2));
/// ```
pub fn compute_layout(events: &[Event]) -> Result<Vec<PositionedEvent>, LayoutError> {
    if events.is_empty() {
        return Err(LayoutError::InvalidInput);
    }
    for (index, event) in events.iter().enumerate() {
        event
            .validate()
            .map_err(|reason| LayoutError::InvalidEvent { index, reason })?;
    }

    // Stable sort keeps input order for events with equal start and duration.
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&i| (events[i].starts_at, events[i].duration));
    let sorted: Vec<&Event> = order.iter().map(|&i| &events[i]).collect();

    let clusters = cluster::split_clusters(&sorted);
    log::debug!(
        "laying out {} events across {} clusters",
        events.len(),
        clusters.len()
    );

    let mut results = Vec::with_capacity(events.len());
    for range in clusters {
        let layouts = columns::assign_columns(&sorted[range.clone()]);
        for (offset, layout) in layouts.into_iter().enumerate() {
            results.push(PositionedEvent {
                event_index: order[range.start + offset],
                layout,
            });
        }
    }

    Ok(results)
}
