//! Interval grouping for the overlap layout.
//!
//! Splits the start-time-sorted event sequence into maximal clusters of
//! transitively overlapping events. Because the input is sorted, every
//! cluster is a contiguous run, so clusters are returned as index ranges.

use std::ops::Range;

use crate::models::event::Event;

/// Split a start-time-sorted slice of events into overlap clusters.
///
/// A single sweep tracks the latest end time seen in the current cluster;
/// a new cluster begins whenever the next event starts at or after that
/// end time (touching events do not overlap).
pub(crate) fn split_clusters(events: &[&Event]) -> Vec<Range<usize>> {
    let mut clusters = Vec::new();
    if events.is_empty() {
        return clusters;
    }

    let mut cluster_start = 0;
    let mut active_end = events[0].end();

    for (index, event) in events.iter().enumerate().skip(1) {
        if event.starts_at >= active_end {
            clusters.push(cluster_start..index);
            cluster_start = index;
            active_end = event.end();
        } else {
            active_end = active_end.max(event.end());
        }
    }
    clusters.push(cluster_start..events.len());

    clusters
}
