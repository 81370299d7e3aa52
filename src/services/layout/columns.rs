//! Greedy column assignment within one overlap cluster.

use crate::models::event::Event;
use crate::models::layout::EventLayout;

/// Assign display columns to the events of a single cluster.
///
/// The cluster must be sorted by start time. Each event takes the
/// lowest-indexed column whose previous occupant has already ended
/// (end <= start, so touching events may share a column); if every
/// column is still busy, a new one is opened.
///
/// `column_count` is the total number of columns the cluster ever opened,
/// applied to every member. An event placed while only two columns existed
/// still renders at quarter width if the cluster later grows to four
/// columns; anything narrower-than-total would let later events collide
/// with it visually.
pub(crate) fn assign_columns(cluster: &[&Event]) -> Vec<EventLayout> {
    // end time of the latest event placed in each column
    let mut column_ends: Vec<u32> = Vec::new();
    let mut columns = Vec::with_capacity(cluster.len());

    for event in cluster {
        let column = match column_ends.iter().position(|&end| end <= event.starts_at) {
            Some(free) => free,
            None => {
                column_ends.push(0);
                column_ends.len() - 1
            }
        };
        column_ends[column] = event.end();
        columns.push(column);
    }

    let column_count = column_ends.len().max(1);
    columns
        .into_iter()
        .map(|column| EventLayout {
            column,
            column_count,
        })
        .collect()
}
