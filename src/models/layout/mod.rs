// Layout module
// Derived column placement produced by the layout engine

/// Column placement for one event within its overlap cluster.
///
/// `column` is the zero-based lane the event occupies; `column_count` is the
/// total number of lanes its cluster needs, which fixes the event's display
/// width fraction. Invariant: `column < column_count` and `column_count >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLayout {
    pub column: usize,
    pub column_count: usize,
}

impl EventLayout {
    /// Fraction of the horizontal space this event occupies (0..=1).
    pub fn width_fraction(&self) -> f32 {
        1.0 / self.column_count as f32
    }

    /// Fraction of the horizontal space to the event's left edge (0..<1).
    pub fn left_fraction(&self) -> f32 {
        self.column as f32 * self.width_fraction()
    }
}

/// One layout entry, tied back to the event it was computed for.
///
/// Entries are produced in start-time order; `event_index` points into the
/// caller's original event slice so the original ordering can be recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedEvent {
    pub event_index: usize,
    pub layout: EventLayout,
}
