// Event module
// Timed event model for the day view

use serde::{Deserialize, Serialize};

/// A timed event within a single day.
///
/// Times are expressed as minute offsets from the day view's origin
/// (see `ViewSettings::start_hour`), matching the JSON feed format:
/// `{"starts_at": 120, "duration": 45, "title": "...", "location": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Minutes from the day view origin.
    pub starts_at: u32,
    /// Length in minutes. Must be positive.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `starts_at` - Start offset in minutes from the day origin
    /// * `duration` - Length in minutes (must be positive)
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation
    ///
    /// # Examples
    /// ```
    /// use day_calendar::models::event::Event;
    ///
    /// let event = Event::new(120, 45).unwrap();
    /// assert_eq!(event.end(), 165);
    /// ```
    pub fn new(starts_at: u32, duration: u32) -> Result<Self, String> {
        let event = Self {
            starts_at,
            duration,
            title: None,
            location: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.duration == 0 {
            return Err("Event duration must be positive".to_string());
        }
        if self.starts_at.checked_add(self.duration).is_none() {
            return Err("Event end time is out of range".to_string());
        }
        Ok(())
    }

    /// End offset in minutes from the day origin.
    ///
    /// Saturates at `u32::MAX`; `validate` rejects events whose true end
    /// would exceed it.
    pub fn end(&self) -> u32 {
        self.starts_at.saturating_add(self.duration)
    }

    /// Check whether two events occupy overlapping time ranges.
    ///
    /// Touching events (one ends exactly when the other starts) do not
    /// overlap: both comparisons are strict.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.starts_at < other.end() && other.starts_at < self.end()
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    starts_at: Option<u32>,
    duration: Option<u32>,
    title: Option<String>,
    location: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            starts_at: None,
            duration: None,
            title: None,
            location: None,
        }
    }

    /// Set the start offset in minutes
    pub fn starts_at(mut self, starts_at: u32) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    /// Set the duration in minutes
    pub fn duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let starts_at = self.starts_at.ok_or("Event start time is required")?;
        let duration = self.duration.ok_or("Event duration is required")?;

        let event = Event {
            starts_at,
            duration,
            title: self.title,
            location: self.location,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_success() {
        let result = Event::new(120, 45);

        assert!(result.is_ok());
        let event = result.unwrap();
        assert_eq!(event.starts_at, 120);
        assert_eq!(event.duration, 45);
        assert_eq!(event.end(), 165);
        assert!(event.title.is_none());
        assert!(event.location.is_none());
    }

    #[test]
    fn test_new_event_zero_duration() {
        let result = Event::new(120, 0);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event duration must be positive");
    }

    #[test]
    fn test_new_event_end_out_of_range() {
        let result = Event::new(u32::MAX - 10, 60);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event end time is out of range");
    }

    #[test]
    fn test_new_event_end_at_range_limit() {
        let event = Event::new(u32::MAX - 60, 60).unwrap();
        assert_eq!(event.end(), u32::MAX);
    }

    #[test]
    fn test_builder_basic() {
        let result = Event::builder().starts_at(75).duration(60).build();

        assert!(result.is_ok());
        let event = result.unwrap();
        assert_eq!(event.starts_at, 75);
        assert_eq!(event.duration, 60);
    }

    #[test]
    fn test_builder_with_optional_fields() {
        let event = Event::builder()
            .starts_at(240)
            .duration(60)
            .title("Lunch with Karl")
            .location("TBA")
            .build()
            .unwrap();

        assert_eq!(event.title, Some("Lunch with Karl".to_string()));
        assert_eq!(event.location, Some("TBA".to_string()));
    }

    #[test]
    fn test_builder_missing_start() {
        let result = Event::builder().duration(60).build();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event start time is required");
    }

    #[test]
    fn test_builder_missing_duration() {
        let result = Event::builder().starts_at(75).build();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event duration is required");
    }

    #[test]
    fn test_builder_zero_duration() {
        let result = Event::builder().starts_at(75).duration(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_overlaps_partial() {
        let a = Event::new(0, 60).unwrap();
        let b = Event::new(30, 60).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_containment() {
        let outer = Event::new(0, 180).unwrap();
        let inner = Event::new(30, 30).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_touching_events_do_not_overlap() {
        let a = Event::new(0, 60).unwrap();
        let b = Event::new(60, 60).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_events_do_not_overlap() {
        let a = Event::new(0, 60).unwrap();
        let b = Event::new(100, 60).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_deserialize_from_feed_json() {
        let raw = r#"{"starts_at": 120, "duration": 45, "title": "Meeting with Ben", "location": "Coffee Shop"}"#;
        let event: Event = serde_json::from_str(raw).unwrap();
        assert_eq!(event.starts_at, 120);
        assert_eq!(event.duration, 45);
        assert_eq!(event.title.as_deref(), Some("Meeting with Ben"));
        assert_eq!(event.location.as_deref(), Some("Coffee Shop"));
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let event: Event = serde_json::from_str(r#"{"starts_at": 360, "duration": 25}"#).unwrap();
        assert!(event.title.is_none());
        assert!(event.location.is_none());
    }

    #[test]
    fn test_deserialize_rejects_negative_start() {
        let result = serde_json::from_str::<Event>(r#"{"starts_at": -10, "duration": 25}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_duration() {
        let result = serde_json::from_str::<Event>(r#"{"starts_at": 10, "duration": "25"}"#);
        assert!(result.is_err());
    }
}
