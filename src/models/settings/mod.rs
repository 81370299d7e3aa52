// Settings module
// View settings controlling the day view's visible window and scale

use serde::{Deserialize, Serialize};

/// Display settings for the day view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// First hour shown, 24-hour clock (0-23).
    pub start_hour: u32,
    /// Number of hours shown in the day.
    pub hours_in_day: u32,
    /// Vertical pixels representing one hour.
    pub hour_in_pixels: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            start_hour: 9,
            hours_in_day: 12,
            hour_in_pixels: 60.0,
        }
    }
}

impl ViewSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.start_hour > 23 {
            return Err("start_hour must be between 0 and 23".to_string());
        }
        if self.hours_in_day == 0 {
            return Err("hours_in_day must be positive".to_string());
        }
        if self.start_hour + self.hours_in_day > 24 {
            return Err("day view must not extend past midnight".to_string());
        }
        if !self.hour_in_pixels.is_finite() || self.hour_in_pixels <= 0.0 {
            return Err("hour_in_pixels must be a positive number".to_string());
        }
        Ok(())
    }

    /// Last hour shown (inclusive gridline boundary).
    pub fn end_hour(&self) -> u32 {
        self.start_hour + self.hours_in_day
    }

    /// Total height of the day view in pixels.
    pub fn day_height(&self) -> f32 {
        self.hours_in_day as f32 * self.hour_in_pixels
    }
}
