// Time utility functions
// Minute-offset to clock-time conversion for the day view

use chrono::NaiveTime;

/// Clock time for a whole hour on the 24-hour clock.
pub fn clock_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour % 24, 0, 0).unwrap()
}

/// Clock time reached `minutes` after `start_hour:00`.
pub fn offset_to_clock(start_hour: u32, minutes: u32) -> NaiveTime {
    // Widen before summing: the offset alone can sit near u32::MAX.
    let total = u64::from(start_hour) * 60 + u64::from(minutes);
    NaiveTime::from_hms_opt(((total / 60) % 24) as u32, (total % 60) as u32, 0).unwrap()
}
