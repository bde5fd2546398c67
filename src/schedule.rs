use std::fmt;

use serde::Serialize;

use crate::config::settings::ScheduleSettings;

/// Display start time of a race. Hours are not wrapped at 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RaceTime {
    pub hour: u32,
    pub minute: u32,
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Scheduled time for the race at zero-based `position` in the card.
pub fn race_time(position: usize, config: &ScheduleSettings) -> RaceTime {
    let total_minutes = minutes_after_start_hour(position, config);
    RaceTime {
        hour: config.start_hour + total_minutes / 60,
        minute: total_minutes % 60,
    }
}

pub fn race_time_label(position: usize, config: &ScheduleSettings) -> String {
    race_time(position, config).to_string()
}

fn minutes_after_start_hour(position: usize, config: &ScheduleSettings) -> u32 {
    config.start_minute + position as u32 * config.interval_minutes
}
