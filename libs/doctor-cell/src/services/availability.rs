use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use tracing::{debug, warn};

use shared_utils::dates::day_of_week;
use shared_utils::validation::{validate_day_of_week, validate_time_range, ValidationError};

use crate::models::{hh_mm, WorkingHourEntry};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Working hours for this day already exist")]
    DuplicateDay(u8),

    #[error("Invalid day of week (must be 0-6)")]
    InvalidDay(u8),

    #[error("Start time must be before end time")]
    InvalidRange { start: NaiveTime, end: NaiveTime },

    #[error(transparent)]
    Input(#[from] ValidationError),
}

/// Working window typed in on the schedule page: day 0-6 and `HH:MM` times.
pub fn parse_working_hours(day_of_week: u8, start: &str, end: &str) -> Result<WorkingHourEntry, ScheduleError> {
    validate_day_of_week(i64::from(day_of_week)).map_err(|_| ScheduleError::InvalidDay(day_of_week))?;
    validate_time_range(start.trim(), end.trim())?;

    match (hh_mm::parse(start), hh_mm::parse(end)) {
        (Some(start_time), Some(end_time)) => Ok(WorkingHourEntry::new(day_of_week, start_time, end_time)),
        _ => Err(ValidationError::new("Invalid time format (expected HH:MM)").into()),
    }
}

/// Slot start times for `date` under a weekly schedule. Slots start at the
/// day's `start_time` and step by `slot_minutes` while strictly before
/// `end_time`. Days without an entry, inverted ranges and a zero interval all
/// produce nothing.
pub fn generate_daily_slots(
    date: NaiveDate,
    schedule: &[WorkingHourEntry],
    slot_minutes: u32,
) -> Vec<NaiveDateTime> {
    if slot_minutes == 0 {
        return Vec::new();
    }

    let weekday = day_of_week(&date);
    let Some(entry) = schedule.iter().find(|e| e.day_of_week == weekday) else {
        return Vec::new();
    };

    let step = Duration::minutes(i64::from(slot_minutes));
    let end = date.and_time(entry.end_time);
    let mut current = date.and_time(entry.start_time);

    let mut slots = Vec::new();
    while current < end {
        slots.push(current);
        current += step;
    }

    debug!("Generated {} slots for {}", slots.len(), date);
    slots
}

/// Editable weekly schedule with at most one window per day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingSchedule {
    entries: Vec<WorkingHourEntry>,
}

impl WorkingSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from what the backend returned. Later duplicates of a day are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = WorkingHourEntry>) -> Self {
        let mut schedule = Self::new();
        for entry in entries {
            if let Err(e) = schedule.add(entry) {
                warn!("Ignoring working hour entry for day {}: {}", entry.day_of_week, e);
            }
        }
        schedule
    }

    pub fn add(&mut self, entry: WorkingHourEntry) -> Result<(), ScheduleError> {
        validate_day_of_week(i64::from(entry.day_of_week))
            .map_err(|_| ScheduleError::InvalidDay(entry.day_of_week))?;
        if entry.start_time >= entry.end_time {
            return Err(ScheduleError::InvalidRange {
                start: entry.start_time,
                end: entry.end_time,
            });
        }
        if self.for_day(entry.day_of_week).is_some() {
            return Err(ScheduleError::DuplicateDay(entry.day_of_week));
        }

        self.entries.push(entry);
        Ok(())
    }

    pub fn remove_day(&mut self, day_of_week: u8) -> Option<WorkingHourEntry> {
        let index = self.entries.iter().position(|e| e.day_of_week == day_of_week)?;
        Some(self.entries.remove(index))
    }

    pub fn for_day(&self, day_of_week: u8) -> Option<&WorkingHourEntry> {
        self.entries.iter().find(|e| e.day_of_week == day_of_week)
    }

    /// Entries in display order, Monday first and Sunday last.
    pub fn entries(&self) -> Vec<WorkingHourEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| (e.day_of_week + 6) % 7);
        sorted
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
