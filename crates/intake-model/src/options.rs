//! Configuration for appointment scheduling and the enrollment period.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Policy limits applied when booking in-person appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentPolicy {
    /// Maximum number of appointments accepted per calendar day.
    pub max_per_day: u32,
    /// First bookable time of day.
    pub day_start: NaiveTime,
    /// End of business hours. Slots must finish by this time.
    pub day_end: NaiveTime,
    pub slot_duration_minutes: u32,
    /// Weekdays on which no appointments are accepted.
    pub blocked_weekdays: Vec<Weekday>,
}

impl Default for AppointmentPolicy {
    fn default() -> Self {
        Self {
            max_per_day: 10,
            day_start: hm(9, 0),
            day_end: hm(16, 0),
            slot_duration_minutes: 30,
            blocked_weekdays: vec![Weekday::Sat, Weekday::Sun],
        }
    }
}

impl AppointmentPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_per_day(mut self, max_per_day: u32) -> Self {
        self.max_per_day = max_per_day;
        self
    }

    #[must_use]
    pub fn with_hours(mut self, day_start: NaiveTime, day_end: NaiveTime) -> Self {
        self.day_start = day_start;
        self.day_end = day_end;
        self
    }

    #[must_use]
    pub fn with_slot_duration(mut self, minutes: u32) -> Self {
        self.slot_duration_minutes = minutes;
        self
    }

    #[must_use]
    pub fn with_blocked_weekdays(mut self, weekdays: Vec<Weekday>) -> Self {
        self.blocked_weekdays = weekdays;
        self
    }

    pub fn is_blocked(&self, weekday: Weekday) -> bool {
        self.blocked_weekdays.contains(&weekday)
    }
}

/// Enrollment window during which uploads and scheduling are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentPeriod {
    pub name: String,
    #[serde(alias = "startsOn")]
    pub starts_on: NaiveDate,
    #[serde(alias = "endsOn")]
    pub ends_on: NaiveDate,
}

impl EnrollmentPeriod {
    /// Inclusive on both ends.
    pub fn is_open(&self, today: NaiveDate) -> bool {
        today >= self.starts_on && today <= self.ends_on
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time literal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_defaults() {
        let policy = AppointmentPolicy::default();
        assert_eq!(policy.max_per_day, 10);
        assert_eq!(policy.day_start, hm(9, 0));
        assert_eq!(policy.day_end, hm(16, 0));
        assert_eq!(policy.slot_duration_minutes, 30);
        assert!(policy.is_blocked(Weekday::Sat));
        assert!(policy.is_blocked(Weekday::Sun));
        assert!(!policy.is_blocked(Weekday::Mon));
    }

    #[test]
    fn policy_builders() {
        let policy = AppointmentPolicy::new()
            .with_max_per_day(3)
            .with_slot_duration(45)
            .with_blocked_weekdays(vec![Weekday::Wed]);
        assert_eq!(policy.max_per_day, 3);
        assert_eq!(policy.slot_duration_minutes, 45);
        assert!(policy.is_blocked(Weekday::Wed));
        assert!(!policy.is_blocked(Weekday::Sat));
    }

    #[test]
    fn period_bounds_are_inclusive() {
        let period = EnrollmentPeriod {
            name: "Enrollment 2026-A".to_string(),
            starts_on: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            ends_on: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        };
        assert!(period.is_open(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(period.is_open(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()));
        assert!(!period.is_open(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
    }
}
