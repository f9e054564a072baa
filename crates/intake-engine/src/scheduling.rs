//! Slot availability checks and slot enumeration.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use intake_model::{Appointment, AppointmentPolicy};

/// Outcome of a slot availability check.
///
/// Checks run in a fixed order and the first failing check wins, so a
/// Saturday request in the past reports `PastDate`, not `WeekendBlocked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotAvailability {
    Available,
    PastDate,
    WeekendBlocked,
    DailyLimitReached,
    SlotTaken,
    OutsideBusinessHours,
}

impl SlotAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, SlotAvailability::Available)
    }
}

/// Check whether a date/time can accept a new appointment.
///
/// `existing_on_date` must hold the non-cancelled appointments already
/// scheduled for `requested_date`. `today` is passed explicitly so the
/// check stays a pure function of its arguments.
pub fn check_slot_availability(
    requested_date: NaiveDate,
    requested_time: NaiveTime,
    today: NaiveDate,
    existing_on_date: &[Appointment],
    policy: &AppointmentPolicy,
) -> SlotAvailability {
    if requested_date < today {
        return SlotAvailability::PastDate;
    }
    if policy.is_blocked(requested_date.weekday()) {
        return SlotAvailability::WeekendBlocked;
    }
    if existing_on_date.len() as u32 >= policy.max_per_day {
        return SlotAvailability::DailyLimitReached;
    }
    if existing_on_date
        .iter()
        .any(|appointment| appointment.time == requested_time)
    {
        return SlotAvailability::SlotTaken;
    }
    if requested_time < policy.day_start || requested_time >= policy.day_end {
        return SlotAvailability::OutsideBusinessHours;
    }
    SlotAvailability::Available
}

/// One bookable time of day and whether it is currently free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub time: NaiveTime,
    pub available: bool,
}

/// Enumerate the day's slots with their availability.
///
/// Slots step by the policy duration from `day_start`; a slot is only
/// generated when it also ends by `day_end`, so an uneven business day
/// drops the trailing partial slot instead of overrunning it.
pub fn available_slots(
    date: NaiveDate,
    today: NaiveDate,
    existing_on_date: &[Appointment],
    policy: &AppointmentPolicy,
) -> Vec<Slot> {
    let mut slots = Vec::new();
    if policy.slot_duration_minutes == 0 {
        return slots;
    }
    let day_end = minutes_from_midnight(policy.day_end);
    let step = policy.slot_duration_minutes;
    let mut start = minutes_from_midnight(policy.day_start);
    while start + step <= day_end {
        let Some(time) = time_from_minutes(start) else {
            break;
        };
        let available =
            check_slot_availability(date, time, today, existing_on_date, policy).is_available();
        slots.push(Slot { time, available });
        start += step;
    }
    slots
}

fn minutes_from_midnight(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

fn time_from_minutes(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}
