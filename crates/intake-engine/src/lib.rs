//! Pure completeness and scheduling computations.
//!
//! Every operation in this crate is a synchronous, deterministic function
//! of its arguments: no I/O, no clocks, no shared state. Callers fetch
//! the records from the store, pass them in, and persist the results.
//! Rejections are ordinary return values; nothing here panics on
//! well-typed input.

pub mod booking;
pub mod completeness;
pub mod scheduling;
pub mod transitions;

pub use booking::{AppointmentError, create_appointment};
pub use completeness::{compute_documentation_status, is_eligible_for_appointment};
pub use scheduling::{Slot, SlotAvailability, available_slots, check_slot_availability};
pub use transitions::{
    ReviewDecision, TransitionError, cancel, confirm, record_attendance, reschedule, resubmit,
    review,
};
