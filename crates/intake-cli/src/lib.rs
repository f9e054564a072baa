//! CLI library components for the enrollment intake tracker.

pub mod logging;
