//! # hh-holidays
//!
//! Greek public and religious holidays: the eight fixed-date feasts, the
//! five movable feasts anchored to Orthodox Easter, and a query layer
//! answering "is this date a holiday", "what falls between these dates",
//! and "what comes next".
//!
//! Everything is recomputed per call from a static template table plus
//! the Easter derivation — there is no state, no caching, and no I/O, so
//! every operation is safe to invoke from any thread.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` and `DateTime` types.
pub mod date;

/// Orthodox Easter computation.
pub mod easter;

/// Greek holiday data: fixed-date templates and movable feasts.
pub mod greece;

/// Holiday record types.
pub mod holiday;

/// Holiday query service.
pub mod service;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{Date, DateTime};
pub use easter::orthodox_easter;
pub use greece::{movable_holidays, FixedHoliday, FIXED_HOLIDAYS};
pub use holiday::{Holiday, HolidayCategory, HolidayLookup};
pub use service::HolidayService;
