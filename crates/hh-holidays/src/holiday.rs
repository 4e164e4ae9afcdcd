//! Holiday record types — the shared vocabulary of the data source and
//! the query service.

use crate::date::Date;

/// Classification of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayCategory {
    /// National public holiday.
    Public,
    /// Customary observance.
    Customary,
    /// Religious feast.
    Religious,
}

impl std::fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HolidayCategory::Public => "public",
            HolidayCategory::Customary => "customary",
            HolidayCategory::Religious => "religious",
        };
        write!(f, "{s}")
    }
}

/// A holiday realized against a concrete year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    /// The date the holiday falls on.
    pub date: Date,
    /// English name.
    pub name_en: &'static str,
    /// Greek name.
    pub name_el: &'static str,
    /// Classification.
    pub category: HolidayCategory,
    /// `true` iff the date derives from the Easter computation.
    pub movable: bool,
}

/// Result of a single-date holiday lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayLookup {
    /// Whether the queried date is a holiday.
    pub is_holiday: bool,
    /// The matching holiday, when there is one.
    pub holiday: Option<Holiday>,
}
