//! `Date` — a Gregorian calendar date — and `DateTime`, a date with an
//! hour-of-day used as the reference instant for "next holiday" queries.
//!
//! # Supported range
//! 1900-01-01 to 2199-12-31.  Construction and arithmetic outside this
//! window return [`Error::Date`].

use hh_core::errors::{Error, Result};

/// A calendar date: year, month, and day of month.
///
/// Ordering is chronological.  Day arithmetic converts through a day
/// count internally, so month and year boundaries roll correctly.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// First supported year.
    pub const MIN_YEAR: u16 = 1900;

    /// Last supported year.
    pub const MAX_YEAR: u16 = 2199;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date { year, month, day })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` moves backwards).
    ///
    /// Returns an error if the result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let (y, m, d) = civil_from_days(self.to_days() + n);
        if !(i32::from(Self::MIN_YEAR)..=i32::from(Self::MAX_YEAR)).contains(&y) {
            return Err(Error::Date(format!(
                "date arithmetic: {self} {n:+} days is out of range"
            )));
        }
        Ok(Date {
            year: y as u16,
            month: m,
            day: d,
        })
    }

    /// Day count since 1970-01-01 (negative before the epoch).
    fn to_days(self) -> i32 {
        days_from_civil(i32::from(self.year), self.month, self.day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.to_days() - rhs.to_days()
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mon = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ][self.month as usize - 1];
        write!(f, "{} {mon} {}", self.day, self.year)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({:04}-{:02}-{:02})", self.year, self.month, self.day)
    }
}

// ── DateTime ──────────────────────────────────────────────────────────────────

/// A reference instant: a calendar date plus an hour-of-day (0–23).
///
/// Holidays themselves carry no time component; the hour only matters as
/// query input, where [`HolidayService::next_holiday`] uses it to decide
/// whether a holiday on the query's own day still counts as "next".
///
/// [`HolidayService::next_holiday`]: crate::service::HolidayService::next_holiday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    hour: u8,
}

impl DateTime {
    /// Create an instant from a date and an hour-of-day (0–23).
    pub fn new(date: Date, hour: u8) -> Result<Self> {
        if hour > 23 {
            return Err(Error::InvalidArgument(format!(
                "hour {hour} out of range [0, 23]"
            )));
        }
        Ok(DateTime { date, hour })
    }

    /// Create an instant directly from (year, month, day, hour).
    pub fn from_ymd_h(year: u16, month: u8, day: u8, hour: u8) -> Result<Self> {
        Self::new(Date::from_ymd(year, month, day)?, hour)
    }

    /// Return the calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Return the hour-of-day (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }
}

impl From<Date> for DateTime {
    /// Local midnight of the given date.
    fn from(date: Date) -> Self {
        DateTime { date, hour: 0 }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a (Gregorian) leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

// Civil-calendar day-count conversions after Howard Hinnant's
// "chrono-Compatible Low-Level Date Algorithms".  Day 0 is 1970-01-01;
// the era below is a 400-year (146 097 day) Gregorian cycle counted
// from year 0, with years starting in March so leap days fall last.

fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i32::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i32::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i32) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    (if month <= 2 { y + 1 } else { y }, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn roundtrip_through_day_count() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2024, 5, 5),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let roundtrip = date(y, m, d).add_days(0).unwrap();
            assert_eq!(roundtrip, date(y, m, d), "roundtrip for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
    }

    #[test]
    fn invalid_components_rejected() {
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 4, 0).is_err());
    }

    #[test]
    fn arithmetic_rolls_over_boundaries() {
        // Month boundary
        assert_eq!(date(2024, 4, 22) + 13, date(2024, 5, 5));
        // Year boundary
        assert_eq!(date(2024, 12, 26) + 7, date(2025, 1, 2));
        // Leap day
        assert_eq!(date(2024, 2, 28) + 1, date(2024, 2, 29));
        assert_eq!(date(2023, 2, 28) + 1, date(2023, 3, 1));
        // Backwards across a year boundary
        assert_eq!(date(2025, 1, 2) - 7, date(2024, 12, 26));
    }

    #[test]
    fn difference_in_days() {
        assert_eq!(date(2024, 2, 1) - date(2024, 1, 1), 31);
        assert_eq!(date(2024, 1, 1) - date(2024, 2, 1), -31);
        assert_eq!(date(2025, 1, 1) - date(2024, 1, 1), 366); // 2024 is leap
    }

    #[test]
    fn arithmetic_out_of_range() {
        assert!(date(2199, 12, 31).add_days(1).is_err());
        assert!(date(1900, 1, 1).add_days(-1).is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 12, 31) < date(2025, 1, 1));
    }

    #[test]
    fn display_formats() {
        assert_eq!(date(2024, 12, 25).to_string(), "25 December 2024");
        assert_eq!(format!("{:?}", date(2024, 5, 5)), "Date(2024-05-05)");
    }

    #[test]
    fn datetime_hour_validation() {
        assert!(DateTime::new(date(2024, 1, 1), 23).is_ok());
        assert!(DateTime::new(date(2024, 1, 1), 24).is_err());
    }

    #[test]
    fn datetime_from_date_is_midnight() {
        let dt = DateTime::from(date(2024, 1, 1));
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.date(), date(2024, 1, 1));
    }

    #[test]
    fn datetime_ordering() {
        let morning = DateTime::from_ymd_h(2024, 1, 1, 8).unwrap();
        let evening = DateTime::from_ymd_h(2024, 1, 1, 20).unwrap();
        let next_day = DateTime::from_ymd_h(2024, 1, 2, 0).unwrap();
        assert!(morning < evening);
        assert!(evening < next_day);
    }
}
