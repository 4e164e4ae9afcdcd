//! Orthodox Easter computation.

use crate::date::Date;
use hh_core::errors::Result;

/// Compute the Gregorian date of Orthodox Easter Sunday for `year`.
///
/// Uses the Meeus Julian algorithm: the paschal full moon and the Sunday
/// after it are located on the Julian calendar, and the result is shifted
/// 13 days forward to the Gregorian calendar (the Julian offset in force
/// since 1900).
///
/// Pure function of `year`; the only failure mode is the result falling
/// outside the supported [`Date`] range.
pub fn orthodox_easter(year: u16) -> Result<Date> {
    let y = i32::from(year);
    let a = y % 4;
    let b = y % 7;
    let c = y % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    // 1-based month and day of Easter Sunday on the Julian calendar.
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)?.add_days(13)
}
