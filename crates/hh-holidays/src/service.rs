//! Holiday query service.

use crate::date::{Date, DateTime};
use crate::greece::{movable_holidays, FIXED_HOLIDAYS};
use crate::holiday::{Holiday, HolidayCategory, HolidayLookup};
use hh_core::errors::Result;

/// Stateless query layer over the Greek holiday data.
///
/// Every method recomputes the year's holiday list from the template
/// table and the Easter derivation.  The working set is 13 entries per
/// year, so there is no cache and no shared state; any number of threads
/// may query concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct HolidayService;

impl HolidayService {
    /// Create a new service.
    pub fn new() -> Self {
        HolidayService
    }

    /// All holidays of `year`, sorted ascending by date.
    ///
    /// Always 13 entries: 8 fixed and 5 movable.  Two holidays landing
    /// on the same date (e.g. Labor Day and Easter Sunday in 2016) both
    /// stay in the list, with unspecified relative order.
    pub fn holidays(&self, year: u16) -> Result<Vec<Holiday>> {
        let mut all = Vec::with_capacity(13);
        for template in &FIXED_HOLIDAYS {
            all.push(template.realize(year)?);
        }
        all.extend(movable_holidays(year)?);
        all.sort_by_key(|h| h.date);
        Ok(all)
    }

    /// Whether `date` is a holiday, and which one.
    ///
    /// On a date shared by two holidays the earliest entry of the sorted
    /// year list is reported.
    pub fn is_holiday(&self, date: Date) -> Result<HolidayLookup> {
        let holiday = self
            .holidays(date.year())?
            .into_iter()
            .find(|h| h.date == date);
        Ok(HolidayLookup {
            is_holiday: holiday.is_some(),
            holiday,
        })
    }

    /// All holidays falling within `[start, end]`, boundaries included,
    /// sorted ascending by date.
    ///
    /// `start.year() > end.year()` yields an empty list.
    pub fn holidays_between(&self, start: Date, end: Date) -> Result<Vec<Holiday>> {
        let mut hits = Vec::new();
        for year in start.year()..=end.year() {
            for holiday in self.holidays(year)? {
                if holiday.date >= start && holiday.date <= end {
                    hits.push(holiday);
                }
            }
        }
        hits.sort_by_key(|h| h.date);
        Ok(hits)
    }

    /// The holidays of `year` in the given category, sorted by date.
    pub fn holidays_by_category(
        &self,
        year: u16,
        category: HolidayCategory,
    ) -> Result<Vec<Holiday>> {
        Ok(self
            .holidays(year)?
            .into_iter()
            .filter(|h| h.category == category)
            .collect())
    }

    /// The first holiday after the instant `at`, searching the instant's
    /// year and the next.
    ///
    /// Holidays carry no time of day, so a holiday on `at`'s own calendar
    /// day only counts as "next" when `at` is at hour 0 (local midnight);
    /// later in the day the holiday's midnight instant has already
    /// passed.  Returns `None` only when both years are exhausted.
    pub fn next_holiday(&self, at: DateTime) -> Result<Option<Holiday>> {
        let day = at.date();
        let mut candidates = self.holidays(day.year())?;
        candidates.extend(self.holidays(day.year() + 1)?);
        candidates.sort_by_key(|h| h.date);
        Ok(candidates
            .into_iter()
            .find(|h| h.date > day || (h.date == day && at.hour() == 0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn thirteen_entries_sorted() {
        let service = HolidayService::new();
        let holidays = service.holidays(2024).unwrap();
        assert_eq!(holidays.len(), 13);
        assert!(holidays.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(holidays.iter().filter(|h| h.movable).count(), 5);
        assert_eq!(holidays.iter().filter(|h| !h.movable).count(), 8);
    }

    #[test]
    fn lookup_hit_and_miss() {
        let service = HolidayService::new();

        let hit = service.is_holiday(date(2024, 12, 25)).unwrap();
        assert!(hit.is_holiday);
        assert_eq!(hit.holiday.unwrap().name_en, "Christmas Day");

        let miss = service.is_holiday(date(2024, 12, 20)).unwrap();
        assert!(!miss.is_holiday);
        assert!(miss.holiday.is_none());
    }

    #[test]
    fn by_category_filters_in_date_order() {
        let service = HolidayService::new();
        let religious = service
            .holidays_by_category(2024, HolidayCategory::Religious)
            .unwrap();
        // 3 fixed religious + 5 movable feasts
        assert_eq!(religious.len(), 8);
        assert!(religious
            .iter()
            .all(|h| h.category == HolidayCategory::Religious));
        assert!(religious.windows(2).all(|w| w[0].date <= w[1].date));

        let customary = service
            .holidays_by_category(2024, HolidayCategory::Customary)
            .unwrap();
        assert!(customary.is_empty());
    }

    #[test]
    fn between_with_inverted_years_is_empty() {
        let service = HolidayService::new();
        let holidays = service
            .holidays_between(date(2025, 1, 1), date(2024, 12, 31))
            .unwrap();
        assert!(holidays.is_empty());
    }
}
