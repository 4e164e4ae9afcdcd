//! Greek holiday data.
//!
//! Eight fixed-date holidays recur on the same month/day every year; the
//! five movable feasts are anchored to Orthodox Easter Sunday by fixed
//! day offsets.

use crate::date::Date;
use crate::easter::orthodox_easter;
use crate::holiday::{Holiday, HolidayCategory};
use hh_core::errors::Result;

/// A holiday template recurring on the same month/day every year.
#[derive(Debug, Clone, Copy)]
pub struct FixedHoliday {
    /// English name.
    pub name_en: &'static str,
    /// Greek name.
    pub name_el: &'static str,
    /// Classification.
    pub category: HolidayCategory,
    /// Month (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
}

impl FixedHoliday {
    /// Realize the template against a concrete year.
    pub fn realize(&self, year: u16) -> Result<Holiday> {
        Ok(Holiday {
            date: Date::from_ymd(year, self.month, self.day)?,
            name_en: self.name_en,
            name_el: self.name_el,
            category: self.category,
            movable: false,
        })
    }
}

/// The eight fixed-date Greek holidays.
pub const FIXED_HOLIDAYS: [FixedHoliday; 8] = [
    FixedHoliday {
        name_en: "New Year's Day",
        name_el: "Πρωτοχρονιά",
        category: HolidayCategory::Public,
        month: 1,
        day: 1,
    },
    FixedHoliday {
        name_en: "Epiphany",
        name_el: "Θεοφάνεια",
        category: HolidayCategory::Religious,
        month: 1,
        day: 6,
    },
    FixedHoliday {
        name_en: "Independence Day",
        name_el: "Εικοστή Πέμπτη Μαρτίου",
        category: HolidayCategory::Public,
        month: 3,
        day: 25,
    },
    FixedHoliday {
        name_en: "Labor Day",
        name_el: "Εργατική Πρωτομαγιά",
        category: HolidayCategory::Public,
        month: 5,
        day: 1,
    },
    FixedHoliday {
        name_en: "Dormition of the Mother of God",
        name_el: "Κοίμηση της Θεοτόκου",
        category: HolidayCategory::Religious,
        month: 8,
        day: 15,
    },
    FixedHoliday {
        name_en: "Oxi Day",
        name_el: "Επέτειος του Όχι",
        category: HolidayCategory::Public,
        month: 10,
        day: 28,
    },
    FixedHoliday {
        name_en: "Christmas Day",
        name_el: "Χριστούγεννα",
        category: HolidayCategory::Public,
        month: 12,
        day: 25,
    },
    FixedHoliday {
        name_en: "Synaxis of the Mother of God",
        name_el: "Σύναξις Υπεραγίας Θεοτόκου",
        category: HolidayCategory::Religious,
        month: 12,
        day: 26,
    },
];

/// The five movable feasts of `year`, anchored to Orthodox Easter Sunday.
///
/// All five are religious and `movable = true`.  The returned order is
/// insignificant; the query service re-sorts.
pub fn movable_holidays(year: u16) -> Result<Vec<Holiday>> {
    fn feast(date: Date, name_en: &'static str, name_el: &'static str) -> Holiday {
        Holiday {
            date,
            name_en,
            name_el,
            category: HolidayCategory::Religious,
            movable: true,
        }
    }

    let easter = orthodox_easter(year)?;
    Ok(vec![
        feast(easter.add_days(-48)?, "Clean Monday", "Καθαρά Δευτέρα"),
        feast(easter.add_days(-2)?, "Good Friday", "Μεγάλη Παρασκευή"),
        feast(easter, "Easter Sunday", "Κυριακή του Πάσχα"),
        feast(easter.add_days(1)?, "Easter Monday", "Δευτέρα του Πάσχα"),
        feast(easter.add_days(50)?, "Holy Spirit Monday", "Αγίου Πνεύματος"),
    ])
}
