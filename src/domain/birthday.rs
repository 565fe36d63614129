//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used everywhere a birthday crosses the user boundary.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// Parsed from `DD.MM.YYYY` at construction time; stores the parsed
/// [`NaiveDate`], not the string. Impossible dates (e.g. `31.02.2024`)
/// fail construction.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("24.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "24.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value doesn't match
    /// the format or doesn't name a real calendar date.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday's month/day on or after `today`.
    ///
    /// Feb 29 birthdays resolve to Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = Self::on_year(self.0, today.year());
        if this_year < today {
            Self::on_year(self.0, today.year() + 1)
        } else {
            this_year
        }
    }

    /// The date to congratulate on: the next occurrence, shifted off
    /// weekends to the following Monday.
    pub fn congratulation_date(&self, today: NaiveDate) -> NaiveDate {
        let occurrence = self.next_occurrence(today);
        match occurrence.weekday() {
            Weekday::Sat => occurrence + Duration::days(2),
            Weekday::Sun => occurrence + Duration::days(1),
            _ => occurrence,
        }
    }

    fn on_year(date: NaiveDate, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            // Feb 29 in a non-leap year
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(date)
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
