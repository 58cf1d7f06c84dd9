//! Address book and the upcoming-birthdays query
//!
//! The book maps contact names to records. Iteration is ordered by name so
//! listings and snapshots are deterministic.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::BookError;
use super::fields::DATE_FORMAT;
use super::record::Record;

/// Default look-ahead of the upcoming-birthdays query, in days
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A birthday that falls inside the look-ahead window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Rendered as `DD.MM.YYYY`
    pub congratulation_date: String,
}

/// Keyed collection of contact records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same name
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes a record by name
    pub fn delete(&mut self, name: &str) -> Result<Record, BookError> {
        self.records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in name order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays from today through the next seven days, using the local date
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays whose date this year is `today` or within `window_days` after it
    ///
    /// Dates already passed this year are skipped; the window does not wrap
    /// into next year. A congratulation date falling on a weekend moves to
    /// the following Monday. A February 29 birthday has no date in a common
    /// year and is left out.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.records() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(this_year) = birthday.in_year(today.year()) else {
                continue;
            };

            if this_year < today {
                continue;
            }
            if (this_year - today).num_days() >= i64::from(window_days) {
                continue;
            }

            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation_date(this_year)
                    .format(DATE_FORMAT)
                    .to_string(),
            });
        }

        upcoming
    }
}

/// Moves a weekend date to the following Monday
fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(name: &str, phone: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        if let Some(birthday) = birthday {
            record.add_birthday(birthday).unwrap();
        }
        record
    }

    fn names(upcoming: &[UpcomingBirthday]) -> Vec<&str> {
        upcoming.iter().map(|u| u.name.as_str()).collect()
    }

    // 2024-06-10 is a Monday
    const MONDAY: (i32, u32, u32) = (2024, 6, 10);

    fn monday() -> NaiveDate {
        date(MONDAY.0, MONDAY.1, MONDAY.2)
    }

    #[test]
    fn add_then_find() {
        let mut book = AddressBook::new();
        let record = contact("John", "1234567890", None);
        book.add_record(record.clone());

        assert_eq!(book.find("John"), Some(&record));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn find_missing_is_none() {
        let book = AddressBook::new();
        assert!(book.find("Nobody").is_none());
    }

    #[test]
    fn add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(contact("John", "1111111111", None));
        book.add_record(contact("John", "2222222222", None));

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn delete_removes_record() {
        let mut book = AddressBook::new();
        book.add_record(contact("John", "1111111111", None));

        let removed = book.delete("John").unwrap();
        assert_eq!(removed.name().as_str(), "John");
        assert!(book.find("John").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn delete_missing_fails() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.delete("Ghost"),
            Err(BookError::ContactNotFound("Ghost".to_string()))
        );
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(contact("John", "1111111111", None));

        book.find_mut("John").unwrap().add_birthday("01.01.1990").unwrap();
        assert!(book.find("John").unwrap().birthday().is_some());
    }

    #[test]
    fn records_iterate_in_name_order() {
        let mut book = AddressBook::new();
        book.add_record(contact("Zed", "1111111111", None));
        book.add_record(contact("Amy", "2222222222", None));
        book.add_record(contact("Max", "3333333333", None));

        let order: Vec<_> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(order, vec!["Amy", "Max", "Zed"]);
    }

    #[test]
    fn upcoming_includes_weekday_birthday() {
        let mut book = AddressBook::new();
        book.add_record(contact("Wed", "1111111111", Some("12.06.1990")));

        let upcoming = book.upcoming_birthdays(monday(), DEFAULT_WINDOW_DAYS);
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "Wed".to_string(),
                congratulation_date: "12.06.2024".to_string(),
            }]
        );
    }

    #[test]
    fn upcoming_moves_saturday_to_monday() {
        let mut book = AddressBook::new();
        book.add_record(contact("Sat", "1111111111", Some("15.06.1985")));

        let upcoming = book.upcoming_birthdays(monday(), DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, "17.06.2024");
    }

    #[test]
    fn upcoming_moves_sunday_to_monday() {
        let mut book = AddressBook::new();
        book.add_record(contact("Sun", "1111111111", Some("16.06.1985")));

        let upcoming = book.upcoming_birthdays(monday(), DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, "17.06.2024");
    }

    #[test]
    fn upcoming_skips_passed_birthdays() {
        let mut book = AddressBook::new();
        book.add_record(contact("Yesterday", "1111111111", Some("09.06.2000")));

        assert!(book.upcoming_birthdays(monday(), DEFAULT_WINDOW_DAYS).is_empty());
    }

    #[test]
    fn upcoming_window_bounds() {
        let mut book = AddressBook::new();
        book.add_record(contact("Today", "1111111111", Some("10.06.2000")));
        book.add_record(contact("SixDays", "2222222222", Some("16.06.2000")));
        book.add_record(contact("SevenDays", "3333333333", Some("17.06.2000")));

        let upcoming = book.upcoming_birthdays(monday(), DEFAULT_WINDOW_DAYS);
        assert_eq!(names(&upcoming), vec!["SixDays", "Today"]);
    }

    #[test]
    fn upcoming_respects_custom_window() {
        let mut book = AddressBook::new();
        book.add_record(contact("Later", "1111111111", Some("20.06.2000")));

        assert!(book.upcoming_birthdays(monday(), 7).is_empty());
        assert_eq!(book.upcoming_birthdays(monday(), 14).len(), 1);
    }

    #[test]
    fn upcoming_does_not_wrap_into_next_year() {
        let mut book = AddressBook::new();
        book.add_record(contact("NewYear", "1111111111", Some("01.01.1990")));

        assert!(book
            .upcoming_birthdays(date(2024, 12, 29), DEFAULT_WINDOW_DAYS)
            .is_empty());
    }

    #[test]
    fn upcoming_skips_leap_day_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(contact("Leap", "1111111111", Some("29.02.2000")));
        book.add_record(contact("March", "2222222222", Some("01.03.2000")));

        // 2023-02-27 is a Monday
        let upcoming = book.upcoming_birthdays(date(2023, 2, 27), DEFAULT_WINDOW_DAYS);
        assert_eq!(names(&upcoming), vec!["March"]);
    }

    #[test]
    fn upcoming_ignores_contacts_without_birthday() {
        let mut book = AddressBook::new();
        book.add_record(contact("NoDate", "1111111111", None));

        assert!(book.upcoming_birthdays(monday(), DEFAULT_WINDOW_DAYS).is_empty());
    }

    #[test]
    fn serializes_as_record_list() {
        let mut book = AddressBook::new();
        book.add_record(contact("John", "1111111111", Some("01.02.1990")));

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "John", "phones": ["1111111111"], "birthday": "01.02.1990"}
            ])
        );

        let back: AddressBook = serde_json::from_value(json).unwrap();
        assert_eq!(back, book);
    }
}
