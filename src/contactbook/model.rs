use crate::error::RecordError;
use crate::fields::{Birthday, DateFormat, Field, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// One contact: a name, an optional birthday and a list of unique phones.
///
/// The name is fixed at construction. It is the key the record is stored under
/// in an [`AddressBook`](crate::book::AddressBook), so there is no setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    birthday: Birthday,
    phones: Vec<Phone>,
}

impl Record {
    pub fn new(name: impl Into<String>, format: DateFormat) -> Self {
        Self {
            name: Name::new(name),
            birthday: Birthday::absent(format),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Set the birthday from `raw`. On failure the birthday becomes absent.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), RecordError> {
        let (birthday, err) = Birthday::resolve(raw, self.birthday.format());
        self.birthday = birthday;
        err.map_or(Ok(()), Err)
    }

    pub fn set_date_format(&mut self, format: DateFormat) {
        self.birthday = self.birthday.with_format(format);
    }

    /// Append a phone if it validates and is not already on the record.
    pub fn add_phone(&mut self, raw: &str) -> Result<&Phone, RecordError> {
        let (phone, err) = Phone::resolve(raw, ());
        if phone.is_empty() {
            return Err(err.unwrap_or_else(|| RecordError::InvalidPhone(raw.to_string())));
        }
        if self.position(phone.as_str()).is_some() {
            return Err(RecordError::DuplicatePhone(phone.to_string()));
        }
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Remove the first phone whose stored digits equal `value`.
    pub fn remove_phone(&mut self, value: &str) -> Result<Phone, RecordError> {
        let idx = self
            .position(value)
            .ok_or_else(|| RecordError::PhoneNotFound(value.to_string()))?;
        Ok(self.phones.remove(idx))
    }

    /// Replace `old` with `new` in place. If `new` is rejected the phone keeps `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<&Phone, RecordError> {
        let idx = self
            .position(old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        let phone = Phone::parse(new, ())?;
        if phone.as_str() != old && self.position(phone.as_str()).is_some() {
            return Err(RecordError::DuplicatePhone(phone.to_string()));
        }
        self.phones[idx] = phone;
        Ok(&self.phones[idx])
    }

    pub fn find_phone(&self, value: &str) -> Result<&Phone, RecordError> {
        self.phones
            .iter()
            .find(|p| p.as_str() == value)
            .ok_or_else(|| RecordError::PhoneNotFound(value.to_string()))
    }

    /// Days from today until the next birthday, `None` if no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's month and day.
    ///
    /// Returns 0 when the birthday is today. A Feb 29 birthday falls on Feb 28 in
    /// non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.date()?;
        let mut next = anniversary(born, today.year())?;
        if next < today {
            next = anniversary(born, today.year() + 1)?;
        }
        Some((next - today).num_days())
    }

    /// True if `needle` occurs in the name or in any phone. Case-sensitive.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.as_str().contains(needle)
            || self.phones.iter().any(|p| p.as_str().contains(needle))
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == value)
    }
}

fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}", self.name)?;
        if !self.birthday.is_empty() {
            write!(f, ", birthday: {}", self.birthday)?;
        }
        if !self.phones.is_empty() {
            let plural = if self.phones.len() > 1 { "s" } else { "" };
            let joined = self
                .phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            write!(f, ", phone{}: {}", plural, joined)?;
        }
        Ok(())
    }
}
