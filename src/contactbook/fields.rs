//! # Validated Fields
//!
//! Every piece of contact data goes through a [`Field`]: a small value type whose
//! only constructor is a pure `parse` function. There is no way to build a `Phone`
//! or a `Birthday` that skipped validation.
//!
//! Invalid input is never a fault. [`Field::resolve`] falls back to the field's
//! empty sentinel and hands the diagnostic back to the caller, which decides how
//! to surface it (the command layer turns them into warning messages).
//!
//! | Field        | Rules         | Empty sentinel      | Renders as            |
//! |--------------|---------------|---------------------|-----------------------|
//! | [`Name`]     | none          | `""`                | verbatim              |
//! | [`Phone`]    | none          | `""`                | the 10 stored digits  |
//! | [`Birthday`] | [`DateFormat`]| no date             | date per the template |

use crate::error::RecordError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

/// A value that is validated and normalized every time it is assigned.
pub trait Field: Sized {
    /// Extra input the validation rule depends on (e.g. the date format).
    type Rules: Copy;

    /// Validate and normalize `raw`.
    fn parse(raw: &str, rules: Self::Rules) -> Result<Self, RecordError>;

    /// The sentinel stored when validation fails.
    fn empty(rules: Self::Rules) -> Self;

    fn is_empty(&self) -> bool;

    /// Parse `raw`, falling back to the empty sentinel on failure.
    fn resolve(raw: &str, rules: Self::Rules) -> (Self, Option<RecordError>) {
        match Self::parse(raw, rules) {
            Ok(value) => (value, None),
            Err(err) => (Self::empty(rules), Some(err)),
        }
    }
}

/// The contact's display name. Stored verbatim; doubles as the address book key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    type Rules = ();

    fn parse(raw: &str, _rules: ()) -> Result<Self, RecordError> {
        Ok(Self::new(raw))
    }

    fn empty(_rules: ()) -> Self {
        Self(String::new())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number normalized to exactly ten digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strip everything that is not an ASCII digit.
///
/// Digits from other scripts (Arabic-Indic, fullwidth, ...) are stripped like
/// punctuation, so a stored phone is always plain `0-9`.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl Field for Phone {
    type Rules = ();

    fn parse(raw: &str, _rules: ()) -> Result<Self, RecordError> {
        let digits = normalize_phone(raw);
        if digits.len() == PHONE_DIGITS {
            Ok(Self(digits))
        } else {
            Err(RecordError::InvalidPhone(raw.to_string()))
        }
    }

    fn empty(_rules: ()) -> Self {
        Self(String::new())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which way round day and month are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// `DD.MM.YYYY`
    #[default]
    DayFirst,
    /// `MM/DD/YYYY`
    MonthFirst,
}

impl DateFormat {
    /// chrono format string used for both parsing and rendering.
    pub fn template(self) -> &'static str {
        match self {
            DateFormat::DayFirst => "%d.%m.%Y",
            DateFormat::MonthFirst => "%m/%d/%Y",
        }
    }

    /// Human-readable hint shown in diagnostics.
    pub fn prompt(self) -> &'static str {
        match self {
            DateFormat::DayFirst => "DD.MM.YYYY",
            DateFormat::MonthFirst => "MM/DD/YYYY",
        }
    }

    fn separator(self) -> char {
        match self {
            DateFormat::DayFirst => '.',
            DateFormat::MonthFirst => '/',
        }
    }

    /// Config-file spelling, e.g. `day-first`.
    pub fn as_str(self) -> &'static str {
        match self {
            DateFormat::DayFirst => "day-first",
            DateFormat::MonthFirst => "month-first",
        }
    }
}

impl std::str::FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day-first" | "dmy" => Ok(DateFormat::DayFirst),
            "month-first" | "mdy" => Ok(DateFormat::MonthFirst),
            other => Err(format!(
                "Unknown date format: {} (expected day-first or month-first)",
                other
            )),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An optional calendar date. No time of day, no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    date: Option<NaiveDate>,
    format: DateFormat,
}

impl Birthday {
    pub fn absent(format: DateFormat) -> Self {
        Self { date: None, format }
    }

    pub fn from_date(date: NaiveDate, format: DateFormat) -> Self {
        Self {
            date: Some(date),
            format,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    /// Same date, rendered with a different format from now on.
    pub fn with_format(self, format: DateFormat) -> Self {
        Self { format, ..self }
    }
}

impl Field for Birthday {
    type Rules = DateFormat;

    fn parse(raw: &str, format: DateFormat) -> Result<Self, RecordError> {
        if raw.is_empty() {
            return Ok(Self::absent(format));
        }

        let invalid = || RecordError::InvalidDate {
            input: raw.to_string(),
            prompt: format.prompt(),
        };

        // chrono accepts short years for %Y; the stored format always has four
        let year = raw.rsplit(format.separator()).next().unwrap_or_default();
        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(raw, format.template())
            .map(|date| Self::from_date(date, format))
            .map_err(|_| invalid())
    }

    fn empty(format: DateFormat) -> Self {
        Self::absent(format)
    }

    fn is_empty(&self) -> bool {
        self.date.is_none()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{}", date.format(self.format.template())),
            None => Ok(()),
        }
    }
}
