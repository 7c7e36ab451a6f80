mod bound;
mod calendar;
mod consts;
mod precision;
mod prelude;

pub use bound::{DateBound, RangeError};
pub use calendar::{MAX_DATE, MIN_DATE, days_in_month, is_leap_year};
pub use consts::{
    DATE_SEPARATOR, FUTURE_DEBUG, FUTURE_DISPLAY, MAX_YEAR, MIN_YEAR, PAST_DEBUG, PAST_DISPLAY,
    RANGE_SEPARATOR,
};
pub use precision::Precision;

use crate::consts::{DAY_WIDTH, JANUARY, MIN_DAY, MONTH_WIDTH, YEAR_WIDTH};
use crate::prelude::*;
use chrono::NaiveDate;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A date known only to some precision, held as an inclusive range of days.
///
/// Built either from two concrete bounds or by parsing ISO 8601 partial
/// dates (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start/end`). Parsed values
/// keep their source text for display.
///
/// Equality and hashing consider the two bounds only.
#[derive(Clone)]
pub struct ApproxDate {
    earliest_date: NaiveDate,
    latest_date:   NaiveDate,
    source_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Couldn't parse the ISO 8601 partial date '{_0}'")]
    Unrecognized(String),
    #[display(fmt = "Invalid date in '{input}': no day {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        input: String,
        year:  i32,
        month: u32,
        day:   u32,
    },
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// The text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::Unrecognized(input) | Self::InvalidDate { input, .. } => input,
        }
    }
}

impl ApproxDate {
    /// The distant past: both bounds at 0001-01-01.
    pub const PAST: Self = Self {
        earliest_date: MIN_DATE,
        latest_date:   MIN_DATE,
        source_string: None,
    };

    /// The far future: both bounds at 9999-12-31.
    pub const FUTURE: Self = Self {
        earliest_date: MAX_DATE,
        latest_date:   MAX_DATE,
        source_string: None,
    };

    /// Creates an approximate date from inclusive bounds.
    ///
    /// Bounds are stored as given. An `earliest` after `latest` is accepted
    /// here; see [`ApproxDate::try_new`] for the checked form.
    pub const fn new(earliest_date: NaiveDate, latest_date: NaiveDate) -> Self {
        Self {
            earliest_date,
            latest_date,
            source_string: None,
        }
    }

    /// Creates an approximate date that remembers the text it came from
    pub fn with_source_string(
        earliest_date: NaiveDate,
        latest_date: NaiveDate,
        source_string: impl Into<String>,
    ) -> Self {
        Self {
            earliest_date,
            latest_date,
            source_string: Some(source_string.into()),
        }
    }

    /// Creates an approximate date, rejecting inverted bounds.
    ///
    /// # Errors
    /// Returns `RangeError::Inverted` if `earliest_date > latest_date`.
    pub fn try_new(earliest_date: NaiveDate, latest_date: NaiveDate) -> Result<Self, RangeError> {
        if earliest_date > latest_date {
            return Err(RangeError::Inverted {
                earliest: earliest_date,
                latest:   latest_date,
            });
        }
        Ok(Self::new(earliest_date, latest_date))
    }

    /// An approximate date pinned to a single known day
    pub const fn exact(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Inclusive lower bound
    pub const fn earliest_date(&self) -> NaiveDate {
        self.earliest_date
    }

    /// Inclusive upper bound
    pub const fn latest_date(&self) -> NaiveDate {
        self.latest_date
    }

    /// Text this value was parsed from, if any
    pub fn source_string(&self) -> Option<&str> {
        self.source_string.as_deref()
    }

    /// Day halfway through the range, rounded toward the earliest bound
    pub fn midpoint_date(&self) -> NaiveDate {
        calendar::midpoint(self.earliest_date, self.latest_date)
    }

    /// True iff both bounds sit at the latest representable date
    pub fn is_future(&self) -> bool {
        self.earliest_date == MAX_DATE && self.latest_date == MAX_DATE
    }

    /// True iff both bounds sit at the earliest representable date
    pub fn is_past(&self) -> bool {
        self.earliest_date == MIN_DATE && self.latest_date == MIN_DATE
    }

    /// Are the bounds the first and last day of one year?
    pub fn is_partial_just_year(&self) -> bool {
        calendar::spans_whole_year(self.earliest_date, self.latest_date)
    }

    /// Are the bounds the first and last day of one month?
    pub fn is_partial_just_year_and_month(&self) -> bool {
        calendar::spans_whole_month(self.earliest_date, self.latest_date)
    }

    /// Most compact precision that describes the bounds exactly
    pub fn precision(&self) -> Precision {
        Precision::of(self.earliest_date, self.latest_date)
    }

    /// Does `date` fall inside the inclusive range?
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.earliest_date <= *date && *date <= self.latest_date
    }

    /// Do the two inclusive ranges share at least one day?
    pub fn overlaps(&self, other: &Self) -> bool {
        self.earliest_date <= other.latest_date && other.earliest_date <= self.latest_date
    }

    /// Could `date` lie between `start` and `end`?
    ///
    /// Only the widest extents are compared: the lower bound of `start`
    /// and the upper bound of `end`. This answers "could possibly fall
    /// within", not exact containment.
    pub fn possibly_between<'a, 'b>(
        start: impl Into<DateBound<'a>>,
        date: NaiveDate,
        end: impl Into<DateBound<'b>>,
    ) -> bool {
        start.into().lower() <= date && date <= end.into().upper()
    }

    /// Parses an ISO 8601 partial date or a `start/end` range of them.
    ///
    /// Accepted forms are `YYYY-MM-DD`, `YYYY-MM`, `YYYY` and two of those
    /// joined by a single `/`. Widths are strict, no signs or whitespace.
    ///
    /// # Errors
    /// Returns `ParseError::Unrecognized` when the text matches none of the
    /// forms, and `ParseError::InvalidDate` when the numbers do not name a
    /// real day between years 1 and 9999.
    pub fn from_iso8601(text: &str) -> Result<Self, ParseError> {
        Self::parse_bounds(text)
            .map(|(earliest, latest)| Self::with_source_string(earliest, latest, text))
            .inspect_err(|err| log::debug!("rejected ISO 8601 partial date {text:?}: {err}"))
    }

    /// Renders the bounds in the most compact ISO 8601 form.
    ///
    /// The stored source string plays no part here.
    pub fn to_iso8601(&self) -> String {
        let earliest = self.earliest_date.format("%Y-%m-%d");
        match self.precision() {
            Precision::Day => earliest.to_string(),
            Precision::Month => self.latest_date.format("%Y-%m").to_string(),
            Precision::Year => self.earliest_date.format("%Y").to_string(),
            Precision::Range => {
                format!("{earliest}{RANGE_SEPARATOR}{}", self.latest_date.format("%Y-%m-%d"))
            }
        }
    }

    /// Text for people: the source string, `future`, `past`, or ISO 8601
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Text for debugging, shaped like the expression that rebuilds the value
    pub fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}

// --- parsing helpers ---
impl ApproxDate {
    fn parse_bounds(text: &str) -> Result<(NaiveDate, NaiveDate), ParseError> {
        match text.split_once(RANGE_SEPARATOR) {
            Some((start, end)) => {
                if end.contains(RANGE_SEPARATOR) {
                    return Err(ParseError::Unrecognized(text.to_owned()));
                }
                let (earliest, _) = Self::parse_partial(start)?;
                let (_, latest) = Self::parse_partial(end)?;
                Ok((earliest, latest))
            },
            None => Self::parse_partial(text),
        }
    }

    /// Bounds of a single `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
    fn parse_partial(text: &str) -> Result<(NaiveDate, NaiveDate), ParseError> {
        let unrecognized = || ParseError::Unrecognized(text.to_owned());
        let parts: Vec<&str> = text.split(DATE_SEPARATOR).collect();

        match parts.as_slice() {
            [year, month, day] => {
                let year = Self::parse_year(year).ok_or_else(unrecognized)?;
                let month = Self::parse_component(month, MONTH_WIDTH).ok_or_else(unrecognized)?;
                let day = Self::parse_component(day, DAY_WIDTH).ok_or_else(unrecognized)?;
                let date = calendar::ymd(year, month, day)
                    .ok_or_else(|| Self::invalid_date(text, year, month, day))?;
                Ok((date, date))
            },
            [year, month] => {
                let year = Self::parse_year(year).ok_or_else(unrecognized)?;
                let month = Self::parse_component(month, MONTH_WIDTH).ok_or_else(unrecognized)?;
                calendar::month_span(year, month)
                    .ok_or_else(|| Self::invalid_date(text, year, month, MIN_DAY))
            },
            [year] => {
                let year = Self::parse_year(year).ok_or_else(unrecognized)?;
                calendar::year_span(year).ok_or_else(|| Self::invalid_date(text, year, JANUARY, MIN_DAY))
            },
            _ => Err(unrecognized()),
        }
    }

    fn parse_year(s: &str) -> Option<i32> {
        Self::parse_component(s, YEAR_WIDTH).and_then(|year| i32::try_from(year).ok())
    }

    /// Parses exactly `width` ASCII digits
    fn parse_component(s: &str, width: usize) -> Option<u32> {
        if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    }

    fn invalid_date(text: &str, year: i32, month: u32, day: u32) -> ParseError {
        ParseError::InvalidDate {
            input: text.to_owned(),
            year,
            month,
            day,
        }
    }
}

impl From<NaiveDate> for ApproxDate {
    fn from(date: NaiveDate) -> Self {
        Self::exact(date)
    }
}

impl FromStr for ApproxDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso8601(s)
    }
}

impl fmt::Display for ApproxDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source_string {
            return f.write_str(source);
        }
        if self.is_future() {
            return f.write_str(FUTURE_DISPLAY);
        }
        if self.is_past() {
            return f.write_str(PAST_DISPLAY);
        }
        f.write_str(&self.to_iso8601())
    }
}

impl fmt::Debug for ApproxDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_past() {
            return f.write_str(PAST_DEBUG);
        }
        if self.is_future() {
            return f.write_str(FUTURE_DEBUG);
        }
        match self.source_string.as_deref() {
            Some(source) if !source.is_empty() => write!(f, "ApproxDate::from_iso8601({source:?})"),
            _ => write!(f, "ApproxDate::new({:?}, {:?})", self.earliest_date, self.latest_date),
        }
    }
}

impl PartialEq for ApproxDate {
    fn eq(&self, other: &Self) -> bool {
        self.earliest_date == other.earliest_date && self.latest_date == other.latest_date
    }
}

impl Eq for ApproxDate {}

impl Hash for ApproxDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.earliest_date.hash(state);
        self.latest_date.hash(state);
    }
}

impl PartialEq<NaiveDate> for ApproxDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.earliest_date == self.latest_date && self.earliest_date == *other
    }
}

impl PartialEq<ApproxDate> for NaiveDate {
    fn eq(&self, other: &ApproxDate) -> bool {
        other == self
    }
}

impl serde::Serialize for ApproxDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> serde::Deserialize<'de> for ApproxDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
