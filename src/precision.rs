use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{spans_whole_month, spans_whole_year};
use crate::prelude::*;

/// How precisely a pair of inclusive bounds pins down a date.
///
/// This drives the compact ISO 8601 rendering: each variant maps to one
/// textual form (`YYYY-MM-DD`, `YYYY-MM`, `YYYY` or `start/end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// A single known day
    #[display(fmt = "day")]
    Day,
    /// Exactly one calendar month
    #[display(fmt = "month")]
    Month,
    /// Exactly one calendar year
    #[display(fmt = "year")]
    Year,
    /// Any other span of days
    #[display(fmt = "range")]
    Range,
}

impl Precision {
    /// Classifies `[earliest, latest]`.
    ///
    /// Checks run from finest to coarsest: a single day, then a whole
    /// month, then a whole year, and only then a general range.
    pub fn of(earliest: NaiveDate, latest: NaiveDate) -> Self {
        if earliest == latest {
            Self::Day
        } else if spans_whole_month(earliest, latest) {
            Self::Month
        } else if spans_whole_year(earliest, latest) {
            Self::Year
        } else {
            Self::Range
        }
    }
}
