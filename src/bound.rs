use chrono::NaiveDate;

use crate::{ApproxDate, prelude::*};

/// One end of a bracket passed to [`ApproxDate::possibly_between`].
///
/// Either a concrete day or an approximate date. Approximate dates
/// contribute their widest extent: `earliest_date` as a lower bound,
/// `latest_date` as an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum DateBound<'a> {
    /// A concrete calendar day
    Date(NaiveDate),
    /// An approximate date, borrowed
    Approx(&'a ApproxDate),
}

impl DateBound<'_> {
    /// Earliest day this bound could denote
    pub const fn lower(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::Approx(approx) => approx.earliest_date(),
        }
    }

    /// Latest day this bound could denote (inclusive)
    pub const fn upper(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::Approx(approx) => approx.latest_date(),
        }
    }
}

/// Error type for validated construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Earliest bound is after the latest bound.
    #[error("Invalid date range: earliest ({earliest}) is after latest ({latest})")]
    Inverted { earliest: NaiveDate, latest: NaiveDate },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approx, date};

    #[test]
    fn test_date_bound_is_its_own_extent() {
        let bound = DateBound::from(date(2020, 6, 1));
        assert_eq!(bound.lower(), date(2020, 6, 1));
        assert_eq!(bound.upper(), date(2020, 6, 1));
    }

    #[test]
    fn test_approx_bound_uses_widest_extent() {
        let year = approx("2020");
        let bound = DateBound::from(&year);
        assert_eq!(bound.lower(), date(2020, 1, 1));
        assert_eq!(bound.upper(), date(2020, 12, 31));
    }

    #[test]
    fn test_range_error_display() {
        let err = RangeError::Inverted {
            earliest: date(2021, 1, 1),
            latest:   date(2020, 1, 1),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: earliest (2021-01-01) is after latest (2020-01-01)"
        );
    }
}
