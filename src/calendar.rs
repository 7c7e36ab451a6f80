use chrono::{Datelike, Months, NaiveDate};

use crate::consts::{
    DECEMBER, FEBRUARY, JANUARY, LAST_DAY_OF_DECEMBER, LEAP_DAY, MAX_YEAR, MIN_DAY, MIN_YEAR,
};

/// Earliest representable date, 0001-01-01. Backs the `PAST` sentinel.
pub const MIN_DATE: NaiveDate = match NaiveDate::from_ymd_opt(MIN_YEAR, JANUARY, MIN_DAY) {
    Some(date) => date,
    None => panic!("0001-01-01 is a valid date"),
};

/// Latest representable date, 9999-12-31. Backs the `FUTURE` sentinel.
pub const MAX_DATE: NaiveDate = match NaiveDate::from_ymd_opt(MAX_YEAR, DECEMBER, LAST_DAY_OF_DECEMBER) {
    Some(date) => date,
    None => panic!("9999-12-31 is a valid date"),
};

/// Does `year` have a February 29th?
///
/// Years chrono cannot represent are reported as common years.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, FEBRUARY, LEAP_DAY).is_some()
}

/// Number of days in `month` of `year`.
///
/// Returns `None` for months outside `1..=12` or years chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, MIN_DAY)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(last.day())
}

/// Builds a date inside the supported `MIN_YEAR..=MAX_YEAR` domain.
///
/// Returns `None` for out-of-range years, months outside `1..=12`,
/// or days that do not exist in the given month.
pub fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First and last day of a calendar month.
pub fn month_span(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = ymd(year, month, MIN_DAY)?;
    let last = ymd(year, month, days_in_month(year, month)?)?;
    Some((first, last))
}

/// First and last day of a calendar year.
pub fn year_span(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = ymd(year, JANUARY, MIN_DAY)?;
    let last = ymd(year, DECEMBER, LAST_DAY_OF_DECEMBER)?;
    Some((first, last))
}

/// Do `earliest` and `latest` cover exactly one calendar month?
pub fn spans_whole_month(earliest: NaiveDate, latest: NaiveDate) -> bool {
    earliest.year() == latest.year()
        && earliest.month() == latest.month()
        && earliest.day() == MIN_DAY
        && days_in_month(latest.year(), latest.month()) == Some(latest.day())
}

/// Do `earliest` and `latest` cover exactly one calendar year?
pub fn spans_whole_year(earliest: NaiveDate, latest: NaiveDate) -> bool {
    earliest.year() == latest.year()
        && earliest.month() == JANUARY
        && earliest.day() == MIN_DAY
        && latest.month() == DECEMBER
        && latest.day() == LAST_DAY_OF_DECEMBER
}

/// Day halfway between two dates, rounding toward `earliest`.
pub fn midpoint(earliest: NaiveDate, latest: NaiveDate) -> NaiveDate {
    let start = earliest.num_days_from_ce();
    let span = latest.num_days_from_ce() - start;
    // floor division keeps the result between the two bounds even when inverted
    NaiveDate::from_num_days_from_ce_opt(start + span.div_euclid(2)).unwrap_or(earliest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_sentinel_dates() {
        assert_eq!(MIN_DATE, date(1, 1, 1));
        assert_eq!(MAX_DATE, date(9999, 12, 31));
    }

    #[test]
    fn test_ymd_valid() {
        assert_eq!(ymd(2024, 2, 29), Some(date(2024, 2, 29)));
        assert_eq!(ymd(1, 1, 1), Some(MIN_DATE));
        assert_eq!(ymd(9999, 12, 31), Some(MAX_DATE));
    }

    #[test]
    fn test_ymd_invalid() {
        assert_eq!(ymd(0, 1, 1), None, "year 0 is outside the domain");
        assert_eq!(ymd(10000, 1, 1), None, "year 10000 is outside the domain");
        assert_eq!(ymd(2025, 0, 1), None);
        assert_eq!(ymd(2025, 13, 1), None);
        assert_eq!(ymd(2025, 4, 31), None);
        assert_eq!(ymd(2023, 2, 29), None);
        assert_eq!(ymd(2025, 1, 0), None);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2020,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2021,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        2400,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_common_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, days) in (1..=12).zip(expected) {
            assert_eq!(
                days_in_month(2023, month),
                Some(days),
                "2023-{month:02} has the wrong day count"
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2000, 2), Some(29), "century divisible by 400");
        assert_eq!(days_in_month(1900, 2), Some(28), "century not divisible by 400");
    }

    #[test]
    fn test_days_in_month_out_of_range_month() {
        assert_eq!(days_in_month(2025, 0), None);
        assert_eq!(days_in_month(2025, 13), None);
        assert_eq!(days_in_month(2025, u32::MAX), None);
    }

    #[test]
    fn test_days_in_month_at_domain_edges() {
        assert_eq!(days_in_month(9999, 12), Some(31));
        assert_eq!(days_in_month(1, 1), Some(31));
        assert_eq!(days_in_month(i32::MAX, 1), None);
    }

    #[test]
    fn test_month_span() {
        assert_eq!(month_span(2024, 2), Some((date(2024, 2, 1), date(2024, 2, 29))));
        assert_eq!(month_span(2025, 2), Some((date(2025, 2, 1), date(2025, 2, 28))));
        assert_eq!(month_span(2025, 13), None);
        assert_eq!(month_span(2025, 0), None);
        assert_eq!(month_span(0, 5), None);
    }

    #[test]
    fn test_year_span() {
        assert_eq!(year_span(2025), Some((date(2025, 1, 1), date(2025, 12, 31))));
        assert_eq!(year_span(9999), Some((date(9999, 1, 1), MAX_DATE)));
        assert_eq!(year_span(0), None);
    }

    #[test]
    fn test_spans_whole_month() {
        assert!(spans_whole_month(date(2024, 2, 1), date(2024, 2, 29)));
        assert!(!spans_whole_month(date(2024, 2, 1), date(2024, 2, 28)));
        assert!(!spans_whole_month(date(2024, 2, 2), date(2024, 2, 29)));
        assert!(!spans_whole_month(date(2024, 1, 1), date(2025, 1, 31)));
    }

    #[test]
    fn test_spans_whole_year() {
        assert!(spans_whole_year(date(2025, 1, 1), date(2025, 12, 31)));
        assert!(!spans_whole_year(date(2025, 1, 1), date(2026, 12, 31)));
        assert!(!spans_whole_year(date(2025, 1, 2), date(2025, 12, 31)));
        assert!(!spans_whole_year(date(2025, 1, 1), date(2025, 12, 30)));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(date(2025, 3, 1), date(2025, 3, 31)), date(2025, 3, 16));
        // 30 days in April: 29 day span, floor(14.5) = 14
        assert_eq!(midpoint(date(2025, 4, 1), date(2025, 4, 30)), date(2025, 4, 15));
        assert_eq!(midpoint(date(2025, 4, 1), date(2025, 4, 1)), date(2025, 4, 1));
        assert_eq!(midpoint(MIN_DATE, MAX_DATE), date(5000, 7, 2));
    }

    #[test]
    fn test_midpoint_inverted_rounds_down() {
        // span of -3 days halves to -2 under floor division
        assert_eq!(midpoint(date(2025, 4, 4), date(2025, 4, 1)), date(2025, 4, 2));
    }
}
