/// Minimum valid year (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// First day of month, used for lower bounds
pub(crate) const MIN_DAY: u32 = 1;

/// Month number for January
pub(crate) const JANUARY: u32 = 1;
/// Month number for February
pub(crate) const FEBRUARY: u32 = 2;
/// Month number for December
pub(crate) const DECEMBER: u32 = 12;

/// Leap day, only valid in leap years
pub(crate) const LEAP_DAY: u32 = 29;
/// Last day of December, used for year upper bounds
pub(crate) const LAST_DAY_OF_DECEMBER: u32 = 31;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';

/// Digits in the year component (`YYYY`)
pub(crate) const YEAR_WIDTH: usize = 4;
/// Digits in the month component (`MM`)
pub(crate) const MONTH_WIDTH: usize = 2;
/// Digits in the day component (`DD`)
pub(crate) const DAY_WIDTH: usize = 2;

/// Display text for the far-future sentinel
pub const FUTURE_DISPLAY: &str = "future";
/// Display text for the distant-past sentinel
pub const PAST_DISPLAY: &str = "past";

/// Debug token for the far-future sentinel
pub const FUTURE_DEBUG: &str = "ApproxDate::FUTURE";
/// Debug token for the distant-past sentinel
pub const PAST_DEBUG: &str = "ApproxDate::PAST";
