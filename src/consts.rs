/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive), the largest a four-digit year can hold
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// English month names, index 0 unused
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';

/// Range separator (ISO 8601 interval form, `from/to`)
pub const RANGE_SEPARATOR: char = '/';

/// Exact length of a `YYYY-MM-DD` string
pub const ISO_DATE_LEN: usize = 10;

/// Columns of the calendar grid, Sunday first
pub const DAYS_PER_WEEK: usize = 7;

/// Rows of the calendar grid, fixed regardless of the month's length
pub const GRID_ROWS: usize = 6;

/// Total cells of the calendar grid
pub const GRID_CELLS: usize = GRID_ROWS * DAYS_PER_WEEK;
