// SPDX-License-Identifier: MPL-2.0
//! Century grouping and the century filter.

use std::fmt;
use std::str::FromStr;

/// Years per century.
const YEARS_PER_CENTURY: i32 = 100;

/// Returns the century of `year`, i.e. `ceil(year / 100)`.
///
/// Total over all `i32` years: year 100 is the 1st century, 101 the 2nd,
/// year 0 maps to 0 and negative years round toward zero.
#[must_use]
pub fn compute_century(year: i32) -> i32 {
    let quotient = year / YEARS_PER_CENTURY;
    // Integer division truncates toward zero, which already is the ceiling
    // for negative years.
    if year % YEARS_PER_CENTURY > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Century filter applied to the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenturyFilter {
    #[default]
    All,
    Century(i32),
}

impl CenturyFilter {
    /// Returns whether a record from `year` passes the filter.
    #[must_use]
    pub fn matches(self, year: i32) -> bool {
        match self {
            CenturyFilter::All => true,
            CenturyFilter::Century(century) => compute_century(year) == century,
        }
    }
}

impl fmt::Display for CenturyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CenturyFilter::All => f.write_str("all"),
            CenturyFilter::Century(century) => write!(f, "{century}"),
        }
    }
}

/// Error returned when a century filter string is neither `all` nor an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCenturyFilterError(String);

impl fmt::Display for ParseCenturyFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid century filter '{}': expected 'all' or a century number",
            self.0
        )
    }
}

impl std::error::Error for ParseCenturyFilterError {}

impl FromStr for CenturyFilter {
    type Err = ParseCenturyFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(CenturyFilter::All);
        }
        trimmed
            .parse::<i32>()
            .map(CenturyFilter::Century)
            .map_err(|_| ParseCenturyFilterError(s.to_string()))
    }
}
