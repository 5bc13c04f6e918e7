//! Validated query inputs: the keyword set and the time window

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::client::PARTIAL_COLUMN;
use crate::common::errors::{AppError, Result};

/// Maximum number of keywords the service compares in one request
pub const MAX_KEYWORDS: usize = 5;

/// Set of keywords compared in one joint query
///
/// Duplicates collapse and iteration order is lexicographic, so the
/// column order of fetched tables is stable for a given set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for keyword in keywords {
            let keyword = keyword.into().trim().to_string();
            if keyword.is_empty() {
                return Err(AppError::InvalidQuery("keywords must not be blank".to_string()));
            }
            if keyword == PARTIAL_COLUMN {
                return Err(AppError::InvalidQuery(format!("'{}' is reserved", PARTIAL_COLUMN)));
            }
            set.insert(keyword);
        }

        if set.is_empty() {
            return Err(AppError::InvalidQuery("at least one keyword is required".to_string()));
        }
        if set.len() > MAX_KEYWORDS {
            return Err(AppError::InvalidQuery(format!(
                "at most {} keywords can be compared, got {}",
                MAX_KEYWORDS,
                set.len()
            )));
        }

        Ok(Self(set))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

}

/// Time window understood by the trends service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeframe {
    /// Everything since 2004
    All,
    /// Trailing N months ("today N-m")
    Months(u32),
    /// Trailing N years ("today N-y")
    Years(u32),
    /// Trailing N days ("now N-d")
    Days(u32),
    /// Trailing N hours ("now N-H")
    Hours(u32),
    /// Explicit date range ("YYYY-MM-DD YYYY-MM-DD")
    Range { start: NaiveDate, end: NaiveDate },
}

impl Timeframe {
    pub fn trailing_months(months: u32) -> Self {
        Timeframe::Months(months)
    }

    fn parse_count(value: &str, suffix: &str, raw: &str) -> Result<u32> {
        let count = value
            .strip_suffix(suffix)
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .ok_or_else(|| AppError::InvalidQuery(format!("unrecognized timeframe '{}'", raw)))?;
        Ok(count)
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::Months(3)
    }
}

impl FromStr for Timeframe {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        let invalid = || AppError::InvalidQuery(format!("unrecognized timeframe '{}'", raw));

        if raw == "all" {
            return Ok(Timeframe::All);
        }

        let (head, tail) = raw.split_once(' ').ok_or_else(invalid)?;
        match head {
            "today" if tail.ends_with("-m") => Ok(Timeframe::Months(Self::parse_count(tail, "-m", raw)?)),
            "today" if tail.ends_with("-y") => Ok(Timeframe::Years(Self::parse_count(tail, "-y", raw)?)),
            "now" if tail.ends_with("-d") => Ok(Timeframe::Days(Self::parse_count(tail, "-d", raw)?)),
            "now" if tail.ends_with("-H") => Ok(Timeframe::Hours(Self::parse_count(tail, "-H", raw)?)),
            _ => {
                let start = NaiveDate::parse_from_str(head, "%Y-%m-%d").map_err(|_| invalid())?;
                let end = NaiveDate::parse_from_str(tail, "%Y-%m-%d").map_err(|_| invalid())?;
                if start >= end {
                    return Err(AppError::InvalidQuery(format!(
                        "timeframe start {} must be before end {}",
                        start, end
                    )));
                }
                Ok(Timeframe::Range { start, end })
            }
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::All => write!(f, "all"),
            Timeframe::Months(n) => write!(f, "today {}-m", n),
            Timeframe::Years(n) => write!(f, "today {}-y", n),
            Timeframe::Days(n) => write!(f, "now {}-d", n),
            Timeframe::Hours(n) => write!(f, "now {}-H", n),
            Timeframe::Range { start, end } => {
                write!(f, "{} {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_set_dedup_and_order() {
        let set = KeywordSet::new(["Tennis", "Football", "Rugby", "Tennis"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Football", "Rugby", "Tennis"]);
    }

    #[test]
    fn test_keyword_set_limits() {
        assert!(KeywordSet::new(Vec::<String>::new()).is_err());
        assert!(KeywordSet::new(["  "]).is_err());
        assert!(KeywordSet::new(["isPartial"]).is_err());
        assert!(KeywordSet::new(["a", "b", "c", "d", "e", "f"]).is_err());
        assert!(KeywordSet::new(["a", "b", "c", "d", "e"]).is_ok());
    }

    #[test]
    fn test_parse_relative_timeframes() {
        assert_eq!("today 3-m".parse::<Timeframe>().unwrap(), Timeframe::Months(3));
        assert_eq!("today 5-y".parse::<Timeframe>().unwrap(), Timeframe::Years(5));
        assert_eq!("now 7-d".parse::<Timeframe>().unwrap(), Timeframe::Days(7));
        assert_eq!("now 4-H".parse::<Timeframe>().unwrap(), Timeframe::Hours(4));
        assert_eq!("all".parse::<Timeframe>().unwrap(), Timeframe::All);
    }

    #[test]
    fn test_parse_date_range() {
        let tf: Timeframe = "2024-01-01 2024-06-30".parse().unwrap();
        assert_eq!(tf.to_string(), "2024-01-01 2024-06-30");
        assert!("2024-06-30 2024-01-01".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        for raw in ["", "today", "today 0-m", "today x-m", "now 3-m", "yesterday 3-d"] {
            assert!(raw.parse::<Timeframe>().is_err(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_display_round_trip_default() {
        assert_eq!(Timeframe::default().to_string(), "today 3-m");
        assert_eq!(Timeframe::trailing_months(12).to_string(), "today 12-m");
    }
}
