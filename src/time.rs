use crate::error::AnalysisError;
use chrono::NaiveDateTime;
use chrono::format::{Parsed, StrftimeItems, parse};

/// Schedule stamp layout used by the tickets document, e.g. `12.05.18 9:05`.
pub const STAMP_FORMAT: &str = "%d.%m.%y %H:%M";

#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Minutes(pub i64);

impl Minutes {
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a `dd.MM.yy` date and `H:mm` time into a zone-less instant.
///
/// Two-digit years always land in 2000-2099.
pub fn parse_stamp(date: &str, time: &str) -> Result<NaiveDateTime, AnalysisError> {
    let value = format!("{} {}", date, time);
    if !matches_layout(date, time) {
        return Err(AnalysisError::StampPattern { value });
    }

    let as_error = |source: chrono::ParseError| AnalysisError::DateTime {
        value: value.clone(),
        source,
    };

    let mut parsed = Parsed::new();
    parse(&mut parsed, &value, StrftimeItems::new(STAMP_FORMAT)).map_err(as_error)?;
    parsed.set_year_div_100(20).map_err(as_error)?;
    parsed.to_naive_datetime_with_offset(0).map_err(as_error)
}

/// chrono accepts one-digit fields and leading blanks, the tickets layout does not.
fn matches_layout(date: &str, time: &str) -> bool {
    let digits = |s: &str, widths: std::ops::RangeInclusive<usize>| {
        widths.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    let mut fields = date.split('.');
    let date_ok = match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(d), Some(m), Some(y), None) => {
            digits(d, 2..=2) && digits(m, 2..=2) && digits(y, 2..=2)
        }
        _ => false,
    };
    let time_ok = match time.split_once(':') {
        Some((h, m)) => digits(h, 1..=2) && digits(m, 2..=2),
        None => false,
    };
    date_ok && time_ok
}

/// Whole minutes from `from` to `to`. Negative when `to` is earlier.
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> Minutes {
    Minutes((to - from).num_minutes())
}
