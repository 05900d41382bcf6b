//! Overview date parsing
//!
//! The Date field of an overview record is free-form in practice. Instead of one
//! permissive grammar, every input is tried against a fixed, ordered catalogue of
//! layouts and the first layout that consumes the whole string wins. The order is part
//! of the contract: a string that fits several layouts always resolves the same way.
//!
//! The catalogue is every combination, outermost first, of:
//!
//! | dimension       | variants (in order)                        |
//! |-----------------|--------------------------------------------|
//! | day of week     | absent, `Mon, `                            |
//! | day             | `2` (1-2 digits), `02` (exactly 2)         |
//! | year            | `2006`, `06`                               |
//! | seconds         | `:05`, absent                              |
//! | zone            | `-0700`, `MST`, `-0700 (MST)`              |

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use std::fmt;
use std::sync::LazyLock;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

static CATALOGUE: LazyLock<Vec<DateLayout>> = LazyLock::new(build_catalogue);

/// How the time zone is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStyle {
    /// `-0700`
    Numeric,
    /// `MST`
    Named,
    /// `-0700 (MST)`; the numeric offset is authoritative
    NumericAndName,
}

/// One entry of the date layout catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLayout {
    /// Leading `Mon, `
    pub weekday: bool,
    /// Day is exactly two digits
    pub zero_padded_day: bool,
    /// Year is four digits rather than two
    pub four_digit_year: bool,
    /// Time carries `:ss`
    pub seconds: bool,
    /// Zone representation
    pub zone: ZoneStyle,
}

fn build_catalogue() -> Vec<DateLayout> {
    let mut layouts = Vec::with_capacity(48);
    for weekday in [false, true] {
        for zero_padded_day in [false, true] {
            for four_digit_year in [true, false] {
                for seconds in [true, false] {
                    for zone in [
                        ZoneStyle::Numeric,
                        ZoneStyle::Named,
                        ZoneStyle::NumericAndName,
                    ] {
                        layouts.push(DateLayout {
                            weekday,
                            zero_padded_day,
                            four_digit_year,
                            seconds,
                            zone,
                        });
                    }
                }
            }
        }
    }
    layouts
}

/// The layout catalogue in the order it is tried
pub fn layouts() -> &'static [DateLayout] {
    &CATALOGUE
}

/// Parse a date by running the layout cascade
///
/// Returns `None` when no layout matches.
///
/// # Example
///
/// ```
/// use nntp_engine::date::parse_date;
///
/// assert!(parse_date("Mon, 02 Jan 2006 15:04:05 -0700").is_some());
/// assert!(parse_date("02 Jan 06 15:04 MST").is_some());
/// assert!(parse_date("not-a-date").is_none());
/// ```
pub fn parse_date(input: &str) -> Option<DateTime<FixedOffset>> {
    match_layout(input).map(|(_, date)| date)
}

/// Like [`parse_date`], also reporting which layout matched
pub fn match_layout(input: &str) -> Option<(DateLayout, DateTime<FixedOffset>)> {
    let input = input.trim();
    CATALOGUE
        .iter()
        .find_map(|layout| layout.parse(input).map(|date| (*layout, date)))
}

impl DateLayout {
    /// Try this single layout against the whole input
    pub fn parse(&self, input: &str) -> Option<DateTime<FixedOffset>> {
        let mut s = Scanner { rest: input };

        if self.weekday {
            s.name(&WEEKDAYS)?;
            s.literal(", ")?;
        }

        let day = if self.zero_padded_day {
            s.digits(2, 2)?
        } else {
            s.digits(1, 2)?
        };
        s.literal(" ")?;
        let month = s.name(&MONTHS)? + 1;
        s.literal(" ")?;

        let year = if self.four_digit_year {
            s.digits(4, 4)? as i32
        } else {
            let yy = s.digits(2, 2)? as i32;
            if yy >= 69 { 1900 + yy } else { 2000 + yy }
        };
        s.literal(" ")?;

        let hour = s.digits(1, 2)?;
        s.literal(":")?;
        let minute = s.digits(2, 2)?;
        let second = if self.seconds {
            s.literal(":")?;
            s.digits(2, 2)?
        } else {
            0
        };
        s.literal(" ")?;

        let offset_secs = match self.zone {
            ZoneStyle::Numeric => s.numeric_offset()?,
            ZoneStyle::Named => named_zone_offset(s.zone_name()?),
            ZoneStyle::NumericAndName => {
                let offset = s.numeric_offset()?;
                s.literal(" (")?;
                s.zone_name()?;
                s.literal(")")?;
                offset
            }
        };

        if !s.rest.is_empty() {
            return None;
        }

        let offset = FixedOffset::east_opt(offset_secs)?;
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
        offset.from_local_datetime(&naive).single()
    }
}

impl fmt::Display for DateLayout {
    /// Renders the layout with the reference date, e.g. `Mon, 02 Jan 2006 15:04:05 -0700`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weekday {
            f.write_str("Mon, ")?;
        }
        f.write_str(if self.zero_padded_day { "02" } else { "2" })?;
        f.write_str(" Jan ")?;
        f.write_str(if self.four_digit_year { "2006" } else { "06" })?;
        f.write_str(" 15:04")?;
        if self.seconds {
            f.write_str(":05")?;
        }
        f.write_str(match self.zone {
            ZoneStyle::Numeric => " -0700",
            ZoneStyle::Named => " MST",
            ZoneStyle::NumericAndName => " -0700 (MST)",
        })
    }
}

/// Offset in seconds for a zone abbreviation
///
/// RFC 5322 obsolete zones are honoured; any other abbreviation is treated as UTC.
/// Names of one or two letters ("Z", "UT") are accepted as well as the usual three
/// to five, so military "Z" reads as UTC.
fn named_zone_offset(name: &str) -> i32 {
    const HOUR: i32 = 3600;
    match name.to_ascii_uppercase().as_str() {
        "EST" => -5 * HOUR,
        "EDT" => -4 * HOUR,
        "CST" => -6 * HOUR,
        "CDT" => -5 * HOUR,
        "MST" => -7 * HOUR,
        "MDT" => -6 * HOUR,
        "PST" => -8 * HOUR,
        "PDT" => -7 * HOUR,
        _ => 0,
    }
}

/// Cursor over the remaining input of one layout attempt
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn literal(&mut self, expected: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    /// Between `min` and `max` ASCII digits, taken greedily
    fn digits(&mut self, min: usize, max: usize) -> Option<u32> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return None;
        }
        let value = self.rest[..len].parse().ok()?;
        self.rest = &self.rest[len..];
        Some(value)
    }

    /// Three-letter English abbreviation, case-insensitive; returns its index
    fn name(&mut self, names: &[&str]) -> Option<u32> {
        let candidate = self.rest.get(..3)?;
        let index = names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(candidate))?;
        self.rest = &self.rest[3..];
        Some(index as u32)
    }

    /// `+hhmm` / `-hhmm` as seconds east of UTC
    fn numeric_offset(&mut self) -> Option<i32> {
        let sign = match self.rest.as_bytes().first()? {
            b'+' => 1,
            b'-' => -1,
            _ => return None,
        };
        self.rest = &self.rest[1..];
        let hhmm = self.digits(4, 4)? as i32;
        let (hours, minutes) = (hhmm / 100, hhmm % 100);
        if minutes >= 60 {
            return None;
        }
        Some(sign * (hours * 3600 + minutes * 60))
    }

    /// Alphabetic zone abbreviation of at most 5 letters
    fn zone_name(&mut self) -> Option<&'a str> {
        let len = self
            .rest
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        if !(1..=5).contains(&len) {
            return None;
        }
        let (name, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(name)
    }
}

/// Date of an overview record: parsed, or kept verbatim when no layout matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleDate {
    /// The cascade found a layout
    Parsed(DateTime<FixedOffset>),
    /// Unknown date; the raw field text is preserved
    Unknown(String),
}

impl ArticleDate {
    /// Run the cascade over a raw field
    pub fn from_field(raw: &str) -> Self {
        match parse_date(raw) {
            Some(date) => Self::Parsed(date),
            None => Self::Unknown(raw.to_string()),
        }
    }

    /// The parsed value, if any
    pub fn datetime(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Parsed(date) => Some(*date),
            Self::Unknown(_) => None,
        }
    }

    /// Whether the cascade succeeded
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}
