//! Column type inference.
//!
//! Every non-blank value of a column is tried against each candidate type;
//! a single failure rules the type out for the whole column. The surviving
//! candidates are then resolved in a fixed priority order:
//! Integer, Float, DateTime, Date, Time, Boolean, Text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    Integer,
    Float,
    DateTime,
    Date,
    Time,
    Boolean,
    #[default]
    Text,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::DateTime => "datetime",
            DataType::Date => "date",
            DataType::Time => "time",
            DataType::Boolean => "boolean",
            DataType::Text => "text",
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scanning one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inference {
    pub data_type: DataType,
    pub allow_blank: bool,
}

/// Running candidate set for one column.
#[derive(Debug, Clone, Copy)]
pub struct Inferencer {
    preserve_whitespace: bool,
    all_int: bool,
    all_float: bool,
    all_date: bool,
    all_time: bool,
    all_datetime: bool,
    all_bool: bool,
    allow_blank: bool,
}

impl Inferencer {
    pub fn new(preserve_whitespace: bool) -> Self {
        Self {
            preserve_whitespace,
            all_int: true,
            all_float: true,
            all_date: true,
            all_time: true,
            all_datetime: true,
            all_bool: true,
            allow_blank: false,
        }
    }

    pub fn observe(&mut self, value: &str) {
        let v = if self.preserve_whitespace {
            value
        } else {
            value.trim()
        };
        if v.is_empty() {
            self.allow_blank = true;
            return;
        }
        // The individual parsers tolerate surrounding whitespace, so a
        // preserved " 5" still counts as an integer.
        let token = v.trim();

        if !is_integer(token) {
            self.all_int = false;
        }
        if !is_float(token) {
            self.all_float = false;
        }
        match parse_date_time(token) {
            None => {
                self.all_date = false;
                self.all_time = false;
                self.all_datetime = false;
            }
            Some(dt) => {
                if dt.time() != midnight() {
                    self.all_date = false;
                }
                if dt.date() != day_one() {
                    self.all_time = false;
                }
            }
        }
        if !is_boolean(token) {
            self.all_bool = false;
        }
    }

    pub fn finish(&self) -> Inference {
        let data_type = if self.all_int {
            DataType::Integer
        } else if self.all_float {
            DataType::Float
        } else if self.all_datetime {
            DataType::DateTime
        } else if self.all_date {
            DataType::Date
        } else if self.all_time {
            DataType::Time
        } else if self.all_bool {
            DataType::Boolean
        } else {
            DataType::Text
        };
        Inference {
            data_type,
            allow_blank: self.allow_blank,
        }
    }
}

/// Infers the narrowest type shared by all `values`.
pub fn infer_column<I, S>(values: I, preserve_whitespace: bool) -> Inference
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut inferencer = Inferencer::new(preserve_whitespace);
    for v in values {
        inferencer.observe(v.as_ref());
    }
    inferencer.finish()
}

/// 0001-01-01, the date a time-only value is anchored to.
pub fn day_one() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn midnight() -> NaiveTime {
    NaiveTime::default()
}

pub fn is_integer(s: &str) -> bool {
    s.parse::<i32>().is_ok()
}

pub fn is_float(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

pub fn is_boolean(s: &str) -> bool {
    parse_boolean(s).is_some()
}

pub fn parse_boolean(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
];

/// Lenient date/time recognition.
///
/// Date-only values get midnight; time-only values are anchored on
/// 0001-01-01 so the inferencer can tell the two shapes apart.
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_local());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_time(midnight()));
        }
    }
    for fmt in TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(day_one().and_time(t));
        }
    }
    None
}
