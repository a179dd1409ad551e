use crate::models::Countdown;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone};
use std::fmt;
use std::str::FromStr;

const DAY_MS: i64 = 86_400_000;
const HOUR_MS: i64 = 3_600_000;
const MINUTE_MS: i64 = 60_000;
const SECOND_MS: i64 = 1_000;

/// Month and day the widget counts down to, every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    month: u32,
    day: u32,
}

impl Birthday {
    pub const DEFAULT: Birthday = Birthday { month: 10, day: 12 };

    /// Validated against a leap year so that February 29 is accepted.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }

    /// The calendar date of the birthday in `year`. February 29 falls back to
    /// February 28 outside leap years.
    pub fn date_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month, 28))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The next birthday on or after `today`.
    pub fn next_on_or_after(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.date_in(today.year());
        if today > this_year {
            self.date_in(today.year() + 1)
        } else {
            this_year
        }
    }
}

impl Default for Birthday {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for Birthday {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (month, day) = value
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("expected MM-DD, got '{value}'"))?;
        let month = month
            .parse::<u32>()
            .map_err(|err| format!("invalid month '{month}': {err}"))?;
        let day = day
            .parse::<u32>()
            .map_err(|err| format!("invalid day '{day}': {err}"))?;
        Birthday::new(month, day).ok_or_else(|| format!("no such date: {value}"))
    }
}

/// Result of one countdown evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownReading {
    pub countdown: Countdown,
    pub is_birthday: bool,
    pub target: NaiveDate,
}

pub fn read_countdown_at<Tz: TimeZone>(now: &DateTime<Tz>, birthday: Birthday) -> CountdownReading {
    let target = birthday.next_on_or_after(now.date_naive());
    let difference = start_of_day(&now.timezone(), target)
        .signed_duration_since(now)
        .num_milliseconds();

    if difference > 0 {
        CountdownReading {
            countdown: split_millis(difference),
            is_birthday: false,
            target,
        }
    } else {
        CountdownReading {
            countdown: Countdown::ZERO,
            is_birthday: true,
            target,
        }
    }
}

fn split_millis(ms: i64) -> Countdown {
    Countdown {
        days: (ms / DAY_MS) as u64,
        hours: ((ms % DAY_MS) / HOUR_MS) as u64,
        minutes: ((ms % HOUR_MS) / MINUTE_MS) as u64,
        seconds: ((ms % MINUTE_MS) / SECOND_MS) as u64,
    }
}

fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    // Local shifts a skipped midnight forward itself; UTC is a last resort.
    tz.from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}
