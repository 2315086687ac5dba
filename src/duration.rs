use std::time::Duration;
use anyhow::{bail, Result};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeUnit {
    NanoSecond,
    MicroSecond,
    MilliSecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// `None` when `n` units do not fit in a `Duration`.
    pub fn to_duration(self, n: u64) -> Option<Duration> {
        match self {
            TimeUnit::NanoSecond => Some(Duration::from_nanos(n)),
            TimeUnit::MicroSecond => Some(Duration::from_micros(n)),
            TimeUnit::MilliSecond => Some(Duration::from_millis(n)),
            TimeUnit::Second => Some(Duration::from_secs(n)),
            TimeUnit::Minute => MINUTE.checked_mul(n).map(Duration::from_secs),
            TimeUnit::Hour => HOUR.checked_mul(n).map(Duration::from_secs),
            TimeUnit::Day => DAY.checked_mul(n).map(Duration::from_secs),
        }
    }

    pub fn from(s: &str) -> Result<Self> {
        match s {
            "d" | "D" => Ok(Self::Day),
            "h" | "H" => Ok(Self::Hour),
            "m" | "M" => Ok(Self::Minute),
            "s" | "S" => Ok(Self::Second),
            "ms" => Ok(Self::MilliSecond),
            "µs" | "us" => Ok(Self::MicroSecond),
            "ns" => Ok(Self::NanoSecond),
            _ => bail!("{} is an invalid time unit", s)
        }
    }
}

/// Parses durations such as `3s`, `500ms` or `1m30s`.
pub fn parse(s: &str) -> Result<Duration> {
    let mut res = Duration::ZERO;
    let mut rest = s.trim();

    if rest.is_empty() {
        bail!("empty duration");
    }

    while !rest.is_empty() {
        let digits = rest.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 {
            bail!("{} is an invalid duration", s);
        }
        let n: u64 = rest[..digits].parse()?;
        rest = &rest[digits..];

        let unit_len = rest.find(|ch: char| ch.is_ascii_digit()).unwrap_or(rest.len());
        if unit_len == 0 {
            bail!("{} is missing a time unit", s);
        }
        let unit = TimeUnit::from(&rest[..unit_len])?;
        rest = &rest[unit_len..];

        res = match unit.to_duration(n).and_then(|d| res.checked_add(d)) {
            Some(res) => res,
            None => bail!("{} is too long", s),
        };
    }

    Ok(res)
}
