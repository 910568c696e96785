use crate::angles::fix_hour;
use crate::error::{PrayerError, Result};
use crate::types::{RawTimes, TimeFormat, TimeValue};

pub const INVALID_TIME: &str = "-----";

/// Whole hours and minutes of `hours`, rounded to the nearest minute and
/// wrapped into a single day.
pub fn clock_parts(hours: f64) -> (u32, u32) {
    let t = fix_hour(hours + 0.5 / 60.0);
    let h = t.floor();
    let m = ((t - h) * 60.0).floor();
    (h as u32 % 24, m as u32)
}

pub fn format_time(value: TimeValue, format: TimeFormat) -> String {
    let hours = match value {
        TimeValue::Valid(h) => h,
        TimeValue::Unsolvable => return INVALID_TIME.to_string(),
    };
    match format {
        TimeFormat::FloatHours => format!("{hours:.2}"),
        TimeFormat::Hour24 => {
            let (h, m) = clock_parts(hours);
            format!("{h:02}:{m:02}")
        }
        TimeFormat::Hour12 | TimeFormat::Hour12NoSuffix => {
            let (h, m) = clock_parts(hours);
            let h12 = (h + 11) % 12 + 1;
            if format == TimeFormat::Hour12 {
                let suffix = if h >= 12 { "pm" } else { "am" };
                format!("{h12}:{m:02} {suffix}")
            } else {
                format!("{h12}:{m:02}")
            }
        }
    }
}

pub fn format_all(times: &RawTimes, format: TimeFormat) -> Vec<String> {
    times
        .iter()
        .map(|(_, value)| format_time(value, format))
        .collect()
}

/// Reads back any string produced by [`format_time`]. Suffix-less 12-hour
/// text is read as a 24-hour clock.
pub fn parse_time(text: &str) -> Result<TimeValue> {
    let trimmed = text.trim();
    if trimmed == INVALID_TIME {
        return Ok(TimeValue::Unsolvable);
    }
    let err = || PrayerError::ParseTime(text.to_string());

    let lower = trimmed.to_ascii_lowercase();
    let (clock, pm) = if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else {
        (lower.as_str(), None)
    };

    let Some((h, m)) = clock.split_once(':') else {
        if pm.is_some() {
            return Err(err());
        }
        let hours: f64 = clock.parse().map_err(|_| err())?;
        return if hours.is_finite() {
            Ok(TimeValue::Valid(hours))
        } else {
            Err(err())
        };
    };

    let h: u32 = h.parse().map_err(|_| err())?;
    let m: u32 = m.parse().map_err(|_| err())?;
    if m >= 60 {
        return Err(err());
    }
    let h = match pm {
        None if h < 24 => h,
        Some(pm) if (1..=12).contains(&h) => h % 12 + if pm { 12 } else { 0 },
        _ => return Err(err()),
    };
    Ok(TimeValue::Valid(h as f64 + m as f64 / 60.0))
}
