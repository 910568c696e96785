use chrono::{DateTime, Datelike, Local, NaiveDate, Offset, TimeZone};

use crate::types::GeoMoment;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// UTC offset of `tz` at local noon on `date`, in hours.
pub fn utc_offset_hours<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> f64 {
    let offset = match date.and_hms_opt(12, 0, 0) {
        Some(noon) => match tz.from_local_datetime(&noon).earliest() {
            Some(dt) => dt.offset().fix(),
            // Local noon skipped by a transition.
            None => tz.offset_from_utc_datetime(&noon).fix(),
        },
        None => tz.offset_from_utc_date(&date).fix(),
    };
    offset.local_minus_utc() as f64 / SECONDS_PER_HOUR
}

/// Current UTC offset of the system timezone, in hours.
pub fn local_utc_offset_hours() -> f64 {
    Local::now().offset().local_minus_utc() as f64 / SECONDS_PER_HOUR
}

/// Guesses whether `date` falls in daylight-saving time: the offset is larger
/// than the smaller of the offsets on January 1st and July 1st.
pub fn is_daylight_saving<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> bool {
    let year = date.year();
    let (Some(jan), Some(jul)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 7, 1),
    ) else {
        return false;
    };
    let standard = utc_offset_hours(tz, jan).min(utc_offset_hours(tz, jul));
    utc_offset_hours(tz, date) > standard
}

impl GeoMoment {
    pub fn from_date(date: NaiveDate, latitude: f64, longitude: f64, timezone: f64) -> Self {
        Self::new(
            date.year(),
            date.month() as i32,
            date.day() as i32,
            latitude,
            longitude,
            timezone,
        )
    }

    /// Date and offset taken from a zoned datetime.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> Self {
        let offset = dt.offset().fix().local_minus_utc() as f64 / SECONDS_PER_HOUR;
        Self::from_date(dt.date_naive(), latitude, longitude, offset)
    }

    /// Offset looked up from `tz` for that date.
    pub fn in_zone<Tz: TimeZone>(date: NaiveDate, latitude: f64, longitude: f64, tz: &Tz) -> Self {
        Self::from_date(date, latitude, longitude, utc_offset_hours(tz, date))
    }
}
