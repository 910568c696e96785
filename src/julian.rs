pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Julian day number of the given proleptic Gregorian date.
///
/// Any integer triple is accepted; out-of-range months and days extrapolate.
pub fn julian_date(year: i32, month: i32, day: i32) -> f64 {
    let (year, month) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (year as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (year as f64 + 4716.0)).floor()
        + (30.6001 * (month as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.5
}

/// Julian day of the date shifted by the site's longitude, the anchor from
/// which the engine's day fractions are measured.
pub fn julian_date_for_longitude(year: i32, month: i32, day: i32, longitude: f64) -> f64 {
    julian_date(year, month, day) - longitude / (DEGREES_PER_HOUR * 24.0)
}
