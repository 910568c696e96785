use crate::angles::{darcsin, darctan2, dcos, dsin, fix, fix_angle, fix_hour};
use crate::julian::DEGREES_PER_HOUR;

pub const J2000: f64 = 2451545.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    /// Degrees north of the celestial equator.
    pub declination: f64,
    /// Apparent minus mean solar time, in minutes.
    pub equation_of_time: f64,
}

impl SunPosition {
    pub fn equation_of_time_hours(&self) -> f64 {
        self.equation_of_time / 60.0
    }
}

/// Low-precision solar coordinates (about 0.01° between 1950 and 2050).
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000;

    let g = fix_angle(357.529 + 0.98560028 * d);
    let q = fix_angle(280.459 + 0.98564736 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));
    let e = 23.439 - 0.00000036 * d;

    let ra = fix_angle(darctan2(dcos(e) * dsin(l), dcos(l))) / DEGREES_PER_HOUR;
    let eqt = fix(q / DEGREES_PER_HOUR - ra + 12.0, 24.0) - 12.0;

    SunPosition {
        declination: darcsin(dsin(e) * dsin(l)),
        equation_of_time: eqt * 60.0,
    }
}

/// Local mean time of solar transit for the instant `jd + day_fraction`,
/// before any longitude or timezone shift.
pub fn mid_day(jd: f64, day_fraction: f64) -> f64 {
    let eqt = sun_position(jd + day_fraction).equation_of_time_hours();
    fix_hour(12.0 - eqt)
}
