use log::trace;

use crate::angles::{darccos, darccot, dcos, dsin, dtan};
use crate::julian::DEGREES_PER_HOUR;
use crate::sun::{mid_day, sun_position};
use crate::types::TimeValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Before transit (Fajr, Sunrise).
    Morning,
    /// After transit (Asr, Sunset, Maghrib, Isha).
    Evening,
}

/// Half-arc in hours between transit and the moment the sun's centre is
/// `angle` degrees below the horizon (negative angles are above it).
///
/// `None` when the sun never reaches that altitude on the day.
pub fn hour_angle_span(angle: f64, declination: f64, latitude: f64) -> Option<f64> {
    let cos_h = (-dsin(angle) - dsin(declination) * dsin(latitude))
        / (dcos(declination) * dcos(latitude));
    if !(-1.0..=1.0).contains(&cos_h) {
        trace!("altitude {angle}° unreachable at latitude {latitude}° (cos h = {cos_h})");
        return None;
    }
    Some(darccos(cos_h) / DEGREES_PER_HOUR)
}

/// Local time, before the longitude shift, at which the sun is `angle`
/// degrees below the horizon on the given side of transit.
pub fn solve_angle(
    jd: f64,
    day_fraction: f64,
    latitude: f64,
    angle: f64,
    direction: Direction,
) -> TimeValue {
    let declination = sun_position(jd + day_fraction).declination;
    let noon = mid_day(jd, day_fraction);
    match hour_angle_span(angle, declination, latitude) {
        Some(span) => TimeValue::Valid(match direction {
            Direction::Morning => noon - span,
            Direction::Evening => noon + span,
        }),
        None => TimeValue::Unsolvable,
    }
}

/// Altitude, as a (negative) depression angle, at which an object's shadow
/// is `shadow_factor` times its length plus the noon shadow.
pub fn asr_angle(shadow_factor: f64, declination: f64, latitude: f64) -> f64 {
    -darccot(shadow_factor + dtan((latitude - declination).abs()))
}

pub fn solve_asr(jd: f64, day_fraction: f64, latitude: f64, shadow_factor: f64) -> TimeValue {
    let declination = sun_position(jd + day_fraction).declination;
    let angle = asr_angle(shadow_factor, declination, latitude);
    solve_angle(jd, day_fraction, latitude, angle, Direction::Evening)
}
