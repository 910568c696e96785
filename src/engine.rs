use log::{debug, trace, warn};

use crate::config::Config;
use crate::format::format_all;
use crate::high_latitude::{adjust_high_latitudes, night_length};
use crate::julian::{julian_date_for_longitude, DEGREES_PER_HOUR};
use crate::method::{IshaRule, MaghribRule};
use crate::solver::{solve_angle, solve_asr, Direction};
use crate::sun::mid_day;
use crate::tuning::tune_times;
use crate::types::{GeoMoment, Prayer, RawTimes, TimeValue};

/// Depression of the sun's centre at sunrise and sunset: refraction plus the
/// solar semidiameter.
pub const SUN_HORIZON_ANGLE: f64 = 0.833;

const SEED_HOURS: [f64; Prayer::COUNT] = [5.0, 6.0, 12.0, 13.0, 18.0, 18.0, 18.0];

/// Raw times for one day, in fractional local hours, after the high-latitude
/// correction and the per-slot offsets.
pub fn compute_raw_times(moment: &GeoMoment, config: &Config) -> RawTimes {
    check_coordinates(moment);

    let jd = julian_date_for_longitude(moment.year, moment.month, moment.day, moment.longitude);
    let mut estimates = SEED_HOURS;
    let mut times = RawTimes::from_array([TimeValue::Unsolvable; Prayer::COUNT]);

    for pass in 0..config.iterations.max(1) {
        times = solve_pass(jd, moment.latitude, config, &estimates);
        for (prayer, value) in times.iter() {
            if let Some(h) = value.hours() {
                estimates[prayer.index()] = h;
            }
        }
        trace!("refinement pass {pass}: {estimates:?}");
    }

    let times = to_local_time(times, moment, config);
    for (prayer, value) in times.iter() {
        if !value.is_valid() {
            debug!(
                "{prayer} unsolvable at latitude {} on {}-{:02}-{:02}",
                moment.latitude, moment.year, moment.month, moment.day
            );
        }
    }
    let times = adjust_high_latitudes(times, &config.params, config.high_latitude);
    tune_times(&times, &config.offsets)
}

/// Raw times rendered with the configured format, in slot order.
pub fn compute_times(moment: &GeoMoment, config: &Config) -> Vec<String> {
    format_all(&compute_raw_times(moment, config), config.time_format)
}

/// Midpoint between sunset and the following sunrise.
pub fn solar_midnight(times: &RawTimes) -> TimeValue {
    match (times.sunset.hours(), night_length(times)) {
        (Some(sunset), Some(night)) => TimeValue::Valid(sunset + night / 2.0),
        _ => TimeValue::Unsolvable,
    }
}

fn solve_pass(
    jd: f64,
    latitude: f64,
    config: &Config,
    estimates: &[f64; Prayer::COUNT],
) -> RawTimes {
    let fraction = |prayer: Prayer| estimates[prayer.index()] / 24.0;
    let params = &config.params;

    let sunset = solve_angle(
        jd,
        fraction(Prayer::Sunset),
        latitude,
        SUN_HORIZON_ANGLE,
        Direction::Evening,
    );
    // Minute-based slots are placeholders here; to_local_time derives them.
    let maghrib = match params.maghrib {
        MaghribRule::Angle(angle) => solve_angle(
            jd,
            fraction(Prayer::Maghrib),
            latitude,
            angle,
            Direction::Evening,
        ),
        MaghribRule::MinutesAfterSunset(_) => sunset,
    };
    let isha = match params.isha {
        IshaRule::Angle(angle) => {
            solve_angle(jd, fraction(Prayer::Isha), latitude, angle, Direction::Evening)
        }
        IshaRule::MinutesAfterMaghrib(_) => maghrib,
    };

    RawTimes {
        fajr: solve_angle(
            jd,
            fraction(Prayer::Fajr),
            latitude,
            params.fajr_angle,
            Direction::Morning,
        ),
        sunrise: solve_angle(
            jd,
            fraction(Prayer::Sunrise),
            latitude,
            SUN_HORIZON_ANGLE,
            Direction::Morning,
        ),
        dhuhr: TimeValue::Valid(mid_day(jd, fraction(Prayer::Dhuhr))),
        asr: solve_asr(
            jd,
            fraction(Prayer::Asr),
            latitude,
            config.juristic.shadow_factor(),
        ),
        sunset,
        maghrib,
        isha,
    }
}

fn to_local_time(times: RawTimes, moment: &GeoMoment, config: &Config) -> RawTimes {
    let shift = |h: f64| h + moment.timezone - moment.longitude / DEGREES_PER_HOUR;
    let mut out = times.map(|_, value| value.map(shift));

    out.dhuhr = out.dhuhr.map(|h| h + config.dhuhr_minutes / 60.0);
    if let MaghribRule::MinutesAfterSunset(minutes) = config.params.maghrib {
        out.maghrib = out.sunset.map(|h| h + minutes / 60.0);
    }
    if let IshaRule::MinutesAfterMaghrib(minutes) = config.params.isha {
        out.isha = out.maghrib.map(|h| h + minutes / 60.0);
    }
    out
}

fn check_coordinates(moment: &GeoMoment) {
    if !(-90.0..=90.0).contains(&moment.latitude) {
        warn!("latitude {} outside [-90, 90]", moment.latitude);
    }
    if !(-180.0..=180.0).contains(&moment.longitude) {
        warn!("longitude {} outside [-180, 180]", moment.longitude);
    }
}
