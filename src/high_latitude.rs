use log::debug;

use crate::angles::time_diff;
use crate::method::{IshaRule, MaghribRule, MethodParams};
use crate::types::{HighLatitudeMode, Prayer, RawTimes, TimeValue};

/// Fraction of the night assigned to a twilight slot configured with `angle`.
/// `None` disables the correction.
pub fn night_portion(mode: HighLatitudeMode, angle: f64) -> Option<f64> {
    match mode {
        HighLatitudeMode::None => None,
        HighLatitudeMode::NightMiddle => Some(1.0 / 2.0),
        HighLatitudeMode::NightSeventh => Some(1.0 / 7.0),
        HighLatitudeMode::AngleBased => Some(angle / 60.0),
    }
}

/// Hours from sunset to the following sunrise.
pub fn night_length(times: &RawTimes) -> Option<f64> {
    Some(time_diff(times.sunset.hours()?, times.sunrise.hours()?))
}

pub fn adjust_high_latitudes(
    times: RawTimes,
    params: &MethodParams,
    mode: HighLatitudeMode,
) -> RawTimes {
    if mode == HighLatitudeMode::None {
        return times;
    }
    let (Some(sunrise), Some(sunset), Some(night)) = (
        times.sunrise.hours(),
        times.sunset.hours(),
        night_length(&times),
    ) else {
        debug!("no sunrise/sunset on this day; twilight slots left unsolvable");
        return times;
    };

    let mut out = times;

    if !out.fajr.is_valid() {
        if let Some(portion) = night_portion(mode, params.fajr_angle) {
            out.fajr = substitute(Prayer::Fajr, sunrise - portion * night);
        }
    }

    if let MaghribRule::Angle(angle) = params.maghrib {
        if !out.maghrib.is_valid() {
            if let Some(portion) = night_portion(mode, angle) {
                out.maghrib = substitute(Prayer::Maghrib, sunset + portion * night);
            }
        }
    }

    if !out.isha.is_valid() {
        out.isha = match params.isha {
            IshaRule::Angle(angle) => night_portion(mode, angle)
                .map_or(TimeValue::Unsolvable, |portion| {
                    substitute(Prayer::Isha, sunset + portion * night)
                }),
            IshaRule::MinutesAfterMaghrib(minutes) => out.maghrib.map(|m| m + minutes / 60.0),
        };
    }

    out
}

fn substitute(prayer: Prayer, hours: f64) -> TimeValue {
    debug!("{prayer} unsolvable by angle, using night portion: {hours:.4}h");
    TimeValue::Valid(hours)
}
