pub mod angles;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod high_latitude;
pub mod julian;
pub mod method;
pub mod solver;
pub mod sun;
pub mod timezone;
pub mod tuning;
pub mod types;

pub use angles::{
    darccos, darccot, darcsin, darctan, darctan2, dcos, deg_to_rad, dsin, dtan, fix, fix_angle,
    fix_hour, rad_to_deg, time_diff,
};

pub use config::{Config, ConfigBuilder, DEFAULT_ITERATIONS};

pub use engine::{compute_raw_times, compute_times, solar_midnight, SUN_HORIZON_ANGLE};

pub use error::PrayerError;

pub use format::{clock_parts, format_all, format_time, parse_time, INVALID_TIME};

pub use high_latitude::{adjust_high_latitudes, night_length, night_portion};

pub use julian::{julian_date, julian_date_for_longitude, DEGREES_PER_HOUR};

pub use method::{CalculationMethod, IshaRule, MaghribRule, MethodParams};

pub use solver::{asr_angle, hour_angle_span, solve_angle, solve_asr, Direction};

pub use sun::{mid_day, sun_position, SunPosition, J2000};

pub use timezone::{is_daylight_saving, local_utc_offset_hours, utc_offset_hours};

pub use tuning::tune_times;

pub use types::{
    GeoMoment, HighLatitudeMode, Juristic, Offsets, Prayer, RawTimes, TimeFormat, TimeValue,
};
