use std::fmt;
use std::str::FromStr;

use crate::error::PrayerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const COUNT: usize = 7;

    pub const ALL: [Prayer; Prayer::COUNT] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Sunset,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Sunset => "Sunset",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A time of day in fractional hours, or the marker for an event the sun
/// never reaches on that day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeValue {
    Valid(f64),
    Unsolvable,
}

impl TimeValue {
    pub fn hours(self) -> Option<f64> {
        match self {
            TimeValue::Valid(h) => Some(h),
            TimeValue::Unsolvable => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, TimeValue::Valid(_))
    }

    pub fn map<F: FnOnce(f64) -> f64>(self, f: F) -> TimeValue {
        match self {
            TimeValue::Valid(h) => TimeValue::Valid(f(h)),
            TimeValue::Unsolvable => TimeValue::Unsolvable,
        }
    }
}

impl From<Option<f64>> for TimeValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(TimeValue::Unsolvable, TimeValue::Valid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTimes {
    pub fajr: TimeValue,
    pub sunrise: TimeValue,
    pub dhuhr: TimeValue,
    pub asr: TimeValue,
    pub sunset: TimeValue,
    pub maghrib: TimeValue,
    pub isha: TimeValue,
}

impl RawTimes {
    pub fn from_array(values: [TimeValue; Prayer::COUNT]) -> Self {
        let [fajr, sunrise, dhuhr, asr, sunset, maghrib, isha] = values;
        Self {
            fajr,
            sunrise,
            dhuhr,
            asr,
            sunset,
            maghrib,
            isha,
        }
    }

    pub fn to_array(&self) -> [TimeValue; Prayer::COUNT] {
        [
            self.fajr,
            self.sunrise,
            self.dhuhr,
            self.asr,
            self.sunset,
            self.maghrib,
            self.isha,
        ]
    }

    pub fn get(&self, prayer: Prayer) -> TimeValue {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    pub fn get_mut(&mut self, prayer: Prayer) -> &mut TimeValue {
        match prayer {
            Prayer::Fajr => &mut self.fajr,
            Prayer::Sunrise => &mut self.sunrise,
            Prayer::Dhuhr => &mut self.dhuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Sunset => &mut self.sunset,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, TimeValue)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    pub fn map<F: FnMut(Prayer, TimeValue) -> TimeValue>(&self, mut f: F) -> RawTimes {
        let mut out = *self;
        for prayer in Prayer::ALL {
            *out.get_mut(prayer) = f(prayer, self.get(prayer));
        }
        out
    }
}

/// Per-slot minute adjustments added after computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offsets {
    minutes: [f64; Prayer::COUNT],
}

impl Offsets {
    pub fn new(minutes: [f64; Prayer::COUNT]) -> Self {
        Self { minutes }
    }

    pub fn with(mut self, prayer: Prayer, minutes: f64) -> Self {
        self.minutes[prayer.index()] = minutes;
        self
    }

    pub fn get(&self, prayer: Prayer) -> f64 {
        self.minutes[prayer.index()]
    }

    pub fn as_array(&self) -> &[f64; Prayer::COUNT] {
        &self.minutes
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoMoment {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub latitude: f64,
    pub longitude: f64,
    /// Hours east of UTC.
    pub timezone: f64,
}

impl GeoMoment {
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        latitude: f64,
        longitude: f64,
        timezone: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            latitude,
            longitude,
            timezone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Juristic {
    /// Shadow equal to object height (Shafii, Maliki, Hanbali).
    #[default]
    Shafii,
    /// Shadow twice the object height.
    Hanafi,
}

impl Juristic {
    pub fn shadow_factor(self) -> f64 {
        match self {
            Juristic::Shafii => 1.0,
            Juristic::Hanafi => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeMode {
    #[default]
    None,
    NightMiddle,
    NightSeventh,
    AngleBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeFormat {
    #[default]
    Hour24,
    Hour12,
    Hour12NoSuffix,
    FloatHours,
}

fn unknown(kind: &'static str, name: &str) -> PrayerError {
    PrayerError::UnknownName {
        kind,
        name: name.to_string(),
    }
}

impl FromStr for Juristic {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shafii" | "standard" => Ok(Juristic::Shafii),
            "hanafi" => Ok(Juristic::Hanafi),
            _ => Err(unknown("juristic method", s)),
        }
    }
}

impl FromStr for HighLatitudeMode {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(HighLatitudeMode::None),
            "night-middle" | "midnight" => Ok(HighLatitudeMode::NightMiddle),
            "night-seventh" | "one-seventh" => Ok(HighLatitudeMode::NightSeventh),
            "angle-based" => Ok(HighLatitudeMode::AngleBased),
            _ => Err(unknown("high latitude mode", s)),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" => Ok(TimeFormat::Hour24),
            "12h" => Ok(TimeFormat::Hour12),
            "12h-no-suffix" => Ok(TimeFormat::Hour12NoSuffix),
            "float" => Ok(TimeFormat::FloatHours),
            _ => Err(unknown("time format", s)),
        }
    }
}
