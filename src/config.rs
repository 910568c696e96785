use crate::error::{PrayerError, Result};
use crate::method::{CalculationMethod, IshaRule, MaghribRule, MethodParams};
use crate::types::{HighLatitudeMode, Juristic, Offsets, Prayer, TimeFormat};

pub const DEFAULT_ITERATIONS: u32 = 1;

/// Immutable calculation settings, shared freely across threads and calls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub method: CalculationMethod,
    pub params: MethodParams,
    pub juristic: Juristic,
    pub high_latitude: HighLatitudeMode,
    pub time_format: TimeFormat,
    pub dhuhr_minutes: f64,
    pub offsets: Offsets,
    pub iterations: u32,
}

impl Default for Config {
    fn default() -> Self {
        let method = CalculationMethod::default();
        Self {
            method,
            params: method.params(),
            juristic: Juristic::default(),
            high_latitude: HighLatitudeMode::default(),
            time_format: TimeFormat::default(),
            dhuhr_minutes: 0.0,
            offsets: Offsets::default(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn with_method(method: CalculationMethod) -> Self {
        Self {
            method,
            params: method.params(),
            ..Self::default()
        }
    }

    pub fn to_builder(&self) -> ConfigBuilder {
        ConfigBuilder { config: *self }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn method(mut self, method: CalculationMethod) -> Self {
        self.config.method = method;
        self.config.params = method.params();
        self
    }

    /// Replaces the whole Custom record and activates it.
    pub fn custom_params(mut self, params: MethodParams) -> Self {
        self.config.method = CalculationMethod::Custom;
        self.config.params = params;
        self
    }

    // Single-parameter setters switch to Custom, seeded from whatever
    // parameters were active before.
    fn customize<F: FnOnce(&mut MethodParams)>(self, f: F) -> Self {
        let mut params = self.config.params;
        f(&mut params);
        self.custom_params(params)
    }

    pub fn fajr_angle(self, angle: f64) -> Self {
        self.customize(|p| p.fajr_angle = angle)
    }

    pub fn maghrib_angle(self, angle: f64) -> Self {
        self.customize(|p| p.maghrib = MaghribRule::Angle(angle))
    }

    pub fn maghrib_minutes(self, minutes: f64) -> Self {
        self.customize(|p| p.maghrib = MaghribRule::MinutesAfterSunset(minutes))
    }

    pub fn isha_angle(self, angle: f64) -> Self {
        self.customize(|p| p.isha = IshaRule::Angle(angle))
    }

    pub fn isha_minutes(self, minutes: f64) -> Self {
        self.customize(|p| p.isha = IshaRule::MinutesAfterMaghrib(minutes))
    }

    pub fn juristic(mut self, juristic: Juristic) -> Self {
        self.config.juristic = juristic;
        self
    }

    pub fn high_latitude(mut self, mode: HighLatitudeMode) -> Self {
        self.config.high_latitude = mode;
        self
    }

    pub fn time_format(mut self, format: TimeFormat) -> Self {
        self.config.time_format = format;
        self
    }

    pub fn dhuhr_minutes(mut self, minutes: f64) -> Self {
        self.config.dhuhr_minutes = minutes;
        self
    }

    pub fn offsets(mut self, offsets: Offsets) -> Self {
        self.config.offsets = offsets;
        self
    }

    pub fn offset(mut self, prayer: Prayer, minutes: f64) -> Self {
        self.config.offsets = self.config.offsets.with(prayer, minutes);
        self
    }

    pub fn iterations(mut self, iterations: u32) -> Self {
        self.config.iterations = iterations;
        self
    }

    pub fn build(self) -> Result<Config> {
        let c = self.config;

        check_angle("fajr_angle", c.params.fajr_angle)?;
        match c.params.maghrib {
            MaghribRule::Angle(a) => check_angle("maghrib_angle", a)?,
            MaghribRule::MinutesAfterSunset(m) => check_minutes("maghrib_minutes", m)?,
        }
        match c.params.isha {
            IshaRule::Angle(a) => check_angle("isha_angle", a)?,
            IshaRule::MinutesAfterMaghrib(m) => check_minutes("isha_minutes", m)?,
        }
        if !c.dhuhr_minutes.is_finite() {
            return Err(invalid("dhuhr_minutes", c.dhuhr_minutes, "must be finite"));
        }
        if let Some(&m) = c.offsets.as_array().iter().find(|m| !m.is_finite()) {
            return Err(invalid("offsets", m, "must be finite"));
        }
        if c.iterations == 0 {
            return Err(invalid("iterations", 0.0, "must be at least 1"));
        }
        Ok(c)
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> PrayerError {
    PrayerError::InvalidParameter {
        name,
        value,
        reason,
    }
}

fn check_angle(name: &'static str, angle: f64) -> Result<()> {
    if angle.is_finite() && (0.0..90.0).contains(&angle) {
        Ok(())
    } else {
        Err(invalid(name, angle, "expected degrees in [0, 90)"))
    }
}

fn check_minutes(name: &'static str, minutes: f64) -> Result<()> {
    if minutes.is_finite() && minutes >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, minutes, "expected non-negative minutes"))
    }
}
