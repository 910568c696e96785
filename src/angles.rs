pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn dsin(deg: f64) -> f64 {
    deg_to_rad(deg).sin()
}

pub fn dcos(deg: f64) -> f64 {
    deg_to_rad(deg).cos()
}

pub fn dtan(deg: f64) -> f64 {
    deg_to_rad(deg).tan()
}

pub fn darcsin(x: f64) -> f64 {
    rad_to_deg(x.asin())
}

pub fn darccos(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

pub fn darctan(x: f64) -> f64 {
    rad_to_deg(x.atan())
}

pub fn darctan2(y: f64, x: f64) -> f64 {
    rad_to_deg(y.atan2(x))
}

pub fn darccot(x: f64) -> f64 {
    rad_to_deg((1.0 / x).atan())
}

/// Reduces `a` into `[0, b)` using `a - b * floor(a / b)`.
pub fn fix(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

pub fn fix_angle(angle: f64) -> f64 {
    fix(angle, 360.0)
}

pub fn fix_hour(hours: f64) -> f64 {
    fix(hours, 24.0)
}

/// Hours from `from` forward to `to`, wrapping across midnight.
pub fn time_diff(from: f64, to: f64) -> f64 {
    fix_hour(to - from)
}
