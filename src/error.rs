use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PrayerError {
    #[error("unknown {kind} name: {name:?}")]
    UnknownName { kind: &'static str, name: String },

    #[error("invalid parameter {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("cannot parse time {0:?}")]
    ParseTime(String),
}

pub type Result<T> = std::result::Result<T, PrayerError>;
