use core::fmt;

/// Rejected configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    InvalidPowerRange { min: f64, max: f64 },
    InvalidAlignmentThreshold { degrees: f64 },
    NegativeMargin { margin: f64 },
    InvalidEnergyFraction { fraction: f64 },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPowerRange { min, max } => write!(
                f,
                "invalid fire power range [{min}, {max}]: need 0 < min <= max <= {}",
                crate::constants::ENGINE_MAX_POWER
            ),
            Self::InvalidAlignmentThreshold { degrees } => {
                write!(f, "alignment threshold out of range: {degrees} (allowed (0, 180))")
            }
            Self::NegativeMargin { margin } => write!(f, "boundary margin is negative: {margin}"),
            Self::InvalidEnergyFraction { fraction } => write!(
                f,
                "energy fraction per shot out of range: {fraction} (allowed (0, 1])"
            ),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
