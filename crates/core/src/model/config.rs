use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max factor must be between {min} and {max}, got {value}")]
    MaxFactorOutOfRange { value: u32, min: u32, max: u32 },

    #[error("pack size must be one of 5, 10 or 20, got {value}")]
    UnsupportedPackSize { value: u32 },

    #[error("not a number: {raw}")]
    NotANumber { raw: String },
}

//
// ─── MAX FACTOR ────────────────────────────────────────────────────────────────
//

/// Upper bound for both factors of a generated question.
///
/// Always within `MaxFactor::MIN..=MaxFactor::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaxFactor(u32);

impl MaxFactor {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 12;

    /// Creates a new `MaxFactor`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MaxFactorOutOfRange` outside `2..=12`.
    pub fn new(value: u32) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::MaxFactorOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Stepper "+": saturates at `MAX`.
    #[must_use]
    pub fn increment(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// Stepper "-": saturates at `MIN`.
    #[must_use]
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    #[must_use]
    pub fn is_min(&self) -> bool {
        self.0 == Self::MIN
    }

    #[must_use]
    pub fn is_max(&self) -> bool {
        self.0 == Self::MAX
    }
}

impl Default for MaxFactor {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for MaxFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaxFactor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_u32(s)?;
        Self::new(value)
    }
}

//
// ─── PACK SIZE ─────────────────────────────────────────────────────────────────
//

/// Number of questions in a practice pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PackSize {
    #[default]
    Five,
    Ten,
    Twenty,
}

impl PackSize {
    /// Choices in display order.
    pub const ALL: [PackSize; 3] = [PackSize::Five, PackSize::Ten, PackSize::Twenty];

    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            PackSize::Five => 5,
            PackSize::Ten => 10,
            PackSize::Twenty => 20,
        }
    }

    /// Maps a raw question count back onto the fixed set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedPackSize` for anything other than 5, 10 or 20.
    pub fn from_count(value: u32) -> Result<Self, ConfigError> {
        match value {
            5 => Ok(PackSize::Five),
            10 => Ok(PackSize::Ten),
            20 => Ok(PackSize::Twenty),
            _ => Err(ConfigError::UnsupportedPackSize { value }),
        }
    }
}

impl fmt::Display for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl FromStr for PackSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_u32(s)?;
        Self::from_count(value)
    }
}

fn parse_u32(raw: &str) -> Result<u32, ConfigError> {
    raw.trim().parse::<u32>().map_err(|_| ConfigError::NotANumber {
        raw: raw.to_string(),
    })
}

//
// ─── PRACTICE CONFIG ───────────────────────────────────────────────────────────
//

/// Settings chosen on the configuration form before a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PracticeConfig {
    max_factor: MaxFactor,
    pack_size: PackSize,
}

impl PracticeConfig {
    #[must_use]
    pub fn new(max_factor: MaxFactor, pack_size: PackSize) -> Self {
        Self {
            max_factor,
            pack_size,
        }
    }

    #[must_use]
    pub fn max_factor(&self) -> MaxFactor {
        self.max_factor
    }

    #[must_use]
    pub fn pack_size(&self) -> PackSize {
        self.pack_size
    }

    #[must_use]
    pub fn with_max_factor(mut self, max_factor: MaxFactor) -> Self {
        self.max_factor = max_factor;
        self
    }

    #[must_use]
    pub fn with_pack_size(mut self, pack_size: PackSize) -> Self {
        self.pack_size = pack_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_factor_rejects_out_of_range() {
        assert!(MaxFactor::new(1).is_err());
        assert!(MaxFactor::new(13).is_err());
        assert_eq!(MaxFactor::new(2).unwrap().value(), 2);
        assert_eq!(MaxFactor::new(12).unwrap().value(), 12);
    }

    #[test]
    fn stepper_saturates_at_bounds() {
        let low = MaxFactor::default();
        assert!(low.is_min());
        assert_eq!(low.decrement(), low);

        let high = MaxFactor::new(12).unwrap();
        assert!(high.is_max());
        assert_eq!(high.increment(), high);

        assert_eq!(low.increment().value(), 3);
    }

    #[test]
    fn pack_size_only_accepts_fixed_set() {
        for size in PackSize::ALL {
            let count = u32::try_from(size.count()).unwrap();
            assert_eq!(PackSize::from_count(count).unwrap(), size);
        }
        assert_eq!(
            PackSize::from_count(7),
            Err(ConfigError::UnsupportedPackSize { value: 7 })
        );
    }

    #[test]
    fn parses_from_strings() {
        assert_eq!(" 7 ".parse::<MaxFactor>().unwrap().value(), 7);
        assert!("abc".parse::<MaxFactor>().is_err());
        assert_eq!("20".parse::<PackSize>().unwrap(), PackSize::Twenty);
        assert!("0".parse::<PackSize>().is_err());
    }

    #[test]
    fn default_config_matches_initial_form() {
        let config = PracticeConfig::default();
        assert_eq!(config.max_factor().value(), 2);
        assert_eq!(config.pack_size(), PackSize::Five);
    }
}
