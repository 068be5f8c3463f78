use std::sync::OnceLock;

use crate::error::{QrError, Result};
use crate::models::{MaskPattern, Version};

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_i32(name: &str, default: i32) -> i32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<i32>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static BOOST_ECL: OnceLock<bool> = OnceLock::new();

pub(crate) fn boost_ecl() -> bool {
    *BOOST_ECL.get_or_init(|| parse_env_bool_u8("QR_BOOST_ECL", true))
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

pub(crate) fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", false))
}

static MIN_VERSION: OnceLock<u8> = OnceLock::new();

pub(crate) fn min_version() -> u8 {
    *MIN_VERSION.get_or_init(|| parse_env_u8("QR_MIN_VERSION", 1).clamp(1, 40))
}

static MAX_VERSION: OnceLock<u8> = OnceLock::new();

pub(crate) fn max_version() -> u8 {
    *MAX_VERSION.get_or_init(|| parse_env_u8("QR_MAX_VERSION", 40).clamp(1, 40))
}

static FIXED_MASK: OnceLock<Option<MaskPattern>> = OnceLock::new();

pub(crate) fn fixed_mask() -> Option<MaskPattern> {
    *FIXED_MASK.get_or_init(|| {
        MaskPattern::from_value(parse_env_i32("QR_MASK", -1)).unwrap_or(None)
    })
}

/// Knobs for a single encode call
///
/// `Default` takes process-wide values from `QR_MIN_VERSION`, `QR_MAX_VERSION`,
/// `QR_MASK`, `QR_BOOST_ECL` and `QR_PARALLEL_MASKS`, read once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Smallest version the search may pick
    pub min_version: u8,
    /// Largest version the search may pick
    pub max_version: u8,
    /// Fixed mask, or `None` for the lowest-penalty one
    pub mask: Option<MaskPattern>,
    /// Raise the level L -> M -> Q -> H while the data still fits the chosen version
    pub boost_ecl: bool,
    /// Score the eight mask candidates on the rayon pool
    pub parallel_masks: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            min_version: min_version(),
            max_version: max_version(),
            mask: fixed_mask(),
            boost_ecl: boost_ecl(),
            parallel_masks: parallel_masks(),
        }
    }
}

impl EncodeOptions {
    /// Built-in defaults, ignoring the environment
    pub fn standard() -> Self {
        Self {
            min_version: Version::MIN.number(),
            max_version: Version::MAX.number(),
            mask: None,
            boost_ecl: true,
            parallel_masks: false,
        }
    }

    pub fn with_version_range(mut self, min: u8, max: u8) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    pub fn with_mask(mut self, mask: Option<MaskPattern>) -> Self {
        self.mask = mask;
        self
    }

    pub fn with_boost_ecl(mut self, boost: bool) -> Self {
        self.boost_ecl = boost;
        self
    }

    pub fn with_parallel_masks(mut self, parallel: bool) -> Self {
        self.parallel_masks = parallel;
        self
    }

    /// Check the version bounds, returning them as typed versions
    pub fn validate(&self) -> Result<(Version, Version)> {
        let min = Version::new(self.min_version)?;
        let max = Version::new(self.max_version)?;
        if min > max {
            return Err(QrError::InvalidVersionRange {
                min: self.min_version,
                max: self.max_version,
            });
        }
        Ok((min, max))
    }
}
