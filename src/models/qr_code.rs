use super::BitMatrix;
use crate::error::{QrError, Result};

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version (21x21 modules)
    pub const MIN: Version = Version(1);
    /// Largest version (177x177 modules)
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1..=40
    pub fn new(number: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(QrError::VersionOutOfRange(number))
        }
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Versions 7 and up carry two copies of the version information block
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }

    /// Iterate versions `self..=last`
    pub(crate) fn range_to(self, last: Version) -> impl Iterator<Item = Version> {
        (self.0..=last.0).map(Version)
    }
}

impl TryFrom<u8> for Version {
    type Error = QrError;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels, weakest first
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Row index into the per-level capacity tables
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// 2-bit value written into the format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`ECLevel::format_bits`]
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in reference order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit reference
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x07) as usize]
    }

    /// Parse the conventional integer form: -1 means automatic, 0..=7 a fixed pattern
    pub fn from_value(value: i32) -> Result<Option<Self>> {
        match value {
            -1 => Ok(None),
            0..=7 => Ok(Some(Self::from_bits(value as u8))),
            _ => Err(QrError::MaskOutOfRange(value)),
        }
    }

    /// 3-bit pattern reference written into the format information
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` is inverted by this pattern
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QrError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::from_value(bits as i32)?.ok_or(QrError::MaskOutOfRange(bits as i32))
    }
}

/// A finished QR Code symbol
///
/// Every module is either a function module (finder, timing, alignment, format,
/// version) or a data/ECC module carrying exactly one applied mask. The
/// non-maskable map is kept so the symbol can be re-masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QRCode {
    version: Version,
    error_correction: ECLevel,
    mask_pattern: MaskPattern,
    modules: BitMatrix,
    function: BitMatrix,
}

impl QRCode {
    pub(crate) fn from_parts(
        version: Version,
        error_correction: ECLevel,
        mask_pattern: MaskPattern,
        modules: BitMatrix,
        function: BitMatrix,
    ) -> Self {
        debug_assert_eq!(modules.width(), version.size());
        debug_assert_eq!(function.width(), version.size());
        Self {
            version,
            error_correction,
            mask_pattern,
            modules,
            function,
        }
    }

    /// QR code version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Width and height in modules (version * 4 + 17)
    pub fn size(&self) -> usize {
        self.version.size()
    }

    /// Error correction level actually used (may be boosted above the request)
    pub fn ec_level(&self) -> ECLevel {
        self.error_correction
    }

    /// Mask pattern committed to the symbol
    pub fn mask(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Module color at (x, y): true = dark. Coordinates outside the symbol are light,
    /// so renderers can draw a quiet zone by iterating past the edges.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let size = self.size() as i32;
        (0..size).contains(&x) && (0..size).contains(&y) && self.modules.get(x as usize, y as usize)
    }

    /// Whether (x, y) is a function module, untouched by masking
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.function.get(x, y)
    }

    /// Full module grid
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    pub(crate) fn function_map(&self) -> &BitMatrix {
        &self.function
    }

    /// Penalty score of the committed symbol under the standard N1..N4 rules
    pub fn penalty_score(&self) -> u32 {
        crate::encoder::penalty::penalty_score(&self.modules)
    }

    /// Rebuild this symbol with another mask (`None` picks the lowest-penalty one).
    /// Version, error correction level and codewords are unchanged.
    pub fn remask(&self, mask: Option<MaskPattern>) -> QRCode {
        crate::encoder::qr_encoder::remask(self, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::MIN.size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::MAX.size(), 177);
    }

    #[test]
    fn test_version_range() {
        assert_eq!(Version::new(0), Err(QrError::VersionOutOfRange(0)));
        assert_eq!(Version::new(41), Err(QrError::VersionOutOfRange(41)));
        assert!(Version::try_from(7).unwrap().has_version_info());
        assert!(!Version::try_from(6).unwrap().has_version_info());
        let versions: Vec<u8> = Version::new(38)
            .unwrap()
            .range_to(Version::MAX)
            .map(|v| v.number())
            .collect();
        assert_eq!(versions, vec![38, 39, 40]);
    }

    #[test]
    fn test_ec_level_format_bits() {
        assert_eq!(ECLevel::L.format_bits(), 0b01);
        assert_eq!(ECLevel::M.format_bits(), 0b00);
        assert_eq!(ECLevel::Q.format_bits(), 0b11);
        assert_eq!(ECLevel::H.format_bits(), 0b10);
        for level in ECLevel::ALL {
            assert_eq!(ECLevel::from_format_bits(level.format_bits()), level);
        }
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        // Pattern4 uses row/2 and column/3
        assert!(MaskPattern::Pattern4.is_masked(1, 2));
        assert!(!MaskPattern::Pattern4.is_masked(2, 0));
        assert!(!MaskPattern::Pattern4.is_masked(0, 3));
    }

    #[test]
    fn test_mask_from_value() {
        assert_eq!(MaskPattern::from_value(-1), Ok(None));
        assert_eq!(MaskPattern::from_value(5), Ok(Some(MaskPattern::Pattern5)));
        assert_eq!(MaskPattern::from_value(8), Err(QrError::MaskOutOfRange(8)));
        assert_eq!(MaskPattern::from_value(-2), Err(QrError::MaskOutOfRange(-2)));
        assert_eq!(MaskPattern::try_from(7), Ok(MaskPattern::Pattern7));
        for (i, mask) in MaskPattern::ALL.iter().enumerate() {
            assert_eq!(mask.bits() as usize, i);
        }
    }
}
