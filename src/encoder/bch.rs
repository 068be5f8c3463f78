/// BCH codes protecting the format and version information
pub struct BchEncoder;

impl BchEncoder {
    /// BCH(15,5) generator x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
    pub const FORMAT_GENERATOR: u32 = 0x537;
    /// BCH(18,6) generator x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
    pub const VERSION_GENERATOR: u32 = 0x1F25;
    /// Applied to the format word so it is never all zero
    pub const FORMAT_XOR_MASK: u16 = 0x5412;

    /// 15-bit format word for 5 data bits, before the XOR mask
    pub fn encode_format(data: u8) -> u16 {
        let data = (data & 0x1F) as u32;
        ((data << 10) | Self::remainder(data, 10, Self::FORMAT_GENERATOR)) as u16
    }

    /// 18-bit version word for a 6-bit version number
    pub fn encode_version(version: u8) -> u32 {
        let data = (version & 0x3F) as u32;
        (data << 12) | Self::remainder(data, 12, Self::VERSION_GENERATOR)
    }

    fn remainder(data: u32, degree: u32, generator: u32) -> u32 {
        let mut rem = data;
        for _ in 0..degree {
            rem = (rem << 1) ^ ((rem >> (degree - 1)) * generator);
        }
        rem
    }

    /// True when `codeword` is a multiple of `generator` (a polynomial of `degree`)
    pub fn is_codeword(codeword: u32, degree: u32, generator: u32) -> bool {
        let mut rem = codeword;
        for bit in (degree..32).rev() {
            if (rem >> bit) & 1 != 0 {
                rem ^= generator << (bit - degree);
            }
        }
        rem == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_words() {
        // M with mask 0 and L with mask 4, after the XOR mask
        assert_eq!(
            BchEncoder::encode_format(0b00_000) ^ BchEncoder::FORMAT_XOR_MASK,
            0b101010000010010
        );
        assert_eq!(
            BchEncoder::encode_format(0b01_100) ^ BchEncoder::FORMAT_XOR_MASK,
            0b110011000101111
        );
        for data in 0..32u8 {
            let word = BchEncoder::encode_format(data) as u32;
            assert_eq!(word >> 10, data as u32);
            assert!(BchEncoder::is_codeword(word, 10, BchEncoder::FORMAT_GENERATOR));
        }
    }

    #[test]
    fn test_version_words() {
        assert_eq!(BchEncoder::encode_version(7), 0x07C94);
        assert_eq!(BchEncoder::encode_version(40), 0x28C69);
        for v in 7..=40u8 {
            let word = BchEncoder::encode_version(v);
            assert_eq!(word >> 12, v as u32);
            assert!(word >> 18 == 0);
            assert!(BchEncoder::is_codeword(word, 12, BchEncoder::VERSION_GENERATOR));
        }
    }

    #[test]
    fn test_corrupted_word_rejected() {
        let word = BchEncoder::encode_format(0b10_101) as u32;
        assert!(!BchEncoder::is_codeword(word ^ 0b100, 10, BchEncoder::FORMAT_GENERATOR));
    }
}
