/// Reed-Solomon error correction codewords for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use crate::error::{QrError, Result};

/// GF(256) field operations
pub struct Gf256;

impl Gf256 {
    /// Field reduction polynomial 0x11D
    pub const PRIMITIVE: u16 = 0x11D;

    /// Carry-less Russian-peasant multiply, reducing modulo [`Gf256::PRIMITIVE`]
    pub fn mul(a: u8, b: u8) -> u8 {
        let mut z: u16 = 0;
        for i in (0..8).rev() {
            z = (z << 1) ^ ((z >> 7) * Self::PRIMITIVE);
            z ^= ((b as u16 >> i) & 1) * a as u16;
        }
        debug_assert!(z >> 8 == 0);
        z as u8
    }

    /// `a` raised to `n`
    pub fn pow(a: u8, n: usize) -> u8 {
        (0..n).fold(1, |acc, _| Self::mul(acc, a))
    }
}

/// Divisor polynomial of a given degree, reusable across blocks
///
/// Coefficients run from highest to lowest order with the leading 1 omitted.
/// For degree 4 the stored `[a, b, c, d]` stands for `x^4 + ax^3 + bx^2 + cx + d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReedSolomonGenerator {
    coefficients: Vec<u8>,
}

impl ReedSolomonGenerator {
    /// Build `(x - 2^0)(x - 2^1)...(x - 2^(degree-1))`. Degree must be 1..=255.
    pub fn new(degree: usize) -> Result<Self> {
        if !(1..=255).contains(&degree) {
            return Err(QrError::DegreeOutOfRange(degree));
        }

        // Start from the monomial x^0
        let mut coefficients = vec![0u8; degree];
        coefficients[degree - 1] = 1;

        // Multiply by (x - root) for each consecutive power of the generator 0x02
        let mut root: u8 = 1;
        for _ in 0..degree {
            for j in 0..degree {
                coefficients[j] = Gf256::mul(coefficients[j], root);
                if j + 1 < degree {
                    coefficients[j] ^= coefficients[j + 1];
                }
            }
            root = Gf256::mul(root, 0x02);
        }

        Ok(Self { coefficients })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Remainder of `data * x^degree` divided by the generator: the ECC codewords for `data`
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let degree = self.degree();
        let mut result = vec![0u8; degree];
        for &byte in data {
            let factor = byte ^ result[0];
            result.copy_within(1.., 0);
            result[degree - 1] = 0;
            for (r, &c) in result.iter_mut().zip(&self.coefficients) {
                *r ^= Gf256::mul(c, factor);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf_mul() {
        assert_eq!(Gf256::mul(0, 0x53), 0);
        assert_eq!(Gf256::mul(1, 0x53), 0x53);
        assert_eq!(Gf256::mul(2, 0x80), 0x1D);
        assert_eq!(Gf256::mul(0x53, 0xCA), Gf256::mul(0xCA, 0x53));
        // 2^255 wraps to 1
        assert_eq!(Gf256::pow(2, 255), 1);
        assert_eq!(Gf256::pow(2, 8), 0x1D);
    }

    #[test]
    fn test_generator_coefficients() {
        let rs = ReedSolomonGenerator::new(7).unwrap();
        assert_eq!(rs.coefficients(), &[127, 122, 154, 164, 11, 68, 117]);

        let rs = ReedSolomonGenerator::new(10).unwrap();
        assert_eq!(
            rs.coefficients(),
            &[216, 194, 159, 111, 199, 94, 95, 113, 157, 193]
        );
    }

    #[test]
    fn test_degree_range() {
        assert_eq!(
            ReedSolomonGenerator::new(0),
            Err(QrError::DegreeOutOfRange(0))
        );
        assert_eq!(
            ReedSolomonGenerator::new(256),
            Err(QrError::DegreeOutOfRange(256))
        );
        assert_eq!(ReedSolomonGenerator::new(255).unwrap().degree(), 255);
        assert_eq!(ReedSolomonGenerator::new(1).unwrap().coefficients(), &[1]);
    }

    #[test]
    fn test_hello_world_ecc() {
        // "HELLO WORLD" at 1-M
        let data = [
            0x20, 0x5B, 0x0B, 0x78, 0xD1, 0x72, 0xDC, 0x4D, 0x43, 0x40, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11,
        ];
        let rs = ReedSolomonGenerator::new(10).unwrap();
        assert_eq!(
            rs.remainder(&data),
            vec![0xC4, 0x23, 0x27, 0x77, 0xEB, 0xD7, 0xE7, 0xE2, 0x5D, 0x17]
        );
    }

    #[test]
    fn test_codeword_has_zero_syndromes() {
        let data: Vec<u8> = (0u8..40).map(|i| i.wrapping_mul(37) ^ 0x5A).collect();
        for degree in [7usize, 13, 30] {
            let rs = ReedSolomonGenerator::new(degree).unwrap();
            let ecc = rs.remainder(&data);
            assert_eq!(ecc.len(), degree);

            let mut codeword = data.clone();
            codeword.extend_from_slice(&ecc);
            for i in 0..degree {
                let x = Gf256::pow(2, i);
                // Horner evaluation, highest order first
                let value = codeword.iter().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c);
                assert_eq!(value, 0, "syndrome {} of degree {}", i, degree);
            }
        }
    }

    #[test]
    fn test_empty_data_remainder() {
        let rs = ReedSolomonGenerator::new(5).unwrap();
        assert_eq!(rs.remainder(&[]), vec![0; 5]);
    }
}
