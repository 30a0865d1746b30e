/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
/// GF(256) field operations using log/exp tables
pub struct Gf256;

const PRIMITIVE_POLY: u16 = 0x11D;

/// alpha^i for i in 0..510, doubled so products need no modulo
static EXP_TABLE: [u8; 512] = build_exp_table();
/// log_alpha(x) for x in 1..=255; LOG_TABLE[0] is unused
static LOG_TABLE: [u8; 256] = build_log_table();

const fn build_exp_table() -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        table[i] = x as u8;
        table[i + 255] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    table[510] = table[0];
    table[511] = table[1];
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

impl Gf256 {
    /// Multiply in GF(256)
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        EXP_TABLE[LOG_TABLE[a as usize] as usize + LOG_TABLE[b as usize] as usize]
    }

    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }

    /// Evaluate a polynomial (highest degree first) at `x`
    #[cfg(test)]
    pub(crate) fn eval(poly: &[u8], x: u8) -> u8 {
        poly.iter().fold(0u8, |acc, &c| Self::mul(acc, x) ^ c)
    }
}

/// Reed-Solomon encoder for one ECC length
///
/// The generator is prod_{i=0}^{degree-1} (x - alpha^i), stored without its
/// leading 1 coefficient, highest degree first.
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Generator polynomial with `degree` ECC codewords
    pub fn new(degree: usize) -> Self {
        debug_assert!((1..=255).contains(&degree), "degree out of range");
        // Start from the monomial 1, multiply in one root at a time.
        let mut generator = vec![0u8; degree];
        generator[degree - 1] = 1;
        for i in 0..degree {
            let root = Gf256::exp(i);
            for j in 0..degree {
                generator[j] = Gf256::mul(generator[j], root);
                if j + 1 < degree {
                    generator[j] ^= generator[j + 1];
                }
            }
        }
        Self { generator }
    }

    /// Number of ECC codewords produced
    pub fn degree(&self) -> usize {
        self.generator.len()
    }

    /// Generator coefficients below the leading term, highest degree first
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// ECC codewords for `data`: remainder of data(x) * x^degree / g(x)
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut remainder = vec![0u8; self.degree()];
        for &d in data {
            let factor = d ^ remainder[0];
            remainder.rotate_left(1);
            if let Some(last) = remainder.last_mut() {
                *last = 0;
            }
            for (r, &g) in remainder.iter_mut().zip(&self.generator) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf256_basic() {
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        assert_eq!(Gf256::mul(1, 123), 123);
        // x^8 reduces to x^4 + x^3 + x^2 + 1
        assert_eq!(Gf256::mul(0x80, 0x02), 0x1D);
        assert_eq!(Gf256::exp(0), 1);
        assert_eq!(Gf256::exp(255), 1);
        assert_eq!(Gf256::exp(8), 0x1D);
    }

    #[test]
    fn test_log_exp_inverse() {
        for x in 1..=255u8 {
            assert_eq!(EXP_TABLE[LOG_TABLE[x as usize] as usize], x);
        }
    }

    #[test]
    fn test_mul_matches_carryless() {
        fn slow_mul(a: u8, b: u8) -> u8 {
            let mut result: u16 = 0;
            let mut a = a as u16;
            let mut b = b;
            while b != 0 {
                if b & 1 != 0 {
                    result ^= a;
                }
                a <<= 1;
                if a & 0x100 != 0 {
                    a ^= PRIMITIVE_POLY;
                }
                b >>= 1;
            }
            result as u8
        }
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(5) {
                assert_eq!(Gf256::mul(a, b), slow_mul(a, b));
            }
        }
    }

    #[test]
    fn test_generator_degree_7() {
        // ISO/IEC 18004 annex A: alpha exponents 87 229 146 149 238 102 21
        let rs = ReedSolomonEncoder::new(7);
        let expected: Vec<u8> = [87, 229, 146, 149, 238, 102, 21]
            .iter()
            .map(|&e| Gf256::exp(e))
            .collect();
        assert_eq!(rs.generator(), expected.as_slice());
    }

    #[test]
    fn test_hello_world_ecc() {
        // Version 1-M "HELLO WORLD"
        let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17];
        let ecc = ReedSolomonEncoder::new(10).encode(&data);
        assert_eq!(ecc, vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_codeword_has_zero_syndromes() {
        let data: Vec<u8> = (0..40u8).map(|i| i.wrapping_mul(37) ^ 0x5A).collect();
        let rs = ReedSolomonEncoder::new(22);
        let mut codeword = data.clone();
        codeword.extend(rs.encode(&data));
        for i in 0..22 {
            assert_eq!(Gf256::eval(&codeword, Gf256::exp(i)), 0, "syndrome {i}");
        }
    }
}
