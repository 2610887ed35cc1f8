//! The positional accumulator for one open window.
//!
//! Holds `alpha = Σ digit_i · radix^i` together with the weight of the next
//! position, so folding a digit costs one multiply-add instead of a `pow`.

use num_bigint::BigUint;
use num_traits::One;

use crate::kernels::bignum;

#[derive(Debug, Clone)]
pub struct Accumulator {
    alpha: BigUint,
    /// `radix^position` for the next digit.
    weight: BigUint,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            alpha: BigUint::default(),
            weight: BigUint::one(),
        }
    }
}

impl Accumulator {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Adds `digit · radix^position` and moves to the next position.
    ///
    /// `digit` is not required to be below `radix`.
    pub fn fold(&mut self, digit: u8, radix: u16) {
        self.alpha += &self.weight * BigUint::from(digit);
        self.weight *= BigUint::from(radix);
    }

    pub fn alpha(&self) -> &BigUint {
        &self.alpha
    }

    /// Minimal little-endian bytes of `alpha`; empty when `alpha` is zero.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        bignum::to_le_bytes(&self.alpha)
    }
}
