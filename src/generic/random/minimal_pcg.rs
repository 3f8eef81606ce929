//! A simple pseudorandom number generator.
//!
//! Specifically, the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy [RngCore].
//!
//! PCG32 is used as the output of a seeded run depends only on the seed and the sequence of draws, and not on the platform or the version of some external library.

use rand_core::{impls, RngCore, SeedableRng};

/// State and increment.
///
/// The increment is always odd.
#[derive(Clone, Debug)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

/// The stream used when seeding through [SeedableRng].
const DEFAULT_SEQUENCE: u64 = 54;

const MULTIPLIER: u64 = 6364136223846793005;

impl MinimalPCG32 {
    /// A generator seeded with `seed` on the stream `sequence`.
    pub fn new(seed: u64, sequence: u64) -> Self {
        let mut pcg = Self {
            state: 0,
            inc: (sequence << 1) | 1,
        };
        pcg.step();
        pcg.state = pcg.state.wrapping_add(seed);
        pcg.step();
        pcg
    }

    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed), DEFAULT_SEQUENCE)
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state, DEFAULT_SEQUENCE)
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn reference_demo() {
        // The first outputs of the reference demo, `pcg32-demo`.
        let mut pcg = MinimalPCG32::new(42, 54);
        assert_eq!(pcg.next_u32(), 0xa15c02b7);
        assert_eq!(pcg.next_u32(), 0x7b47f409);
        assert_eq!(pcg.next_u32(), 0xba1d3330);
        assert_eq!(pcg.next_u32(), 0x83d2f293);
        assert_eq!(pcg.next_u32(), 0xbfa4784b);
        assert_eq!(pcg.next_u32(), 0xcbed606e);
    }

    #[test]
    fn two_seed() {
        let mut two_seed = MinimalPCG32::seed_from_u64(2);
        assert_eq!(two_seed.next_u32(), 1614318804);
        assert_eq!(two_seed.next_u32(), 1615493393);
        assert_eq!(two_seed.next_u32(), 349421396);
        assert_eq!(two_seed.next_u32(), 605299067);
    }

    #[test]
    fn seed_agreement() {
        let mut from_bytes = MinimalPCG32::from_seed(1210993_u64.to_le_bytes());
        let mut from_u64 = MinimalPCG32::seed_from_u64(1210993);

        for _ in 0..16 {
            assert_eq!(from_bytes.next_u64(), from_u64.next_u64());
        }
    }

    #[test]
    fn wide_draws() {
        let mut narrow = MinimalPCG32::seed_from_u64(1210993);
        let mut wide = MinimalPCG32::seed_from_u64(1210993);

        let low = narrow.next_u32() as u64;
        let high = narrow.next_u32() as u64;
        assert_eq!(wide.next_u64(), (high << 32) | low);
    }
}
