//! Sources of randomness.
//!
//! A [generator](crate::generator) is parameterised to anything which satisfies [rand::Rng].
//! By default, the source is [MinimalPCG32], seeded from the [configuration](crate::config::Config).

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;
