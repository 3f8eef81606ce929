/*!
The generator of a run.

A generator holds a [configuration](crate::config::Config) and a source of randomness.
The source is shared across each file of a run, and is never reseeded.
So, the route written for some file depends on each draw made for each file before it.

The source is a generic parameter of a [GenericGenerator].
Still, to keep the library straightforward the source is fixed in [Generator] as [MinimalPCG32], seeded from the configuration.

```rust
# use ccg_assumptions::config::Config;
# use ccg_assumptions::generator::{GenericGenerator, Generator};
# use ccg_assumptions::generic::random::MinimalPCG32;
# use rand::SeedableRng;
let generator = Generator::from_config(Config::default());

let rng = MinimalPCG32::seed_from_u64(7);
let custom = GenericGenerator::from_config_and_rng(Config::default(), rng);
```

For the procedures of a generator, see [procedures](crate::procedures).
*/

use rand::SeedableRng;

use crate::{config::Config, generic::random::MinimalPCG32, misc::log::targets};

/// A generator, generic over the source of randomness.
pub struct GenericGenerator<R: rand::Rng> {
    /// The configuration of the generator.
    pub config: Config,

    /// The source of randomness, shared across each file.
    pub(crate) rng: R,
}

/// A generator using [MinimalPCG32] as the source of randomness.
pub type Generator = GenericGenerator<MinimalPCG32>;

impl Generator {
    /// A generator with randomness seeded by the `seed` of `config`.
    pub fn from_config(config: Config) -> Self {
        log::info!(target: targets::GENERATOR, "Seed: {}", config.seed);
        let rng = MinimalPCG32::seed_from_u64(config.seed);
        Self { config, rng }
    }
}

impl<R: rand::Rng> GenericGenerator<R> {
    /// A generator with the given source of randomness.
    ///
    /// The `seed` of `config` is ignored.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self { config, rng }
    }
}
