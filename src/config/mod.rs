/*!
Configuration of a generator.

All configuration for a [generator](crate::generator) is contained within a [Config].
Defaults follow the conventions of the evaluation setup: routes are drawn for every `.ccg` file in `eval/` and written beside each file with an `_a` suffix.

The length of a route is fixed at [ROUTE_LENGTH](defaults::ROUTE_LENGTH).
*/

use std::path::PathBuf;

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

mod order;
pub use order::{EntryOrder, FailurePolicy};

/// Representation for the probability of an assumption being positive.
pub type PolarityLean = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The directory to scan for constraint-graph files, and to write routes to.
    pub directory: PathBuf,

    /// The ending of an entry name which marks the entry as a constraint-graph file.
    pub extension: String,

    /// The suffix appended to the name of a constraint-graph file to name the file its route is written to.
    pub suffix: String,

    /// The seed for the source of randomness.
    pub seed: u64,

    /// The probability of an assumption being positive.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The order to process qualifying entries in.
    pub entry_order: EntryOrder,

    /// What to do if some file fails.
    pub failure_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            directory: PathBuf::from(defaults::DIRECTORY),
            extension: defaults::EXTENSION.to_string(),
            suffix: defaults::SUFFIX.to_string(),
            seed: defaults::RNG_SEED,

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: defaults::POLARITY_LEAN,
            },

            entry_order: defaults::ENTRY_ORDER,
            failure_policy: defaults::FAILURE_POLICY,
        }
    }
}

impl Config {
    /// The path to write the route for the file at `path` to.
    ///
    /// ```rust
    /// # use ccg_assumptions::config::Config;
    /// # use std::path::Path;
    /// let config = Config::default();
    /// assert_eq!(config.output_path(Path::new("eval/a.ccg")), Path::new("eval/a.ccg_a"));
    /// ```
    pub fn output_path(&self, path: &std::path::Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(&self.suffix);
        PathBuf::from(name)
    }

    /// Whether an entry with the given name is a constraint-graph file.
    pub fn qualifies(&self, name: &str) -> bool {
        name.ends_with(&self.extension)
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn qualifying_names() {
        let config = Config::default();

        assert!(config.qualifies("a.ccg"));
        assert!(config.qualifies(".ccg"));
        assert!(!config.qualifies("a.ccg_a"));
        assert!(!config.qualifies("a.cnf"));
        assert!(!config.qualifies("a.CCG"));
    }
}
