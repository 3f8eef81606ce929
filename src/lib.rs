//! A library for generating random assumption routes from constraint-graph files.
//!
//! A constraint-graph (`.ccg`) file maps atoms of a formula to integer identifiers on lines of the form `c <name> <id>`.
//! For each such file in a directory, a [generator] collects the identifiers into an [atom pool](crate::structures::atom::AtomPool), draws a [route](crate::structures::route::Route) of signed identifiers from the pool, and writes the route beside the file.
//!
//! # Orientation
//!
//! - The [generator] holds a [configuration](crate::config) and a seeded source of [randomness](crate::generic::random).
//! - The [procedures] scan a directory, sample routes, and process files.
//! - [io] reads pools and writes routes.
//! - [reports] summarise a run and [types::err] describes what may go wrong.
//!
//! # Reproducibility
//!
//! A single source of randomness is shared across every file of a run.
//! So, the route written for some file depends on the seed *and* on the draws made for each file processed before it.
//! Routes are reproducible given a fixed seed and a fixed order of directory entries.
//! See [EntryOrder](crate::config::EntryOrder) for requiring a fixed order.
//!
//! # Example
//!
//! ```rust
//! # use ccg_assumptions::config::Config;
//! # use ccg_assumptions::generator::Generator;
//! let directory = tempfile::tempdir().unwrap();
//! std::fs::write(directory.path().join("a.ccg"), "c 1 5\nc 2 7\nx foo\n").unwrap();
//!
//! let mut config = Config::default();
//! config.directory = directory.path().to_path_buf();
//!
//! let mut generator = Generator::from_config(config);
//! let report = generator.run().unwrap();
//!
//! assert_eq!(report.files.len(), 1);
//! assert_eq!(report.files[0].route.len(), 3);
//! ```

pub mod config;
pub mod generator;
pub mod generic;
pub mod io;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
