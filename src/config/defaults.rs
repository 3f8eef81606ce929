use crate::config::{self};

pub const DIRECTORY: &str = "eval/";
pub const EXTENSION: &str = ".ccg";
pub const SUFFIX: &str = "_a";

/// The number of assumptions in each route.
pub const ROUTE_LENGTH: usize = 3;

pub const RNG_SEED: u64 = 1210993;
pub const POLARITY_LEAN: config::PolarityLean = 0.5;

pub const ENTRY_ORDER: config::EntryOrder = config::EntryOrder::Listing;
pub const FAILURE_POLICY: config::FailurePolicy = config::FailurePolicy::Abort;
