//! Generic structures, independent of constraint-graph files.

pub mod random;
