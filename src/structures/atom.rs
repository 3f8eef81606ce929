//! Atoms, as identified in a constraint-graph file.

/// An atom identifier.
///
/// Identifiers are read as written, so may be negative.
pub type Atom = i64;

/// The identifiers read from a constraint-graph file, in the order read.
pub type AtomPool = Vec<Atom>;
