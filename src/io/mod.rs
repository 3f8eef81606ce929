//! Reading atom pools from constraint-graph files, and writing routes.

pub mod ccg;
pub mod route;
