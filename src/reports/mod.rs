/*!
Reports of a run.
*/

use std::path::PathBuf;

use crate::{structures::route::Route, types::err::GenerationError};

/// The route generated for a single constraint-graph file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    /// The constraint-graph file read.
    pub input: PathBuf,

    /// The file the route was written to.
    pub output: PathBuf,

    /// The count of atom mappings read, with repetition.
    pub pool_size: usize,

    /// The route written.
    pub route: Route,
}

impl std::fmt::Display for FileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} ({} atom mappings) -> {:?}: {}",
            self.input, self.pool_size, self.output, self.route
        )
    }
}

/// The routes generated during a run, in the order generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// A report for each file a route was written for.
    pub files: Vec<FileReport>,

    /// The error for each file skipped, if failures are skipped.
    pub skipped: Vec<GenerationError>,
}

impl RunReport {
    /// Whether a route was written for every qualifying file.
    pub fn complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
