/// The order in which qualifying directory entries are processed.
///
/// As randomness is shared across every file of a run, the order fixes which draws are used for which file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryOrder {
    /// Whatever order the filesystem lists entries in.
    ///
    /// This need not be stable across platforms, or even across filesystems on a single platform.
    Listing = 0,

    /// Ascending order of entry names.
    Sorted,
}

impl std::fmt::Display for EntryOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Listing => write!(f, "Listing"),
            Self::Sorted => write!(f, "Sorted"),
        }
    }
}


/// What to do on failing to generate a route for some file.
///
/// Failure to read the directory itself is always fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FailurePolicy {
    /// Stop the run, leaving routes written for earlier files in place.
    Abort = 0,

    /// Note the failure and continue with the next file.
    Skip,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "Abort"),
            Self::Skip => write!(f, "Skip"),
        }
    }
}
