/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the [targets].
For example, `RUST_LOG=sample=trace` shows each draw made for a route.

Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [scanning a directory](crate::procedures::scan)
    pub const SCAN: &str = "scan";

    /// Logs related to [reading atom pools](crate::io::ccg)
    pub const PARSE: &str = "parse";

    /// Logs related to [drawing routes](crate::procedures::sample)
    pub const SAMPLE: &str = "sample";

    /// Logs related to [writing routes](crate::io::route)
    pub const WRITE: &str = "write";

    /// Logs related to the [generator](crate::generator)
    pub const GENERATOR: &str = "generator";
}
