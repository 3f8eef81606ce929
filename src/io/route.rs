//! Writing routes.
//!
//! A route is written one assumption per line, each as a decimal integer followed by a newline.
//! There is no header, and nothing follows the last assumption.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    misc::log::targets::{self},
    structures::route::Route,
    types::err::{self},
};

/// Writes `route` to `writer`.
///
/// ```rust
/// # use ccg_assumptions::io::route::write_route;
/// # use ccg_assumptions::structures::{assumption::Assumption, route::Route};
/// let route: Route = [Assumption::new(5, true), Assumption::new(7, false)].into_iter().collect();
///
/// let mut buffer = vec![];
/// assert!(write_route(&mut buffer, &route).is_ok());
/// assert_eq!(buffer, b"5\n-7\n");
/// ```
pub fn write_route(mut writer: impl Write, route: &Route) -> Result<(), err::WriteError> {
    for assumption in route {
        if let Err(e) = writeln!(writer, "{assumption}") {
            return Err(err::WriteError::FailedToWrite(e.kind()));
        }
    }

    match writer.flush() {
        Ok(()) => Ok(()),
        Err(e) => Err(err::WriteError::FailedToWrite(e.kind())),
    }
}

/// Writes `route` to the file at `path`, creating the file or truncating any existing contents.
pub fn write_route_at(path: &Path, route: &Route) -> Result<(), err::WriteError> {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => return Err(err::WriteError::FailedToCreate(e.kind())),
    };

    write_route(BufWriter::new(file), route)?;

    log::info!(target: targets::WRITE, "Wrote route {route} to {path:?}");
    Ok(())
}
