//! Generating routes for constraint-graph files.

use std::path::Path;

use crate::{
    config::{defaults::ROUTE_LENGTH, FailurePolicy},
    generator::GenericGenerator,
    io::{ccg::read_atom_pool_at, route::write_route_at},
    misc::log::targets::{self},
    procedures::{sample::sample_route, scan::qualifying_entries},
    reports::{FileReport, RunReport},
    types::err::{ErrorKind, GenerationError},
};

impl<R: rand::Rng> GenericGenerator<R> {
    /// Generates a route for the constraint-graph file at `path`, and writes the route beside the file.
    ///
    /// The route is written to the path of the file with the configured suffix appended.
    /// Any existing file at that path is overwritten.
    ///
    /// Draws are made only if the file is read and contains some atom mapping.
    pub fn process_file(&mut self, path: &Path) -> Result<FileReport, ErrorKind> {
        let pool = read_atom_pool_at(path)?;

        let route = sample_route(
            &pool,
            ROUTE_LENGTH,
            self.config.polarity_lean.value,
            &mut self.rng,
        )?;

        let output = self.config.output_path(path);
        write_route_at(&output, &route)?;

        Ok(FileReport {
            input: path.to_path_buf(),
            output,
            pool_size: pool.len(),
            route,
        })
    }

    /// Generates a route for each constraint-graph file in the configured directory.
    ///
    /// Files are processed one at a time, in the configured [EntryOrder](crate::config::EntryOrder).
    ///
    /// Failure to list the directory is always an error.
    /// Otherwise, on the failure of some file the run stops or skips the file, as configured by [FailurePolicy].
    /// Routes written before a run stops are left in place.
    pub fn run(&mut self) -> Result<RunReport, GenerationError> {
        let entries = match qualifying_entries(&self.config) {
            Ok(entries) => entries,
            Err(e) => return Err(GenerationError::new(&self.config.directory, e)),
        };

        let mut report = RunReport::default();

        for path in entries {
            match self.process_file(&path) {
                Ok(file_report) => {
                    log::info!(target: targets::GENERATOR, "{file_report}");
                    report.files.push(file_report);
                }

                Err(e) => {
                    let error = GenerationError::new(path, e);
                    match self.config.failure_policy {
                        FailurePolicy::Abort => {
                            log::error!(target: targets::GENERATOR, "{error}");
                            return Err(error);
                        }

                        FailurePolicy::Skip => {
                            log::warn!(target: targets::GENERATOR, "Skipped {error}");
                            report.skipped.push(error);
                        }
                    }
                }
            }
        }

        Ok(report)
    }
}
