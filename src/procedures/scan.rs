//! Scanning a directory for constraint-graph files.

use std::path::PathBuf;

use crate::{
    config::{Config, EntryOrder},
    misc::log::targets::{self},
    types::err::{self},
};

/// Paths to each entry of the configured directory whose name qualifies as a constraint-graph file.
///
/// Paths are in the configured [EntryOrder].
/// No check is made on whether an entry is a file.
pub fn qualifying_entries(config: &Config) -> Result<Vec<PathBuf>, err::DirectoryError> {
    let listing = match std::fs::read_dir(&config.directory) {
        Ok(listing) => listing,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(err::DirectoryError::Missing)
        }
        Err(e) => return Err(err::DirectoryError::Listing(e.kind())),
    };

    let mut entries = Vec::default();

    for entry in listing {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Err(err::DirectoryError::Listing(e.kind())),
        };

        let name = entry.file_name();
        if config.qualifies(&name.to_string_lossy()) {
            log::trace!(target: targets::SCAN, "Qualifying entry: {name:?}");
            entries.push(config.directory.join(name));
        }
    }

    if config.entry_order == EntryOrder::Sorted {
        entries.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    log::info!(target: targets::SCAN, "Found {} qualifying entries in {:?}", entries.len(), config.directory);
    Ok(entries)
}

#[cfg(test)]
mod scan_tests {
    use super::*;

    #[test]
    fn missing_directory() {
        let config = Config {
            directory: PathBuf::from("no/such/directory"),
            ..Default::default()
        };

        assert_eq!(
            qualifying_entries(&config),
            Err(err::DirectoryError::Missing)
        );
    }

    #[test]
    fn sorted_qualifying_entries() {
        let directory = tempfile::tempdir().unwrap();
        for name in ["b.ccg", "a.ccg", "a.ccg_a", "c.cnf", "ccg"] {
            std::fs::write(directory.path().join(name), "").unwrap();
        }

        let config = Config {
            directory: directory.path().to_path_buf(),
            entry_order: EntryOrder::Sorted,
            ..Default::default()
        };

        assert_eq!(
            qualifying_entries(&config),
            Ok(vec![
                directory.path().join("a.ccg"),
                directory.path().join("b.ccg")
            ])
        );
    }
}
