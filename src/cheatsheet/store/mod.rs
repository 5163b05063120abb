//! # Storage Layer
//!
//! Lists are persisted behind the [`SheetStore`] trait so the command layer
//! never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per list in the
//!   user data directory (`<data_dir>/<name>.json`).
//! - [`memory::InMemoryStore`]: keeps the same JSON documents in a map, for
//!   tests that should not touch the disk.
//!
//! Both go through [`document`] so they agree on the file format and on how
//! bad data is reported: a load replays every entry through
//! [`CheatSheet::add_loaded`] and turns any entry-level failure into
//! [`CheatError::Corrupt`](crate::error::CheatError::Corrupt).
//!
//! ## Locations
//!
//! Every operation takes a [`SheetLocation`]: the configured default list, a
//! list named by its short name, or an explicit file path.

use crate::error::{CheatError, Result};
use crate::sheet::CheatSheet;
use std::path::PathBuf;

pub mod document;
pub mod fs;
pub mod memory;

pub const LIST_FILE_EXTENSION: &str = "json";

/// Which list an operation targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetLocation {
    /// The configured default list.
    #[default]
    Default,
    /// A list in the data directory, by short name (no extension).
    Named(String),
    /// A list file anywhere on disk.
    Path(PathBuf),
}

impl SheetLocation {
    pub fn from_args(name: Option<String>, path: Option<PathBuf>) -> Self {
        match (name, path) {
            (Some(name), _) => SheetLocation::Named(name),
            (None, Some(path)) => SheetLocation::Path(path),
            (None, None) => SheetLocation::Default,
        }
    }
}

/// Abstract interface for list persistence.
pub trait SheetStore {
    /// The file a location refers to.
    fn resolve(&self, location: &SheetLocation) -> Result<PathBuf>;

    /// Loads a list. A list that does not exist yet loads as an empty sheet.
    fn load(&self, location: &SheetLocation) -> Result<CheatSheet>;

    /// Writes a list and returns where it went.
    fn save(&mut self, sheet: &CheatSheet, location: &SheetLocation) -> Result<PathBuf>;

    /// Short names of every list in the data directory, sorted.
    fn list_names(&self) -> Result<Vec<String>>;
}

/// A fresh sheet stamped with this build's format version.
pub fn empty_sheet() -> CheatSheet {
    CheatSheet::new().with_version(env!("CARGO_PKG_VERSION"))
}

/// Checks that a short list name maps to a single file in the data directory.
pub fn validate_list_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CheatError::Store("list name cannot be empty".into()));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CheatError::Store(format!(
            "invalid list name '{}' (use --listpath for paths)",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_prefers_name_then_path() {
        assert_eq!(
            SheetLocation::from_args(Some("work".into()), None),
            SheetLocation::Named("work".into())
        );
        assert_eq!(
            SheetLocation::from_args(None, Some(PathBuf::from("/tmp/x.json"))),
            SheetLocation::Path(PathBuf::from("/tmp/x.json"))
        );
        assert_eq!(SheetLocation::from_args(None, None), SheetLocation::Default);
    }

    #[test]
    fn list_names_must_be_plain() {
        assert!(validate_list_name("work").is_ok());
        assert!(validate_list_name("my-list_2").is_ok());
        assert!(validate_list_name("").is_err());
        assert!(validate_list_name("a/b").is_err());
        assert!(validate_list_name("..").is_err());
    }

    #[test]
    fn empty_sheet_carries_crate_version() {
        let sheet = empty_sheet();
        assert_eq!(sheet.version(), Some(env!("CARGO_PKG_VERSION")));
        assert!(sheet.is_empty());
        assert!(!sheet.is_modified());
    }
}
