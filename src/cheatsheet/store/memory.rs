use super::{document, empty_sheet, validate_list_name, SheetLocation, SheetStore, LIST_FILE_EXTENSION};
use crate::error::Result;
use crate::sheet::CheatSheet;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const VIRTUAL_ROOT: &str = "memory";

/// In-memory storage for testing.
/// Keeps serialized list documents keyed by their virtual path; nothing is
/// written to disk.
pub struct InMemoryStore {
    files: BTreeMap<PathBuf, String>,
    default_list: String,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            default_list: "cheatsheet".to_string(),
        }
    }

    /// The raw JSON stored for a location, if any.
    pub fn raw(&self, location: &SheetLocation) -> Option<&str> {
        self.resolve(location)
            .ok()
            .and_then(|path| self.files.get(&path))
            .map(String::as_str)
    }

    /// Stores raw JSON, bypassing validation, to simulate hand-edited files.
    pub fn put_raw(&mut self, location: &SheetLocation, content: impl Into<String>) -> Result<()> {
        let path = self.resolve(location)?;
        self.files.insert(path, content.into());
        Ok(())
    }
}

impl SheetStore for InMemoryStore {
    fn resolve(&self, location: &SheetLocation) -> Result<PathBuf> {
        let name = match location {
            SheetLocation::Default => &self.default_list,
            SheetLocation::Named(name) => name,
            SheetLocation::Path(path) => return Ok(path.clone()),
        };
        validate_list_name(name)?;
        Ok(Path::new(VIRTUAL_ROOT).join(format!("{}.{}", name, LIST_FILE_EXTENSION)))
    }

    fn load(&self, location: &SheetLocation) -> Result<CheatSheet> {
        let path = self.resolve(location)?;
        match self.files.get(&path) {
            Some(content) => document::from_json(content, &path),
            None => Ok(empty_sheet()),
        }
    }

    fn save(&mut self, sheet: &CheatSheet, location: &SheetLocation) -> Result<PathBuf> {
        let path = self.resolve(location)?;
        let content = document::to_json(sheet)?;
        self.files.insert(path.clone(), content);
        Ok(path)
    }

    fn list_names(&self) -> Result<Vec<String>> {
        Ok(self
            .files
            .keys()
            .filter(|path| path.parent() == Some(Path::new(VIRTUAL_ROOT)))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()))
            .map(str::to_string)
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{tag_set, Entry};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds one entry to the default list. `tags` is `primary,tag,tag`.
        pub fn with_entry(mut self, tags: &str, clue: &str, answer: &str) -> Self {
            let mut parts = tags.split(',');
            let primary = parts.next().unwrap_or_default();
            let entry = Entry::new(primary, clue, answer, tag_set(parts)).unwrap();

            let mut sheet = self.store.load(&SheetLocation::Default).unwrap();
            sheet.add_new(entry).unwrap();
            self.store.save(&sheet, &SheetLocation::Default).unwrap();
            self
        }

        pub fn load(&self) -> CheatSheet {
            self.store.load(&SheetLocation::Default).unwrap()
        }
    }
}
