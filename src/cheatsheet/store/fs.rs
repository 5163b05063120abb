use super::{document, empty_sheet, validate_list_name, SheetLocation, SheetStore, LIST_FILE_EXTENSION};
use crate::error::{CheatError, Result};
use crate::sheet::CheatSheet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct FileStore {
    data_dir: PathBuf,
    default_list: String,
}

impl FileStore {
    pub fn new(data_dir: PathBuf, default_list: impl Into<String>) -> Self {
        Self {
            data_dir,
            default_list: default_list.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn default_list(&self) -> &str {
        &self.default_list
    }

    fn list_file(&self, name: &str) -> Result<PathBuf> {
        validate_list_name(name)?;
        Ok(self
            .data_dir
            .join(format!("{}.{}", name, LIST_FILE_EXTENSION)))
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CheatError::Io)?;
            }
        }
        Ok(())
    }

    /// Writes through a temp file next to the target so a crash never leaves a
    /// half-written list behind.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, content).map_err(CheatError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CheatError::Io(e));
        }
        Ok(())
    }
}

impl SheetStore for FileStore {
    fn resolve(&self, location: &SheetLocation) -> Result<PathBuf> {
        match location {
            SheetLocation::Default => self.list_file(&self.default_list),
            SheetLocation::Named(name) => self.list_file(name),
            SheetLocation::Path(path) => Ok(path.clone()),
        }
    }

    fn load(&self, location: &SheetLocation) -> Result<CheatSheet> {
        let path = self.resolve(location)?;
        if !path.is_file() {
            warn!(path = %path.display(), "no cheat sheet file found, starting empty");
            return Ok(empty_sheet());
        }

        let content = fs::read_to_string(&path).map_err(CheatError::Io)?;
        let sheet = document::from_json(&content, &path)?;
        debug!(path = %path.display(), entries = sheet.len(), "loaded cheat sheet");
        Ok(sheet)
    }

    fn save(&mut self, sheet: &CheatSheet, location: &SheetLocation) -> Result<PathBuf> {
        let path = self.resolve(location)?;
        let content = document::to_json(sheet)?;

        self.ensure_parent(&path)?;
        self.write_atomic(&path, &content)?;
        debug!(path = %path.display(), entries = sheet.len(), "saved cheat sheet");
        Ok(path)
    }

    fn list_names(&self) -> Result<Vec<String>> {
        if !self.data_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for dir_entry in fs::read_dir(&self.data_dir).map_err(CheatError::Io)? {
            let path = dir_entry.map_err(CheatError::Io)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(LIST_FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
