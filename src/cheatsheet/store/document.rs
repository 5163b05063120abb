//! On-disk shape of a list file and its conversion to and from [`CheatSheet`].
//!
//! ```text
//! {
//!   "cheatsheet": {
//!     "version": "0.2.0",
//!     "modified_date": 1700000000.5,
//!     "entries": [
//!       { "oid": 1, "primary": "bash", "tags": ["cli"], "clue": "...", "answer": "..." }
//!     ]
//!   }
//! }
//! ```
//!
//! `modified_date` is seconds since the epoch and may be missing or null in
//! older files. Tags are written sorted.

use crate::error::{CheatError, Result};
use crate::model::Entry;
use crate::sheet::CheatSheet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetFile {
    pub cheatsheet: SheetDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDocument {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub modified_date: Option<f64>,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    pub oid: i64,
    pub primary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub clue: String,
    pub answer: String,
}

impl EntryRecord {
    fn from_entry(entry: &Entry) -> Result<Self> {
        let oid = entry
            .id()
            .ok_or_else(|| CheatError::IllegalState("cannot persist an entry without id".into()))?;
        Ok(Self {
            oid: i64::from(oid),
            primary: entry.primary().to_string(),
            tags: entry.tags().iter().cloned().collect(),
            clue: entry.clue().to_string(),
            answer: entry.answer().to_string(),
        })
    }

    fn into_entry(self) -> Result<Entry> {
        let id = u32::try_from(self.oid)
            .map_err(|_| CheatError::InvalidEntry(format!("bad id: {}", self.oid)))?;
        Entry::with_id(
            id,
            self.primary,
            self.clue,
            self.answer,
            self.tags.into_iter().collect(),
        )
    }
}

/// Serializes a sheet. Every entry is revalidated first.
pub fn encode(sheet: &CheatSheet) -> Result<SheetFile> {
    sheet.validate_all()?;
    let entries = sheet
        .entries()
        .iter()
        .map(EntryRecord::from_entry)
        .collect::<Result<Vec<_>>>()?;

    Ok(SheetFile {
        cheatsheet: SheetDocument {
            version: sheet.version().map(str::to_string),
            modified_date: sheet.modified_at().as_ref().map(timestamp_to_secs),
            entries,
        },
    })
}

/// Rebuilds a sheet by replaying every record through
/// [`CheatSheet::add_loaded`], in file order.
///
/// Entry-level failures become [`CheatError::Corrupt`] naming `path`.
pub fn decode(file: SheetFile, path: &Path) -> Result<CheatSheet> {
    let doc = file.cheatsheet;
    let modified_at = doc.modified_date.and_then(secs_to_timestamp);

    let mut sheet = CheatSheet::new().with_modified_at(modified_at);
    if let Some(version) = doc.version {
        sheet = sheet.with_version(version);
    }

    for (position, record) in doc.entries.into_iter().enumerate() {
        record
            .into_entry()
            .and_then(|entry| sheet.add_loaded(entry))
            .map_err(|e| corrupt(path, position, e))?;
    }

    Ok(sheet)
}

pub fn to_json(sheet: &CheatSheet) -> Result<String> {
    let file = encode(sheet)?;
    serde_json::to_string_pretty(&file).map_err(CheatError::Serialization)
}

pub fn from_json(content: &str, path: &Path) -> Result<CheatSheet> {
    let file: SheetFile = serde_json::from_str(content).map_err(|e| CheatError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    decode(file, path)
}

fn corrupt(path: &Path, position: usize, err: CheatError) -> CheatError {
    if err.is_data_error() {
        CheatError::Corrupt {
            path: path.to_path_buf(),
            reason: format!("entry #{}: {}", position + 1, err),
        }
    } else {
        err
    }
}

pub(crate) fn timestamp_to_secs(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_nanos()) / 1e9
}

pub(crate) fn secs_to_timestamp(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}
