//! # The Cheat Sheet
//!
//! [`CheatSheet`] is the in-memory list of entries and the only place entries
//! get ids. Besides the ordered entries it keeps a few derived indexes:
//!
//! - the **tag universe**: every tag and every primary used by any entry,
//! - **by primary**: primary name to the ids of its entries, in list order
//!   (the source of [`CheatSheet::primary_counts`]),
//! - the set of **used ids**, and the highest id handed out so far.
//!
//! ## Two ways in
//!
//! - [`CheatSheet::add_new`] is for entries the user just created. The entry
//!   must not have an id; the sheet assigns the next one and marks itself
//!   modified.
//! - [`CheatSheet::add_loaded`] replays entries read from storage. They must
//!   already carry an id, ids must be unique, and the sheet is not marked
//!   modified.
//!
//! ## Index maintenance
//!
//! Appends only ever grow the indexes, so both add paths patch them in place.
//! `update` and `remove` can shrink or move things (an update may change an
//! entry's primary), so they rebuild every index from the entry list.
//!
//! Ids come from the highest id seen, never from the current entries, so an id
//! freed by `remove` is not handed out again by this sheet.
//!
//! The sheet does no I/O. Loading and saving live in [`crate::store`].

use crate::error::{CheatError, Result};
use crate::matcher::EntryMatcher;
use crate::model::{Entry, EntryUpdate, Tags};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct CheatSheet {
    version: Option<String>,
    modified: bool,
    modified_at: Option<DateTime<Utc>>,
    entries: Vec<Entry>,
    tag_universe: BTreeSet<String>,
    by_primary: BTreeMap<String, Vec<u32>>,
    used_ids: BTreeSet<u32>,
    next_id: u32,
}

impl CheatSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the last-modified time read from storage. Does not mark the sheet
    /// as modified.
    pub fn with_modified_at(mut self, modified_at: Option<DateTime<Utc>>) -> Self {
        self.modified_at = modified_at;
        self
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// True once any change to persisted content happened in this session.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tag_universe(&self) -> &BTreeSet<String> {
        &self.tag_universe
    }

    /// Primary name to the ids of the entries filed under it, in list order.
    pub fn by_primary(&self) -> &BTreeMap<String, Vec<u32>> {
        &self.by_primary
    }

    pub fn used_ids(&self) -> &BTreeSet<u32> {
        &self.used_ids
    }

    /// The highest id assigned so far (0 for a sheet that never had entries).
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Adds an entry created by the user, assigning it a fresh id.
    pub fn add_new(&mut self, mut entry: Entry) -> Result<u32> {
        if let Some(id) = entry.id() {
            return Err(CheatError::IllegalState(format!(
                "new entry already has id {}",
                id
            )));
        }
        let id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| CheatError::IllegalState("entry ids exhausted".into()))?;
        entry.assign_id(id)?;
        self.next_id = id;
        self.index_entry(&entry, id);
        self.entries.push(entry);
        self.mark_modified();
        Ok(id)
    }

    /// Adds an entry read back from storage.
    pub fn add_loaded(&mut self, entry: Entry) -> Result<()> {
        let id = entry
            .id()
            .ok_or_else(|| CheatError::IllegalState("loaded entry has no id".into()))?;
        if self.used_ids.contains(&id) {
            return Err(CheatError::DuplicateId(id));
        }
        self.next_id = self.next_id.max(id);
        self.index_entry(&entry, id);
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, id: u32) -> Result<&Entry> {
        self.position(id).map(|index| &self.entries[index])
    }

    /// Entries accepted by `matcher`, in list order.
    pub fn query<M: EntryMatcher + ?Sized>(&self, matcher: &M) -> Vec<&Entry> {
        self.entries.iter().filter(|e| matcher.matches(e)).collect()
    }

    /// Overwrites the fields `update` provides and returns the resulting entry.
    ///
    /// The edited entry is validated before it replaces the stored one, so a
    /// failed update leaves the sheet untouched. The sheet is only marked
    /// modified if the entry actually changed.
    pub fn update(&mut self, id: u32, update: EntryUpdate) -> Result<&Entry> {
        let index = self.position(id)?;
        let snapshot = &self.entries[index];
        let mut edited = snapshot.clone();
        edited.apply(update);
        edited.revalidate()?;

        if &edited != snapshot {
            self.entries[index] = edited;
            self.mark_modified();
            self.rebuild_indexes();
        }
        Ok(&self.entries[index])
    }

    pub fn remove(&mut self, id: u32) -> Result<Entry> {
        let index = self.position(id)?;
        let removed = self.entries.remove(index);
        self.mark_modified();
        self.rebuild_indexes();
        Ok(removed)
    }

    /// The members of `{primary} ∪ tags` this sheet has never seen.
    pub fn new_tags(&self, primary: &str, tags: &Tags) -> Tags {
        std::iter::once(primary)
            .chain(tags.iter().map(String::as_str))
            .filter(|tag| !self.tag_universe.contains(*tag))
            .map(str::to_string)
            .collect()
    }

    /// Primaries with their entry counts, most used first.
    pub fn primary_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<_> = self
            .by_primary
            .iter()
            .map(|(primary, ids)| (primary.clone(), ids.len()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// Revalidates every entry.
    pub fn validate_all(&self) -> Result<()> {
        self.entries.iter().try_for_each(Entry::revalidate)
    }

    fn position(&self, id: u32) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id() == Some(id))
            .ok_or(CheatError::NotFound(id))
    }

    fn mark_modified(&mut self) {
        self.modified = true;
        self.modified_at = Some(Utc::now());
    }

    fn index_entry(&mut self, entry: &Entry, id: u32) {
        self.used_ids.insert(id);
        self.by_primary
            .entry(entry.primary().to_string())
            .or_default()
            .push(id);
        self.tag_universe.insert(entry.primary().to_string());
        self.tag_universe.extend(entry.tags().iter().cloned());
    }

    fn rebuild_indexes(&mut self) {
        self.tag_universe.clear();
        self.by_primary.clear();
        self.used_ids.clear();

        let entries = std::mem::take(&mut self.entries);
        for entry in &entries {
            if let Some(id) = entry.id() {
                self.index_entry(entry, id);
            }
        }
        self.entries = entries;
    }
}
