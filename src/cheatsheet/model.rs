//! # Entries
//!
//! An [`Entry`] is a single cheat sheet record: a short `clue`, the `answer`
//! that explains it, one mandatory `primary` category and any number of
//! secondary `tags`.
//!
//! Entries are always valid once built. Both constructors validate eagerly,
//! and [`Entry::revalidate`] repeats the same checks later (the file store
//! calls it before writing anything to disk).
//!
//! The `id` is owned by the list: new entries are built without one and the
//! [`CheatSheet`](crate::sheet::CheatSheet) assigns it on insertion. Entries
//! read back from disk carry their persisted id. Once set, an id never changes.

use crate::error::{CheatError, Result};
use std::collections::BTreeSet;

/// A set of tag names. Sorted so listings and files stay stable.
pub type Tags = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: Option<u32>,
    primary: String,
    clue: String,
    answer: String,
    tags: Tags,
}

impl Entry {
    /// Builds a new entry that has not been added to a list yet.
    pub fn new(
        primary: impl Into<String>,
        clue: impl Into<String>,
        answer: impl Into<String>,
        tags: Tags,
    ) -> Result<Self> {
        let entry = Self {
            id: None,
            primary: primary.into(),
            clue: clue.into(),
            answer: answer.into(),
            tags,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Builds an entry that already has an id, e.g. one read from a list file.
    pub fn with_id(
        id: u32,
        primary: impl Into<String>,
        clue: impl Into<String>,
        answer: impl Into<String>,
        tags: Tags,
    ) -> Result<Self> {
        let entry = Self {
            id: Some(id),
            primary: primary.into(),
            clue: clue.into(),
            answer: answer.into(),
            tags,
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// True if `tag` is this entry's primary or one of its secondary tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.primary == tag || self.tags.contains(tag)
    }

    /// Checks the entry invariants.
    pub fn validate(&self) -> Result<()> {
        if self.primary.is_empty() {
            return Err(CheatError::InvalidEntry("primary cannot be empty".into()));
        }
        if self.clue.is_empty() {
            return Err(CheatError::InvalidEntry("clue cannot be empty".into()));
        }
        if self.answer.is_empty() {
            return Err(CheatError::InvalidEntry("answer cannot be empty".into()));
        }
        if self.tags.iter().any(|t| t.is_empty()) {
            return Err(CheatError::InvalidEntry("tags cannot be empty strings".into()));
        }
        if self.id == Some(0) {
            return Err(CheatError::InvalidEntry(
                "id must be a positive integer".into(),
            ));
        }
        Ok(())
    }

    /// Re-runs [`Entry::validate`] on an entry that may have been edited since
    /// it was built.
    pub fn revalidate(&self) -> Result<()> {
        self.validate()
    }

    pub(crate) fn assign_id(&mut self, id: u32) -> Result<()> {
        if let Some(existing) = self.id {
            return Err(CheatError::IllegalState(format!(
                "cannot set id {} on an entry that already has id {}",
                id, existing
            )));
        }
        self.id = Some(id);
        Ok(())
    }

    /// Overwrites the fields that `update` provides.
    pub(crate) fn apply(&mut self, update: EntryUpdate) {
        if let Some(primary) = update.primary {
            self.primary = primary;
        }
        if let Some(clue) = update.clue {
            self.clue = clue;
        }
        if let Some(answer) = update.answer {
            self.answer = answer;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
    }
}

/// A partial edit of an [`Entry`].
///
/// `None` leaves a field untouched; `Some` overwrites it, so `Some(Tags::new())`
/// is how the secondary tags get cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub primary: Option<String>,
    pub clue: Option<String>,
    pub answer: Option<String>,
    pub tags: Option<Tags>,
}

impl EntryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, primary: impl Into<String>) -> Self {
        self.primary = Some(primary.into());
        self
    }

    pub fn clue(mut self, clue: impl Into<String>) -> Self {
        self.clue = Some(clue.into());
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.clue.is_none() && self.answer.is_none() && self.tags.is_none()
    }
}

/// Builds a [`Tags`] set from anything yielding strings.
pub fn tag_set<I, T>(tags: I) -> Tags
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    tags.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entry {
        Entry::new("bash", "list files", "ls -la", tag_set(["cli", "files"])).unwrap()
    }

    #[test]
    fn new_entry_has_no_id_and_is_valid() {
        let entry = sample();
        assert_eq!(entry.id(), None);
        assert!(entry.validate().is_ok());
        assert!(entry.revalidate().is_ok());
    }

    #[test]
    fn loaded_entry_keeps_its_id() {
        let entry = Entry::with_id(7, "git", "undo commit", "git reset HEAD~", Tags::new()).unwrap();
        assert_eq!(entry.id(), Some(7));
        assert!(entry.tags().is_empty());
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(matches!(
            Entry::new("", "c", "a", Tags::new()),
            Err(CheatError::InvalidEntry(_))
        ));
        assert!(matches!(
            Entry::new("p", "", "a", Tags::new()),
            Err(CheatError::InvalidEntry(_))
        ));
        assert!(matches!(
            Entry::new("p", "c", "", Tags::new()),
            Err(CheatError::InvalidEntry(_))
        ));
    }

    #[test]
    fn rejects_empty_tag() {
        let result = Entry::new("p", "c", "a", tag_set(["ok", ""]));
        assert!(matches!(result, Err(CheatError::InvalidEntry(_))));
    }

    #[test]
    fn rejects_zero_id() {
        let result = Entry::with_id(0, "p", "c", "a", Tags::new());
        assert!(matches!(result, Err(CheatError::InvalidEntry(_))));
    }

    #[test]
    fn duplicate_tags_collapse() {
        let entry = Entry::new("p", "c", "a", tag_set(["x", "x", "y"])).unwrap();
        assert_eq!(entry.tags().len(), 2);
    }

    #[test]
    fn id_cannot_be_reassigned() {
        let mut entry = sample();
        entry.assign_id(3).unwrap();
        let err = entry.assign_id(4).unwrap_err();
        assert!(matches!(err, CheatError::IllegalState(_)));
        assert_eq!(entry.id(), Some(3));
    }

    #[test]
    fn has_tag_includes_primary() {
        let entry = sample();
        assert!(entry.has_tag("bash"));
        assert!(entry.has_tag("cli"));
        assert!(!entry.has_tag("python"));
    }

    #[test]
    fn apply_only_touches_provided_fields() {
        let mut entry = sample();
        entry.apply(EntryUpdate::new().clue("show hidden files"));
        assert_eq!(entry.clue(), "show hidden files");
        assert_eq!(entry.answer(), "ls -la");
        assert_eq!(entry.primary(), "bash");
        assert_eq!(entry.tags(), &tag_set(["cli", "files"]));
    }

    #[test]
    fn apply_can_clear_tags() {
        let mut entry = sample();
        entry.apply(EntryUpdate::new().tags(Tags::new()));
        assert!(entry.tags().is_empty());
    }

    #[test]
    fn equality_includes_id() {
        let a = Entry::with_id(1, "p", "c", "a", Tags::new()).unwrap();
        let b = Entry::with_id(2, "p", "c", "a", Tags::new()).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(EntryUpdate::new().is_empty());
        assert!(!EntryUpdate::new().answer("x").is_empty());
    }
}
