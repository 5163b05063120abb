//! Entry matching.
//!
//! [`TagMatcher`] filters entries by tag membership. An entry's primary counts
//! as one of its tags. With [`Combinator::All`] every requested tag must be
//! present, with [`Combinator::Any`] one is enough, and an empty request
//! matches everything.

use crate::error::{CheatError, Result};
use crate::model::{Entry, Tags};
use std::fmt;
use std::str::FromStr;

/// A boolean condition over an entry.
pub trait EntryMatcher {
    fn matches(&self, entry: &Entry) -> bool;
}

impl<F> EntryMatcher for F
where
    F: Fn(&Entry) -> bool,
{
    fn matches(&self, entry: &Entry) -> bool {
        self(entry)
    }
}

/// How the requested tags are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Combinator {
    /// Every requested tag must be present (AND).
    All,
    /// At least one requested tag must be present (OR).
    #[default]
    Any,
}

impl FromStr for Combinator {
    type Err = CheatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "and" => Ok(Combinator::All),
            "any" | "or" => Ok(Combinator::Any),
            _ => Err(CheatError::IllegalCombinator(s.to_string())),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::All => write!(f, "all"),
            Combinator::Any => write!(f, "any"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMatcher {
    tags: Tags,
    combinator: Combinator,
}

impl TagMatcher {
    pub fn new(tags: Tags, combinator: Combinator) -> Self {
        Self { tags, combinator }
    }

    /// A matcher that accepts every entry.
    pub fn everything() -> Self {
        Self::default()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.tags.is_empty()
    }
}

impl EntryMatcher for TagMatcher {
    fn matches(&self, entry: &Entry) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        match self.combinator {
            Combinator::All => self.tags.iter().all(|tag| entry.has_tag(tag)),
            Combinator::Any => self.tags.iter().any(|tag| entry.has_tag(tag)),
        }
    }
}
