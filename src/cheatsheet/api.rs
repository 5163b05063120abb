//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! cheatsheet operation, whatever the UI.
//!
//! The facade dispatches to `commands::*::run` and returns structured
//! [`CmdResult`]s. It holds no business logic and does no printing.
//!
//! `CheatApi<S: SheetStore>` is generic over storage:
//! - Production: `CheatApi<FileStore>`
//! - Testing: `CheatApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::matcher::TagMatcher;
use crate::model::{Entry, EntryUpdate, Tags};
use crate::store::{SheetLocation, SheetStore};

/// The main API facade for cheatsheet operations.
pub struct CheatApi<S: SheetStore> {
    store: S,
}

impl<S: SheetStore> CheatApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Adds an entry; `approve` decides whether tags new to the list are ok.
    pub fn add_entry<F>(&mut self, location: &SheetLocation, entry: Entry, approve: F) -> Result<CmdResult>
    where
        F: FnOnce(&Tags) -> Result<bool>,
    {
        commands::add::run(&mut self.store, location, entry, approve)
    }

    pub fn get_entry(&self, location: &SheetLocation, id: u32) -> Result<CmdResult> {
        commands::get::run(&self.store, location, id)
    }

    pub fn show_entries(&self, location: &SheetLocation, matcher: &TagMatcher) -> Result<CmdResult> {
        commands::show::run(&self.store, location, matcher)
    }

    pub fn info(&self, location: &SheetLocation) -> Result<CmdResult> {
        commands::info::run(&self.store, location)
    }

    pub fn lists(&self) -> Result<CmdResult> {
        commands::lists::run(&self.store)
    }

    pub fn remove_entry(&mut self, location: &SheetLocation, id: u32) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, location, id)
    }

    pub fn update_entry(
        &mut self,
        location: &SheetLocation,
        id: u32,
        update: EntryUpdate,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, location, id, update)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, SheetSummary};
