//! # Cheatsheet Architecture
//!
//! Cheatsheet keeps short tagged notes ("entries": a clue, its answer, a
//! primary category and free-form tags) in named lists stored as JSON files.
//! Like most of the code here, it is a library first; the `cheatsheet`
//! binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders entries               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load a list, act on it, save it if it changed            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, matcher.rs, sheet.rs)                      │
//! │  - Entries, tag matching, the in-memory list and its ids    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SheetStore trait                                         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core never does I/O and never logs; it returns typed
//! [`error::CheatError`]s and leaves reporting to its callers.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`model`]: [`model::Entry`] and partial updates
//! - [`matcher`]: AND/OR tag matching
//! - [`sheet`]: [`sheet::CheatSheet`], the list and its derived indexes
//! - [`store`]: Persistence abstraction and implementations
//! - [`config`]: User configuration
//! - [`init`]: Directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod matcher;
pub mod model;
pub mod sheet;
pub mod store;
