//! # CLI Layer
//!
//! One client of the library, not the application itself. This is the only
//! place that knows about stdout, stderr, prompts and exit codes.
//!
//! ## Confirmation
//!
//! Commands that change a list may ask first. Each has its own default:
//!
//! - `add` asks only when the entry would introduce tags the list has never
//!   seen (default: ask)
//! - `remove` shows the entry and asks (default: ask, answer defaults to no)
//! - `update` does not ask unless `-i` is given
//!
//! `-f/--force` never asks, `-i/--prompt` always asks. Answers can be piped
//! in (`echo y | cheatsheet remove 3`).
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `prompt`: Yes/no questions, from a terminal or from piped input
//! - `render`: Entry layout, wrapping and coloured messages
//! - `setup`: Argument parsing via clap

mod commands;
mod prompt;
mod render;
pub mod setup;

pub use commands::run;
