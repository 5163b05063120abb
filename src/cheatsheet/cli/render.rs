//! # Rendering
//!
//! Turns entries into terminal text. There is one renderer, parameterized by
//! [`DisplayStyle`]:
//!
//! ```text
//! Full                         Compact                      Simple
//! ID  Primary    Clues         ID  Primary         Tags     ID  Clue                 Answer
//! 1   bash       list files    1   bash            #cli     1   list files           ls -la
//!                ls -la            list files      ls -la
//!                #cli
//! ```
//!
//! Continuation lines get a hanging indent and everything is wrapped to the
//! terminal width. Widths are measured in terminal columns, not chars.
//!
//! The `render_*` functions return plain strings so they can be tested; the
//! `print_*` functions add colour and write to stdout.

use cheatsheet::api::{CmdMessage, MessageLevel, SheetSummary};
use cheatsheet::config::DisplayStyle;
use cheatsheet::model::{Entry, Tags};
use colored::Colorize;
use console::Term;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Used when stdout is not a terminal.
const FALLBACK_WIDTH: usize = 100;
const FULL_INDENT: usize = 15;
const COMPACT_INDENT: usize = 20;
const SIMPLE_INDENT: usize = 25;
const MIN_WRAP_WIDTH: usize = 20;
const TAB: &str = "    ";

fn terminal_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| cols as usize)
        .unwrap_or(FALLBACK_WIDTH)
}

fn render_heading(style: DisplayStyle) -> String {
    match style {
        DisplayStyle::Full => format!("{} {} {}", pad("ID", 3), pad("Primary", 10), "Clues"),
        DisplayStyle::Compact => format!("{} {} {}", pad("ID", 3), pad("Primary", 15), "Tags"),
        DisplayStyle::Simple => format!("{} {} {}", pad("ID", 3), pad("Clue", 20), "Answer"),
    }
}

fn render_entry(entry: &Entry, style: DisplayStyle, width: usize) -> String {
    let id = entry
        .id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    match style {
        DisplayStyle::Full => {
            let raw = format!(
                "{} {} {}\n{}\n{}",
                pad(&id, 3),
                pad(entry.primary(), 10),
                entry.clue(),
                entry.answer(),
                render_tags(entry.tags())
            );
            indent_paragraph(&raw, FULL_INDENT, width)
        }
        DisplayStyle::Compact => {
            let first = format!(
                "{} {} {}",
                pad(&id, 3),
                pad(entry.primary(), 15),
                render_tags(entry.tags())
            );
            let second = format!(
                "    {} {}",
                pad(entry.clue(), 15),
                indent_paragraph(entry.answer(), COMPACT_INDENT, width)
            );
            format!("{}\n{}", first.trim_end(), second)
        }
        DisplayStyle::Simple => format!(
            "{} {} {}",
            pad(&id, 3),
            pad(entry.clue(), 20),
            indent_paragraph(entry.answer(), SIMPLE_INDENT, width)
        ),
    }
}

fn render_entries(entries: &[Entry], style: DisplayStyle, width: usize) -> String {
    let mut out = render_heading(style);
    for entry in entries {
        out.push('\n');
        out.push_str(&render_entry(entry, style, width));
    }
    out
}

fn render_tags(tags: &Tags) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_summary(summary: &SheetSummary) -> String {
    let mut lines = vec![
        "Cheat sheet information:".to_string(),
        format!("  {} {}", pad("Number of entries", 25), summary.entry_count),
        format!(
            "  {} {}",
            pad("Number primary tags", 25),
            summary.primary_counts.len()
        ),
        format!("  {} {}", pad("Number of tags", 25), summary.tags.len()),
        format!(
            "  {} {}",
            pad("Tag list", 25),
            summary.tags.iter().cloned().collect::<Vec<_>>().join(", ")
        ),
        format!("{} {}", pad("Primary key", 27), "Count"),
    ];
    for (primary, count) in &summary.primary_counts {
        lines.push(format!("  {} {}", pad(primary, 25), count));
    }
    lines.join("\n")
}

/// Wraps every line of `paragraph` to `width` and indents all output lines
/// but the first by `indent` columns.
fn indent_paragraph(paragraph: &str, indent: usize, width: usize) -> String {
    let wrap_width = width.saturating_sub(indent).max(MIN_WRAP_WIDTH);
    let lines: Vec<String> = paragraph
        .split('\n')
        .flat_map(|line| wrap_line(line, wrap_width))
        .collect();
    lines.join(&format!("\n{}", " ".repeat(indent)))
}

/// Greedy word wrap. Runs of whitespace inside a line are kept so column
/// alignment survives; whitespace at a break is dropped. Words wider than
/// `width` are split. A blank line wraps to nothing.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let line = line.replace('\t', TAB);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for chunk in chunks(&line) {
        let is_space = chunk.starts_with(char::is_whitespace);
        if is_space && current.is_empty() && !lines.is_empty() {
            continue;
        }

        let chunk_width = chunk.width();
        if current_width + chunk_width <= width {
            current.push_str(chunk);
            current_width += chunk_width;
            continue;
        }

        if is_space {
            push_line(&mut lines, &mut current);
            current_width = 0;
            continue;
        }

        if !current.trim().is_empty() {
            push_line(&mut lines, &mut current);
            current_width = 0;
        }

        for c in chunk.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width > width && current_width > 0 {
                push_line(&mut lines, &mut current);
                current_width = 0;
            }
            current.push(c);
            current_width += char_width;
        }
    }
    push_line(&mut lines, &mut current);
    lines
}

/// Splits a line into alternating whitespace and non-whitespace runs.
fn chunks(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_space = None;

    for (i, c) in line.char_indices() {
        let space = c.is_whitespace();
        if prev_space.is_some_and(|prev| prev != space) {
            out.push(&line[start..i]);
            start = i;
        }
        prev_space = Some(space);
    }
    if start < line.len() {
        out.push(&line[start..]);
    }
    out
}

fn push_line(lines: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim_end();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    current.clear();
}

/// Left-aligns `s` in a field `width` columns wide.
fn pad(s: &str, width: usize) -> String {
    let used = s.width();
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

pub(super) fn print_entry(entry: &Entry, style: DisplayStyle) {
    println!("{}", render_entry(entry, style, terminal_width()));
}

pub(super) fn print_entries(entries: &[Entry], style: DisplayStyle) {
    if entries.is_empty() {
        println!("No entries found");
        return;
    }
    println!("{}", render_entries(entries, style, terminal_width()));
}

pub(super) fn print_summary(summary: &SheetSummary) {
    println!("{}", render_summary(summary));
}

pub(super) fn print_list_names(names: &[String]) {
    if !names.is_empty() {
        println!("Cheatsheets: {}", names.join(", "));
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
