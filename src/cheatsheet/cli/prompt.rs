//! Yes/no questions. A terminal gets a dialoguer prompt; piped input is read
//! line by line, so `echo y | cheatsheet remove 1` answers the question.

use cheatsheet::error::{CheatError, Result};
use dialoguer::Confirm;
use std::io::{self, BufRead, IsTerminal, Write};

pub(super) fn confirm(question: &str, default: bool) -> Result<bool> {
    if io::stdin().is_terminal() && console::user_attended() {
        return Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| CheatError::Api(format!("could not read confirmation: {}", e)));
    }

    let stdin = io::stdin();
    ask(question, default, &mut stdin.lock(), &mut io::stdout())
}

/// Asks until a valid answer arrives. An empty line or end of input picks
/// `default`.
fn ask<R: BufRead, W: Write>(
    question: &str,
    default: bool,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        write!(output, "{} [{}]: ", question, hint)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(default);
        }
        if line.trim().is_empty() {
            return Ok(default);
        }
        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(output, "Invalid response")?,
        }
    }
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "ye" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
