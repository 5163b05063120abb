//! Per-command handlers: call the API, ask for confirmation where needed and
//! print the results.

use super::prompt::confirm;
use super::render::{print_entries, print_entry, print_list_names, print_messages, print_summary};
use super::setup::{Cli, Commands, ConfirmArgs, ListArgs, StyleArgs, TagSpec};
use cheatsheet::config::DisplayStyle;
use cheatsheet::error::Result;
use cheatsheet::init::{initialize, CheatContext};
use cheatsheet::matcher::{Combinator, TagMatcher};
use cheatsheet::model::{Entry, EntryUpdate, Tags};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize()?;
    debug!(
        command = ?cli.command,
        default_style = %ctx.config.default_style,
        "dispatching"
    );

    match cli.command {
        Commands::Add {
            tags,
            clue,
            answer,
            confirm,
            list,
            style,
        } => handle_add(&mut ctx, tags, clue, answer, confirm, &list, style),
        Commands::Show {
            tags,
            and,
            or: _,
            matching,
            list,
            style,
        } => {
            let combinator = match matching {
                Some(combinator) => combinator,
                None if and => Combinator::All,
                None => Combinator::Any,
            };
            handle_show(&ctx, tags, combinator, &list, style)
        }
        Commands::Info { list } => handle_info(&ctx, &list),
        Commands::Lists => handle_lists(&ctx),
        Commands::Remove {
            id,
            confirm,
            list,
            style,
        } => handle_remove(&mut ctx, id, confirm, &list, style),
        Commands::Update {
            id,
            tags,
            clue,
            answer,
            confirm,
            list,
            style,
        } => {
            let mut update = EntryUpdate::new();
            if let Some(TagSpec { primary, tags }) = tags {
                update = update.primary(primary).tags(tags);
            }
            if let Some(clue) = clue {
                update = update.clue(clue);
            }
            if let Some(answer) = answer {
                update = update.answer(answer);
            }
            handle_update(&mut ctx, id, update, confirm, &list, style)
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn resolve_style(ctx: &CheatContext, style: StyleArgs) -> DisplayStyle {
    style.style.unwrap_or(ctx.config.default_style)
}

fn handle_add(
    ctx: &mut CheatContext,
    tags: TagSpec,
    clue: String,
    answer: String,
    confirm_args: ConfirmArgs,
    list: &ListArgs,
    style: StyleArgs,
) -> Result<()> {
    let style = resolve_style(ctx, style);
    let entry = Entry::new(tags.primary, clue, answer, tags.tags)?;
    let ask = confirm_args.should_prompt(true);

    let result = ctx.api.add_entry(&list.location(), entry, |unseen: &Tags| {
        if !ask {
            return Ok(true);
        }
        let names: Vec<_> = unseen.iter().map(String::as_str).collect();
        confirm(
            &format!(
                "The following tags are not in the list yet: {}\nAdd the entry anyway?",
                names.join(", ")
            ),
            true,
        )
    })?;
    for entry in &result.affected_entries {
        print_entry(entry, style);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(
    ctx: &CheatContext,
    tags: Vec<String>,
    combinator: Combinator,
    list: &ListArgs,
    style: StyleArgs,
) -> Result<()> {
    let matcher = if tags.is_empty() {
        TagMatcher::everything()
    } else {
        TagMatcher::new(tags.into_iter().collect(), combinator)
    };
    debug!(combinator = %combinator, filtered = !matcher.is_unfiltered(), "showing entries");

    // A filtered listing reads better without the tag lines.
    let style = match style.style {
        None if !matcher.is_unfiltered() => DisplayStyle::Simple,
        _ => resolve_style(ctx, style),
    };

    let result = ctx.api.show_entries(&list.location(), &matcher)?;
    print_entries(&result.listed_entries, style);
    print_messages(&result.messages);
    Ok(())
}

fn handle_info(ctx: &CheatContext, list: &ListArgs) -> Result<()> {
    let result = ctx.api.info(&list.location())?;
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_lists(ctx: &CheatContext) -> Result<()> {
    let result = ctx.api.lists()?;
    print_list_names(&result.list_names);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(
    ctx: &mut CheatContext,
    id: u32,
    confirm_args: ConfirmArgs,
    list: &ListArgs,
    style: StyleArgs,
) -> Result<()> {
    let location = list.location();
    let style = resolve_style(ctx, style);
    let prompted = confirm_args.should_prompt(true);

    if prompted {
        let current = ctx.api.get_entry(&location, id)?;
        for entry in &current.listed_entries {
            print_entry(entry, style);
        }
        if !confirm("Delete this entry?", false)? {
            println!("Nothing removed.");
            return Ok(());
        }
    }

    let result = ctx.api.remove_entry(&location, id)?;
    if prompted {
        for entry in &result.affected_entries {
            println!("Removed:");
            print_entry(entry, style);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut CheatContext,
    id: u32,
    update: EntryUpdate,
    confirm_args: ConfirmArgs,
    list: &ListArgs,
    style: StyleArgs,
) -> Result<()> {
    let location = list.location();
    let style = resolve_style(ctx, style);

    if confirm_args.should_prompt(false) {
        let current = ctx.api.get_entry(&location, id)?;
        for entry in &current.listed_entries {
            print_entry(entry, style);
        }
        if !confirm("Update this entry?", true)? {
            println!("Nothing updated.");
            return Ok(());
        }
    }

    let result = ctx.api.update_entry(&location, id, update)?;
    for entry in &result.affected_entries {
        print_entry(entry, style);
    }
    print_messages(&result.messages);
    Ok(())
}
