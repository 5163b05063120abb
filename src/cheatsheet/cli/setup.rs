use cheatsheet::config::DisplayStyle;
use cheatsheet::matcher::Combinator;
use cheatsheet::model::Tags;
use cheatsheet::store::SheetLocation;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cheatsheet", bin_name = "cheatsheet", version = get_version())]
#[command(
    about = "Create, maintain and query lists of tagged cheat sheet entries",
    long_about = None,
    after_help = "Use `cheatsheet <command> --help` for help on individual commands."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry
    #[command(
        long_about = "Add a new entry. TAGS is a comma separated list whose first item is the \
                      primary tag, e.g. `bash,files,cli`. Asks before introducing tags the list \
                      has never seen."
    )]
    Add {
        /// Primary tag followed by extra tags, comma separated
        #[arg(value_parser = parse_tag_spec)]
        tags: TagSpec,

        /// Short text identifying the entry
        clue: String,

        /// The text the clue recalls
        answer: String,

        #[command(flatten)]
        confirm: ConfirmArgs,

        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show entries, optionally filtered by tags
    Show {
        /// Only show entries with these tags (comma separated)
        #[arg(short, long, value_delimiter = ',', value_name = "TAGS")]
        tags: Vec<String>,

        /// Entries must carry every tag
        #[arg(long = "and", conflicts_with_all = ["or", "matching"])]
        and: bool,

        /// Entries must carry at least one tag (default)
        #[arg(long = "or", conflicts_with = "matching")]
        or: bool,

        /// How to combine the tags: all (and) or any (or)
        #[arg(short, long = "match", value_name = "HOW")]
        matching: Option<Combinator>,

        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print statistics about a list
    Info {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Print the names of the lists in the data directory
    Lists,

    /// Remove an entry
    Remove {
        /// Id of the entry to remove
        id: u32,

        #[command(flatten)]
        confirm: ConfirmArgs,

        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Update fields of an entry
    #[command(
        long_about = "Update fields of an entry. Only the given fields change. --tags replaces \
                      the primary tag and the extra tags together, so `--tags bash` leaves the \
                      entry with primary `bash` and no extra tags."
    )]
    Update {
        /// Id of the entry to update
        id: u32,

        /// New primary tag followed by extra tags, comma separated
        #[arg(long, value_parser = parse_tag_spec)]
        tags: Option<TagSpec>,

        /// New clue
        #[arg(long)]
        clue: Option<String>,

        /// New answer
        #[arg(long)]
        answer: Option<String>,

        #[command(flatten)]
        confirm: ConfirmArgs,

        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        style: StyleArgs,
    },
}

/// `-l NAME` or `--listpath FILE`, never both.
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct ListArgs {
    /// Name of a list in the data directory
    #[arg(short = 'l', long = "list", value_name = "NAME")]
    pub name: Option<String>,

    /// Path of a list file
    #[arg(long = "listpath", value_name = "FILE")]
    pub path: Option<PathBuf>,
}

impl ListArgs {
    pub fn location(&self) -> SheetLocation {
        SheetLocation::from_args(self.name.clone(), self.path.clone())
    }
}

/// Whether to ask before changing a list. Each command has its own default.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(multiple = false)]
pub struct ConfirmArgs {
    /// Never ask for confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Ask for confirmation
    #[arg(short = 'i', long)]
    pub prompt: bool,
}

impl ConfirmArgs {
    pub fn should_prompt(&self, default: bool) -> bool {
        if self.force {
            false
        } else if self.prompt {
            true
        } else {
            default
        }
    }
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct StyleArgs {
    /// Display style: full, compact, simple (or 1-3). Defaults to the configured one
    #[arg(long = "style", value_name = "STYLE")]
    pub style: Option<DisplayStyle>,
}

/// A parsed `primary,tag,tag` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    pub primary: String,
    pub tags: Tags,
}

fn parse_tag_spec(s: &str) -> Result<TagSpec, String> {
    let mut parts = s.split(',').map(str::trim);
    let primary = parts.next().unwrap_or_default();
    if primary.is_empty() {
        return Err("the first tag is the primary tag and cannot be empty".to_string());
    }
    Ok(TagSpec {
        primary: primary.to_string(),
        tags: parts.filter(|t| !t.is_empty()).map(String::from).collect(),
    })
}
