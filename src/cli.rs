use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "kwicdex",
    about = "Keyword-in-context concordances for a genre-organized text corpus"
)]
pub struct Cli {
    /// Override the data directory holding the genre folders
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Minimum milliseconds between two staleness scans
    #[arg(long, global = true)]
    pub check_interval_ms: Option<u64>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every occurrence of a word with its surrounding context
    Search(SearchArgs),
    /// Suggest words containing the given text
    Suggest(SuggestArgs),
    /// List distinct words, optionally with frequencies
    Words(WordsArgs),
    /// Show document and word counts per genre
    Stats(StatsArgs),
    /// List corpus words missing from the dictionary folder
    Neologisms(NeologismsArgs),
    /// Write the corpus as a JSON array of token records
    Export(ExportArgs),
    /// Reload the corpus from disk
    Reload,
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The word to look up
    pub term: String,

    /// Context tokens on each side (defaults to the configured window)
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Restrict to one genre key; unknown keys search everything
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Suggest --

#[derive(Debug, Parser)]
pub struct SuggestArgs {
    /// Text the suggestions must contain
    pub prefix: String,

    /// Restrict to one genre key
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Output as JSON array
    #[arg(long)]
    pub json: bool,
}

// -- Words --

#[derive(Debug, Parser)]
pub struct WordsArgs {
    /// Restrict to one genre key
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Print a Word/Frequency table sorted by frequency
    #[arg(long)]
    pub freq: bool,
}

// -- Stats --

#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Neologisms --

#[derive(Debug, Parser)]
pub struct NeologismsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Export --

#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output file (defaults to processed.json in the data directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "kwicdex",
            &mut std::io::stdout(),
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_search_defaults() {
        let cli = Cli::parse_from(["kwicdex", "search", "kurd"]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.term, "kurd");
                assert_eq!(args.window, None);
                assert_eq!(args.genre, None);
                assert!(!args.json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn parse_search_options() {
        let cli = Cli::parse_from([
            "kwicdex", "search", "kurd", "-w", "3", "-g", "helbest", "--json",
        ]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.window, Some(3));
                assert_eq!(args.genre.as_deref(), Some("helbest"));
                assert!(args.json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "kwicdex",
            "words",
            "--freq",
            "--data-dir",
            "/tmp/corpus",
            "-vv",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/corpus")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Words(WordsArgs { freq: true, .. })));
    }

    #[test]
    fn verify_command_tree() {
        Cli::command().debug_assert();
    }
}
