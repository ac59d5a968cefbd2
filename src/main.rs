use clap::Parser;
use kwicdex::{
    CorpusStore,
    DataDir,
    GenreFilter,
    Settings,
    error,
    export,
    kwic::KwicResult,
};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Command};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("KWICDEX_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();

    if let Command::Completions(args) = &cli.command {
        args.generate();
        return Ok(());
    }

    init_tracing(cli.verbose, cli.quiet);

    let data_dir = DataDir::resolve(cli.data_dir.as_deref())?;
    let mut settings = Settings::load(&data_dir.settings_file())?;
    if let Some(ms) = cli.check_interval_ms {
        settings.staleness_check_interval_ms = ms;
    }
    let store = CorpusStore::open(data_dir, settings)?;

    match cli.command {
        Command::Search(args) => {
            let window =
                args.window.unwrap_or(store.settings().default_window);
            let filter = GenreFilter::from_option(args.genre.as_deref());
            let result = store.kwic_search(&args.term, window, filter);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                format_kwic(&result);
            }
        }
        Command::Suggest(args) => {
            let filter = GenreFilter::from_option(args.genre.as_deref());
            let suggestions = store.suggest(&args.prefix, filter);
            if args.json {
                println!("{}", serde_json::to_string(&suggestions)?);
            } else {
                for word in &suggestions {
                    println!("{word}");
                }
            }
        }
        Command::Words(args) => {
            let filter = GenreFilter::from_option(args.genre.as_deref());
            let snapshot = store.snapshot();
            let index = snapshot.stats().index(filter);
            if args.freq {
                println!("{}", export::frequency_table(index));
            } else if !index.words().is_empty() {
                println!("{}", export::word_list(index));
            }
        }
        Command::Stats(args) => {
            cmd_stats(&store, args.json)?;
        }
        Command::Neologisms(args) => {
            let words = store.neologisms();
            if args.json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                if !words.is_empty() {
                    println!("{}", export::neologism_list(&words));
                }
                eprintln!("{} neologism(s)", words.len());
            }
        }
        Command::Export(args) => {
            let path = args
                .output
                .unwrap_or_else(|| store.data_dir().processed_json());
            let snapshot = store.snapshot();
            let count =
                export::write_processed_json(snapshot.corpus(), &path)?;
            println!("Exported {count} document(s) to {}", path.display());
        }
        Command::Reload => {
            let snapshot = store.reload();
            println!("Corpus reloaded: {} document(s)", snapshot.corpus().len());
        }
        Command::Completions(_) => {}
    }

    Ok(())
}

fn format_kwic(result: &KwicResult) {
    if result.matches.is_empty() {
        println!("No occurrences of '{}'.", result.term);
        return;
    }

    for m in &result.matches {
        println!(
            "{}:{} [{}]  {} [{}] {}",
            m.source, m.line_num, m.genre, m.left, m.word, m.right
        );
    }
    println!("\n{} occurrence(s) of '{}'", result.frequency, result.term);
}

fn cmd_stats(store: &CorpusStore, json: bool) -> error::Result<()> {
    let snapshot = store.snapshot();
    let documents = snapshot.genre_stats();
    let words = snapshot.vocabulary_stats();

    if json {
        let value = serde_json::json!({
            "documents": documents,
            "words": words,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Data directory: {}", store.data_dir().root().display());
    println!(
        "Documents: {}  Words: {}  Unique words: {}",
        documents.total, words.all.total_words, words.all.unique_words
    );
    for (genre, count) in &documents.genres {
        let scope = words.genres[genre];
        println!(
            "  {:<18} {:>5} doc(s) {:>9} words {:>8} unique  ({})",
            genre.key(),
            count,
            scope.total_words,
            scope.unique_words,
            genre.folder()
        );
    }
    Ok(())
}
