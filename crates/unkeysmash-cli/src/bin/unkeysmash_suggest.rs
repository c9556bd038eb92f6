// unkeysmash-suggest: Suggest vocabulary words for typed text.
//
// Prints ranked suggestions for each word given on the command line, or for
// each line of stdin when no words are given. By default words are treated
// as prefixes still being typed; --full treats them as finished words that
// may need correcting. With --plan each input is a typing buffer: its last
// word is looked up and every suggestion shows the keystrokes that rewrite
// that word into it.
//
// Usage:
//   unkeysmash-suggest [--vocab PATH] [--full] [--plan] [--scores] [-n N] [WORD...]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use unkeysmash_cli::{
    LogArgs, ScoringArgs, fatal, for_each_word, load_vocabulary, suggestion_line,
};
use unkeysmash_core::character::last_word;
use unkeysmash_suggest::{DEFAULT_MAX_SUGGESTIONS, Suggester};

/// Suggest vocabulary words for typed text.
#[derive(Parser, Debug)]
#[command(name = "unkeysmash-suggest", version)]
struct Cli {
    /// Vocabulary file, or a directory containing vocab.json
    #[arg(short = 'd', long, value_name = "PATH")]
    vocab: Option<PathBuf>,

    /// Treat words as finished and suggest corrections instead of completions
    #[arg(long)]
    full: bool,

    /// Maximum number of suggestions per word
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    max_suggestions: usize,

    /// Treat each input as a typing buffer and show how to rewrite its last word
    #[arg(long)]
    plan: bool,

    /// Show each suggestion's distance
    #[arg(long)]
    scores: bool,

    #[command(flatten)]
    scoring: ScoringArgs,

    #[command(flatten)]
    log: LogArgs,

    /// Words to look up; read from stdin (one per line) when omitted
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    cli.log.init();

    let config = cli.scoring.config().unwrap_or_else(|e| fatal(&e));
    let vocabulary = load_vocabulary(cli.vocab.as_deref()).unwrap_or_else(|e| fatal(&e));
    let suggester = Suggester::new(vocabulary, config).with_max_suggestions(cli.max_suggestions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = for_each_word(&cli.words, |input| {
        let word = if cli.plan { last_word(input) } else { input };
        let suggestions = if cli.full {
            suggester.correction_suggestions(word)
        } else {
            suggester.prefix_suggestions(word)
        };
        if suggestions.is_empty() {
            let _ = writeln!(out, "{input}: (no suggestions)");
        } else {
            let _ = writeln!(out, "{input}:");
            let plan_from = cli.plan.then_some(word);
            for s in &suggestions {
                let _ = writeln!(out, "  {}", suggestion_line(s, cli.scores, plan_from));
            }
        }
    });
    if let Err(e) = result {
        fatal(&format!("error reading stdin: {e}"));
    }
    let _ = out.flush();
}
