// unkeysmash-vocab: Build a vocabulary file from markdown documents.
//
// Reads every given markdown file (directories are searched recursively for
// *.md) and writes the word set and counts as JSON.
//
// Usage:
//   unkeysmash-vocab -o vocab.json notes/ README.md

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use unkeysmash_cli::{LogArgs, collect_markdown_files, fatal};
use unkeysmash_suggest::Vocabulary;

/// Build a vocabulary file from markdown documents.
#[derive(Parser, Debug)]
#[command(name = "unkeysmash-vocab", version)]
struct Cli {
    /// Where to write the vocabulary JSON; stdout when omitted
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Extend this existing vocabulary instead of starting empty
    #[arg(long, value_name = "PATH")]
    extend: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,

    /// Markdown files or directories
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    cli.log.init();

    let mut vocabulary = match &cli.extend {
        Some(path) => unkeysmash_cli::read_vocabulary(path).unwrap_or_else(|e| fatal(&e)),
        None => Vocabulary::new(),
    };

    let files = collect_markdown_files(&cli.inputs).unwrap_or_else(|e| fatal(&e));
    if files.is_empty() {
        warn!("no markdown files found");
    }
    for file in &files {
        let text = std::fs::read_to_string(file)
            .unwrap_or_else(|e| fatal(&format!("failed to read {}: {}", file.display(), e)));
        let recorded = vocabulary.consume_markdown(&text);
        info!("{}: {recorded} word(s)", file.display());
    }

    let json = vocabulary.to_json().unwrap_or_else(|e| fatal(&e.to_string()));
    match &cli.output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .unwrap_or_else(|e| fatal(&format!("failed to write {}: {}", path.display(), e)));
            info!(
                "wrote {} word(s) ({} total occurrences) to {}",
                vocabulary.len(),
                vocabulary.total_count(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
}
