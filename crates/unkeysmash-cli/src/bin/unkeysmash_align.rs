// unkeysmash-align: Show how a word could have been mistyped.
//
// Prints every edit sequence explaining how TARGET (the intended word) was
// typed as SOURCE, with its score, best first.
//
// Usage:
//   unkeysmash-align [OPTIONS] TARGET SOURCE
//   unkeysmash-align --json keyboard kwyboard

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;

use unkeysmash_align::{EditSequence, ranked_edit_sequences};
use unkeysmash_cli::{LogArgs, ScoringArgs, fatal};

/// Show how a word could have been mistyped.
#[derive(Parser, Debug)]
#[command(name = "unkeysmash-align", version)]
struct Cli {
    /// The intended word
    target: String,

    /// The text actually typed
    source: String,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    scoring: ScoringArgs,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(Serialize)]
struct Ranked<'a> {
    score: f64,
    display: String,
    segments: &'a EditSequence,
}

fn main() {
    let cli = Cli::parse();
    cli.log.init();

    let config = cli.scoring.config().unwrap_or_else(|e| fatal(&e));
    let ranked = ranked_edit_sequences(&cli.target, &cli.source, &config);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.json {
        let rows: Vec<Ranked<'_>> = ranked
            .iter()
            .map(|(sequence, score)| Ranked {
                score: *score,
                display: sequence.to_string(),
                segments: sequence,
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows)
            .unwrap_or_else(|e| fatal(&format!("failed to serialize results: {e}")));
        let _ = writeln!(out, "{json}");
    } else if ranked.is_empty() {
        let _ = writeln!(out, "(no edit sequences within the cutoffs)");
    } else {
        for (sequence, score) in &ranked {
            let _ = writeln!(out, "{score:>8.2}  {sequence}");
        }
    }
    let _ = out.flush();
}
