// unkeysmash-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use env_logger::{Builder, Env};
use log::{LevelFilter, debug, info};
use walkdir::WalkDir;

use unkeysmash_align::{ScoringConfig, ScoringOptions};
use unkeysmash_suggest::{CorrectionPlan, Suggestion, Vocabulary};

/// Vocabulary file name.
pub const VOCAB_FILE: &str = "vocab.json";

/// Per-user directory holding the default vocabulary.
const VOCAB_DIR: &str = ".unkeysmash";

/// Environment variable naming a vocabulary file or its directory.
pub const VOCAB_PATH_ENV: &str = "UNKEYSMASH_VOCAB_PATH";

// ---------------------------------------------------------------------------
// Vocabulary discovery
// ---------------------------------------------------------------------------

/// Search for a vocabulary file and load it.
///
/// Search order:
/// 1. `vocab_path` argument (if provided)
/// 2. `UNKEYSMASH_VOCAB_PATH` environment variable
/// 3. `~/.unkeysmash/vocab.json`
/// 4. `vocab.json` in the current directory
///
/// Each location may name the file itself or a directory containing
/// `vocab.json`.
pub fn load_vocabulary(vocab_path: Option<&Path>) -> Result<Vocabulary, String> {
    let search_paths = build_search_paths(vocab_path);

    for candidate in &search_paths {
        let file = if candidate.is_dir() {
            candidate.join(VOCAB_FILE)
        } else {
            candidate.clone()
        };
        if file.is_file() {
            return read_vocabulary(&file);
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        VOCAB_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Read and parse one vocabulary file.
pub fn read_vocabulary(path: &Path) -> Result<Vocabulary, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let vocabulary =
        Vocabulary::from_json(&json).map_err(|e| format!("{}: {}", path.display(), e))?;
    info!(
        "loaded {} word(s) from {}",
        vocabulary.len(),
        path.display()
    );
    Ok(vocabulary)
}

/// Build the list of locations to search for the vocabulary.
fn build_search_paths(vocab_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = vocab_path {
        paths.push(p.to_path_buf());
    }

    // 2. Environment variable
    if let Ok(env_path) = std::env::var(VOCAB_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(VOCAB_DIR).join(VOCAB_FILE));
    }

    // 4. Current directory
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(VOCAB_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Expand files and directories into the markdown files to read.
///
/// Files are taken as given. Directories are walked recursively for `*.md`
/// files, which are returned in sorted order.
pub fn collect_markdown_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(Result::ok)
                .map(|entry| entry.into_path())
                .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
                .collect();
            found.sort();
            debug!("{}: {} markdown file(s)", input.display(), found.len());
            files.extend(found);
        } else {
            return Err(format!("no such file or directory: {}", input.display()));
        }
    }
    Ok(files)
}

// ---------------------------------------------------------------------------
// Shared flags
// ---------------------------------------------------------------------------

/// Alignment tuning flags shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    /// JSON file with scoring options; the flags below override it
    #[arg(long, value_name = "PATH", env = "UNKEYSMASH_SCORING")]
    pub scoring: Option<PathBuf>,

    /// Keep alignments scoring within DELTA of the best one [default: 3]
    #[arg(long, value_name = "DELTA", conflicts_with = "no_score_diff")]
    pub score_diff: Option<f64>,

    /// Keep every alignment regardless of score
    #[arg(long)]
    pub no_score_diff: bool,

    /// Give up on alignments whose lengths drift apart by more than N [default: 5]
    #[arg(long, value_name = "N")]
    pub walk_diff: Option<usize>,
}

impl ScoringArgs {
    /// Scoring options from the options file (if any) with flags applied.
    pub fn options(&self) -> Result<ScoringOptions, String> {
        let mut options = match &self.scoring {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
                serde_json::from_str(&json)
                    .map_err(|e| format!("invalid scoring options in {}: {}", path.display(), e))?
            }
            None => ScoringOptions::default(),
        };
        if let Some(cutoff) = self.score_diff {
            options.score_diff_cutoff = Some(cutoff);
        }
        if self.no_score_diff {
            options.score_diff_cutoff = None;
        }
        if let Some(cutoff) = self.walk_diff {
            options.walk_diff_cutoff = cutoff;
        }
        debug!("scoring options: {options:?}");
        Ok(options)
    }

    pub fn config(&self) -> Result<ScoringConfig, String> {
        self.options().map(|options| ScoringConfig::from_options(&options))
    }
}

/// Logging verbosity flags.
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LogArgs {
    /// Level selected by the flags, or `None` to defer to `RUST_LOG`.
    pub fn level(&self) -> Option<LevelFilter> {
        if self.quiet {
            return Some(LevelFilter::Error);
        }
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }

    /// Install the global logger. Without flags, `RUST_LOG` decides and the
    /// default is `warn`.
    pub fn init(&self) {
        let mut builder = match self.level() {
            Some(level) => {
                let mut builder = Builder::new();
                builder.filter_level(level);
                builder
            }
            None => Builder::from_env(Env::default().default_filter_or("warn")),
        };
        builder.format_timestamp(None).init();
    }
}

// ---------------------------------------------------------------------------
// Input and errors
// ---------------------------------------------------------------------------

/// Call `f` for each word: the given words, or else each non-empty trimmed
/// line of stdin.
pub fn for_each_word(words: &[String], mut f: impl FnMut(&str)) -> io::Result<()> {
    if !words.is_empty() {
        words.iter().for_each(|word| f(word));
        return Ok(());
    }
    for line in io::stdin().lock().lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            f(word);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Keystrokes of a correction plan in words, e.g. `erase 3, type "eyboard"`.
pub fn describe_plan(plan: &CorrectionPlan) -> String {
    match (plan.backspaces, plan.text.is_empty()) {
        (0, true) => "no change".to_string(),
        (0, false) => format!("type {:?}", plan.text),
        (n, true) => format!("erase {n}"),
        (n, false) => format!("erase {n}, type {:?}", plan.text),
    }
}

/// One output line for a suggestion. With `scores` the distance follows the
/// word; with `plan_from` the keystrokes rewriting that word are appended.
pub fn suggestion_line(suggestion: &Suggestion, scores: bool, plan_from: Option<&str>) -> String {
    let mut line = suggestion.word.clone();
    if scores {
        line.push_str(&format!(" ({:.2})", suggestion.distance));
    }
    if let Some(current) = plan_from {
        let plan = CorrectionPlan::between(current, &suggestion.word);
        line.push_str(&format!(": {}", describe_plan(&plan)));
    }
    line
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
