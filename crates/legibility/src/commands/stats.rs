//! Stats command: word, sentence and syllable counts.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use legibility_core::{TextStats, markdown};

use super::{is_markdown, read_input_file};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Print text statistics for a file.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing stats command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let text = if is_markdown(&args.file) {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    let stats = TextStats::compute(&text)
        .with_context(|| format!("failed to compute statistics for {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
    }

    Ok(())
}
