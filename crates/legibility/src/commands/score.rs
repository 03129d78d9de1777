//! Score command: readability formulas over one or more files.

use std::io::IsTerminal;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use legibility_core::readability;
use legibility_core::{Config, Formula, ReadabilityReport, ScoreOptions, WordListSource};

use super::{is_markdown, read_input_file};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Files to score.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Formula to compute (repeatable). Omit for all.
    #[arg(short, long = "formula", value_enum, value_name = "FORMULA")]
    pub formulas: Vec<Formula>,

    /// Seed for SMOG and FORCAST sampling.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dale-Chall word list (one word per line).
    #[arg(long, value_name = "PATH")]
    pub word_list: Option<Utf8PathBuf>,

    /// Maximum acceptable Flesch-Kincaid grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,
}

impl ScoreArgs {
    /// Command-line flags layered over configured defaults.
    fn options(&self, config: &Config) -> ScoreOptions {
        let mut options = config.score_options();
        if !self.formulas.is_empty() {
            options.formulas = Some(self.formulas.clone());
        }
        if self.seed.is_some() {
            options.seed = self.seed;
        }
        if let Some(ref path) = self.word_list {
            options.word_list = WordListSource::File(path.clone());
        }
        if self.max_grade.is_some() {
            options.max_grade = self.max_grade;
        }
        options
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a Utf8PathBuf,
    #[serde(flatten)]
    report: &'a ReadabilityReport,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let style =
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ");
    let bar = ProgressBar::new(len as u64);
    bar.set_style(style);
    bar
}

/// Score each file and print the selected formulas.
///
/// Fails when any file's grade exceeds the maximum.
#[instrument(name = "cmd_score", skip_all, fields(files = args.files.len()))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let base = args.options(config);
    debug!(
        formulas = ?base.formulas,
        seed = ?base.seed,
        word_list = %base.word_list,
        max_grade = ?base.max_grade,
        "executing score command"
    );

    let show_progress =
        args.files.len() > 1 && !global_json && !quiet && std::io::stderr().is_terminal();
    let bar = progress_bar(args.files.len(), show_progress);

    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        bar.set_message(file.to_string());
        let content = read_input_file(file, max_input_bytes)?;
        let options = ScoreOptions {
            strip_markdown: is_markdown(file),
            ..base.clone()
        };
        let report = readability::check_readability(&content, &options)
            .with_context(|| format!("failed to score {file}"))?;
        reports.push(report);
        bar.inc(1);
    }
    bar.finish_and_clear();

    if global_json {
        let entries: Vec<_> = args
            .files
            .iter()
            .zip(&reports)
            .map(|(file, report)| FileReport { file, report })
            .collect();
        let json = match entries.as_slice() {
            [single] => serde_json::to_string_pretty(single)?,
            _ => serde_json::to_string_pretty(&entries)?,
        };
        println!("{json}");
    } else {
        let many = args.files.len() > 1;
        for (file, report) in args.files.iter().zip(&reports) {
            print_report(file, report, many);
        }
    }

    let failing: Vec<_> = args
        .files
        .iter()
        .zip(&reports)
        .filter(|(_, r)| r.over_max)
        .map(|(f, _)| f.as_str())
        .collect();
    if !failing.is_empty() {
        let max = base.max_grade.unwrap_or_default();
        bail!(
            "grade exceeds {max:.1} in {}. Simplify sentences or reduce jargon.",
            failing.join(", ")
        );
    }

    Ok(())
}

fn print_report(file: &Utf8PathBuf, report: &ReadabilityReport, with_header: bool) {
    if with_header {
        println!("{}", file.bold());
    }
    for (formula, score) in report.scores.iter() {
        println!("{}: {score:.2}", formula.label());
    }
    if let (Some(max), Some(grade)) = (report.max_grade, report.scores.flesch_kincaid_grade) {
        if report.over_max {
            println!("{} {file} scores {grade:.1} (max: {max:.1})", "FAIL:".red());
        } else {
            println!("{} {file} scores {grade:.1} (max: {max:.1})", "PASS:".green());
        }
    }
    if with_header {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ScoreArgs {
        ScoreArgs {
            files: vec![Utf8PathBuf::from("a.txt")],
            formulas: Vec::new(),
            seed: None,
            word_list: None,
            max_grade: None,
        }
    }

    #[test]
    fn config_supplies_defaults() {
        let config = Config {
            seed: Some(5),
            max_grade: Some(9.0),
            formulas: Some(vec![Formula::Smog]),
            ..Config::default()
        };
        let options = args().options(&config);
        assert_eq!(options.seed, Some(5));
        assert_eq!(options.max_grade, Some(9.0));
        assert_eq!(options.formulas, Some(vec![Formula::Smog]));
        assert_eq!(options.word_list, WordListSource::Bundled);
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            seed: Some(5),
            max_grade: Some(9.0),
            formulas: Some(vec![Formula::Smog]),
            ..Config::default()
        };
        let args = ScoreArgs {
            formulas: vec![Formula::GunningFog],
            seed: Some(11),
            word_list: Some(Utf8PathBuf::from("easy.txt")),
            max_grade: Some(6.0),
            ..args()
        };
        let options = args.options(&config);
        assert_eq!(options.seed, Some(11));
        assert_eq!(options.max_grade, Some(6.0));
        assert_eq!(options.formulas, Some(vec![Formula::GunningFog]));
        assert_eq!(
            options.word_list,
            WordListSource::File(Utf8PathBuf::from("easy.txt"))
        );
    }

    #[test]
    fn hidden_bar_when_not_visible() {
        assert!(progress_bar(3, false).is_hidden());
    }
}
