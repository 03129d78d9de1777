//! Development tasks for the legibility workspace.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for legibility")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages
    Man {
        /// Output directory
        #[arg(long, default_value = "target/dist/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/dist/completions")]
        out_dir: PathBuf,
        /// Shells to generate for (all if omitted)
        #[arg(long, value_enum)]
        shell: Vec<Shell>,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => gen_man(&out_dir),
        Task::Completions { out_dir, shell } => gen_completions(&out_dir, &shell),
    }
}

fn gen_man(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let cmd = legibility::command();
    clap_mangen::generate_to(cmd, out_dir)
        .with_context(|| format!("failed to write man pages to {}", out_dir.display()))?;

    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn gen_completions(out_dir: &Path, shells: &[Shell]) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let shells = if shells.is_empty() {
        &[
            Shell::Bash,
            Shell::Elvish,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Zsh,
        ][..]
    } else {
        shells
    };

    let mut cmd = legibility::command();
    let name = cmd.get_name().to_string();
    for &shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, &name, out_dir)
            .with_context(|| format!("failed to write {shell} completions"))?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
