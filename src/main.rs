use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use humansize::{format_size, BINARY};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use trashsweep::scan_files;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find files by extension and send them to the operating system's trash",
    long_about = None
)]
struct Args {
    /// Directories to sweep
    paths: Vec<PathBuf>,

    /// Filename extension to match, without the leading period (prompted for if omitted)
    #[arg(long, short)]
    extension: Option<String>,

    /// Match files at any depth instead of immediate children only
    #[arg(long, short)]
    recursive: bool,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    force: bool,

    /// Show what would be trashed without touching anything
    #[arg(long)]
    dry_run: bool,

    /// Wait for Enter before exiting (useful for drag-and-drop launches)
    #[arg(long)]
    pause: bool,
}

/// How a run ended, mapped to the process exit code.
enum Outcome {
    Completed,
    NothingToDo,
    Cancelled,
}

impl Outcome {
    fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Completed | Outcome::NothingToDo => ExitCode::SUCCESS,
            Outcome::Cancelled => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let code = match run(&args) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red());
            ExitCode::FAILURE
        }
    };

    if args.pause {
        let _ = prompt("Press Enter to exit -> ");
    }

    code
}

fn run(args: &Args) -> Result<Outcome> {
    if args.paths.is_empty() {
        println!("No target directories given.");
        return Ok(Outcome::NothingToDo);
    }

    let extension = resolve_extension(args.extension.as_deref())?;

    // Collect candidates across all target directories
    let mut targets = Vec::new();
    for dir in &args.paths {
        let matches = scan_files(dir, std::slice::from_ref(&extension), args.recursive)
            .with_context(|| format!("failed to scan {}", dir.display()))?;
        targets.extend(matches);
    }

    if targets.is_empty() {
        println!("No matching files found.");
        return Ok(Outcome::NothingToDo);
    }

    let mut total_bytes: u64 = 0;
    for target in &targets {
        let size = fs::symlink_metadata(target).map(|m| m.len()).unwrap_or(0);
        total_bytes += size;
        println!("  * {} ({})", target.display(), format_size(size, BINARY));
    }
    println!(
        "{}",
        format!(
            "Found {} matching file(s), {}",
            targets.len(),
            format_size(total_bytes, BINARY)
        )
        .bold()
    );

    if args.dry_run {
        println!("Dry run: no files were sent to the trash.");
        return Ok(Outcome::Completed);
    }

    if !args.force {
        let answer = prompt("Are you sure to send those files to trash? [y/N] -> ")?;
        if !is_affirmative(&answer) {
            println!("{}", "Cancelled.".yellow());
            return Ok(Outcome::Cancelled);
        }
    }

    // One trash call per path; a failure skips that file, not the batch
    let mut failures: usize = 0;
    for target in &targets {
        if let Err(err) = trash::delete(target) {
            eprintln!("Error trashing {}: {}. Skipping.", target.display(), err);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!(
            "failed to send {failures} of {} file(s) to the trash",
            targets.len()
        );
    }

    println!(
        "{}",
        format!("Done. Sent {} file(s) to the trash.", targets.len()).green()
    );
    Ok(Outcome::Completed)
}

/// Use the extension from the command line when given, otherwise ask for it.
/// One leading period is tolerated and stripped here; the scanner expects
/// tokens without one.
fn resolve_extension(from_args: Option<&str>) -> Result<String> {
    let raw = match from_args {
        Some(extension) => extension.to_string(),
        None => prompt("Input a filename extension without period -> ")?,
    };

    let trimmed = raw.trim();
    let extension = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if extension.is_empty() {
        bail!("no filename extension given");
    }
    Ok(extension.to_string())
}

/// Only an exact `y`, in either case, confirms; anything else cancels.
fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}
