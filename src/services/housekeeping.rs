use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::errors;
use crate::store;

/// Planned consolidation of score files into one destination file.
///
/// Planning is pure so it can be tested without a console; the caller
/// decides whether to confirm before [`execute_merge`] touches anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub destination: PathBuf,
    pub sources: Vec<PathBuf>,
}

impl MergePlan {
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Pick the merge sources: every score file whose stem contains all of the
/// given substrings. Underscore-prefixed files are curated outputs of an
/// earlier merge and are never picked up again; the destination itself is
/// excluded.
pub fn plan_merge(files: &[PathBuf], destination: &Path, filters: &[String]) -> MergePlan {
    let sources = files
        .iter()
        .filter(|file| file.as_path() != destination)
        .filter(|file| !is_curated(file))
        .filter(|file| matches_all(file, filters))
        .cloned()
        .collect();

    MergePlan {
        destination: destination.to_path_buf(),
        sources,
    }
}

/// Carry out a plan: concatenate the sources' raw contents onto the
/// destination, then delete the sources. Returns how many files were
/// merged.
pub fn execute_merge(plan: &MergePlan) -> Result<usize> {
    for source in &plan.sources {
        let content =
            fs::read_to_string(source).with_context(|| errors::store_context("read", source))?;
        append_raw(&plan.destination, &content)?;
        fs::remove_file(source).with_context(|| errors::store_context("delete", source))?;
    }

    info!(
        "Merged {} files into {}",
        plan.sources.len(),
        plan.destination.display()
    );
    Ok(plan.sources.len())
}

/// Print the plan with per-file entry counts.
pub fn print_plan(plan: &MergePlan) -> Result<()> {
    for source in &plan.sources {
        let content =
            fs::read_to_string(source).with_context(|| errors::store_context("read", source))?;
        println!(
            "{} ({})",
            source.display().to_string().bold(),
            store::comma_fields(&content)
        );
    }
    println!(
        "{} files -> {}",
        plan.sources.len(),
        plan.destination.display().to_string().green()
    );
    Ok(())
}

/// Ask for a y/N answer on stdin.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read confirmation")?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn is_curated(file: &Path) -> bool {
    file_stem(file).starts_with('_')
}

fn matches_all(file: &Path, filters: &[String]) -> bool {
    let stem = file_stem(file);
    filters.iter().all(|filter| stem.contains(filter.as_str()))
}

fn file_stem(file: &Path) -> &str {
    file.file_stem().and_then(|stem| stem.to_str()).unwrap_or("")
}

fn append_raw(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| errors::store_context("open", path))?;
    file.write_all(content.as_bytes())
        .with_context(|| errors::store_context("write", path))
}
