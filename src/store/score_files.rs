use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::{GliderAggregate, Score};
use crate::errors;

/// Directory of per-glider score files.
///
/// One `.txt` file per glider; content is the score set comma-joined with a
/// trailing comma. Distinct glider names can sanitize to the same filename
/// ("Jean-Paul Martin" and "JeanPaul_Martin" both become
/// `jeanpaulmartin.txt`); writes append rather than truncate, so colliding
/// names accumulate into one file. That merge-by-collision is intentional:
/// it folds spelling variants of the same glider together.
pub struct ScoreStore {
    dir: PathBuf,
}

impl ScoreStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).with_context(|| errors::store_context("create", &dir))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Delete every existing score file. Returns how many were removed.
    pub fn clear_score_files(&self) -> Result<usize> {
        let files = self.list_score_files()?;
        for file in &files {
            fs::remove_file(file).with_context(|| errors::store_context("delete", file))?;
        }
        Ok(files.len())
    }

    /// Write the whole aggregate, one append per glider. Returns the number
    /// of score files present afterwards.
    pub fn flush(&self, aggregate: &GliderAggregate) -> Result<usize> {
        for (glider, scores) in aggregate.sorted_entries() {
            self.append_scores(&glider, &scores)?;
        }
        Ok(self.list_score_files()?.len())
    }

    /// Append one glider's scores to its (sanitized) file.
    pub fn append_scores(&self, glider: &str, scores: &BTreeSet<Score>) -> Result<()> {
        let path = self.score_file_path(glider);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| errors::store_context("open", &path))?;

        for score in scores {
            write!(file, "{},", score).with_context(|| errors::store_context("write", &path))?;
        }
        Ok(())
    }

    pub fn score_file_path(&self, glider: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", sanitize_name(glider)))
    }

    /// All `.txt` files in the directory, sorted by path.
    pub fn list_score_files(&self) -> Result<Vec<PathBuf>> {
        let entries =
            fs::read_dir(&self.dir).with_context(|| errors::store_context("read", &self.dir))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| errors::store_context("read", &self.dir))?
                .path();
            if path.extension().is_some_and(|ext| ext == "txt") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    pub fn read_raw(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| errors::store_context("read", path))
    }
}

/// Lowercase a glider name and strip the separators that vary between
/// spellings of the same model.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '/' | '-' | '_'))
        .collect::<String>()
        .to_lowercase()
}

/// Parse a score file's comma-separated floats, ignoring empty fields
/// (including the trailing one).
pub fn parse_scores(content: &str) -> Vec<f64> {
    content
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .filter_map(|field| field.parse().ok())
        .collect()
}

/// Number of comma-separated fields, counting the empty tail.
pub fn comma_fields(content: &str) -> usize {
    content.split(',').count()
}
