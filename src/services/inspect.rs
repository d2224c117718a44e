use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::store::{self, ScoreStore};

/// List the score files holding more than `threshold` comma-separated
/// fields. Read-only; useful for spotting the gliders with enough samples
/// to be worth plotting.
pub fn run(dir: &Path, threshold: usize) -> Result<()> {
    let store = ScoreStore::new(dir)?;

    let mut shown = 0;
    for file in store.list_score_files()? {
        let content = store.read_raw(&file)?;
        let fields = store::comma_fields(&content);
        if fields > threshold {
            println!("{} ({})", file.display().to_string().bold(), fields);
            shown += 1;
        }
    }

    println!("{} files over {} entries", shown, threshold);
    Ok(())
}
