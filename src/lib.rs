pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod parsers;
pub mod services;
pub mod store;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::ScraperSettings;
use crate::services::scrape::ScrapeService;
use crate::services::{housekeeping, inspect, plot};
use crate::store::ScoreStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub async fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Scrape {
            first,
            last,
            concurrency,
            dir,
        } => handle_scrape(first, last, concurrency, dir).await,
        Command::Merge {
            glider,
            contains,
            dir,
            yes,
        } => handle_merge(&glider, &contains, &dir, yes),
        Command::Inspect { threshold, dir } => inspect::run(&dir, threshold),
        Command::Plot { file, granularity } => plot::run(&file, granularity),
    }
}

async fn handle_scrape(first: u32, last: u32, concurrency: usize, dir: PathBuf) -> Result<()> {
    let settings = ScraperSettings {
        first_comp_id: first,
        last_comp_id: last,
        concurrency,
        scores_dir: dir,
        ..Default::default()
    };

    let service = ScrapeService::new(settings)?;
    service.run().await
}

fn handle_merge(glider: &str, contains: &[String], dir: &Path, yes: bool) -> Result<()> {
    let store = ScoreStore::new(dir)?;
    let destination = store.dir().join(format!("{}.txt", glider));

    let plan = housekeeping::plan_merge(&store.list_score_files()?, &destination, contains);
    if plan.is_empty() {
        println!("No files match");
        return Ok(());
    }

    housekeeping::print_plan(&plan)?;
    if !yes && !housekeeping::confirm("Merge and delete these files?")? {
        println!("Aborted");
        return Ok(());
    }

    let merged = housekeeping::execute_merge(&plan)?;
    println!("{} files merged into {}", merged, destination.display());
    Ok(())
}
