use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "glider competition score scraper and score-file toolkit")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Scrape the ranking site and rebuild the per-glider score files
    Scrape {
        /// First competition id to fetch
        #[arg(long, default_value_t = 1)]
        first: u32,
        /// Last competition id to fetch (inclusive)
        #[arg(long, default_value_t = 4999)]
        last: u32,
        /// Maximum number of simultaneous fetches
        #[arg(short, long, default_value_t = 30)]
        concurrency: usize,
        /// Directory holding the score files
        #[arg(short, long, default_value = "gliders_scores")]
        dir: PathBuf,
    },
    /// Consolidate matching score files into one file, deleting the sources
    Merge {
        /// Destination file name (without extension)
        glider: String,
        /// Substring that must appear in a source file's name (repeatable;
        /// all must match)
        #[arg(short = 'm', long = "contains")]
        contains: Vec<String>,
        /// Directory holding the score files
        #[arg(short, long, default_value = "gliders_scores")]
        dir: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List score files with more entries than a threshold
    Inspect {
        /// Minimum number of comma-separated fields to report
        #[arg(short, long, default_value_t = 500)]
        threshold: usize,
        /// Directory holding the score files
        #[arg(short, long, default_value = "gliders_scores")]
        dir: PathBuf,
    },
    /// Print a histogram and Gaussian fit for one score file
    Plot {
        /// Score file to analyse
        file: PathBuf,
        /// Bucket width, in hundredths of normalized score
        #[arg(short, long, default_value_t = 4)]
        granularity: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_defaults() {
        let cli = Cli::try_parse_from(["glider_scores", "scrape"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Scrape {
                first: 1,
                last: 4999,
                concurrency: 30,
                dir: PathBuf::from("gliders_scores"),
            }
        );
    }

    #[test]
    fn test_merge_collects_filters() {
        let cli = Cli::try_parse_from([
            "glider_scores",
            "merge",
            "_jantarstd3",
            "-m",
            "jantar",
            "-m",
            "std",
            "--yes",
        ])
        .unwrap();

        match cli.command {
            Command::Merge {
                glider,
                contains,
                yes,
                ..
            } => {
                assert_eq!(glider, "_jantarstd3");
                assert_eq!(contains, vec!["jantar", "std"]);
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
