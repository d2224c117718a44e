use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::{info, warn};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::ScraperSettings;
use crate::domain::{CompetitionOutcome, GliderAggregate, ScrapeProgress, normalize_competition};
use crate::fetchers::CompetitionFetcher;
use crate::parsers;
use crate::store::ScoreStore;

/// One full scrape run.
///
/// Every competition id in the configured range is fetched, parsed and
/// normalized by a bounded pool of tasks that merge into one shared
/// aggregate. Once all tasks have joined, the score files are cleared and
/// rewritten from the aggregate. A failure mid-run loses the in-memory
/// aggregate; there is no resume.
pub struct ScrapeService {
    settings: ScraperSettings,
    fetcher: CompetitionFetcher,
}

impl ScrapeService {
    pub fn new(settings: ScraperSettings) -> Result<Self> {
        let fetcher = CompetitionFetcher::new(&settings)?;
        Ok(Self { settings, fetcher })
    }

    pub async fn run(&self) -> Result<()> {
        info!(
            "=== Scraping competitions {}..{} ===",
            self.settings.first_comp_id, self.settings.last_comp_id
        );
        let started = Instant::now();

        let aggregate = Arc::new(GliderAggregate::new());
        let progress = Arc::new(ScrapeProgress::new(self.settings.competition_count()));

        self.fetch_all(&aggregate, &progress).await;
        progress.report(started.elapsed());

        self.flush(&aggregate)?;
        info!("=== Scrape complete ===");
        Ok(())
    }

    async fn fetch_all(&self, aggregate: &Arc<GliderAggregate>, progress: &Arc<ScrapeProgress>) {
        let semaphore = Arc::new(Semaphore::new(self.settings.concurrency));
        let mut tasks = JoinSet::new();

        for comp_id in self.settings.first_comp_id..=self.settings.last_comp_id {
            let semaphore = Arc::clone(&semaphore);
            let fetcher = self.fetcher.clone();
            let aggregate = Arc::clone(aggregate);
            let progress = Arc::clone(progress);

            tasks.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };
                let outcome = process_competition(&fetcher, comp_id, &aggregate).await;
                record_outcome(&progress, comp_id, outcome);
            });
        }

        // Draining the set is the barrier: no score file is touched while
        // any fetch task is still running.
        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                warn!("Fetch task panicked: {}", e);
            }
        }
    }

    fn flush(&self, aggregate: &GliderAggregate) -> Result<()> {
        let store = ScoreStore::new(&self.settings.scores_dir)?;

        let removed = store.clear_score_files()?;
        info!("{} files to delete", removed);

        let written = store.flush(aggregate)?;
        info!("{} files created ({} gliders)", written, aggregate.len());
        Ok(())
    }
}

/// Fetch → parse → normalize → merge for a single competition id.
async fn process_competition(
    fetcher: &CompetitionFetcher,
    comp_id: u32,
    aggregate: &GliderAggregate,
) -> CompetitionOutcome {
    let html = match fetcher.fetch_results_page(comp_id).await {
        Ok(html) => html,
        Err(e) => return CompetitionOutcome::Failed(format!("{:#}", e)),
    };

    let entries = match parsers::parse_results(&html) {
        Ok(entries) => entries,
        Err(e) => return CompetitionOutcome::Failed(format!("{:#}", e)),
    };

    match normalize_competition(entries) {
        Some(pairs) => {
            for (glider, score) in pairs {
                aggregate.insert_or_merge(&glider, score);
            }
            CompetitionOutcome::Valid
        }
        None => CompetitionOutcome::Skipped,
    }
}

fn record_outcome(progress: &ScrapeProgress, comp_id: u32, outcome: CompetitionOutcome) {
    match outcome {
        CompetitionOutcome::Valid => progress.record_valid(),
        CompetitionOutcome::Skipped => progress.record_skipped(),
        CompetitionOutcome::Failed(reason) => {
            warn!("Competition {}: {}", comp_id, reason);
            progress.record_failed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RankedEntry;

    #[test]
    fn test_record_outcome_routes_to_the_right_counter() {
        let progress = ScrapeProgress::new(3);
        record_outcome(&progress, 1, CompetitionOutcome::Valid);
        record_outcome(&progress, 2, CompetitionOutcome::Skipped);
        record_outcome(&progress, 3, CompetitionOutcome::Failed("boom".to_string()));

        assert_eq!(progress.valid_count(), 1);
        assert_eq!(progress.skipped_count(), 1);
        assert_eq!(progress.failed_count(), 1);
    }

    #[test]
    fn test_competition_order_does_not_change_the_aggregate() {
        let competitions = vec![
            vec![
                RankedEntry::new("Discus", 100),
                RankedEntry::new("JS1", 50),
                RankedEntry::new("ASW 20", 0),
            ],
            vec![
                RankedEntry::new("JS1", 900),
                RankedEntry::new("Discus", 700),
                RankedEntry::new("Ventus", 500),
            ],
        ];

        let forward = merge_all(competitions.clone());
        let reverse = merge_all(competitions.into_iter().rev().collect());

        assert_eq!(forward.sorted_entries(), reverse.sorted_entries());
    }

    fn merge_all(competitions: Vec<Vec<RankedEntry>>) -> GliderAggregate {
        let aggregate = GliderAggregate::new();
        for entries in competitions {
            if let Some(pairs) = normalize_competition(entries) {
                for (glider, score) in pairs {
                    aggregate.insert_or_merge(&glider, score);
                }
            }
        }
        aggregate
    }
}
