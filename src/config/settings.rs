use std::path::PathBuf;

/// Parameters of a ranking-site scrape run.
pub struct ScraperSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    /// First competition id to fetch.
    pub first_comp_id: u32,
    /// Last competition id to fetch, inclusive.
    pub last_comp_id: u32,
    /// Maximum number of simultaneous fetch tasks.
    pub concurrency: usize,
    /// Directory holding the per-glider score files.
    pub scores_dir: PathBuf,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            base_url: "https://rankingdata.fai.org".to_string(),
            user_agent: "GliderScores/0.1",
            timeout_secs: 30,
            first_comp_id: 1,
            last_comp_id: 4999,
            concurrency: 30,
            scores_dir: PathBuf::from("gliders_scores"),
        }
    }
}

impl ScraperSettings {
    pub fn competition_count(&self) -> usize {
        (self.last_comp_id.saturating_sub(self.first_comp_id) as usize) + 1
    }
}
