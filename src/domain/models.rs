/// One row scraped from a competition results table, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub glider: String,
    pub points: i64,
}

impl RankedEntry {
    pub fn new(glider: impl Into<String>, points: i64) -> Self {
        Self {
            glider: glider.into(),
            points,
        }
    }
}

/// Tagged per-competition outcome, so the run reports exact counts instead
/// of relying on dropped task errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompetitionOutcome {
    /// Enough entries; normalized scores were merged into the aggregate.
    Valid,
    /// Fewer than the minimum number of entries, nothing contributed.
    Skipped,
    /// Fetch or parse failure; the rest of the run is unaffected.
    Failed(String),
}
