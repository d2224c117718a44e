use std::collections::BTreeSet;

use dashmap::DashMap;

use super::score::Score;

/// Cross-competition union of normalized scores, keyed by glider name.
///
/// Written to by many fetch tasks at once. `DashMap`'s entry API makes
/// insert-or-create-then-add atomic per key, so two tasks discovering the
/// same new glider at the same time cannot lose an insert. Identical
/// normalized values from different competitions collapse into one set
/// entry.
pub struct GliderAggregate {
    scores: DashMap<String, BTreeSet<Score>>,
}

impl GliderAggregate {
    pub fn new() -> Self {
        Self {
            scores: DashMap::new(),
        }
    }

    /// Add one normalized score to a glider's set, creating the set on
    /// first sight of the name.
    pub fn insert_or_merge(&self, glider: &str, score: Score) {
        self.scores.entry(glider.to_string()).or_default().insert(score);
    }

    /// Number of distinct glider names seen so far.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, glider: &str) -> Option<BTreeSet<Score>> {
        self.scores.get(glider).map(|entry| entry.value().clone())
    }

    /// Snapshot of the whole aggregate, sorted by glider name for a
    /// deterministic flush order.
    pub fn sorted_entries(&self) -> Vec<(String, BTreeSet<Score>)> {
        let mut entries: Vec<_> = self
            .scores
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

impl Default for GliderAggregate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(hundredths: u32) -> Score {
        Score::from_ratio(hundredths as i64, 0, 100)
    }

    #[test]
    fn test_insert_creates_then_extends() {
        let aggregate = GliderAggregate::new();
        aggregate.insert_or_merge("discus", score(50));
        aggregate.insert_or_merge("discus", score(75));

        let scores = aggregate.get("discus").unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(aggregate.len(), 1);
    }

    #[test]
    fn test_duplicate_scores_collapse() {
        let aggregate = GliderAggregate::new();
        aggregate.insert_or_merge("discus", score(50));
        aggregate.insert_or_merge("discus", score(50));

        assert_eq!(aggregate.get("discus").unwrap().len(), 1);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let forward = GliderAggregate::new();
        let reverse = GliderAggregate::new();
        let inserts = [("a", 10), ("b", 20), ("a", 30), ("c", 0), ("b", 20)];

        for (glider, h) in inserts {
            forward.insert_or_merge(glider, score(h));
        }
        for (glider, h) in inserts.iter().rev() {
            reverse.insert_or_merge(glider, score(*h));
        }

        assert_eq!(forward.sorted_entries(), reverse.sorted_entries());
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_not_lost() {
        use std::sync::Arc;

        let aggregate = Arc::new(GliderAggregate::new());
        let mut tasks = tokio::task::JoinSet::new();

        for h in 0..100u32 {
            let aggregate = Arc::clone(&aggregate);
            tasks.spawn(async move {
                aggregate.insert_or_merge("shared", score(h));
                aggregate.insert_or_merge(&format!("glider{}", h), score(h));
            });
        }
        while tasks.join_next().await.is_some() {}

        assert_eq!(aggregate.get("shared").unwrap().len(), 100);
        assert_eq!(aggregate.len(), 101);
    }
}
