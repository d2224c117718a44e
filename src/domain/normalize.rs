use std::collections::BTreeSet;

use super::models::RankedEntry;
use super::score::Score;

/// A competition with fewer entries than this carries too little signal.
pub const MIN_ENTRIES: usize = 3;

/// Rescale one competition's points into [0, 1] relative scores.
///
/// Entries are ranked by points; the top glider maps to 1.0, the bottom to
/// 0.0, everyone else proportionally in between (rounded to two decimals).
/// When every glider scored the same, all map to 0. Duplicate
/// (glider, score) pairs collapse into one set entry. Returns `None` when
/// the competition has fewer than [`MIN_ENTRIES`] entries.
pub fn normalize_competition(mut entries: Vec<RankedEntry>) -> Option<BTreeSet<(String, Score)>> {
    if entries.len() < MIN_ENTRIES {
        return None;
    }

    sort_by_points_desc(&mut entries);

    let max = entries[0].points;
    let min = entries[entries.len() - 1].points;
    let range = max - min;

    let pairs = entries
        .into_iter()
        .map(|entry| (entry.glider, Score::from_ratio(entry.points, min, range)))
        .collect();

    Some(pairs)
}

fn sort_by_points_desc(entries: &mut [RankedEntry]) {
    entries.sort_by(|a, b| b.points.cmp(&a.points));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(glider: &str, points: i64) -> RankedEntry {
        RankedEntry::new(glider, points)
    }

    fn pair(glider: &str, hundredths: u32) -> (String, Score) {
        (glider.to_string(), Score::from_ratio(hundredths as i64, 0, 100))
    }

    #[test]
    fn test_extremes_normalize_to_zero_and_one() {
        let pairs =
            normalize_competition(vec![entry("A", 100), entry("B", 50), entry("C", 0)]).unwrap();

        // Top glider is 1.0, bottom is 0.0, midfield proportional.
        assert!(pairs.contains(&pair("A", 100)));
        assert!(pairs.contains(&pair("B", 50)));
        assert!(pairs.contains(&pair("C", 0)));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_offsets_rescale_against_the_minimum() {
        let pairs =
            normalize_competition(vec![entry("A", 300), entry("B", 250), entry("C", 200)]).unwrap();

        assert!(pairs.contains(&pair("A", 100)));
        assert!(pairs.contains(&pair("B", 50)));
        assert!(pairs.contains(&pair("C", 0)));
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = normalize_competition(vec![entry("A", 100), entry("B", 50), entry("C", 0)]);
        let b = normalize_competition(vec![entry("C", 0), entry("A", 100), entry("B", 50)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equal_scores_all_map_to_zero() {
        let pairs =
            normalize_competition(vec![entry("A", 10), entry("B", 10), entry("C", 10)]).unwrap();

        assert!(pairs.iter().all(|(_, score)| *score == Score::ZERO));
        // Identical pairs collapse, distinct gliders do not.
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_too_few_entries_are_skipped() {
        assert_eq!(normalize_competition(vec![]), None);
        assert_eq!(normalize_competition(vec![entry("A", 10)]), None);
        assert_eq!(normalize_competition(vec![entry("A", 10), entry("B", 10)]), None);
    }

    #[test]
    fn test_duplicate_pairs_collapse() {
        let pairs = normalize_competition(vec![
            entry("A", 100),
            entry("A", 100),
            entry("B", 50),
            entry("C", 0),
        ])
        .unwrap();

        assert_eq!(pairs.len(), 3);
    }
}
