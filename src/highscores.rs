//! High score leaderboard
//!
//! Top 3 scores with three-letter initials, highest first. Storage lives in
//! [`crate::persistence`].

use serde::{Deserialize, Serialize};

/// Table size
pub const MAX_HIGH_SCORES: usize = 3;

/// Length of the initials field
pub const INITIALS_LEN: usize = 3;

/// One row of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Three uppercase characters
    pub initials: String,
    pub score: u64,
}

/// Entries sorted by score, highest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

/// Uppercase, alphanumeric only, padded with '-' or cut to three characters
pub fn normalize_initials(raw: &str) -> String {
    let mut initials: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .take(INITIALS_LEN)
        .collect();
    while initials.len() < INITIALS_LEN {
        initials.push('-');
    }
    initials
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot a score would take (0-based), if it makes the table at all.
    /// Ties rank below existing entries.
    fn slot_for(&self, score: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let slot = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        (slot < MAX_HIGH_SCORES).then_some(slot)
    }

    /// Whether `score` would earn a place on the table.
    /// A score of zero never qualifies, even with free slots.
    pub fn qualifies(&self, score: u64) -> bool {
        self.slot_for(score).is_some()
    }

    /// 1-based rank `score` would get, without inserting it
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        self.slot_for(score).map(|slot| slot + 1)
    }

    /// Insert a score under the given initials, dropping whatever falls off
    /// the bottom. Returns the 1-based rank, or None when it didn't make it.
    pub fn add_score(&mut self, initials: &str, score: u64) -> Option<usize> {
        let slot = self.slot_for(score)?;
        self.entries.insert(
            slot,
            HighScoreEntry {
                initials: normalize_initials(initials),
                score,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    /// Restore the ordering/size guarantees on data read from storage
    pub fn sanitize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
        for entry in &mut self.entries {
            entry.initials = normalize_initials(&entry.initials);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score on the table
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full_table() -> HighScores {
        let mut table = HighScores::new();
        table.add_score("AAA", 3000);
        table.add_score("BBB", 2000);
        table.add_score("CCC", 1000);
        table
    }

    #[test]
    fn test_qualifies() {
        let empty = HighScores::new();
        assert!(empty.qualifies(1));
        assert!(!empty.qualifies(0));

        let table = full_table();
        assert!(table.qualifies(1001));
        assert!(!table.qualifies(1000));
        assert!(!table.qualifies(5));
    }

    #[test]
    fn test_insert_in_order_and_truncate() {
        let mut table = full_table();
        assert_eq!(table.potential_rank(2500), Some(2));
        assert_eq!(table.add_score("dee", 2500), Some(2));

        let scores: Vec<_> = table.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![3000, 2500, 2000]);
        assert_eq!(table.entries[1].initials, "DEE");
        assert_eq!(table.top_score(), Some(3000));
    }

    #[test]
    fn test_low_score_rejected() {
        let mut table = full_table();
        assert_eq!(table.add_score("ZZZ", 500), None);
        assert_eq!(table.entries.len(), 3);
        assert_eq!(table.potential_rank(500), None);
    }

    #[test]
    fn test_normalize_initials() {
        assert_eq!(normalize_initials("ab"), "AB-");
        assert_eq!(normalize_initials("j.r.r.t"), "JRR");
        assert_eq!(normalize_initials(""), "---");
    }

    #[test]
    fn test_sanitize() {
        let mut table = HighScores {
            entries: vec![
                HighScoreEntry { initials: "x".into(), score: 10 },
                HighScoreEntry { initials: "yyyy".into(), score: 30 },
                HighScoreEntry { initials: "zz".into(), score: 20 },
                HighScoreEntry { initials: "ww".into(), score: 5 },
            ],
        };
        table.sanitize();
        let scores: Vec<_> = table.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 10]);
        assert_eq!(table.entries[0].initials, "YYY");
    }

    proptest! {
        #[test]
        fn prop_table_stays_sorted_and_bounded(
            scores in proptest::collection::vec(0u64..10_000, 0..20)
        ) {
            let mut table = HighScores::new();
            for s in &scores {
                table.add_score("ABC", *s);
            }
            prop_assert!(table.entries.len() <= MAX_HIGH_SCORES);
            prop_assert!(table.entries.windows(2).all(|w| w[0].score >= w[1].score));

            // The table holds the best non-zero scores seen
            let mut best: Vec<u64> = scores.iter().copied().filter(|s| *s > 0).collect();
            best.sort_unstable_by(|a, b| b.cmp(a));
            best.truncate(MAX_HIGH_SCORES);
            let kept: Vec<u64> = table.entries.iter().map(|e| e.score).collect();
            prop_assert_eq!(kept, best);
        }
    }
}
