//! Session high score leaderboard
//!
//! Tracks the top 10 run scores of the current process. Nothing is persisted
//! across runs; the list exists so the game-over overlay can show how the
//! run compared to earlier ones this session.

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// High score leaderboard, sorted descending
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    pub entries: Vec<u64>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|&s| score > s).unwrap_or(true)
    }

    /// Add a run to the leaderboard if it qualifies.
    /// Returns the rank achieved (1-indexed) or None.
    pub fn add_score(&mut self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let pos = self.entries.iter().position(|&s| score > s);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, score);
                i + 1
            }
            None => {
                self.entries.push(score);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_scores_never_qualify() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn test_ranking_and_truncation() {
        let mut scores = HighScores::new();
        for s in 1..=12u64 {
            scores.add_score(s);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(12));
        // 3 is now the lowest kept entry, 2 no longer qualifies
        assert!(!scores.qualifies(2));
        assert_eq!(scores.add_score(7), Some(7));
    }
}
