//! High score leaderboard
//!
//! Tracks the top 10 runs of a session, ranked by displayed score.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, display_score};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Displayed score at the end of the run
    pub score: u64,
    /// Stored distance accumulator
    pub distance: f32,
    /// Checkpoints picked up
    pub checkpoints: u32,
    /// Run length (ms)
    pub elapsed_ms: f32,
}

impl HighScoreEntry {
    /// Summarize a finished run
    pub fn from_run(state: &GameState) -> Self {
        Self {
            score: display_score(state),
            distance: state.distance,
            checkpoints: state.checkpoints_collected,
            elapsed_ms: state.elapsed_ms,
        }
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
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
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished run to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| entry.score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u64) -> HighScoreEntry {
        HighScoreEntry {
            score,
            distance: score as f32,
            checkpoints: 0,
            elapsed_ms: 1000.0,
        }
    }

    #[test]
    fn test_ranking() {
        let mut scores = HighScores::new();
        assert!(scores.is_empty());
        assert_eq!(scores.add_score(entry(500)), Some(1));
        assert_eq!(scores.add_score(entry(900)), Some(1));
        assert_eq!(scores.add_score(entry(700)), Some(2));
        assert_eq!(scores.top_score(), Some(900));
        assert_eq!(scores.potential_rank(800), Some(2));
        assert_eq!(scores.add_score(entry(0)), None);
    }

    #[test]
    fn test_keeps_top_ten() {
        let mut scores = HighScores::new();
        for s in 1..=15 {
            scores.add_score(entry(s * 100));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(1500));
        assert!(!scores.qualifies(600));
        assert!(scores.qualifies(601));
        assert_eq!(scores.potential_rank(100), None);
    }

    #[test]
    fn test_from_run() {
        let mut state = GameState::default();
        state.distance = 1234.9;
        state.checkpoints_collected = 3;
        let e = HighScoreEntry::from_run(&state);
        assert_eq!(e.score, 1234);
        assert_eq!(e.checkpoints, 3);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut scores = HighScores::new();
        scores.add_score(entry(321));
        let restored = HighScores::from_json(&scores.to_json().unwrap()).unwrap();
        assert_eq!(restored.entries, scores.entries);
    }
}
