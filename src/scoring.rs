//! Round scoring.
//!
//! A solved round is worth 100 points. The first clue is free; every clue
//! after it costs 20 (never dropping the base below 10), and every wrong guess
//! costs 10. The result never goes below zero.

use serde::{Deserialize, Serialize};

pub const MAX_ROUND_POINTS: u32 = 100;
pub const CLUE_COST: u32 = 20;
pub const MISS_COST: u32 = 10;
pub const BASE_FLOOR: u32 = 10;

/// Points before the miss penalty.
pub fn base_points(clues_used: u32) -> u32 {
    let extra = clues_used.saturating_sub(1);
    MAX_ROUND_POINTS
        .saturating_sub(extra.saturating_mul(CLUE_COST))
        .max(BASE_FLOOR)
}

/// Points deducted for wrong guesses.
pub fn miss_penalty(incorrect_guesses: u32) -> u32 {
    incorrect_guesses.saturating_mul(MISS_COST)
}

/// Points awarded for solving a round.
///
/// ```rust
/// use guesswork::scoring::score;
///
/// assert_eq!(score(1, 0), 100);
/// assert_eq!(score(2, 2), 60);
/// assert_eq!(score(2, 10), 0);
/// ```
pub fn score(clues_used: u32, incorrect_guesses: u32) -> u32 {
    base_points(clues_used).saturating_sub(miss_penalty(incorrect_guesses))
}

/// Running deductions for the round in progress, for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltySummary {
    /// Clues revealed beyond the free one
    pub extra_clues: u32,
    /// Points lost to extra clues
    pub clue_penalty: u32,
    pub incorrect_guesses: u32,
    /// Points lost to wrong guesses
    pub miss_penalty: u32,
    /// What the round would be worth if solved now
    pub points_if_solved: u32,
}

impl PenaltySummary {
    pub fn new(clues_used: u32, incorrect_guesses: u32) -> Self {
        let extra_clues = clues_used.saturating_sub(1);
        Self {
            extra_clues,
            clue_penalty: extra_clues.saturating_mul(CLUE_COST),
            incorrect_guesses,
            miss_penalty: miss_penalty(incorrect_guesses),
            points_if_solved: score(clues_used, incorrect_guesses),
        }
    }
}
