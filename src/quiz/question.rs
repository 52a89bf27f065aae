//! Question generation and formatting
//!
//! A question is always `table x multiplier`, where the multiplier range
//! depends on the chosen difficulty.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::FALLBACK_MULTIPLIER;

/// Difficulty levels offered on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in settings-screen order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Inclusive range the multiplier is drawn from
    pub fn multiplier_range(&self) -> RangeInclusive<u32> {
        match self {
            Difficulty::Easy => 1..=5,
            Difficulty::Medium => 1..=10,
            Difficulty::Hard => 1..=12,
        }
    }

    /// Next difficulty, wrapping Hard back to Easy
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Draw a multiplier uniformly from the difficulty's range
pub fn generate_multiplier<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> u32 {
    rng.random_range(difficulty.multiplier_range())
}

/// Draw a multiplier for a difficulty given by name.
///
/// Unrecognized labels always yield `FALLBACK_MULTIPLIER` and consume no
/// randomness.
pub fn generate_multiplier_for_label<R: Rng + ?Sized>(label: &str, rng: &mut R) -> u32 {
    match Difficulty::from_str(label) {
        Some(difficulty) => generate_multiplier(difficulty, rng),
        None => FALLBACK_MULTIPLIER,
    }
}

/// Question prompt shown during the game, e.g. `"7 x 8 = ?"`
pub fn format_question(a: u32, b: u32) -> String {
    format!("{} x {} = ?", a, b)
}

/// Worked line for the answer sheet, e.g. `"7 x 8 = 56"`
pub fn format_archival(a: u32, b: u32, answer: u32) -> String {
    format!("{} x {} = {}", a, b, answer)
}

/// A single multiplication question (immutable once generated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The chosen times table
    pub operand_a: u32,
    /// Random multiplier
    pub operand_b: u32,
}

impl Question {
    pub fn new(operand_a: u32, operand_b: u32) -> Self {
        Self {
            operand_a,
            operand_b,
        }
    }

    /// Generate a question for `table` with a multiplier drawn per `difficulty`
    pub fn generate<R: Rng + ?Sized>(table: u32, difficulty: Difficulty, rng: &mut R) -> Self {
        Self::new(table, generate_multiplier(difficulty, rng))
    }

    #[inline]
    pub fn answer(&self) -> u32 {
        self.operand_a * self.operand_b
    }

    pub fn display_text(&self) -> String {
        format_question(self.operand_a, self.operand_b)
    }

    pub fn archival_text(&self) -> String {
        format_archival(self.operand_a, self.operand_b, self.answer())
    }
}
