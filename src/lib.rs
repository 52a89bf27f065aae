//! CosMath - A multiplication-table space quiz
//!
//! Core modules:
//! - `quiz`: Deterministic quiz core (questions, scoring, session state machine)
//! - `settings`: Quiz configuration chosen on the settings screen
//! - `scorecard`: Results screen summary (answer sheet + planet reward)
//! - `ui`: Terminal keypad front end (crossterm)
//! - `app_config`: Process-level runtime configuration

pub mod app_config;
pub mod error;
pub mod quiz;
pub mod scorecard;
pub mod settings;
pub mod ui;

pub use app_config::AppConfig;
pub use error::ConfigError;
pub use quiz::{Action, AnswerOutcome, Difficulty, Planet, Reward, Screen, Session};
pub use scorecard::ScoreCard;
pub use settings::QuizConfig;

/// Quiz configuration constants
pub mod consts {
    /// Times tables offered on the settings screen
    pub const MIN_TABLE: u32 = 2;
    pub const MAX_TABLE: u32 = 12;
    pub const DEFAULT_TABLE: u32 = 2;

    /// Question count stepper bounds (always a multiple of `QUESTION_STEP`)
    pub const MIN_QUESTIONS: usize = 5;
    pub const MAX_QUESTIONS: usize = 20;
    pub const QUESTION_STEP: usize = 5;
    pub const DEFAULT_QUESTIONS: usize = 5;

    /// Points gained for a correct answer and lost for a wrong one
    pub const POINTS_PER_ANSWER: i64 = 10;

    /// Keypad input cap, keeps parsed answers well inside i64
    pub const MAX_INPUT_DIGITS: usize = 6;

    /// Multiplier used when a difficulty label is not recognized
    pub const FALLBACK_MULTIPLIER: u32 = 1;
}
