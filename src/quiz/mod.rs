//! Deterministic quiz core
//!
//! All game logic lives here. This module must stay free of terminal code:
//! - Seeded RNG only (injectable through `RngState`)
//! - Every user action is a synchronous state transition
//! - Rendering reads state through accessors, never mutates it

pub mod question;
pub mod reward;
pub mod rng;
pub mod session;

pub use question::{
    Difficulty, Question, format_archival, format_question, generate_multiplier,
    generate_multiplier_for_label,
};
pub use reward::{Planet, Reward, compute_reward};
pub use rng::RngState;
pub use session::{
    Action, AnswerOutcome, ConfigEdit, QuestionLoad, Screen, Session, SessionEvent,
};
