//! Quiz configuration
//!
//! Chosen on the settings screen, frozen while a game runs, and restored to
//! defaults on restart.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_QUESTIONS, DEFAULT_TABLE, MAX_QUESTIONS, MAX_TABLE, MIN_QUESTIONS, MIN_TABLE,
    QUESTION_STEP,
};
use crate::error::ConfigError;
use crate::quiz::Difficulty;

/// Times tables offered on the settings screen
pub const TABLES: [u32; 11] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Quiz parameters for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Times table every question uses as its first operand
    pub table: u32,
    /// Number of questions (multiple of 5 in 5..=20)
    pub question_count: usize,
    pub difficulty: Difficulty,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE,
            question_count: DEFAULT_QUESTIONS,
            difficulty: Difficulty::Medium,
        }
    }
}

impl QuizConfig {
    /// Build a validated configuration
    pub fn new(
        table: u32,
        question_count: usize,
        difficulty: Difficulty,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            table,
            question_count,
            difficulty,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_table(self.table) {
            return Err(ConfigError::TableOutOfRange { table: self.table });
        }
        if !is_valid_question_count(self.question_count) {
            return Err(ConfigError::InvalidQuestionCount {
                count: self.question_count,
            });
        }
        Ok(())
    }

    pub fn select_table(&mut self, table: u32) -> Result<(), ConfigError> {
        if !is_valid_table(table) {
            return Err(ConfigError::TableOutOfRange { table });
        }
        self.table = table;
        Ok(())
    }

    /// Next table, wrapping 12 back to 2
    pub fn next_table(&mut self) {
        self.table = if self.table >= MAX_TABLE {
            MIN_TABLE
        } else {
            self.table + 1
        };
    }

    /// Previous table, wrapping 2 around to 12
    pub fn previous_table(&mut self) {
        self.table = if self.table <= MIN_TABLE {
            MAX_TABLE
        } else {
            self.table - 1
        };
    }

    pub fn set_question_count(&mut self, count: usize) -> Result<(), ConfigError> {
        if !is_valid_question_count(count) {
            return Err(ConfigError::InvalidQuestionCount { count });
        }
        self.question_count = count;
        Ok(())
    }

    /// Stepper "+": add 5, capped at 20
    pub fn increment_questions(&mut self) {
        self.question_count = (self.question_count + QUESTION_STEP).min(MAX_QUESTIONS);
    }

    /// Stepper "-": subtract 5, floored at 5
    pub fn decrement_questions(&mut self) {
        self.question_count = self
            .question_count
            .saturating_sub(QUESTION_STEP)
            .max(MIN_QUESTIONS);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn cycle_difficulty(&mut self) {
        self.difficulty = self.difficulty.next();
    }
}

fn is_valid_table(table: u32) -> bool {
    (MIN_TABLE..=MAX_TABLE).contains(&table)
}

fn is_valid_question_count(count: usize) -> bool {
    (MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) && count % QUESTION_STEP == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.table, 2);
        assert_eq!(config.question_count, 5);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_stepper_bounds() {
        let mut config = QuizConfig::default();
        config.decrement_questions();
        assert_eq!(config.question_count, 5);

        for expected in [10, 15, 20, 20] {
            config.increment_questions();
            assert_eq!(config.question_count, expected);
        }

        for expected in [15, 10, 5, 5] {
            config.decrement_questions();
            assert_eq!(config.question_count, expected);
        }
    }

    #[test]
    fn test_select_table_rejects_out_of_range() {
        let mut config = QuizConfig::default();
        assert_eq!(
            config.select_table(13),
            Err(ConfigError::TableOutOfRange { table: 13 })
        );
        assert_eq!(
            config.select_table(1),
            Err(ConfigError::TableOutOfRange { table: 1 })
        );
        assert_eq!(config.table, 2);

        config.select_table(12).unwrap();
        assert_eq!(config.table, 12);
    }

    #[test]
    fn test_table_cycling_wraps() {
        let mut config = QuizConfig::default();
        config.previous_table();
        assert_eq!(config.table, 12);
        config.next_table();
        assert_eq!(config.table, 2);
        config.next_table();
        assert_eq!(config.table, 3);
    }

    #[test]
    fn test_table_cycle_visits_every_table() {
        let mut config = QuizConfig::default();
        let mut visited = vec![config.table];
        for _ in 1..TABLES.len() {
            config.next_table();
            visited.push(config.table);
        }
        assert_eq!(visited, TABLES.to_vec());
    }

    #[test]
    fn test_question_count_validation() {
        let mut config = QuizConfig::default();
        assert!(config.set_question_count(15).is_ok());
        assert_eq!(config.question_count, 15);
        assert_eq!(
            config.set_question_count(7),
            Err(ConfigError::InvalidQuestionCount { count: 7 })
        );
        assert_eq!(
            config.set_question_count(25),
            Err(ConfigError::InvalidQuestionCount { count: 25 })
        );
        assert_eq!(
            config.set_question_count(0),
            Err(ConfigError::InvalidQuestionCount { count: 0 })
        );
        assert_eq!(config.question_count, 15);
    }

    #[test]
    fn test_difficulty_selection() {
        let mut config = QuizConfig::default();
        config.set_difficulty(Difficulty::Easy);
        assert_eq!(config.difficulty, Difficulty::Easy);
        config.cycle_difficulty();
        config.cycle_difficulty();
        assert_eq!(config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_new_validates() {
        assert!(QuizConfig::new(7, 10, Difficulty::Hard).is_ok());
        assert!(QuizConfig::new(0, 10, Difficulty::Hard).is_err());
        assert!(QuizConfig::new(7, 12, Difficulty::Hard).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::TableOutOfRange { table: 13 };
        assert_eq!(err.to_string(), "times table 13 is outside 2..=12");
        let err = ConfigError::InvalidQuestionCount { count: 7 };
        assert_eq!(
            err.to_string(),
            "question count 7 must be a multiple of 5 in 5..=20"
        );
    }
}
