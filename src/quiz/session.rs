//! Quiz session state machine
//!
//! One authoritative `screen` drives every transition:
//! Main -> Settings -> Game -> Score, and Restart returns to Main from any
//! screen. Every action runs to completion and reports what changed as a
//! list of `SessionEvent`s; renderers read state back through accessors.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::question::Question;
use super::reward::{Reward, compute_reward};
use super::rng::RngState;
use crate::consts::{MAX_INPUT_DIGITS, POINTS_PER_ANSWER};
use crate::error::ConfigError;
use crate::settings::QuizConfig;

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Screen {
    /// Title screen with the planet gallery
    #[default]
    Main,
    /// Table, question count and difficulty pickers
    Settings,
    /// Question/answer loop on the keypad
    Game,
    /// Answer sheet and planet reward
    Score,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Main => "Main",
            Screen::Settings => "Settings",
            Screen::Game => "Game",
            Screen::Score => "Score",
        }
    }
}

/// Result of checking one submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    /// Transient feedback shown after a submit
    pub fn message(&self) -> &'static str {
        match self {
            AnswerOutcome::Correct => "Correct!",
            AnswerOutcome::Incorrect => "Wrong!",
        }
    }

    /// Score delta for this outcome
    pub fn points(&self) -> i64 {
        match self {
            AnswerOutcome::Correct => POINTS_PER_ANSWER,
            AnswerOutcome::Incorrect => -POINTS_PER_ANSWER,
        }
    }
}

/// Settings screen edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigEdit {
    NextTable,
    PreviousTable,
    MoreQuestions,
    FewerQuestions,
    NextDifficulty,
}

/// User actions fed into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// "EXPLORE" on the main screen
    Explore,
    EditConfig(ConfigEdit),
    /// "START" on the settings screen
    Start,
    PressDigit(u8),
    Backspace,
    /// "SUBMIT" during the game
    Submit,
    /// Dismiss the Correct!/Wrong! feedback
    Acknowledge,
    Restart,
}

/// What an action changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ScreenChanged { from: Screen, to: Screen },
    ConfigChanged(QuizConfig),
    InputChanged,
    Answered {
        outcome: AnswerOutcome,
        expected: u32,
        given: i64,
    },
    QuestionShown { index: usize },
    GameOver { reward: Reward },
    /// Action is not valid in the current state
    Ignored(Action),
}

/// Result of loading the question under the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionLoad {
    Question {
        display_text: String,
        expected_answer: u32,
    },
    /// Cursor has passed the last question
    GameOver,
}

/// Complete state of one quiz playthrough
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    rng: RngState,
    screen: Screen,
    config: QuizConfig,
    questions: Vec<Question>,
    answers: Vec<u32>,
    /// Worked lines for the answer sheet (only cleared by a reset)
    archive: Vec<String>,
    current_index: usize,
    score: i64,
    correct_count: usize,
    input_buffer: String,
    display_text: String,
    expected_answer: u32,
    /// Last parsed entry, zeroed whenever a question is loaded
    user_answer: i64,
    feedback: Option<AnswerOutcome>,
    reward: Option<Reward>,
}

impl Session {
    pub fn new(rng: RngState) -> Self {
        Self {
            rng,
            screen: Screen::Main,
            config: QuizConfig::default(),
            questions: Vec::new(),
            answers: Vec::new(),
            archive: Vec::new(),
            current_index: 0,
            score: 0,
            correct_count: 0,
            input_buffer: String::new(),
            display_text: String::new(),
            expected_answer: 0,
            user_answer: 0,
            feedback: None,
            reward: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(RngState::new(seed))
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[u32] {
        &self.answers
    }

    pub fn archive(&self) -> &[String] {
        &self.archive
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn expected_answer(&self) -> u32 {
        self.expected_answer
    }

    pub fn user_answer(&self) -> i64 {
        self.user_answer
    }

    pub fn feedback(&self) -> Option<AnswerOutcome> {
        self.feedback
    }

    pub fn feedback_message(&self) -> Option<&'static str> {
        self.feedback.map(|outcome| outcome.message())
    }

    pub fn reward(&self) -> Option<&Reward> {
        self.reward.as_ref()
    }

    /// Progress counter `(n, total)`; `n` never exceeds `total`
    pub fn progress(&self) -> (usize, usize) {
        let total = self.config.question_count;
        ((self.current_index + 1).min(total), total)
    }

    /// Apply one user action
    pub fn apply(&mut self, action: Action) -> Vec<SessionEvent> {
        match action {
            Action::Explore => self.explore(),
            Action::EditConfig(edit) => self.edit_config(edit),
            Action::Start => match self.start_game(self.config) {
                Ok(events) => events,
                Err(err) => {
                    warn!("Refusing to start game: {}", err);
                    vec![SessionEvent::Ignored(action)]
                }
            },
            Action::PressDigit(digit) => self.press_digit(digit),
            Action::Backspace => self.press_backspace(),
            Action::Submit => self.submit(),
            Action::Acknowledge => self.acknowledge(),
            Action::Restart => self.restart(),
        }
    }

    /// Main -> Settings
    pub fn explore(&mut self) -> Vec<SessionEvent> {
        if self.screen != Screen::Main {
            return self.ignored(Action::Explore);
        }
        vec![self.set_screen(Screen::Settings)]
    }

    /// Edit the configuration (settings screen only)
    pub fn edit_config(&mut self, edit: ConfigEdit) -> Vec<SessionEvent> {
        if self.screen != Screen::Settings {
            return self.ignored(Action::EditConfig(edit));
        }
        match edit {
            ConfigEdit::NextTable => self.config.next_table(),
            ConfigEdit::PreviousTable => self.config.previous_table(),
            ConfigEdit::MoreQuestions => self.config.increment_questions(),
            ConfigEdit::FewerQuestions => self.config.decrement_questions(),
            ConfigEdit::NextDifficulty => self.config.cycle_difficulty(),
        }
        debug!("Config edited ({:?}): {:?}", edit, self.config);
        vec![SessionEvent::ConfigChanged(self.config)]
    }

    /// Settings -> Game with a freshly generated question set.
    ///
    /// The score, cursor, input and answer sheet are reset before generation
    /// so a started game never inherits lines from an earlier set.
    pub fn start_game(&mut self, config: QuizConfig) -> Result<Vec<SessionEvent>, ConfigError> {
        if self.screen != Screen::Settings {
            return Ok(self.ignored(Action::Start));
        }
        config.validate()?;

        self.config = config;
        self.score = 0;
        self.correct_count = 0;
        self.current_index = 0;
        self.input_buffer.clear();
        self.archive.clear();
        self.feedback = None;
        self.reward = None;
        self.generate_questions();

        info!(
            "Starting game: table {}, {} questions, {} (seed {})",
            self.config.table,
            self.config.question_count,
            self.config.difficulty.as_str(),
            self.rng.seed
        );

        let mut events = vec![self.set_screen(Screen::Game)];
        if let QuestionLoad::Question { .. } = self.load_current_question() {
            events.push(SessionEvent::QuestionShown {
                index: self.current_index,
            });
        }
        Ok(events)
    }

    /// Generate `question_count` questions from the current configuration.
    ///
    /// Replaces the question and answer sequences but appends to the answer
    /// sheet; only a reset clears it.
    pub fn generate_questions(&mut self) {
        let QuizConfig {
            table,
            question_count,
            difficulty,
        } = self.config;

        self.questions.clear();
        self.answers.clear();

        for _ in 0..question_count {
            let question = Question::generate(table, difficulty, self.rng.rng());
            self.answers.push(question.answer());
            self.archive.push(question.archival_text());
            self.questions.push(question);
        }
        debug!("Generated {} questions for table {}", question_count, table);
    }

    /// Load the question under the cursor for display.
    ///
    /// Never moves the cursor or touches the score.
    pub fn load_current_question(&mut self) -> QuestionLoad {
        match self.questions.get(self.current_index) {
            Some(question) => {
                self.display_text = question.display_text();
                self.expected_answer = question.answer();
                self.user_answer = 0;
                QuestionLoad::Question {
                    display_text: self.display_text.clone(),
                    expected_answer: self.expected_answer,
                }
            }
            None => QuestionLoad::GameOver,
        }
    }

    /// Check `raw_input` against the current question and advance the cursor.
    ///
    /// Input that does not parse as an integer counts as `0`. Returns `None`
    /// only when every question has already been answered.
    pub fn submit_answer(&mut self, raw_input: &str) -> Option<AnswerOutcome> {
        let expected = *self.answers.get(self.current_index)?;
        let given = raw_input.parse::<i64>().unwrap_or(0);
        self.user_answer = given;

        let outcome = if given == i64::from(expected) {
            self.correct_count += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        };
        self.score += outcome.points();
        self.current_index += 1;

        debug!(
            "Answer {} for question {}: expected {}, {:?} (score {})",
            given, self.current_index, expected, outcome, self.score
        );
        Some(outcome)
    }

    pub fn press_digit(&mut self, digit: u8) -> Vec<SessionEvent> {
        if !self.accepting_input() || digit > 9 || self.input_buffer.len() >= MAX_INPUT_DIGITS {
            return self.ignored(Action::PressDigit(digit));
        }
        self.input_buffer.push(char::from(b'0' + digit));
        vec![SessionEvent::InputChanged]
    }

    pub fn press_backspace(&mut self) -> Vec<SessionEvent> {
        if !self.accepting_input() || self.input_buffer.pop().is_none() {
            return self.ignored(Action::Backspace);
        }
        vec![SessionEvent::InputChanged]
    }

    /// Submit the keypad buffer and show Correct!/Wrong! feedback
    pub fn submit(&mut self) -> Vec<SessionEvent> {
        if !self.accepting_input() {
            return self.ignored(Action::Submit);
        }
        let raw = std::mem::take(&mut self.input_buffer);
        let expected = self.expected_answer;
        match self.submit_answer(&raw) {
            Some(outcome) => {
                self.feedback = Some(outcome);
                vec![
                    SessionEvent::InputChanged,
                    SessionEvent::Answered {
                        outcome,
                        expected,
                        given: self.user_answer,
                    },
                ]
            }
            None => self.ignored(Action::Submit),
        }
    }

    /// Dismiss feedback, then show the next question or finish the game
    pub fn acknowledge(&mut self) -> Vec<SessionEvent> {
        if self.screen != Screen::Game || self.feedback.is_none() {
            return self.ignored(Action::Acknowledge);
        }
        self.feedback = None;

        match self.load_current_question() {
            QuestionLoad::Question { .. } => vec![SessionEvent::QuestionShown {
                index: self.current_index,
            }],
            QuestionLoad::GameOver => {
                let reward = compute_reward(self.score);
                info!(
                    "Game over: score {} earns {} ({})",
                    self.score,
                    reward.planet.id(),
                    reward.level_label
                );
                self.reward = Some(reward.clone());
                vec![
                    SessionEvent::GameOver { reward },
                    self.set_screen(Screen::Score),
                ]
            }
        }
    }

    /// Return to Main from any screen with everything back at defaults
    pub fn restart(&mut self) -> Vec<SessionEvent> {
        let from = self.screen;
        self.reset_session();
        if from == Screen::Main {
            return Vec::new();
        }
        info!("Restart from {}", from.as_str());
        vec![SessionEvent::ScreenChanged {
            from,
            to: Screen::Main,
        }]
    }

    /// Clear all playthrough state and restore the default configuration.
    ///
    /// The RNG keeps its position so the next game draws fresh questions.
    pub fn reset_session(&mut self) {
        self.screen = Screen::Main;
        self.config = QuizConfig::default();
        self.questions.clear();
        self.answers.clear();
        self.archive.clear();
        self.current_index = 0;
        self.score = 0;
        self.correct_count = 0;
        self.input_buffer.clear();
        self.display_text.clear();
        self.expected_answer = 0;
        self.user_answer = 0;
        self.feedback = None;
        self.reward = None;
    }

    fn accepting_input(&self) -> bool {
        self.screen == Screen::Game && self.feedback.is_none()
    }

    fn set_screen(&mut self, to: Screen) -> SessionEvent {
        let from = self.screen;
        self.screen = to;
        info!("Screen {} -> {}", from.as_str(), to.as_str());
        SessionEvent::ScreenChanged { from, to }
    }

    fn ignored(&self, action: Action) -> Vec<SessionEvent> {
        debug!("Ignoring {:?} on {} screen", action, self.screen.as_str());
        vec![SessionEvent::Ignored(action)]
    }
}
