//! Results screen summary
//!
//! Built once the session reaches the Score screen: the worked answer
//! sheet plus the planet earned.

use serde::{Deserialize, Serialize};

use crate::quiz::{Reward, Screen, Session};

/// Answer sheet and reward for a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Worked lines, e.g. `"2 x 4 = 8"`, in question order
    pub answer_sheet: Vec<String>,
    pub score: i64,
    pub correct: usize,
    pub incorrect: usize,
    pub reward: Reward,
}

impl ScoreCard {
    /// Summarize a finished session (None until the Score screen)
    pub fn from_session(session: &Session) -> Option<Self> {
        if session.screen() != Screen::Score {
            return None;
        }
        let reward = session.reward()?.clone();
        let correct = session.correct_count();
        Some(Self {
            answer_sheet: session.archive().to_vec(),
            score: session.score(),
            correct,
            incorrect: session.current_index().saturating_sub(correct),
            reward,
        })
    }

    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Check if every answer was right
    pub fn is_perfect(&self) -> bool {
        self.incorrect == 0 && self.correct > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Action, Planet};

    fn finish_game(session: &mut Session, correct_answers: usize) {
        session.apply(Action::Explore);
        session.apply(Action::Start);
        let total = session.config().question_count;
        for i in 0..total {
            let expected = session.expected_answer();
            let typed = if i < correct_answers { expected } else { 0 };
            for digit in typed.to_string().bytes() {
                session.apply(Action::PressDigit(digit - b'0'));
            }
            session.apply(Action::Submit);
            session.apply(Action::Acknowledge);
        }
    }

    #[test]
    fn test_no_card_before_score_screen() {
        let mut session = Session::with_seed(5);
        assert!(ScoreCard::from_session(&session).is_none());
        session.apply(Action::Explore);
        session.apply(Action::Start);
        assert!(ScoreCard::from_session(&session).is_none());
    }

    #[test]
    fn test_card_counts() {
        let mut session = Session::with_seed(5);
        finish_game(&mut session, 3);

        let card = ScoreCard::from_session(&session).unwrap();
        assert_eq!(card.correct, 3);
        assert_eq!(card.incorrect, 2);
        assert_eq!(card.total(), 5);
        assert_eq!(card.score, 10);
        assert_eq!(card.reward.planet, Planet::Earth);
        assert_eq!(card.answer_sheet, session.archive());
        assert!(!card.is_perfect());
    }

    #[test]
    fn test_perfect_card() {
        let mut session = Session::with_seed(8);
        finish_game(&mut session, 5);
        let card = ScoreCard::from_session(&session).unwrap();
        assert!(card.is_perfect());
        assert_eq!(card.reward.level_label, "level 3: Moon Walker");
    }
}
