//! Screen rendering to plain text lines

use crate::quiz::{Difficulty, Screen, Session};
use crate::scorecard::ScoreCard;
use crate::settings::TABLES;

/// Planets shown in the main screen gallery
pub const GALLERY: [&str; 9] = [
    "Earth",
    "FullMoon",
    "RedPlanet",
    "PurplePlanet",
    "Saturn",
    "Sun",
    "BluePlanet",
    "WhiteMoon",
    "WhiteStar",
];

/// Keypad rows as drawn under the input line
const KEYPAD_ROWS: [&str; 4] = ["[1] [2] [3]", "[4] [5] [6]", "[7] [8] [9]", "    [0] [<]"];

/// Render the current screen
pub fn render(session: &Session) -> Vec<String> {
    match session.screen() {
        Screen::Main => render_main(),
        Screen::Settings => render_settings(session),
        Screen::Game => render_game(session),
        Screen::Score => render_score(session),
    }
}

fn render_main() -> Vec<String> {
    let mut lines = vec!["C O S M A T H".to_string(), String::new()];
    for row in GALLERY.chunks(3) {
        lines.push(row.join("  "));
    }
    lines.push(String::new());
    lines.push("[Enter] EXPLORE    [q] quit".to_string());
    lines
}

fn render_settings(session: &Session) -> Vec<String> {
    let config = session.config();

    let tables = TABLES
        .iter()
        .map(|&t| mark(&t.to_string(), t == config.table))
        .collect::<Vec<_>>()
        .join(" ");
    let difficulties = Difficulty::ALL
        .iter()
        .map(|d| mark(d.as_str(), *d == config.difficulty))
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        "Customize your game".to_string(),
        String::new(),
        "Choose Times Table   [<-/->]".to_string(),
        format!("  {}", tables),
        String::new(),
        "How many questions   [up/down]".to_string(),
        format!("  {}", config.question_count),
        String::new(),
        "Set Difficulties     [d]".to_string(),
        format!("  {}", difficulties),
        String::new(),
        "[Enter] START".to_string(),
    ]
}

fn render_game(session: &Session) -> Vec<String> {
    let (current, total) = session.progress();
    let mut lines = vec![
        format!("{} / {}", current, total),
        String::new(),
        session.display_text().to_string(),
        String::new(),
        format!("> {}", session.input_buffer()),
        String::new(),
    ];
    lines.extend(KEYPAD_ROWS.iter().map(|row| row.to_string()));
    lines.push(String::new());
    lines.push(format!("Score: {}", session.score()));

    match session.feedback_message() {
        Some(message) => {
            lines.push(String::new());
            lines.push(format!("*** {} ***   [Enter] OK", message));
        }
        None => {
            lines.push(String::new());
            lines.push("[Enter] SUBMIT    [r] RESTART".to_string());
        }
    }
    lines
}

fn render_score(session: &Session) -> Vec<String> {
    let mut lines = vec!["Answer Sheets & Result".to_string(), String::new()];
    let Some(card) = ScoreCard::from_session(session) else {
        return lines;
    };

    lines.extend(card.answer_sheet.iter().cloned());
    lines.push(String::new());
    lines.push(format!(
        "Score: {}  ({} right, {} wrong)",
        card.score, card.correct, card.incorrect
    ));
    lines.push("Your planet is...".to_string());
    lines.push(format!(
        "  {}  {}",
        card.reward.planet.id(),
        card.reward.level_label
    ));
    lines.push(String::new());
    lines.push("[Enter] RESTART    [q] quit".to_string());
    lines
}

fn mark(label: &str, selected: bool) -> String {
    if selected {
        format!("[{}]", label)
    } else {
        format!(" {} ", label)
    }
}
