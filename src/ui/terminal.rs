//! Terminal setup and the event loop
//!
//! Raw mode + alternate screen while running; the terminal is restored on
//! every exit path, including errors.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use log::{debug, info};

use super::keypad::{Command, map_key};
use super::view::render;
use crate::quiz::{Session, SessionEvent};

/// Run the quiz until the player quits
pub fn run(session: &mut Session) -> io::Result<()> {
    let mut stdout = io::stdout();
    if let Err(err) = init(&mut stdout) {
        restore(&mut stdout)?;
        return Err(err);
    }
    let result = event_loop(&mut stdout, session);
    restore(&mut stdout)?;
    result
}

fn init(stdout: &mut Stdout) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)
}

fn restore(stdout: &mut Stdout) -> io::Result<()> {
    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

fn event_loop(stdout: &mut Stdout, session: &mut Session) -> io::Result<()> {
    draw(stdout, session)?;
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key(session, key) {
            Some(Command::Quit) => {
                info!("Quit from {} screen", session.screen().as_str());
                return Ok(());
            }
            Some(Command::Apply(action)) => {
                let events = session.apply(action);
                let changed = events
                    .iter()
                    .any(|event| !matches!(event, SessionEvent::Ignored(_)));
                if changed {
                    draw(stdout, session)?;
                }
            }
            None => debug!("Unbound key {:?}", key.code),
        }
    }
}

fn draw(stdout: &mut Stdout, session: &Session) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All))?;
    for (row, line) in render(session).iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(stdout, MoveTo(2, row.saturating_add(1)), Print(line))?;
    }
    stdout.flush()
}
