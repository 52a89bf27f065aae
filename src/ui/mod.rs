//! Terminal presentation layer
//!
//! Reads session state, never mutates it directly: key presses become
//! `Action`s that go through `Session::apply`.

pub mod keypad;
pub mod terminal;
pub mod view;

pub use keypad::{Command, map_key};
pub use terminal::run;
pub use view::render;
