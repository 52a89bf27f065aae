//! CosMath entry point
//!
//! Initializes logging, resolves the seed, and runs the terminal quiz.

use cos_math::{AppConfig, Session, ui};

fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = AppConfig::from_env();
    log::info!("CosMath starting (seed {}, {:?})", config.seed, config.seed_source);

    let mut session = Session::with_seed(config.seed);
    ui::run(&mut session)?;

    log::info!("CosMath exiting");
    Ok(())
}
