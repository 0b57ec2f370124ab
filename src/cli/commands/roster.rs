use crate::config::Config;
use crate::core::roster::load_roster;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::render;
use std::path::Path;

/// Print the roster. Unlike the lookup commands, a roster that cannot be
/// loaded is an error here: showing it is the whole point.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let roster = load_roster(Path::new(&cfg.roster))?;

    header(format!("Roster: {}", cfg.roster));
    if roster.is_empty() {
        info("The roster is empty.");
        return Ok(());
    }

    print!("{}", render::roster_table(&roster));

    let confirmed = roster.iter().filter(|a| a.confirmed).count();
    println!(
        "\n{} attendees, {} confirmed, {} not confirmed",
        roster.len(),
        confirmed,
        roster.len() - confirmed
    );
    Ok(())
}
