use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::matcher::is_searchable;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { query } = cmd {
        let query = query.join(" ");
        let session = super::start_session(cfg)?;

        if !is_searchable(&query) {
            info("Type at least 2 characters to see suggestions.");
            return Ok(());
        }

        match render::suggestions(&session.search(&query), cfg.show_ids) {
            Some(list) => print!("{}", list),
            None => info(format!("No attendees matching '{}'.", query.trim())),
        }
    }

    Ok(())
}
