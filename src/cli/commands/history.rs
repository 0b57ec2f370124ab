use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::{ExportFormat, ExportLogic};
use crate::core::history::HISTORY_CAPACITY;
use crate::core::session::Session;
use crate::db::store::KvStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        clear,
        export,
        format,
        force,
    } = cmd
    {
        // the roster plays no part in showing or managing the history
        let store = super::open_store(cfg)?;
        let mut session = Session::with_roster(Vec::new(), store, &cfg.timestamp_format);

        if *clear {
            if session.clear_history()? {
                success("Check-in history cleared.");
            } else {
                info("Check-in history was already empty.");
            }
            return Ok(());
        }

        if let Some(file) = export {
            let fmt = format.unwrap_or(ExportFormat::Json);
            let written = ExportLogic::export(session.history(), fmt, file, *force)?;
            if written > 0 {
                session.store_mut().audit(
                    "export",
                    file,
                    &format!("{} check-ins exported as {}", written, fmt.as_str()),
                );
            }
            return Ok(());
        }

        header(format!(
            "Recent check-ins ({}/{})",
            session.history().len(),
            HISTORY_CAPACITY
        ));
        print!("{}", render::history_panel(&session.render_history()));
    }

    Ok(())
}
