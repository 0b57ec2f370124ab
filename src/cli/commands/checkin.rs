use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::matcher::{is_searchable, normalize_query};
use crate::core::session::Session;
use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendeeId, AttendeeRecord, DisplayState};
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { query, id } = cmd {
        let mut session = super::start_session(cfg)?;

        let display = match id {
            Some(id) => session.select(&AttendeeId::parse(id))?,
            None => {
                let record = resolve_unique(&session, &query.join(" "), cfg.show_ids)?;
                session.select_record(&record)?
            }
        };

        print_checkin(&session, &display);
    }

    Ok(())
}

/// Resolve a name query to exactly one attendee.
///
/// An exact (case-insensitive) name match wins over partial matches, so
/// "Ann Lee" can be checked in even when "Ann Leeds" is also on the roster.
pub fn resolve_unique<S: KvStore>(
    session: &Session<S>,
    query: &str,
    show_ids: bool,
) -> AppResult<AttendeeRecord> {
    if !is_searchable(query) {
        return Err(AppError::QueryTooShort(query.trim().to_string()));
    }

    let mut matches = session.search(query);
    match matches.len() {
        0 => Err(AppError::AttendeeNotFound(query.trim().to_string())),
        1 => Ok(matches.remove(0)),
        count => {
            let needle = normalize_query(query);
            let exact: Vec<&AttendeeRecord> = matches
                .iter()
                .filter(|a| a.name.to_lowercase() == needle)
                .collect();
            if let [only] = exact.as_slice() {
                return Ok((*only).clone());
            }

            if let Some(list) = render::suggestions(&matches, show_ids) {
                print!("{}", list);
            }
            Err(AppError::AmbiguousMatch {
                query: query.trim().to_string(),
                count,
            })
        }
    }
}

fn print_checkin<S: KvStore>(session: &Session<S>, display: &DisplayState) {
    print!("{}", render::detail_panel(display));
    println!();
    header("Recent check-ins");
    print!("{}", render::history_panel(&session.render_history()));
}
