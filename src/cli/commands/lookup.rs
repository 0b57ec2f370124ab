//! Interactive lookup loop: the desk operator types a name, picks a
//! suggestion by number, sees the status panel, and goes back to searching.

use crate::config::Config;
use crate::core::matcher::is_searchable;
use crate::core::session::Session;
use crate::db::store::KvStore;
use crate::errors::AppResult;
use crate::models::AttendeeRecord;
use crate::ui::render;
use crate::utils::colors::dim;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "🔎 > ";
const HELP: &str = "Type part of a name. Enter a number to select, `back` to clear, `history` to list recent check-ins, `quit` to leave.";

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = super::start_session(cfg)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock(), cfg.show_ids)
}

/// Drive one lookup session until `quit`/`exit` or end of input.
pub fn run_loop<S, R, W>(
    session: &mut Session<S>,
    input: R,
    mut out: W,
    show_ids: bool,
) -> AppResult<()>
where
    S: KvStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", dim(HELP))?;
    if session.is_degraded() {
        writeln!(out, "{}", dim("Roster unavailable: searches will return nothing."))?;
    }

    let mut suggestions: Vec<AttendeeRecord> = Vec::new();

    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let cmd = line.trim();

        match cmd.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "" | "back" => {
                suggestions.clear();
                writeln!(out)?;
            }
            "history" => {
                write!(out, "{}", render::history_panel(&session.render_history()))?;
            }
            _ => {
                let picked = cmd
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=suggestions.len()).contains(n));

                if let Some(n) = picked {
                    let record = suggestions[n - 1].clone();
                    suggestions.clear();
                    let display = session.select_record(&record)?;
                    write!(out, "{}", render::detail_panel(&display))?;
                    writeln!(out)?;
                    write!(out, "{}", render::history_panel(&session.render_history()))?;
                } else {
                    suggestions = session.search(cmd);
                    match render::suggestions(&suggestions, show_ids) {
                        Some(list) => write!(out, "{}", list)?,
                        None if is_searchable(cmd) => writeln!(out, "{}", dim("(no matches)"))?,
                        None => {}
                    }
                }
            }
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
