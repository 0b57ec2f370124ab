//! Terminal rendering of the suggestion list, the detail panel and the
//! history panel. Functions return strings; callers decide where to print.

use crate::core::history::RenderedList;
use crate::models::{AttendeeRecord, DisplayState};
use crate::utils::colors::{
    RESET, badge_color_for_confirmed, color_for_confirmed, colorize_badge, dim,
};
use crate::utils::formatting::{bold, confirmed_label};
use crate::utils::table::Table;
use crate::utils::{pad_right, truncate};
use unicode_width::UnicodeWidthStr;

/// Names longer than this are shortened in lists.
const NAME_MAX_WIDTH: usize = 40;

/// Numbered suggestion list, or `None` when the list should be hidden.
pub fn suggestions(matches: &[AttendeeRecord], show_ids: bool) -> Option<String> {
    if matches.is_empty() {
        return None;
    }

    let rows = matches
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let mut row = vec![format!("{}.", i + 1)];
            if show_ids {
                row.push(a.id.to_string());
            }
            row.push(truncate(&a.name, NAME_MAX_WIDTH));
            row.push(colorize_badge(confirmed_label(a.confirmed), a.confirmed));
            row
        })
        .collect();

    let headers: &[&str] = if show_ids {
        &["#", "ID", "Name", "Status"]
    } else {
        &["#", "Name", "Status"]
    };

    Some(Table::auto(headers, rows).render())
}

/// Detail panel shown after a selection.
pub fn detail_panel(state: &DisplayState) -> String {
    let badge = badge_color_for_confirmed(state.confirmed);
    let action = color_for_confirmed(state.confirmed);

    format!(
        "\n  {}\n\n  {} {} {}\n\n  {}{}{}\n",
        bold(&state.name),
        badge,
        state.status_label,
        RESET,
        action,
        bold(&state.action_label),
        RESET
    )
}

/// History panel: the placeholder, or one block per check-in.
pub fn history_panel(list: &RenderedList) -> String {
    let rows = match list {
        RenderedList::Placeholder(text) => return format!("  {}\n", dim(text)),
        RenderedList::Rows(rows) => rows,
    };

    let name_w = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(truncate(&r.name, NAME_MAX_WIDTH).as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for r in rows {
        let marker = if r.confirmed { "✔" } else { " " };
        out.push_str(&format!(
            "{} {}  {}\n    Status: {}\n",
            marker,
            pad_right(&truncate(&r.name, NAME_MAX_WIDTH), name_w),
            dim(&r.timestamp),
            colorize_badge(r.badge, r.confirmed)
        ));
    }
    out
}

/// Full roster listing, in roster order.
pub fn roster_table(roster: &[AttendeeRecord]) -> String {
    let rows = roster
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                truncate(&a.name, NAME_MAX_WIDTH),
                colorize_badge(confirmed_label(a.confirmed), a.confirmed),
            ]
        })
        .collect();

    Table::auto(&["ID", "Name", "Status"], rows).render()
}
