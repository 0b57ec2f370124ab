//! Application logic, independent of the command-line surface.

pub mod config;
pub mod export;
pub mod history;
pub mod log;
pub mod matcher;
pub mod roster;
pub mod selection;
pub mod session;

pub use history::{CheckInLog, RenderedList};
pub use matcher::match_roster;
pub use session::{Session, SessionState};
