//! Command handling around the core
//!
//! Player identity, the session registry, and enum-dispatched actions. This
//! layer is platform-neutral: chat bots and the terminal front-ends all drive
//! the same [`Lobby`].

mod action;
mod lobby;
mod store;

pub use action::{Action, CommandArgs};
pub use lobby::{HELP_TEXT, Lobby, Reply};
pub use store::{InMemoryStore, PlayerId, SessionStore};
