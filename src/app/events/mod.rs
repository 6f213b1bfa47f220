//! SessionIntent- und SessionCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::{CommandKind, SessionCommand};
pub use intent::SessionIntent;
