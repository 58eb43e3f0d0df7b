//! Simple blocking dialog boxes for terminal applications.
//!
//! Three helpers in the spirit of a desktop toolkit's stock dialogs,
//! rendered as modal popups over the alternate screen: [`message`] shows
//! text with an OK control, [`prompt`] asks for one line of input, and
//! [`confirm`] asks a yes/no/cancel question. Each call owns the terminal
//! until the user dismisses the dialog, then returns a plain value;
//! cancellation is a value, not an error.
//!
//! ```no_run
//! # fn main() -> Result<(), daiarogu::DialogError> {
//! let name = daiarogu::prompt("What is your name?", Some("Hello"), None)?;
//! if let Some(name) = name {
//!     daiarogu::message(&format!("Welcome, {}!", name), None)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Colors follow a built-in palette, overridable from
//! `<config dir>/daiarogu/theme.toml`.

mod dialog;
mod error;
mod term;
mod theme;
mod ui;

pub use dialog::{confirm, message, prompt, Choice};
pub use error::DialogError;
