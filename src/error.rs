use std::io;

use thiserror::Error;

/// Failures surfaced while presenting a dialog.
///
/// User cancellation is not an error: the dialog functions report it through
/// their return values (`None` from `prompt`, `Choice::Cancel` from
/// `confirm`).
#[derive(Debug, Error)]
pub enum DialogError {
    /// The terminal could not be configured, drawn to, or read from.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
