//! Fireworks show errors.

/// Errors that can stop the show.
#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interrupted")]
    Interrupted,
}
