//! Error types for ripieno-core.

use thiserror::Error;

/// Result type alias for ripieno-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ripieno-core.
///
/// Everything on the event path is total (bad input is absorbed, not
/// reported), so errors only arise while building or reconfiguring a rank.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
