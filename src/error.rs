//! Error types for airdrop operations.
//!
//! Both variants feed user-facing feedback verbatim, so their display
//! forms carry no prefix beyond the diagnostic itself.

use thiserror::Error;

/// Errors that can occur while talking to the airdrop endpoint.
///
/// Input validation failures never appear here: they are caught before the
/// network boundary and rendered directly as feedback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AirdropError {
    /// The endpoint reported a structured JSON-RPC error.
    #[error("{message}")]
    Rpc { message: String },
    /// Network or protocol failure reaching the endpoint, or an
    /// unreadable response body.
    #[error("{reason}")]
    Transport { reason: String },
}

/// Result type alias for airdrop operations.
pub type Result<T> = core::result::Result<T, AirdropError>;
