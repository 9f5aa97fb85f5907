//! Error types for invite links and group joining.

use std::io;

/// Result type alias for invite-link operations.
pub type Result<T> = std::result::Result<T, InviteError>;

/// Errors from building or parsing invite links and rendering QR codes.
#[derive(Debug, thiserror::Error)]
pub enum InviteError {
    /// The invite link or query string could not be parsed.
    #[error("Invalid invite link: {reason}")]
    InvalidLink { reason: String },

    /// QR generation failed.
    #[cfg(feature = "qr")]
    #[error("QR error: {0}")]
    Qr(String),

    /// I/O error while exporting a QR image.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors surfaced by the join-group collaborator.
///
/// The join view treats every kind uniformly: show the display message
/// inline and let the user retry or cancel. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// No group exists for the entered code.
    #[error("Invalid invite code")]
    UnknownCode,

    /// The user already belongs to the group behind this code.
    #[error("You are already a member of {group}")]
    AlreadyMember { group: String },

    /// The join was attempted without a signed-in user.
    #[error("You must be signed in to join a group")]
    NotSignedIn,

    /// The backing store failed.
    #[error("{0}")]
    Store(String),
}
