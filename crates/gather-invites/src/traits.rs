//! Collaborator interfaces consumed by the join flow.
//!
//! The join view never talks to storage or an auth system directly; it is
//! handed these interfaces by the hosting application.

use crate::error::JoinError;
use crate::group::Group;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only view of the current authentication state.
pub trait AuthProvider {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<UserId>;
}

/// The membership mutation behind the join view.
///
/// Returns the joined [`Group`] so a manual-entry join can name the group
/// in its success message. Error kinds are opaque to the flow, which only
/// surfaces their display text.
#[async_trait]
pub trait JoinGroups: Send + Sync {
    async fn join_group(&self, user: &UserId, code: &str) -> Result<Group, JoinError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display() {
        let id = UserId::new("a1b2c3");
        assert_eq!(id.to_string(), "a1b2c3");
        assert_eq!(id.as_str(), "a1b2c3");
    }
}
