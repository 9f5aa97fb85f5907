//! Group records and invite-code rules.

use serde::{Deserialize, Serialize};

/// Maximum length of an invite code.
pub const MAX_CODE_LEN: usize = 16;

/// A group as the UI sees it: display name plus its invite code.
///
/// Groups are owned by whatever directory backs [`crate::JoinGroups`];
/// the invite and join views only ever read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub invite_code: String,
}

impl Group {
    pub fn new(name: impl Into<String>, invite_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            invite_code: invite_code.into(),
        }
    }
}

/// Normalize a manually entered invite code: uppercase, capped at
/// [`MAX_CODE_LEN`] characters.
///
/// This is a presentation constraint only. Whether the code actually names
/// a group is the join-group collaborator's call.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase().chars().take(MAX_CODE_LEN).collect()
}
