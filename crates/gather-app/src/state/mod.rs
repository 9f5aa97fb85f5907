//! State management for the Gather app.

use gather_invites::{Group, InviteParams};

use crate::auth::Profile;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Group listing (the app's home).
    Groups,
    /// Invite redemption view.
    JoinGroup,
    /// Local sign-in.
    SignIn,
}

/// Status of an async operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncStatus {
    /// No operation in progress.
    Idle,
    /// Operation in progress.
    Loading,
    /// Operation failed.
    Error(String),
}

/// View model for one row in the group listing.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    pub group: Group,
    pub member_count: usize,
    pub is_member: bool,
}

/// Main state for the app.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current screen.
    pub screen: Screen,
    /// Status of any store operation.
    pub status: AsyncStatus,
    /// Signed-in profile, if any.
    pub profile: Option<Profile>,
    /// Rows for the group listing.
    pub groups: Vec<GroupView>,
    /// Invite parameters the join view should mount with (deep link or
    /// sign-in return).
    pub pending_invite: Option<InviteParams>,
    /// Where sign-in lands when it completes.
    pub after_sign_in: Screen,
    /// Group currently shown in the share overlay.
    pub share_group: Option<Group>,
    /// Brief "Copied" feedback after copying an invite code.
    pub copy_feedback: bool,
    /// Draft name in the create-group form.
    pub group_draft_name: String,
    /// Whether the create-group form is open.
    pub create_form_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Groups,
            status: AsyncStatus::Idle,
            profile: None,
            groups: Vec::new(),
            pending_invite: None,
            after_sign_in: Screen::Groups,
            share_group: None,
            copy_feedback: false,
            group_draft_name: String::new(),
            create_form_open: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
