//! The invite-redemption state machine.
//!
//! [`JoinFlow`] is created once when the join view mounts, from whatever
//! navigation parameters arrived with it, and then mutated by user actions
//! and by the outcome of the join-group call. The hosting component owns
//! the async call itself; the flow only records transitions, which keeps
//! every rule here synchronously testable.

use crate::error::JoinError;
use crate::group::{normalize_code, Group};
use crate::link::InviteParams;

/// Error shown when the user submits without entering a code.
const EMPTY_CODE_ERROR: &str = "Please enter an invite code";

/// Fallback error when a join failure carries no usable message.
const GENERIC_JOIN_ERROR: &str = "Failed to join group";

/// Fallback group reference for success messages.
const GENERIC_GROUP: &str = "the group";

/// Which view the join flow is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinPhase {
    /// A sign-in prompt gates everything else.
    NeedsAuth,
    /// A code arrived via link; show a yes/no confirmation.
    ConfirmJoin,
    /// No code arrived; the user types one.
    ManualEntry,
    /// The join call is in flight.
    Joining,
    /// Terminal success.
    Joined,
    /// The join call failed; the retained code allows an immediate retry.
    Failed,
}

/// State for one mounted join view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinFlow {
    pub invite_code: String,
    pub group_name: String,
    pub phase: JoinPhase,
    /// True exactly while a join call is in flight.
    pub loading: bool,
    /// Inline error message; empty when none. Mutually exclusive with
    /// `success`, and both stay empty while `loading` is true.
    pub error: String,
    /// Success message; empty until the join lands.
    pub success: String,
    /// Whether the code was seeded from an invite link (confirmation view)
    /// rather than typed by hand.
    pub from_link: bool,
}

impl JoinFlow {
    /// Derive the initial state from navigation parameters and the current
    /// authentication state.
    pub fn mount(params: Option<&InviteParams>, authenticated: bool) -> Self {
        match params {
            Some(p) => Self {
                invite_code: p.code.clone(),
                group_name: p.name.clone().unwrap_or_default(),
                phase: if authenticated {
                    JoinPhase::ConfirmJoin
                } else {
                    JoinPhase::NeedsAuth
                },
                loading: false,
                error: String::new(),
                success: String::new(),
                from_link: true,
            },
            None => Self {
                invite_code: String::new(),
                group_name: String::new(),
                phase: if authenticated {
                    JoinPhase::ManualEntry
                } else {
                    JoinPhase::NeedsAuth
                },
                loading: false,
                error: String::new(),
                success: String::new(),
                from_link: false,
            },
        }
    }

    /// Record a keystroke in the manual-entry field.
    ///
    /// Codes are uppercased as typed and capped at the maximum code length.
    pub fn input_code(&mut self, raw: &str) {
        self.invite_code = normalize_code(raw);
    }

    /// Whether the join action is currently allowed.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Validate and start a join attempt.
    ///
    /// Returns true when the caller should fire the join-group call. An
    /// empty code sets the inline validation error and never reaches the
    /// collaborator; a call already in flight refuses a duplicate.
    pub fn begin_join(&mut self) -> bool {
        if self.loading {
            return false;
        }
        if self.invite_code.trim().is_empty() {
            self.error = EMPTY_CODE_ERROR.to_string();
            return false;
        }
        self.error.clear();
        self.success.clear();
        self.loading = true;
        self.phase = JoinPhase::Joining;
        true
    }

    /// Record the outcome of the join-group call.
    pub fn finish_join(&mut self, outcome: Result<Group, JoinError>) {
        self.loading = false;
        match outcome {
            Ok(group) => {
                if self.group_name.is_empty() {
                    self.group_name = group.name;
                }
                let name = if self.group_name.is_empty() {
                    GENERIC_GROUP
                } else {
                    self.group_name.as_str()
                };
                self.success = format!("Successfully joined {}!", name);
                self.phase = JoinPhase::Joined;
            }
            Err(err) => {
                let message = err.to_string();
                self.error = if message.trim().is_empty() {
                    GENERIC_JOIN_ERROR.to_string()
                } else {
                    message
                };
                self.phase = JoinPhase::Failed;
            }
        }
    }

    /// Parameters that reproduce this flow after a sign-in round trip.
    ///
    /// Empty when the flow has no seeded code, in which case the join view
    /// simply re-mounts into manual entry.
    pub fn return_params(&self) -> Option<InviteParams> {
        if self.invite_code.is_empty() {
            return None;
        }
        Some(InviteParams {
            code: self.invite_code.clone(),
            name: if self.group_name.is_empty() {
                None
            } else {
                Some(self.group_name.clone())
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_params() -> InviteParams {
        InviteParams {
            code: "ABCD1234".to_string(),
            name: Some("Book Club".to_string()),
        }
    }

    #[test]
    fn test_mount_with_code_authenticated() {
        let flow = JoinFlow::mount(Some(&link_params()), true);
        assert_eq!(flow.phase, JoinPhase::ConfirmJoin);
        assert_eq!(flow.invite_code, "ABCD1234");
        assert_eq!(flow.group_name, "Book Club");
        assert!(flow.from_link);
        assert!(!flow.loading);
    }

    #[test]
    fn test_mount_with_code_unauthenticated() {
        let flow = JoinFlow::mount(Some(&link_params()), false);
        assert_eq!(flow.phase, JoinPhase::NeedsAuth);
        assert_eq!(flow.invite_code, "ABCD1234");
    }

    #[test]
    fn test_mount_without_code_authenticated() {
        let flow = JoinFlow::mount(None, true);
        assert_eq!(flow.phase, JoinPhase::ManualEntry);
        assert!(flow.invite_code.is_empty());
        assert!(!flow.from_link);
    }

    #[test]
    fn test_mount_without_code_unauthenticated() {
        let flow = JoinFlow::mount(None, false);
        assert_eq!(flow.phase, JoinPhase::NeedsAuth);
    }

    #[test]
    fn test_input_normalizes() {
        let mut flow = JoinFlow::mount(None, true);
        flow.input_code("abcd1234wxyz5678extra");
        assert_eq!(flow.invite_code, "ABCD1234WXYZ5678");
    }

    #[test]
    fn test_empty_submit_sets_error_without_call() {
        let mut flow = JoinFlow::mount(None, true);
        assert!(!flow.begin_join());
        assert_eq!(flow.error, "Please enter an invite code");
        assert_eq!(flow.phase, JoinPhase::ManualEntry);
        assert!(!flow.loading);
    }

    #[test]
    fn test_begin_join_transitions_to_joining() {
        let mut flow = JoinFlow::mount(Some(&link_params()), true);
        assert!(flow.begin_join());
        assert_eq!(flow.phase, JoinPhase::Joining);
        assert!(flow.loading);
        assert!(flow.error.is_empty());
        assert!(flow.success.is_empty());
    }

    #[test]
    fn test_no_duplicate_join_while_loading() {
        let mut flow = JoinFlow::mount(Some(&link_params()), true);
        assert!(flow.begin_join());
        assert!(!flow.can_submit());
        assert!(!flow.begin_join());
    }

    #[test]
    fn test_success_message_references_group_name() {
        let mut flow = JoinFlow::mount(Some(&link_params()), true);
        flow.begin_join();
        flow.finish_join(Ok(Group::new("Book Club", "ABCD1234")));
        assert_eq!(flow.phase, JoinPhase::Joined);
        assert!(!flow.loading);
        assert!(flow.success.contains("Book Club"));
        assert!(flow.error.is_empty());
    }

    #[test]
    fn test_success_message_falls_back_to_generic() {
        let mut flow = JoinFlow::mount(None, true);
        flow.input_code("ZZZZ9999");
        flow.begin_join();
        flow.finish_join(Ok(Group::new("", "ZZZZ9999")));
        assert_eq!(flow.success, "Successfully joined the group!");
    }

    #[test]
    fn test_manual_entry_success_names_resolved_group() {
        let mut flow = JoinFlow::mount(None, true);
        flow.input_code("ZZZZ9999");
        flow.begin_join();
        flow.finish_join(Ok(Group::new("Chess Club", "ZZZZ9999")));
        assert!(flow.success.contains("Chess Club"));
    }

    #[test]
    fn test_failure_surfaces_message_and_allows_retry() {
        let mut flow = JoinFlow::mount(Some(&link_params()), true);
        flow.begin_join();
        flow.finish_join(Err(JoinError::Store("Invalid code".to_string())));
        assert_eq!(flow.phase, JoinPhase::Failed);
        assert_eq!(flow.error, "Invalid code");
        assert!(!flow.loading);
        assert_eq!(flow.invite_code, "ABCD1234");

        // Immediate retry works with the retained code.
        assert!(flow.begin_join());
        assert_eq!(flow.phase, JoinPhase::Joining);
    }

    #[test]
    fn test_failure_blank_message_falls_back() {
        let mut flow = JoinFlow::mount(Some(&link_params()), true);
        flow.begin_join();
        flow.finish_join(Err(JoinError::Store("  ".to_string())));
        assert_eq!(flow.error, "Failed to join group");
    }

    #[test]
    fn test_error_and_success_never_coexist() {
        let mut flow = JoinFlow::mount(Some(&link_params()), true);
        flow.begin_join();
        flow.finish_join(Err(JoinError::UnknownCode));
        assert!(!flow.error.is_empty());
        assert!(flow.success.is_empty());

        flow.begin_join();
        assert!(flow.error.is_empty());
        assert!(flow.success.is_empty());
        flow.finish_join(Ok(Group::new("Book Club", "ABCD1234")));
        assert!(flow.error.is_empty());
        assert!(!flow.success.is_empty());
    }

    #[test]
    fn test_return_params_round_trip() {
        let flow = JoinFlow::mount(Some(&link_params()), false);
        let params = flow.return_params().unwrap();
        assert_eq!(params, link_params());

        let remounted = JoinFlow::mount(Some(&params), true);
        assert_eq!(remounted.phase, JoinPhase::ConfirmJoin);
        assert_eq!(remounted.group_name, "Book Club");
    }

    #[test]
    fn test_return_params_empty_without_code() {
        let flow = JoinFlow::mount(None, false);
        assert!(flow.return_params().is_none());
    }
}
