//! End-to-end walks of the join flow against a scripted join-group
//! collaborator.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gather_invites::{Group, InviteParams, JoinError, JoinFlow, JoinGroups, JoinPhase, UserId};

/// Collaborator double that counts calls and replays scripted outcomes.
struct ScriptedJoiner {
    script: Mutex<VecDeque<Result<Group, JoinError>>>,
    calls: AtomicUsize,
}

impl ScriptedJoiner {
    fn new(outcomes: Vec<Result<Group, JoinError>>) -> Self {
        Self {
            script: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JoinGroups for ScriptedJoiner {
    async fn join_group(&self, _user: &UserId, code: &str) -> Result<Group, JoinError> {
        assert!(!code.trim().is_empty(), "validation must happen before the call");
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(JoinError::UnknownCode))
    }
}

async fn drive_join(flow: &mut JoinFlow, joiner: &ScriptedJoiner, user: &UserId) {
    if flow.begin_join() {
        let outcome = joiner.join_group(user, &flow.invite_code).await;
        flow.finish_join(outcome);
    }
}

#[tokio::test]
async fn test_link_invite_joins_on_confirmation() {
    let params = InviteParams::parse("code=ABCD1234&name=Book%20Club").unwrap();
    let joiner = ScriptedJoiner::new(vec![Ok(Group::new("Book Club", "ABCD1234"))]);
    let user = UserId::new("user-1");

    let mut flow = JoinFlow::mount(Some(&params), true);
    assert_eq!(flow.phase, JoinPhase::ConfirmJoin);

    drive_join(&mut flow, &joiner, &user).await;

    assert_eq!(flow.phase, JoinPhase::Joined);
    assert!(flow.success.contains("Book Club"));
    assert_eq!(joiner.calls(), 1);
}

#[tokio::test]
async fn test_sign_in_round_trip_preserves_invite() {
    let params = InviteParams::parse("code=ABCD1234&name=Book%20Club").unwrap();
    let joiner = ScriptedJoiner::new(vec![Ok(Group::new("Book Club", "ABCD1234"))]);
    let user = UserId::new("user-1");

    // Unauthenticated mount gates on sign-in.
    let flow = JoinFlow::mount(Some(&params), false);
    assert_eq!(flow.phase, JoinPhase::NeedsAuth);

    // After sign-in the view re-mounts from the retained parameters.
    let retained = flow.return_params().unwrap();
    let mut flow = JoinFlow::mount(Some(&retained), true);
    assert_eq!(flow.phase, JoinPhase::ConfirmJoin);
    assert_eq!(flow.group_name, "Book Club");

    drive_join(&mut flow, &joiner, &user).await;
    assert_eq!(flow.phase, JoinPhase::Joined);
}

#[tokio::test]
async fn test_empty_manual_submit_never_calls_collaborator() {
    let joiner = ScriptedJoiner::new(vec![]);
    let user = UserId::new("user-1");

    let mut flow = JoinFlow::mount(None, true);
    assert_eq!(flow.phase, JoinPhase::ManualEntry);

    drive_join(&mut flow, &joiner, &user).await;

    assert_eq!(flow.error, "Please enter an invite code");
    assert_eq!(joiner.calls(), 0);
}

#[tokio::test]
async fn test_failed_join_retries_with_retained_code() {
    let joiner = ScriptedJoiner::new(vec![
        Err(JoinError::Store("Invalid code".to_string())),
        Ok(Group::new("Chess Club", "CHESS123")),
    ]);
    let user = UserId::new("user-1");

    let mut flow = JoinFlow::mount(None, true);
    flow.input_code("chess123");
    assert_eq!(flow.invite_code, "CHESS123");

    drive_join(&mut flow, &joiner, &user).await;
    assert_eq!(flow.phase, JoinPhase::Failed);
    assert_eq!(flow.error, "Invalid code");

    // Retry without re-entering the code.
    drive_join(&mut flow, &joiner, &user).await;
    assert_eq!(flow.phase, JoinPhase::Joined);
    assert!(flow.success.contains("Chess Club"));
    assert_eq!(joiner.calls(), 2);
}

#[tokio::test]
async fn test_loading_blocks_duplicate_submissions() {
    let joiner = ScriptedJoiner::new(vec![Ok(Group::new("Book Club", "ABCD1234"))]);
    let user = UserId::new("user-1");

    let params = InviteParams::parse("code=ABCD1234").unwrap();
    let mut flow = JoinFlow::mount(Some(&params), true);

    assert!(flow.begin_join());
    // A second click while the call is in flight is refused.
    assert!(!flow.begin_join());
    assert!(!flow.can_submit());

    let outcome = joiner.join_group(&user, &flow.invite_code).await;
    flow.finish_join(outcome);
    assert_eq!(joiner.calls(), 1);
    assert_eq!(flow.phase, JoinPhase::Joined);
}
