//! Invite redemption screen.
//!
//! Hosts the [`JoinFlow`] state machine: the initial state is derived once
//! from the parameters this view was navigated to with, then user actions
//! and the join-group call drive the transitions.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use gather_invites::{AuthProvider, JoinError, JoinFlow, JoinGroups, JoinPhase};

use crate::auth::ProfileStore;
use crate::directory::GroupDirectory;
use crate::state::{AppState, Screen};

use super::app::refresh_groups;

/// Delay before the post-join redirect to the group listing.
const JOINED_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[component]
pub fn JoinGroupScreen(
    mut state: Signal<AppState>,
    profiles: Signal<Option<Arc<ProfileStore>>>,
    directory: Signal<Option<Arc<GroupDirectory>>>,
) -> Element {
    let mut flow = use_signal(|| {
        let s = state.read();
        JoinFlow::mount(s.pending_invite.as_ref(), s.profile.is_some())
    });

    let f = flow.read().clone();

    let cancel = move |_: ()| {
        let mut s = state.write();
        s.screen = Screen::Groups;
        s.pending_invite = None;
    };

    let sign_in = move |_: ()| {
        let params = flow.read().return_params();
        let mut s = state.write();
        s.pending_invite = params;
        s.after_sign_in = Screen::JoinGroup;
        s.screen = Screen::SignIn;
    };

    let submit = move |_: ()| {
        if !flow.write().begin_join() {
            return;
        }
        let user = profiles.read().as_ref().and_then(|p| p.current_user());
        let Some(user) = user else {
            flow.write().finish_join(Err(JoinError::NotSignedIn));
            return;
        };
        let code = flow.read().invite_code.clone();
        let dir = directory.read().as_ref().cloned();
        spawn(async move {
            let outcome = match dir {
                Some(ref dir) => dir.join_group(&user, &code).await,
                None => Err(JoinError::Store("Group directory unavailable".to_string())),
            };

            // The user may have cancelled away while the call ran; a late
            // resolution must not touch this view.
            if state.read().screen != Screen::JoinGroup {
                return;
            }
            flow.write().finish_join(outcome);

            if flow.read().phase == JoinPhase::Joined {
                if let Some(ref dir) = dir {
                    refresh_groups(&mut state, dir, Some(&user));
                }
                tokio::time::sleep(JOINED_REDIRECT_DELAY).await;
                // Still on this view and still joined: go to the listing.
                if state.read().screen == Screen::JoinGroup
                    && flow.read().phase == JoinPhase::Joined
                {
                    let mut s = state.write();
                    s.screen = Screen::Groups;
                    s.pending_invite = None;
                }
            }
        });
    };

    let auth_prompt = if f.group_name.is_empty() {
        "Sign in to join a group.".to_string()
    } else {
        format!("You've been invited to join {}. Sign in to continue.", f.group_name)
    };

    let confirm_prompt = if f.group_name.is_empty() {
        "Join this group?".to_string()
    } else {
        format!("Join {}?", f.group_name)
    };

    let join_label = if f.loading {
        "Joining..."
    } else if f.phase == JoinPhase::Failed {
        "Try Again"
    } else {
        "Join Group"
    };

    rsx! {
        div {
            class: "screen join-screen",

            div {
                class: "join-card",

                h1 { class: "join-title", "Join a Group" }

                match f.phase {
                    JoinPhase::NeedsAuth => rsx! {
                        p { class: "join-text", "{auth_prompt}" }
                        div {
                            class: "join-actions",
                            button {
                                class: "btn-primary",
                                onclick: move |_| sign_in(()),
                                "Sign In"
                            }
                            button {
                                class: "btn-secondary",
                                onclick: move |_| cancel(()),
                                "Cancel"
                            }
                        }
                    },
                    JoinPhase::Joined => rsx! {
                        div { class: "alert alert-success", "{f.success}" }
                        p { class: "join-text", "Taking you to your groups..." }
                    },
                    _ => rsx! {
                        if f.from_link {
                            p { class: "join-text", "{confirm_prompt}" }
                            div {
                                class: "join-code-display",
                                code { "{f.invite_code}" }
                            }
                        } else {
                            p { class: "join-text", "Enter an invite code to join a group." }
                            input {
                                class: "join-input",
                                r#type: "text",
                                placeholder: "e.g. ABCD1234",
                                maxlength: "16",
                                autofocus: true,
                                disabled: f.loading,
                                value: "{f.invite_code}",
                                oninput: move |evt| {
                                    flow.write().input_code(&evt.value());
                                },
                                onkeypress: move |evt| {
                                    if evt.key() == Key::Enter {
                                        submit(());
                                    }
                                },
                            }
                        }

                        if !f.error.is_empty() {
                            div { class: "alert alert-error", "{f.error}" }
                        }

                        div {
                            class: "join-actions",
                            button {
                                class: "btn-primary",
                                disabled: !f.can_submit(),
                                onclick: move |_| submit(()),
                                "{join_label}"
                            }
                            button {
                                class: "btn-secondary",
                                onclick: move |_| cancel(()),
                                "Cancel"
                            }
                        }
                    },
                }
            }
        }
    }
}
