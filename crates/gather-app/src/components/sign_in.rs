//! Sign-in screen: creates the local profile.
//!
//! Reached either from the header or from the join view; `after_sign_in`
//! in the app state says where to land afterwards, so a join flow that
//! was interrupted by sign-in resumes with its invite parameters intact.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::auth::ProfileStore;
use crate::directory::GroupDirectory;
use crate::state::{AppState, Screen};

use super::app::refresh_groups;

#[component]
pub fn SignInScreen(
    mut state: Signal<AppState>,
    profiles: Signal<Option<Arc<ProfileStore>>>,
    directory: Signal<Option<Arc<GroupDirectory>>>,
) -> Element {
    let mut draft = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let name_empty = draft.read().trim().is_empty();
    let error_msg = error();

    let submit = move |_: ()| {
        let name = draft.read().trim().to_string();
        if name.is_empty() {
            return;
        }
        let Some(store) = profiles.read().as_ref().cloned() else {
            error.set(Some("Profile store unavailable".to_string()));
            return;
        };
        match store.sign_in(&name) {
            Ok(profile) => {
                tracing::info!("Signed in as {} ({})", profile.display_name, profile.user_id);
                let user = profile.user_id.clone();
                let destination = state.read().after_sign_in;
                {
                    let mut s = state.write();
                    s.profile = Some(profile);
                    s.screen = destination;
                }
                if let Some(dir) = directory.read().as_ref() {
                    refresh_groups(&mut state, dir, Some(&user));
                }
            }
            Err(e) => {
                tracing::error!("Sign-in failed: {}", e);
                error.set(Some(format!("Sign-in failed: {}", e)));
            }
        }
    };

    rsx! {
        div {
            class: "screen sign-in-screen",

            div {
                class: "join-card",

                h1 { class: "join-title", "Sign In" }
                p {
                    class: "join-text",
                    "Pick a display name to create and join groups."
                }

                input {
                    class: "join-input",
                    r#type: "text",
                    placeholder: "Enter a display name...",
                    autofocus: true,
                    value: "{draft}",
                    oninput: move |evt| {
                        draft.set(evt.value());
                    },
                    onkeypress: move |evt| {
                        if evt.key() == Key::Enter && !name_empty {
                            submit(());
                        }
                    },
                }

                if let Some(ref e) = error_msg {
                    div { class: "alert alert-error", "{e}" }
                }

                div {
                    class: "join-actions",
                    button {
                        class: "btn-primary",
                        disabled: name_empty,
                        onclick: move |_| submit(()),
                        "Continue"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| {
                            let mut s = state.write();
                            s.screen = Screen::Groups;
                            s.pending_invite = None;
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}
