//! Group listing screen: the app's home and the share entry point.

use std::sync::Arc;

use dioxus::prelude::*;
use gather_ui::ThemeSwitcher;

use crate::directory::GroupDirectory;
use crate::state::{AppState, AsyncStatus, Screen};

use super::app::refresh_groups;

#[component]
pub fn GroupsScreen(
    mut state: Signal<AppState>,
    directory: Signal<Option<Arc<GroupDirectory>>>,
) -> Element {
    let s = state.read();
    let profile = s.profile.clone();
    let groups = s.groups.clone();
    let status = s.status.clone();
    let form_open = s.create_form_open;
    let draft = s.group_draft_name.clone();
    drop(s);

    let signed_in = profile.is_some();
    let draft_empty = draft.trim().is_empty();

    let go_sign_in = move |_: ()| {
        let mut st = state.write();
        st.after_sign_in = Screen::Groups;
        st.screen = Screen::SignIn;
    };

    let create_group = move |_: ()| {
        let name = state.read().group_draft_name.trim().to_string();
        if name.is_empty() {
            return;
        }
        let Some(user) = state.read().profile.as_ref().map(|p| p.user_id.clone()) else {
            return;
        };
        let Some(dir) = directory.read().as_ref().cloned() else {
            return;
        };
        match dir.create_group(&name, &user) {
            Ok(group) => {
                tracing::info!("Created group '{}' with code {}", group.name, group.invite_code);
                {
                    let mut st = state.write();
                    st.group_draft_name.clear();
                    st.create_form_open = false;
                    st.status = AsyncStatus::Idle;
                }
                refresh_groups(&mut state, &dir, Some(&user));
            }
            Err(e) => {
                tracing::error!("Failed to create group: {}", e);
                state.write().status = AsyncStatus::Error(format!("Failed to create group: {}", e));
            }
        }
    };

    rsx! {
        div {
            class: "screen groups-screen",

            header {
                class: "app-header",
                h1 { class: "app-title", "Gather" }
                div {
                    class: "app-header-actions",
                    ThemeSwitcher {}
                    if let Some(ref p) = profile {
                        span { class: "app-user", "{p.display_name}" }
                    } else {
                        button {
                            class: "btn-secondary",
                            onclick: move |_| go_sign_in(()),
                            "Sign In"
                        }
                    }
                }
            }

            div {
                class: "groups-toolbar",
                button {
                    class: "btn-primary",
                    onclick: move |_| {
                        if signed_in {
                            state.write().create_form_open = !form_open;
                        } else {
                            go_sign_in(());
                        }
                    },
                    "New Group"
                }
                button {
                    class: "btn-secondary",
                    onclick: move |_| {
                        let mut st = state.write();
                        st.pending_invite = None;
                        st.screen = Screen::JoinGroup;
                    },
                    "Join with Code"
                }
            }

            if form_open {
                div {
                    class: "group-create-form",
                    input {
                        class: "group-create-input",
                        r#type: "text",
                        placeholder: "Group name...",
                        autofocus: true,
                        value: "{draft}",
                        oninput: move |evt| {
                            state.write().group_draft_name = evt.value();
                        },
                        onkeypress: move |evt| {
                            if evt.key() == Key::Enter && !draft_empty {
                                create_group(());
                            }
                        },
                    }
                    button {
                        class: "btn-primary",
                        disabled: draft_empty,
                        onclick: move |_| create_group(()),
                        "Create"
                    }
                }
            }

            if let AsyncStatus::Error(ref e) = status {
                div { class: "alert alert-error", "{e}" }
            }

            if groups.is_empty() {
                p {
                    class: "groups-empty",
                    "No groups yet. Create one and share its invite code."
                }
            } else {
                ul {
                    class: "group-list",
                    for view in groups.iter() {
                        {
                            let group = view.group.clone();
                            let member_count = view.member_count;
                            let is_member = view.is_member;
                            let share = group.clone();
                            rsx! {
                                li {
                                    key: "{group.invite_code}",
                                    class: "group-row",
                                    div {
                                        class: "group-row-info",
                                        span { class: "group-name", "{group.name}" }
                                        span { class: "group-code", "{group.invite_code}" }
                                        span {
                                            class: "group-members",
                                            if member_count == 1 {
                                                "1 member"
                                            } else {
                                                "{member_count} members"
                                            }
                                        }
                                        if is_member {
                                            span { class: "group-badge", "Member" }
                                        }
                                    }
                                    button {
                                        class: "btn-secondary",
                                        onclick: move |_| {
                                            state.write().share_group = Some(share.clone());
                                        },
                                        "Share Invite"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
