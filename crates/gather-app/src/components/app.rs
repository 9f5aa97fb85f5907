//! Root application component with screen routing.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use dioxus::prelude::*;
use gather_invites::{InviteLink, InviteParams, UserId};
use gather_ui::{InviteShareOverlay, ThemedRoot};

use crate::auth::ProfileStore;
use crate::directory::GroupDirectory;
use crate::state::{AppState, AsyncStatus, GroupView, Screen};

use super::groups::GroupsScreen;
use super::join_group::JoinGroupScreen;
use super::sign_in::SignInScreen;

/// How long the "Copied" feedback stays up.
const COPY_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

/// Launch options resolved in `main` before the UI starts.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub data_dir: PathBuf,
    /// Origin used when building invite links.
    pub origin: String,
    /// Invite URL or code handed to the app at launch.
    pub join: Option<String>,
}

/// Global storage for the launch options.
pub static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

fn launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchOptions {
        data_dir: default_data_dir(),
        origin: "https://gather.example".to_string(),
        join: None,
    })
}

/// Get the default data directory for Gather.
///
/// Respects `GATHER_DATA_DIR` for multi-instance runs.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("GATHER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/gather");
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("gather");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share/gather");
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("gather");
        }
    }
    PathBuf::from(".").join("gather")
}

/// Where exported QR images land.
fn download_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        let downloads = PathBuf::from(home).join("Downloads");
        if downloads.is_dir() {
            return downloads;
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(profile) = std::env::var("USERPROFILE") {
            let downloads = PathBuf::from(profile).join("Downloads");
            if downloads.is_dir() {
                return downloads;
            }
        }
    }
    launch_options().data_dir
}

/// Rebuild the group-listing rows from the directory.
pub(crate) fn refresh_groups(
    state: &mut Signal<AppState>,
    directory: &GroupDirectory,
    user: Option<&UserId>,
) {
    let groups: Vec<GroupView> = directory
        .groups()
        .iter()
        .map(|r| GroupView {
            group: r.group(),
            member_count: r.members.len(),
            is_member: user.map(|u| r.members.contains(u)).unwrap_or(false),
        })
        .collect();
    state.write().groups = groups;
}

/// Root application component.
#[component]
pub fn App() -> Element {
    // Set theme inside the component where the Dioxus runtime is available
    use_hook(|| {
        *gather_ui::CURRENT_THEME.write() = gather_ui::Theme::Dusk;
    });

    let mut state = use_signal(AppState::new);
    let mut directory: Signal<Option<Arc<GroupDirectory>>> = use_signal(|| None);
    let mut profiles: Signal<Option<Arc<ProfileStore>>> = use_signal(|| None);

    // On mount: open the stores, then route any deep-linked invite.
    use_effect(move || {
        spawn(async move {
            let opts = launch_options();

            let store = ProfileStore::open(&opts.data_dir);
            let profile = store.profile();
            if let Some(ref p) = profile {
                tracing::info!("Signed in as {} ({})", p.display_name, p.user_id);
            }
            profiles.set(Some(Arc::new(store)));

            match GroupDirectory::open(&opts.data_dir) {
                Ok(dir) => {
                    let dir = Arc::new(dir);
                    refresh_groups(&mut state, &dir, profile.as_ref().map(|p| &p.user_id));
                    directory.set(Some(dir));
                }
                Err(e) => {
                    tracing::error!("Failed to open group directory: {}", e);
                    state.write().status =
                        AsyncStatus::Error(format!("Failed to open group directory: {}", e));
                }
            }

            state.write().profile = profile;

            if let Some(raw) = opts.join {
                match InviteParams::parse(&raw) {
                    Ok(params) => {
                        tracing::info!("Opening join view for invite code {}", params.code);
                        let mut s = state.write();
                        s.pending_invite = Some(params);
                        s.screen = Screen::JoinGroup;
                    }
                    Err(e) => tracing::warn!("Ignoring invite argument: {}", e),
                }
            }
        });
    });

    let current_screen = state.read().screen;
    let share_active = state.read().share_group.is_some();

    let mut share_open = use_signal(|| false);

    // Keep the overlay signal in sync with state.
    use_effect(move || {
        share_open.set(state.read().share_group.is_some());
    });

    // Close handler: sync is_open back to state.
    use_effect(move || {
        if !share_open() && state.read().share_group.is_some() {
            let mut s = state.write();
            s.share_group = None;
            s.copy_feedback = false;
        }
    });

    let share_link = use_memo(move || {
        state
            .read()
            .share_group
            .as_ref()
            .map(|g| InviteLink::for_group(&launch_options().origin, g))
    });

    let share_name = use_memo(move || {
        state
            .read()
            .share_group
            .as_ref()
            .map(|g| g.name.clone())
            .unwrap_or_default()
    });

    let share_code = use_memo(move || {
        state
            .read()
            .share_group
            .as_ref()
            .map(|g| g.invite_code.clone())
            .unwrap_or_default()
    });

    let share_url = use_memo(move || share_link().map(|l| l.url()).unwrap_or_default());

    let share_qr = use_memo(move || {
        share_link().and_then(|l| match l.to_qr_data_url() {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("QR render failed: {}", e);
                None
            }
        })
    });

    let copied = use_memo(move || state.read().copy_feedback);

    rsx! {
        ThemedRoot {
            div {
                class: "gather-app",

                match current_screen {
                    Screen::Groups => rsx! {
                        GroupsScreen { state, directory }
                    },
                    Screen::JoinGroup => rsx! {
                        JoinGroupScreen { state, profiles, directory }
                    },
                    Screen::SignIn => rsx! {
                        SignInScreen { state, profiles, directory }
                    },
                }

                if share_active {
                    InviteShareOverlay {
                        is_open: share_open,
                        group_name: share_name,
                        invite_code: share_code,
                        invite_url: share_url,
                        qr_data_url: share_qr,
                        copy_feedback: copied,
                        on_copy: move |_| {
                            let code = share_code();
                            match arboard::Clipboard::new() {
                                Ok(mut clipboard) => {
                                    if let Err(e) = clipboard.set_text(code) {
                                        tracing::debug!("Clipboard write failed: {}", e);
                                        return;
                                    }
                                    state.write().copy_feedback = true;
                                    // Revert after a fixed delay
                                    spawn(async move {
                                        tokio::time::sleep(COPY_FEEDBACK_DELAY).await;
                                        // Only revert a flag that is still up.
                                        if state.read().copy_feedback {
                                            state.write().copy_feedback = false;
                                        }
                                    });
                                }
                                Err(e) => tracing::debug!("Clipboard unavailable: {}", e),
                            }
                        },
                        on_download: move |_| {
                            let Some(link) = share_link() else {
                                return;
                            };
                            let path = download_dir().join(link.qr_filename());
                            match link.save_qr_png(&path) {
                                Ok(()) => tracing::info!("Saved invite QR to {}", path.display()),
                                Err(e) => tracing::warn!("Failed to export invite QR: {}", e),
                            }
                        },
                    }
                }
            }
        }
    }
}
