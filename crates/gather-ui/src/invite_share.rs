//! Invite share overlay component.
//!
//! Presentational only: primitive signals carry the data in, event
//! handlers carry the actions out, and no store is touched here.

use dioxus::prelude::*;

/// Modal for sharing a group's invite QR code and text code.
///
/// Backdrop click closes, stop propagation on dialog, close button. The
/// Close action only dismisses the modal; exporting the QR image is the
/// Download button's job.
#[component]
pub fn InviteShareOverlay(
    mut is_open: Signal<bool>,
    /// Display name of the group being shared.
    group_name: ReadSignal<String>,
    /// The group's short invite code.
    invite_code: ReadSignal<String>,
    /// Full invite URL (also the QR payload).
    invite_url: ReadSignal<String>,
    /// Rendered QR image as a data URL, if available.
    qr_data_url: ReadSignal<Option<String>>,
    /// True briefly after copy to show "Copied" feedback.
    copy_feedback: ReadSignal<bool>,
    /// Fires when the user clicks the copy button.
    on_copy: EventHandler<()>,
    /// Fires when the user clicks the download button.
    on_download: EventHandler<()>,
) -> Element {
    if !is_open() {
        return rsx! {};
    }

    let name = group_name();
    let code = invite_code();
    let url = invite_url();
    let qr = qr_data_url();
    let copied = copy_feedback();

    rsx! {
        div {
            class: "invite-share-overlay",
            onclick: move |_| is_open.set(false),

            div {
                class: "invite-share-dialog",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "invite-share-header",
                    h2 { "Share Group Invite" }
                    button {
                        class: "invite-share-close",
                        onclick: move |_| is_open.set(false),
                        "\u{00d7}"
                    }
                }

                div {
                    class: "invite-share-content",

                    h3 { class: "invite-share-group-name", "{name}" }

                    div {
                        class: "invite-share-qr",
                        if let Some(ref data_url) = qr {
                            img {
                                class: "invite-share-qr-img",
                                alt: "Invite QR code",
                                src: "{data_url}",
                            }
                        } else {
                            div {
                                class: "invite-share-qr-missing",
                                "QR code unavailable"
                            }
                        }
                    }

                    div {
                        class: "invite-share-url",
                        "{url}"
                    }

                    div {
                        class: "invite-share-code-box",
                        p { class: "invite-share-code-label", "Or share this code:" }
                        code { class: "invite-share-code", "{code}" }
                        button {
                            class: "invite-share-copy-btn",
                            onclick: move |_| on_copy.call(()),
                            if copied { "Copied" } else { "Copy Code" }
                        }
                    }

                    p {
                        class: "invite-share-hint",
                        "Scan the QR code or enter the code manually to join this group"
                    }

                    div {
                        class: "invite-share-actions",
                        button {
                            class: "btn-primary",
                            onclick: move |_| on_download.call(()),
                            "Download QR Code"
                        }
                        button {
                            class: "btn-secondary",
                            onclick: move |_| is_open.set(false),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
