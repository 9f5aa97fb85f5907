//! # Gather invites
//!
//! Core library for the Gather group-membership apps: shareable invite
//! links, optional QR rendering, and the state machine that drives the
//! invite-redemption ("join group") view.
//!
//! The UI crates stay out of here on purpose. Everything in this crate is
//! plain data and transitions, so the join flow can be tested without a
//! running webview.
//!
//! ```ignore
//! use gather_invites::{Group, InviteLink, JoinFlow, JoinPhase};
//!
//! let group = Group::new("Book Club", "ABCD1234");
//! let link = InviteLink::for_group("https://gather.example", &group);
//! println!("Share this link: {}", link.url());
//!
//! // On the receiving side:
//! let params = gather_invites::InviteParams::parse(&link.url())?;
//! let flow = JoinFlow::mount(Some(&params), true);
//! assert_eq!(flow.phase, JoinPhase::ConfirmJoin);
//! ```

pub mod error;
pub mod flow;
pub mod group;
pub mod link;
pub mod traits;

pub use error::{InviteError, JoinError, Result};
pub use flow::{JoinFlow, JoinPhase};
pub use group::{normalize_code, Group, MAX_CODE_LEN};
pub use link::{InviteLink, InviteParams, JOIN_PATH};
pub use traits::{AuthProvider, JoinGroups, UserId};
