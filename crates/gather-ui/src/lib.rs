//! Shared UI components for Gather applications.
//!
//! Provides the theme system and the invite-share overlay used by the
//! desktop app.

pub mod invite_share;
pub mod theme;

pub use invite_share::InviteShareOverlay;
pub use theme::{Theme, ThemeSwitcher, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
