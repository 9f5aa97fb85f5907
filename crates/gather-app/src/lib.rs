//! Gather desktop application.
//!
//! Screens for listing groups, sharing a group's invite QR code, and
//! redeeming an invite code, backed by small file-based profile and group
//! stores.

pub mod auth;
pub mod components;
pub mod directory;
pub mod error;
pub mod state;
