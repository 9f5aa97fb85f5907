//! UI components for the Gather app.

mod app;
mod groups;
mod join_group;
mod sign_in;

pub use app::{default_data_dir, App, LaunchOptions, LAUNCH};
pub use groups::GroupsScreen;
pub use join_group::JoinGroupScreen;
pub use sign_in::SignInScreen;
