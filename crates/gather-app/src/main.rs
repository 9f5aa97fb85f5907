//! Entry point for the Gather desktop app.

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use gather_app::components::{default_data_dir, App, LaunchOptions, LAUNCH};

/// Shared design tokens and component styles.
const SHARED_CSS: &str = gather_ui::SHARED_CSS;
/// App-specific screen styles.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "gather-app")]
#[command(about = "Share and redeem group invites")]
struct Args {
    /// Invite URL or code to open the join view with (deep link)
    #[arg(long)]
    join: Option<String>,

    /// Origin used when building invite links
    #[arg(long, default_value = "https://gather.example")]
    origin: String,

    /// Data directory override (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    tracing::info!("Starting Gather with data dir {}", data_dir.display());

    LAUNCH
        .set(LaunchOptions {
            data_dir,
            origin: args.origin,
            join: args.join,
        })
        .ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Gather")
                        .with_inner_size(LogicalSize::new(1000.0, 760.0)),
                )
                .with_custom_head(format!(
                    r#"
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    SHARED_CSS, STYLES_CSS
                )),
        )
        .launch(App);
}
