// folio - single-page portfolio viewer for the terminal
//
// The page is a vertical stack of sections with a navigation bar on top.
// Navigation state (menu open flag, active section) lives in `nav`; the TUI
// lays the content out, scrolls it, and feeds key presses and mouse clicks
// into the navigation controller.
//
// Architecture:
// - Content: immutable portfolio records
// - Nav: menu flag and active section, scroll requests through a trait
// - TUI (ratatui): layout, smooth scrolling, input routing
// - Config/logging: TOML config with env overrides, tracing

mod cli;
mod config;
mod content;
mod logging;
mod nav;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::LogBuffer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before loading so a broken file can be fixed
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        return cli::handle_config(show, reset, path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::load()?;

    match cli.command {
        Some(Commands::Render { width }) => {
            let _guard = logging::init(&config.logging, None)?;
            cli::handle_render(width, &config)
        }
        Some(Commands::Content) => cli::handle_content(),
        Some(Commands::Config { .. }) => Ok(()),
        None => {
            // Interactive: capture logs to the buffer so they do not garble the display.
            // The guard flushes file logging and must outlive the TUI.
            let log_buffer = LogBuffer::new();
            let _guard = logging::init(&config.logging, Some(log_buffer.clone()))?;

            tui::run_tui(config, log_buffer, cli.section).await
        }
    }
}
