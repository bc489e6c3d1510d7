// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the interactive viewer runs. Subcommands:
// - render: Print the laid-out page as plain text
// - content: Export the portfolio content as JSON
// - config --show|--path|--reset: Configuration management

use crate::config::{Config, VERSION};
use crate::content::PORTFOLIO;
use crate::tui::page::{Document, PageOptions};
use crate::tui::theme::Theme;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// folio - a single-page portfolio in the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "Single-page portfolio viewer for the terminal", long_about = None)]
pub struct Cli {
    /// Section to open the viewer at (home, about, experience, skills, gallery, contact)
    #[arg(long, value_name = "ID")]
    pub section: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the page as plain text
    Render {
        /// Layout width in columns
        #[arg(long, default_value_t = 80)]
        width: u16,
    },

    /// Export the portfolio content as JSON
    Content,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle the config subcommand
///
/// Runs before the config file is loaded so a broken file can still be
/// located and reset.
pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: folio config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

/// Print the page laid out at `width` columns
pub fn handle_render(width: u16, config: &Config) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for line in render_lines(width, config.features.footer) {
        writeln!(stdout, "{line}").context("Failed to write to stdout")?;
    }
    Ok(())
}

/// Print the portfolio content as pretty JSON
pub fn handle_content() -> Result<()> {
    let json =
        serde_json::to_string_pretty(&PORTFOLIO).context("Failed to serialize portfolio")?;
    println!("{json}");
    Ok(())
}

fn render_lines(width: u16, footer: bool) -> Vec<String> {
    let document = Document::build(&PORTFOLIO, &Theme::default(), PageOptions { width, footer });
    document
        .plain_lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::write_default(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::page::display_width;

    #[test]
    fn parses_render_width() {
        let cli = Cli::try_parse_from(["folio", "render", "--width", "50"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Render { width: 50 })));

        let cli = Cli::try_parse_from(["folio", "--section", "skills"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.section.as_deref(), Some("skills"));
    }

    #[test]
    fn rendered_text_fits_width() {
        let lines = render_lines(50, true);
        assert!(lines.iter().all(|line| display_width(line) <= 50));
        assert!(lines.iter().any(|line| line.contains(PORTFOLIO.profile.name)));
    }

    #[test]
    fn footer_flag_shortens_output() {
        assert!(render_lines(80, false).len() < render_lines(80, true).len());
    }
}
