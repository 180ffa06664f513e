//! CLI commands and terminal rendering.
//!
//! The command surface mirrors the two screens of the app:
//!
//! - the home screen (shortening form + link list + log panel) is the
//!   interactive default command, with `shorten` and `list` as
//!   non-interactive equivalents
//! - `resolve` is the redirect trigger: it looks a code up and prints the
//!   original URL, or falls back to the home view when the code is unknown
//!
//! Failed operations do not abort the process; they surface as error entries
//! in the rendered log panel.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use serde_json::json;

use crate::domain::entities::{Link, LogLevel};
use crate::state::AppState;

/// Local-first URL shortener.
#[derive(Parser)]
#[command(name = "linkstash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands. Without one, an interactive shortening session starts.
#[derive(Subcommand)]
pub enum Commands {
    /// Shorten a URL
    Shorten {
        /// The original URL (must start with http)
        url: String,

        /// Custom short code (optional, auto-generated if not provided)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Resolve a short code to its original URL
    Resolve {
        /// The short code to look up
        code: String,
    },

    /// List stored links
    List,
}

/// Dispatches the parsed command against the application state.
pub fn run(cli: Cli, state: &AppState) -> Result<()> {
    match cli.command {
        Some(Commands::Shorten { url, code }) => handle_shorten(state, &url, code.as_deref()),
        Some(Commands::Resolve { code }) => handle_resolve(state, &code),
        Some(Commands::List) => handle_list(state),
        None => run_home(state),
    }
}

/// Shortens a single URL and re-renders the list.
fn handle_shorten(state: &AppState, url: &str, custom_code: Option<&str>) -> Result<()> {
    if let Ok(link) = state.link_service.shorten(url, custom_code) {
        println!(
            "{} {}",
            "✅ Short link created:".green().bold(),
            state
                .link_service
                .short_url(&state.base_url, &link.code)
                .bright_yellow()
        );
        println!();
    }

    render_links(state);
    render_log_panel(state);
    Ok(())
}

/// Resolves a code; on a miss falls back to the home view.
fn handle_resolve(state: &AppState, code: &str) -> Result<()> {
    match state.redirect_service.resolve(code) {
        Ok(link) => {
            // Plain URL on stdout so the output can be piped.
            println!("{}", link.original);
        }
        Err(_) => {
            // The miss is already in the event log; bounce back "home".
            render_links(state);
        }
    }

    render_log_panel(state);
    Ok(())
}

/// Renders the stored link list.
fn handle_list(state: &AppState) -> Result<()> {
    render_links(state);
    render_log_panel(state);
    Ok(())
}

/// Interactive shortening session: prompt, shorten, re-render, repeat.
fn run_home(state: &AppState) -> Result<()> {
    println!("{}", "🔗 linkstash".bright_blue().bold());
    println!();
    render_links(state);

    loop {
        let url: String = Input::new()
            .with_prompt("Enter full URL (https://...)")
            .allow_empty(true)
            .interact_text()?;

        if url.is_empty() {
            break;
        }

        let custom: String = Input::new()
            .with_prompt("Custom short code (optional)")
            .allow_empty(true)
            .interact_text()?;
        let custom_code = if custom.is_empty() {
            None
        } else {
            Some(custom.as_str())
        };

        if let Ok(link) = state.link_service.shorten(&url, custom_code) {
            println!(
                "{} {}",
                "✅".green(),
                state
                    .link_service
                    .short_url(&state.base_url, &link.code)
                    .bright_yellow()
            );
        }

        println!();
        render_links(state);
        render_log_panel(state);

        let again = Confirm::new()
            .with_prompt("Shorten another URL?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
        println!();
    }

    render_log_panel(state);
    Ok(())
}

/// Renders the link list in insertion order.
///
/// A store failure (e.g. a corrupt file) is appended to the event log and
/// the list renders empty.
fn render_links(state: &AppState) {
    let links: Vec<Link> = match state.link_service.list() {
        Ok(links) => links,
        Err(err) => {
            state
                .event_log
                .error(err.to_string(), json!({ "kind": err.kind() }));
            Vec::new()
        }
    };

    println!("{}", "Links".bright_white().bold());

    if links.is_empty() {
        println!("  {}", "No links yet".yellow());
        println!();
        return;
    }

    for link in &links {
        println!(
            "  {}  {} {}",
            state
                .link_service
                .short_url(&state.base_url, &link.code)
                .cyan(),
            "→".bright_black(),
            link.original
        );
    }
    println!();
}

/// Renders the session log panel, most-recent-last.
fn render_log_panel(state: &AppState) {
    let entries = state.event_log.entries();
    if entries.is_empty() {
        return;
    }

    println!("{}", "📜 Logs".bright_white().bold());

    for entry in &entries {
        let level = match entry.level {
            LogLevel::Info => entry.level.label().green(),
            LogLevel::Error => entry.level.label().red(),
        };

        println!(
            "  [{}] {} {}",
            entry
                .timestamp
                .format("%H:%M:%S")
                .to_string()
                .bright_black(),
            level.bold(),
            entry.message
        );
    }
    println!();
}
