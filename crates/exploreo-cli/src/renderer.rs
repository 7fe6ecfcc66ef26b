//! Terminal rendering for markdown output
//!
//! Markdown from the core display types is styled with termimad when color
//! is enabled and printed as-is otherwise. Share text is never styled.

use anyhow::Result;
use exploreo_core::display::{OperationStatus, StatusKind};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::DarkGreen);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);
        skin.bullet.set_fg(Color::DarkGreen);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes visible so nested headers stay distinguishable.
                println!("\x1b[32m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Print text exactly as given, for output meant to be copied.
    pub fn render_plain(&self, text: &str) -> Result<()> {
        print!("{text}");
        Ok(())
    }

    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        if !self.rich_enabled {
            print!("{status}");
            return Ok(());
        }
        let color = match status.kind {
            StatusKind::Success => "32",
            StatusKind::Info => "33",
            StatusKind::Failure => "31",
        };
        print!("\x1b[{color}m{status}\x1b[0m");
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
