//! Markdown output for the lesson loop.
//!
//! Everything the CLI prints, from the roadmap to streamed feedback,
//! goes through one renderer: termimad styling on a terminal, verbatim
//! text when piped or under `--no-color` so tests can match on output.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either richly styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            rich_enabled,
            skin: lesson_skin(),
        }
    }

    /// Prints a markdown fragment.
    ///
    /// Rich mode renders line by line: headers keep their hash prefix so
    /// the roadmap stays scannable in scrollback, everything else goes
    /// through the skin. Plain mode emits the text untouched.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn lesson_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::Magenta);
    skin.code_block.set_bg(Color::AnsiValue(238));
    skin.inline_code.set_bg(Color::AnsiValue(238));
    skin
}
