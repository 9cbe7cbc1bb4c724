//! Terminal output for the checklist and report summaries.
//!
//! The core display wrappers emit a small markdown subset: headings,
//! bold flow/phase groups, inline-code identifiers and paths, and
//! numbered or bulleted step lines. With colors on, a Lustra-tuned
//! termimad skin styles that subset; with `--no-color` the markdown is
//! printed verbatim, which keeps output pipeable and assertable.

use termimad::{crossterm::style::Color, MadSkin};

/// Prints display-wrapper markdown, styled or verbatim.
pub struct TerminalRenderer {
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    /// Creates a renderer; `rich_enabled: false` prints raw markdown.
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            skin: rich_enabled.then(lustra_skin),
        }
    }

    /// True when output is styled rather than verbatim markdown.
    pub fn is_rich(&self) -> bool {
        self.skin.is_some()
    }

    /// Renders one markdown block to stdout.
    pub fn render(&self, markdown: &str) {
        match &self.skin {
            Some(skin) => skin.print_text(markdown),
            None => print!("{markdown}"),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Skin matching the report branding: cyan headings, green emphasis for
/// flow and phase groups, yellow for identifiers and file paths.
fn lustra_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    skin.bold.set_fg(Color::Green);
    skin.inline_code.set_fg(Color::Yellow);
    skin.bullet.set_fg(Color::Cyan);
    skin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_renderer_is_not_rich() {
        assert!(!TerminalRenderer::new(false).is_rich());
    }

    #[test]
    fn rich_renderer_carries_a_skin() {
        assert!(TerminalRenderer::new(true).is_rich());
    }

    #[test]
    fn default_is_rich() {
        assert!(TerminalRenderer::default().is_rich());
    }
}
