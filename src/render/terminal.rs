//! Plain-text view for terminals

use super::{RenderError, View};
use crate::listings::{Episode, Show};
use std::io::Write;

/// Writes show cards and episode lists as plain text
///
/// Cards are numbered starting at 1, matching the display form of `CardId`.
/// Summaries are converted from HTML to text.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the view, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render_shows(&mut self, shows: &[Show]) -> Result<(), RenderError> {
        writeln!(self.out, "\n=== Shows ===\n")?;

        if shows.is_empty() {
            writeln!(self.out, "No shows found.")?;
        }

        for (index, show) in shows.iter().enumerate() {
            writeln!(self.out, "#{} {} (id {})", index + 1, show.name, show.id)?;

            let summary = nanohtml2text::html2text(&show.summary);
            let summary = summary.trim();
            if !summary.is_empty() {
                writeln!(self.out, "  {}", summary)?;
            }

            writeln!(self.out, "  Image: {}", show.image)?;
            writeln!(self.out)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn render_episodes(&mut self, episodes: &[Episode]) -> Result<(), RenderError> {
        writeln!(self.out, "\n=== Episodes ===\n")?;

        if episodes.is_empty() {
            writeln!(self.out, "No episodes.")?;
        }

        for episode in episodes {
            let name = episode.name.as_deref().unwrap_or("Untitled");
            match episode.number {
                Some(number) => writeln!(
                    self.out,
                    "  S{:02}E{:02} - {}",
                    episode.season, number, name
                )?,
                None => writeln!(self.out, "  S{:02} Special - {}", episode.season, name)?,
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn hide_episodes(&mut self) -> Result<(), RenderError> {
        // Earlier output scrolls away, nothing to take back
        Ok(())
    }
}
