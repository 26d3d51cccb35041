/// Modal form drawn over the page content
///
/// One line per field ("Label: value"), the active field marked and followed
/// by a cursor, then a footer line: the validation error if there is one,
/// the reason length hint for decline prompts, or the key help.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::config::Config;
use crate::layout_constants::PROMPT_HEIGHT;
use crate::tui::types::Prompt;
use crate::tui::widgets::RenderableWidget;

const HELP: &str = "Enter submit | Tab next field | Esc cancel";

#[derive(Debug)]
pub struct PromptPopup<'a> {
    pub prompt: &'a Prompt,
}

impl<'a> PromptPopup<'a> {
    pub fn new(prompt: &'a Prompt) -> Self {
        Self { prompt }
    }

    fn footer(&self, config: &Config) -> (String, Style) {
        if let Some(error) = &self.prompt.error {
            return (error.clone(), Style::default().fg(config.theme.rejected_fg));
        }
        if let Some(feedback) = self.prompt.reason_feedback() {
            let color = if feedback.is_valid() {
                config.theme.approved_fg
            } else {
                config.theme.pending_fg
            };
            return (feedback.hint(), Style::default().fg(color));
        }
        (HELP.to_string(), Style::default().add_modifier(Modifier::DIM))
    }
}

impl RenderableWidget for PromptPopup<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &Config) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.prompt.kind.title()))
            .border_style(Style::default().fg(config.theme.selection_fg));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        for (idx, field) in self.prompt.fields.iter().enumerate() {
            let y = inner.y + idx as u16;
            if y >= inner.y + inner.height {
                return;
            }
            let active = idx == self.prompt.active;
            let (marker, style) = if active {
                ("> ", Style::default().add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default())
            };
            let cursor = if active { "_" } else { "" };
            let line = format!("{}{}: {}{}", marker, field.label, field.value, cursor);
            buf.set_stringn(inner.x, y, line, width, style);
        }

        if inner.height > 0 {
            let (text, style) = self.footer(config);
            let y = inner.y + inner.height - 1;
            buf.set_stringn(inner.x, y, text, width, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        // borders + fields + blank + footer
        Some((self.prompt.fields.len() as u16 + 4).max(PROMPT_HEIGHT))
    }
}
