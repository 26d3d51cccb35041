/// Vertical list of selectable rows
///
/// Scrolls so the selected row stays visible. The selected row is drawn with
/// a marker and the selection colour (dimmed when the list is not focused).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::config::Config;
use crate::formatting::fit_to_width;
use crate::tui::widgets::RenderableWidget;

/// One line of a [`RowList`]
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub text: String,
    /// Colour for the trailing status tag, if any
    pub tag: Option<(String, Color)>,
}

impl ListRow {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>, color: Color) -> Self {
        self.tag = Some((tag.into(), color));
        self
    }
}

#[derive(Debug)]
pub struct RowList {
    pub rows: Vec<ListRow>,
    pub selected: usize,
    pub focused: bool,
    /// Shown instead of rows when the list is empty
    pub empty_text: String,
}

impl RowList {
    pub fn new(rows: Vec<ListRow>, selected: usize, focused: bool) -> Self {
        Self {
            rows,
            selected,
            focused,
            empty_text: "Nothing here yet.".to_string(),
        }
    }

    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// First row to draw so that `selected` is inside `height` rows
    fn scroll_offset(&self, height: usize) -> usize {
        if height == 0 || self.selected < height {
            0
        } else {
            self.selected + 1 - height
        }
    }
}

const MARKER: &str = "> ";
const TAG_WIDTH: usize = 10;

impl RenderableWidget for RowList {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &Config) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.rows.is_empty() {
            buf.set_stringn(
                area.x,
                area.y,
                &self.empty_text,
                area.width as usize,
                Style::default().add_modifier(Modifier::DIM),
            );
            return;
        }

        let height = area.height as usize;
        let width = area.width as usize;
        let offset = self.scroll_offset(height);
        let ellipsis = config.box_chars().ellipsis;
        let selection_fg = if self.focused {
            config.theme.selection_fg
        } else {
            config.theme.unfocused_selection_fg()
        };

        for (line, (idx, row)) in self.rows.iter().enumerate().skip(offset).take(height).enumerate() {
            let y = area.y + line as u16;
            let is_selected = idx == self.selected;
            let (marker, style) = if is_selected {
                (MARKER, Style::default().fg(selection_fg).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default())
            };

            let tag_space = if row.tag.is_some() { TAG_WIDTH + 1 } else { 0 };
            let text_width = width.saturating_sub(MARKER.len() + tag_space);
            let text = format!("{}{}", marker, fit_to_width(&row.text, text_width, &ellipsis));
            buf.set_stringn(area.x, y, &text, width, style);

            if let Some((tag, color)) = &row.tag {
                if width > tag_space {
                    let x = area.x + (width - TAG_WIDTH) as u16;
                    buf.set_stringn(x, y, tag, TAG_WIDTH, Style::default().fg(*color));
                }
            }
        }
    }
}
