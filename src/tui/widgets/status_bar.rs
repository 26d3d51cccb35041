/// StatusBar widget - status message and data freshness at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with a connector above the vertical bar
/// - Bottom line: left status message (or error) │ right "loading" / last refresh
///
/// Error messages are displayed in the rejected colour.

use std::time::SystemTime;

use chrono::{DateTime, Local};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::Config;
use crate::tui::widgets::RenderableWidget;

/// Width of the right-hand section ("Loading…" or "HH:MM:SS")
const RIGHT_WIDTH: u16 = 10;

#[derive(Debug, Default)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    pub last_refresh: Option<SystemTime>,
    /// Number of datasets still loading
    pub loading: usize,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: Option<String>, is_error: bool) -> Self {
        self.message = message;
        self.is_error = is_error;
        self
    }

    pub fn with_last_refresh(mut self, last_refresh: Option<SystemTime>) -> Self {
        self.last_refresh = last_refresh;
        self
    }

    pub fn with_loading(mut self, loading: usize) -> Self {
        self.loading = loading;
        self
    }

    fn build_left_text(&self) -> String {
        match &self.message {
            Some(msg) if self.is_error => format!("ERROR: {}", msg),
            Some(msg) => msg.clone(),
            None => String::new(),
        }
    }

    fn build_right_text(&self) -> String {
        if self.loading > 0 {
            return "Loading…".to_string();
        }
        match self.last_refresh {
            Some(at) => DateTime::<Local>::from(at).format("%H:%M:%S").to_string(),
            None => "---".to_string(),
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &Config) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let box_chars = config.box_chars();
        let bar_position = area.width.saturating_sub(RIGHT_WIDTH + 1);

        let separator = box_chars.horizontal.repeat(area.width as usize);
        buf.set_string(area.x, area.y, &separator, Style::default());

        let y = area.y + 1;
        let left_style = if self.is_error {
            Style::default().fg(config.theme.rejected_fg)
        } else {
            Style::default()
        };
        let left_width = bar_position.saturating_sub(1) as usize;
        buf.set_stringn(area.x + 1, y, self.build_left_text(), left_width, left_style);

        if bar_position > 0 {
            buf.set_string(area.x + bar_position, y, &box_chars.vertical, Style::default());
            buf.set_stringn(
                area.x + bar_position + 2,
                y,
                self.build_right_text(),
                (RIGHT_WIDTH - 1) as usize,
                Style::default(),
            );
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_status_bar_message_and_placeholder() {
        let widget = StatusBar::new().with_message(Some("Saved".to_string()), false);
        let buf = render_widget(&widget, 40, 2);
        let lines = buffer_lines(&buf);

        assert_eq!(lines[0], "─".repeat(40));
        assert!(lines[1].starts_with(" Saved"));
        assert!(lines[1].ends_with("│ ---"));
    }

    #[test]
    fn test_status_bar_error_is_coloured() {
        let widget = StatusBar::new().with_message(Some("No season with id '9'".to_string()), true);
        let config = test_config();
        let buf = render_widget(&widget, 60, 2);

        assert!(buffer_line(&buf, 1).starts_with(" ERROR: No season"));
        assert_eq!(buf[(1, 1)].fg, config.theme.rejected_fg);
    }

    #[test]
    fn test_status_bar_shows_loading() {
        let widget = StatusBar::new().with_loading(3);
        let buf = render_widget(&widget, 40, 2);
        assert!(buffer_lines(&buf)[1].ends_with("Loading…"));
    }

    #[test]
    fn test_status_bar_ascii_and_tiny_areas() {
        let widget = StatusBar::new();
        let buf = render_widget_with_config(&widget, 20, 2, &test_config_ascii());
        assert_eq!(buffer_lines(&buf)[0], "-".repeat(20));

        // Should not panic with zero height or width
        render_widget(&widget, 0, 2);
        render_widget(&widget, 80, 0);
        render_widget(&widget, 5, 2);
    }

    #[test]
    fn test_status_bar_preferred_height() {
        assert_eq!(StatusBar::new().preferred_height(), Some(2));
    }
}
