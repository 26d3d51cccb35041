/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.

use ratatui::{buffer::Buffer, layout::Rect};

use super::RenderableWidget;
use crate::config::Config;

/// Config with unicode box characters and the default theme
pub fn test_config() -> Config {
    Config::default()
}

/// Config with ASCII box characters
pub fn test_config_ascii() -> Config {
    Config {
        use_unicode: false,
        ..Config::default()
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &Config,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    let mut output = String::new();

    for x in 0..area.width {
        output.push_str(buf[(x, line)].symbol());
    }

    output
}

/// Every line of the buffer with trailing spaces trimmed
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area().height)
        .map(|y| buffer_line(buf, y).trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &Config) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Hello".to_string(),
        };

        let buf = render_widget(&widget, 10, 2);

        assert_eq!(buf[(0, 0)].symbol(), "H");
        assert_eq!(buffer_line(&buf, 0), "Hello     ");
        assert_eq!(buffer_lines(&buf), vec!["Hello", ""]);
    }
}
