/// Breadcrumb widget - displays the drill-down trail
///
/// Format: "▸ Registrations ▸ Basketball ▸ NCF Tigers"
/// The last item is highlighted in the selection colour.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::tui::widgets::RenderableWidget;

const DEFAULT_SEPARATOR: &str = " ▸ ";
const ASCII_SEPARATOR: &str = " > ";

#[derive(Debug)]
pub struct Breadcrumb {
    pub items: Vec<String>,
}

impl Breadcrumb {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    fn separator(config: &Config) -> &'static str {
        if config.use_unicode {
            DEFAULT_SEPARATOR
        } else {
            ASCII_SEPARATOR
        }
    }

    /// Items that fit in `width`, dropping leading ones behind an ellipsis
    fn visible_items(&self, width: usize, separator: &str, ellipsis: &str) -> (bool, &[String]) {
        let total = |items: &[String]| -> usize {
            items.iter().map(|i| i.width() + separator.width()).sum()
        };
        let mut start = 0;
        while start < self.items.len() - 1 {
            let extra = if start > 0 { ellipsis.width() + separator.width() } else { 0 };
            if total(&self.items[start..]) + extra <= width {
                break;
            }
            start += 1;
        }
        (start > 0, &self.items[start..])
    }
}

impl RenderableWidget for Breadcrumb {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &Config) {
        if self.items.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let separator = Self::separator(config);
        let box_chars = config.box_chars();
        let (truncated, items) =
            self.visible_items(area.width as usize, separator, &box_chars.ellipsis);

        let mut segments: Vec<(String, Style)> = vec![(separator.trim_start().to_string(), Style::default())];
        if truncated {
            segments.push((box_chars.ellipsis.clone(), Style::default()));
            segments.push((separator.to_string(), Style::default()));
        }
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                segments.push((separator.to_string(), Style::default()));
            }
            let style = if idx == items.len() - 1 {
                Style::default().fg(config.theme.selection_fg)
            } else {
                Style::default()
            };
            segments.push((item.clone(), style));
        }

        let right = area.x + area.width;
        let mut x = area.x;
        for (text, style) in segments {
            if x >= right {
                break;
            }
            let (next_x, _) = buf.set_stringn(x, area.y, &text, (right - x) as usize, style);
            x = next_x;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    fn crumbs(items: &[&str]) -> Breadcrumb {
        Breadcrumb::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_breadcrumb_full_trail() {
        let buf = render_widget(&crumbs(&["Screening", "Basketball", "NCF"]), 60, 1);
        assert_eq!(buffer_lines(&buf)[0], "▸ Screening ▸ Basketball ▸ NCF");
    }

    #[test]
    fn test_breadcrumb_ascii_separator() {
        let buf = render_widget_with_config(
            &crumbs(&["Registrations", "Basketball"]),
            40,
            1,
            &test_config_ascii(),
        );
        assert_eq!(buffer_lines(&buf)[0], "> Registrations > Basketball");
    }

    #[test]
    fn test_breadcrumb_drops_leading_items_when_narrow() {
        let widget = crumbs(&["Screening", "Basketball", "Naga College Foundation", "NCF Tigers"]);
        let buf = render_widget(&widget, 30, 1);
        let line = &buffer_lines(&buf)[0];

        assert!(line.starts_with("▸ …"));
        assert!(line.ends_with("NCF Tigers"));
    }

    #[test]
    fn test_breadcrumb_empty_renders_nothing() {
        let buf = render_widget(&crumbs(&[]), 20, 1);
        assert_eq!(buffer_lines(&buf)[0], "");
    }
}
