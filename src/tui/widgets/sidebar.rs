/// Sidebar widget - the role menu on the left of the dashboard
///
/// Lines: "BUCAL", the signed-in role, a rule, then one numbered entry per
/// page. The current page is highlighted; the highlight is dimmed while focus
/// is in the page content. A vertical bar closes the right edge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::Config;
use crate::session::{Page, Role};
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct Sidebar {
    pub pages: &'static [Page],
    pub current: Page,
    /// True while the menu (not the page content) has focus
    pub focused: bool,
    pub role: Option<Role>,
}

const HEADER_LINES: u16 = 3;

impl RenderableWidget for Sidebar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &Config) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let box_chars = config.box_chars();
        let inner = area.width as usize - 1;

        for y in area.y..area.y + area.height {
            buf.set_string(area.x + inner as u16, y, &box_chars.vertical, Style::default());
        }

        buf.set_stringn(
            area.x + 1,
            area.y,
            "BUCAL",
            inner - 1,
            Style::default().add_modifier(Modifier::BOLD),
        );
        if area.height > 1 {
            let role = self.role.map(|r| r.to_string()).unwrap_or_default();
            buf.set_stringn(
                area.x + 1,
                area.y + 1,
                role,
                inner - 1,
                Style::default().add_modifier(Modifier::DIM),
            );
        }
        if area.height > 2 {
            buf.set_string(
                area.x,
                area.y + 2,
                box_chars.horizontal.repeat(inner),
                Style::default(),
            );
        }

        let selection_fg = if self.focused {
            config.theme.selection_fg
        } else {
            config.theme.unfocused_selection_fg()
        };
        for (idx, page) in self.pages.iter().enumerate() {
            let y = area.y + HEADER_LINES + idx as u16;
            if y >= area.y + area.height {
                break;
            }
            let label = format!(" {} {}", idx + 1, page.label_for(self.role));
            let style = if *page == self.current {
                Style::default().fg(selection_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            buf.set_stringn(area.x, y, label, inner, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::menu_for;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_sidebar_lists_role_menu() {
        let widget = Sidebar {
            pages: menu_for(Role::Staff),
            current: Page::Events,
            focused: true,
            role: Some(Role::Staff),
        };
        let buf = render_widget(&widget, 20, 6);
        let lines = buffer_lines(&buf);

        assert!(lines[0].starts_with(" BUCAL"));
        assert!(lines[3].starts_with(&format!(" 1 {}", Page::Announcements.title())));
        assert!(lines[3].ends_with('│'));
        assert!(lines[4].starts_with(&format!(" 2 {}", Page::Events.title())));
        assert!(lines[5].starts_with(" 3 Support"));
        assert_eq!(buf[(3, 4)].fg, test_config().theme.selection_fg);
    }

    #[test]
    fn test_admin_sees_event_management_label() {
        let widget = Sidebar {
            pages: menu_for(Role::Admin),
            current: Page::Home,
            focused: true,
            role: Some(Role::Admin),
        };
        let buf = render_widget(&widget, 22, 12);
        let lines = buffer_lines(&buf);

        assert!(lines[3].starts_with(" 1 Home"));
        assert!(lines[4].starts_with(" 2 Event Management"));
        assert!(lines[11].starts_with(" 9 Support"));
    }

    #[test]
    fn test_unfocused_highlight_is_dimmed() {
        let widget = Sidebar {
            pages: menu_for(Role::Admin),
            current: Page::Home,
            focused: false,
            role: Some(Role::Admin),
        };
        let config = test_config();
        let buf = render_widget(&widget, 20, 8);

        assert_eq!(buf[(3, 3)].fg, config.theme.unfocused_selection_fg());
    }
}
