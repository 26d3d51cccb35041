/// Widget-based rendering infrastructure for the dashboard
///
/// Widgets are small, focused pieces that render straight into a ratatui
/// Buffer, so each one can be tested against a plain buffer.

#[cfg(test)]
pub mod testing;

pub mod breadcrumb;
pub use breadcrumb::Breadcrumb;

pub mod list;
pub use list::{ListRow, RowList};

pub mod prompt;
pub use prompt::PromptPopup;

pub mod sidebar;
pub use sidebar::Sidebar;

pub mod status_bar;
pub use status_bar::StatusBar;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::Config;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding
/// string-based intermediate representations.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Theme colours and box characters
    fn render(&self, area: Rect, buf: &mut Buffer, config: &Config);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
