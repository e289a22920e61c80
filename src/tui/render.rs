//! Level rendering
//!
//! A level is painted into a fixed panel at a fixed origin. Each frame is
//! built in full and flushed by `Terminal::draw`, so partial redraws never
//! reach the screen.

use crate::error::{Error, Result};
use crate::tui::level::Level;
use crate::tui::theme::{Theme, config, theme};
use ratatui::{Terminal, backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget};

/// Panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub padding_x: u16,
    pub padding_y: u16,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            x: config::PANEL_X,
            y: config::PANEL_Y,
            width: config::PANEL_WIDTH,
            padding_x: config::PADDING_X,
            padding_y: config::PADDING_Y,
        }
    }
}

impl PanelLayout {
    /// Panel rectangle for `level`, clipped to `area`
    pub fn viewport(&self, level: &Level, area: Rect) -> Rect {
        let width = self.width.saturating_add(self.padding_x.saturating_mul(2));
        let height = level.height().saturating_add(self.padding_y.saturating_mul(2));
        Rect::new(
            area.x.saturating_add(self.x),
            area.y.saturating_add(self.y),
            width,
            height,
        )
        .intersection(area)
    }

    /// Columns available for item text inside `panel`
    ///
    /// The configured width, narrowed when the terminal is too small.
    pub fn content_width(&self, panel: Rect) -> u16 {
        self.width
            .min(panel.width.saturating_sub(self.padding_x.saturating_mul(2)))
    }
}

/// Widget drawing one level
#[derive(Debug, Clone, Copy)]
pub struct LevelView<'a> {
    level: &'a Level,
    locale: &'a str,
    layout: PanelLayout,
    theme: &'a Theme,
}

impl<'a> LevelView<'a> {
    pub fn new(level: &'a Level, locale: &'a str) -> Self {
        Self {
            level,
            locale,
            layout: PanelLayout::default(),
            theme: theme(),
        }
    }
}

impl Widget for LevelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = self.layout.viewport(self.level, area);
        if panel.is_empty() {
            return;
        }
        buf.set_style(panel, self.theme.normal());

        let width = self.layout.content_width(panel);
        if width == 0 {
            return;
        }

        let x = panel.x + self.layout.padding_x;
        let mut offset: u16 = 0;
        for item in self.level.items() {
            let y = panel.y.saturating_add(self.layout.padding_y).saturating_add(offset);
            if y >= panel.bottom() {
                break;
            }

            let text = item.text(usize::from(width), self.locale);
            if !text.is_empty() {
                buf.set_stringn(x, y, &text, usize::from(width), item.style(self.theme));
            }
            offset = offset.saturating_add(item.size());
        }
    }
}

/// Draw `level` as one complete frame
pub fn render<B: Backend>(terminal: &mut Terminal<B>, level: &Level, locale: &str) -> Result<()> {
    terminal
        .draw(|frame| frame.render_widget(LevelView::new(level, locale), frame.area()))
        .map_err(|e| Error::Terminal(e.to_string()))?;
    Ok(())
}
