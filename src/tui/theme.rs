//! 主题模块
//!
//! 菜单面板的配色与布局常量。

use ratatui::style::{Color, Modifier, Style};

/// 面板布局常量
pub mod config {
    /// 面板左上角列
    pub const PANEL_X: u16 = 1;
    /// 面板左上角行
    pub const PANEL_Y: u16 = 1;
    /// 内容宽度（不含内边距）
    pub const PANEL_WIDTH: u16 = 74;
    /// 水平内边距
    pub const PADDING_X: u16 = 2;
    /// 垂直内边距
    pub const PADDING_Y: u16 = 1;
    /// 课程/语言条目前缀
    pub const ENTRY_MARKER: &str = "» ";
    /// 分隔线字符
    pub const SEPARATOR: char = '_';
}

/// 主题颜色配置
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色
    pub fg: Color,
    /// 选中项背景色
    pub selected_bg: Color,
    /// 选中项前景色
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        THEME
    }
}

impl Theme {
    /// 普通文本样式
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        self.normal().add_modifier(Modifier::BOLD)
    }

    /// 选中项样式
    pub fn selected(&self) -> Style {
        Style::new().fg(self.selected_fg).bg(self.selected_bg)
    }
}

/// 全局主题实例
pub static THEME: Theme = Theme {
    bg: Color::Blue,
    fg: Color::White,
    selected_bg: Color::White,
    selected_fg: Color::Blue,
};

/// 获取全局主题引用
pub fn theme() -> &'static Theme {
    &THEME
}
