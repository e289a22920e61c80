//! 主菜单层级

use crate::tui::host::MenuHost;
use crate::tui::item::{Command, Item};
use crate::tui::labels::Label;
use crate::tui::level::Level;

/// 构建主菜单：标题、课程列表、帮助、语言选择、退出
pub fn level(host: &dyn MenuHost) -> Level {
    let mut items = vec![
        Item::title(Label::literal(host.title())),
        Item::plain(Label::key("menu.select_lesson")),
        Item::line(),
        Item::space(),
    ];

    items.extend(host.entries().into_iter().map(Item::content));

    items.extend([
        Item::line(),
        Item::space(),
        Item::command(Command::Help),
        Item::choose_language(),
        Item::command(Command::Exit),
    ]);

    Level::new(items)
}
