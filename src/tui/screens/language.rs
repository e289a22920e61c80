//! 语言选择层级

use crate::tui::host::MenuHost;
use crate::tui::item::{Command, Item};
use crate::tui::labels::Label;
use crate::tui::level::Level;

/// 构建语言选择层级：每种支持的语言一项，外加返回与退出
pub fn level(host: &dyn MenuHost) -> Level {
    let mut items = vec![
        Item::title(Label::literal(host.title())),
        Item::plain(Label::key("menu.choose_language_prompt")),
        Item::line(),
        Item::space(),
    ];

    items.extend(host.locales().into_iter().map(Item::language));

    items.extend([
        Item::line(),
        Item::space(),
        Item::command(Command::Back),
        Item::command(Command::Exit),
    ]);

    Level::new(items)
}
