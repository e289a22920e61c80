//! 菜单层级构建

pub mod language;
pub mod main_menu;
