//! Menu levels
//!
//! A level is one screen of the menu: an ordered list of items with a
//! circular selection cursor over its selectable subset.

use crate::error::{Error, Result};
use crate::tui::item::Item;

/// One navigable screen of items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Level {
    items: Vec<Item>,
}

impl Level {
    /// Build a level with its first selectable item selected
    pub fn new(items: Vec<Item>) -> Self {
        let mut level = Self { items };
        level.reset();
        level
    }

    /// Items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Total rows needed to display every item
    pub fn height(&self) -> u16 {
        self.items
            .iter()
            .fold(0u16, |total, item| total.saturating_add(item.size()))
    }

    /// Indices of selectable items, in order
    pub fn selectable_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_selectable())
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any item can be selected
    pub fn has_selectable(&self) -> bool {
        self.items.iter().any(Item::is_selectable)
    }

    /// Index of the selected item
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(Item::is_selected)
    }

    /// The selected item
    ///
    /// Fails with `NoSelection` when the level has no selectable item.
    pub fn selected(&self) -> Result<&Item> {
        self.selected_index()
            .map(|i| &self.items[i])
            .ok_or(Error::NoSelection)
    }

    /// Select the first selectable item, clearing any other selection
    pub fn reset(&mut self) {
        let mut first = true;
        for item in self.items.iter_mut().filter(|i| i.is_selectable()) {
            item.set_selected(first);
            first = false;
        }
    }

    /// Move the selection forward, wrapping after the last selectable item
    pub fn select_next(&mut self) {
        self.step(true);
    }

    /// Move the selection backward, wrapping before the first selectable item
    pub fn select_previous(&mut self) {
        self.step(false);
    }

    fn step(&mut self, forward: bool) {
        let selectable = self.selectable_indices();
        let count = selectable.len();
        if count < 2 {
            return;
        }

        let Some(position) = selectable.iter().position(|&i| self.items[i].is_selected()) else {
            self.reset();
            return;
        };

        let target = if forward {
            (position + 1) % count
        } else {
            (position + count - 1) % count
        };

        self.items[selectable[position]].set_selected(false);
        self.items[selectable[target]].set_selected(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::host::ContentEntry;
    use crate::tui::item::{Command, ItemKind};
    use crate::tui::labels::Label;

    fn content(name: &str, completed: bool) -> Item {
        Item::content(ContentEntry {
            name: name.to_string(),
            title: name.to_string(),
            completed,
        })
    }

    /// Root-menu shaped level: Title, Text, Line, Space, ex1, ex2, Line, Space, Help, Exit
    fn sample() -> Level {
        Level::new(vec![
            Item::title(Label::literal("Story")),
            Item::plain(Label::literal("Pick one")),
            Item::line(),
            Item::space(),
            content("ex1", false),
            content("ex2", true),
            Item::line(),
            Item::space(),
            Item::command(Command::Help),
            Item::command(Command::Exit),
        ])
    }

    fn selected_name(level: &Level) -> String {
        level.selected().unwrap().describe()
    }

    #[test]
    fn test_height_sums_sizes() {
        assert_eq!(sample().height(), 10);

        let level = Level::new(vec![Item::new(ItemKind::Space { rows: 3 }), Item::line()]);
        assert_eq!(level.height(), 4);
        assert_eq!(Level::default().height(), 0);
    }

    #[test]
    fn test_selection_skips_non_selectable() {
        let mut level = sample();
        assert_eq!(selected_name(&level), "ex1");

        level.select_next();
        assert_eq!(selected_name(&level), "ex2");
        level.select_next();
        assert_eq!(selected_name(&level), "help");
        level.select_next();
        assert_eq!(selected_name(&level), "exit");
        level.select_next();
        assert_eq!(selected_name(&level), "ex1");
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut level = sample();
        level.select_previous();
        assert_eq!(selected_name(&level), "exit");
        level.select_previous();
        assert_eq!(selected_name(&level), "help");
    }

    #[test]
    fn test_cycle_returns_to_start() {
        let mut level = sample();
        level.select_next();
        let start = level.selected_index();
        let count = level.selectable_indices().len();

        for _ in 0..count {
            level.select_next();
        }
        assert_eq!(level.selected_index(), start);

        for _ in 0..count {
            level.select_previous();
        }
        assert_eq!(level.selected_index(), start);
    }

    #[test]
    fn test_exactly_one_selected() {
        let mut level = sample();
        for step in 0..9 {
            if step % 3 == 0 {
                level.select_previous();
            } else {
                level.select_next();
            }
            let selected = level.items().iter().filter(|i| i.is_selected()).count();
            assert_eq!(selected, 1);
        }
    }

    #[test]
    fn test_reset_selects_first() {
        let mut level = sample();
        level.select_next();
        level.select_next();
        level.reset();
        assert_eq!(selected_name(&level), "ex1");
        assert_eq!(
            level.items().iter().filter(|i| i.is_selected()).count(),
            1
        );
    }

    #[test]
    fn test_no_selectable_items() {
        let mut level = Level::new(vec![Item::title(Label::literal("x")), Item::line()]);
        assert!(!level.has_selectable());

        level.select_next();
        level.select_previous();
        level.reset();

        assert!(level.selected_index().is_none());
        assert!(matches!(level.selected(), Err(Error::NoSelection)));
    }

    #[test]
    fn test_single_selectable_stays_selected() {
        let mut level = Level::new(vec![Item::line(), Item::command(Command::Exit)]);
        level.select_next();
        assert_eq!(selected_name(&level), "exit");
        level.select_previous();
        assert_eq!(selected_name(&level), "exit");
    }

    #[test]
    fn test_empty_level() {
        let mut level = Level::default();
        level.select_next();
        assert!(matches!(level.selected(), Err(Error::NoSelection)));
    }
}
