//! Home page: the site map as a menu

use crate::state::app_state::Page;

#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub selected_index: usize,
}

impl HomePage {
    /// Every page except home itself
    pub fn entries() -> impl Iterator<Item = Page> {
        Page::ALL.into_iter().filter(|p| *p != Page::Home)
    }

    pub fn entry_count() -> usize {
        Page::ALL.len() - 1
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < Self::entry_count() {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_page(&self) -> Option<Page> {
        Self::entries().nth(self.selected_index)
    }

    /// Jump by number key, 1-based
    pub fn select_number(&mut self, n: usize) -> Option<Page> {
        let index = n.checked_sub(1)?;
        let page = Self::entries().nth(index)?;
        self.selected_index = index;
        Some(page)
    }
}
