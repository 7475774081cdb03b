//! Dynamic content page: delayed loading and an instant visibility toggle

use crate::state::dynamic::{DelayPolicy, DynamicContent};
use crate::state::pages::ButtonRow;
use std::time::Instant;

pub const DYNAMIC_BUTTONS: &[&str] = &["Load content", "Toggle element", "Reset"];

/// Block swapped in once the simulated request completes
pub const LOADED_CONTENT: &[&str] = &[
    "Hello World!",
    "This text was loaded after a simulated network delay.",
    "Wait for it before asserting on it.",
];

#[derive(Debug, Clone)]
pub struct DynamicPage {
    pub buttons: ButtonRow,
    pub content: DynamicContent,
    /// The hidden element toggled without delay
    pub element_visible: bool,
}

impl DynamicPage {
    pub fn new(delay: DelayPolicy) -> Self {
        Self {
            buttons: ButtonRow::new(DYNAMIC_BUTTONS),
            content: DynamicContent::new(delay),
            element_visible: false,
        }
    }

    /// Press the focused button
    pub fn activate(&mut self, now: Instant) {
        match self.buttons.selected {
            0 => {
                self.content.trigger(now);
            }
            1 => self.toggle_element(),
            _ => self.reset(),
        }
    }

    /// Back to the state the page opened in
    pub fn reset(&mut self) {
        self.content.reset();
        self.element_visible = false;
    }

    pub fn toggle_element(&mut self) {
        self.element_visible = !self.element_visible;
    }

    /// Lines to show in the content region, if any
    pub fn visible_content(&self) -> Option<&'static [&'static str]> {
        self.content.is_loaded().then_some(LOADED_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn test_load_shows_indicator_then_content_once() {
        let mut page = DynamicPage::new(DelayPolicy::Fixed(DELAY));
        let now = Instant::now();

        page.activate(now);
        assert!(page.content.is_loading());
        assert_eq!(page.visible_content(), None);

        assert!(!page.content.tick(now + Duration::from_millis(1999)));
        assert!(page.content.tick(now + DELAY));
        assert_eq!(page.visible_content(), Some(LOADED_CONTENT));
        assert!(!page.content.tick(now + DELAY * 2));
        assert_eq!(page.content.completed_loads(), 1);
    }

    #[test]
    fn test_double_click_while_loading_swaps_once() {
        let mut page = DynamicPage::new(DelayPolicy::Fixed(DELAY));
        let now = Instant::now();
        page.activate(now);
        page.activate(now + Duration::from_millis(50));

        let mut swaps = 0;
        for step in 0..60 {
            if page.content.tick(now + Duration::from_millis(step * 100)) {
                swaps += 1;
            }
        }
        assert_eq!(swaps, 1);
    }

    #[test]
    fn test_reload_hides_previous_content() {
        let mut page = DynamicPage::new(DelayPolicy::Fixed(DELAY));
        let now = Instant::now();
        page.activate(now);
        page.content.tick(now + DELAY);
        page.activate(now + DELAY * 2);
        assert_eq!(page.visible_content(), None);
    }

    #[test]
    fn test_toggle_is_immediate() {
        let mut page = DynamicPage::new(DelayPolicy::Fixed(DELAY));
        page.buttons.next();
        page.activate(Instant::now());
        assert!(page.element_visible);
        assert!(!page.content.is_loading());
        page.activate(Instant::now());
        assert!(!page.element_visible);
    }

    #[test]
    fn test_reset_button_restores_initial_state() {
        let mut page = DynamicPage::new(DelayPolicy::Fixed(DELAY));
        let now = Instant::now();
        page.activate(now);
        page.toggle_element();

        page.buttons.selected = 2;
        page.activate(now);
        assert!(!page.content.is_loading());
        assert!(!page.element_visible);
        assert!(!page.content.tick(now + DELAY));
        assert_eq!(page.visible_content(), None);
    }
}
