//! Page controllers
//!
//! One controller per page holds that page's rules and handlers. The app
//! builds a fresh controller on every navigation and drops the old one, so
//! nothing survives leaving a page.

mod alerts;
mod api_page;
mod buttons;
mod contact_form;
mod dynamic_page;
mod home;
mod login;
mod tables;

pub use alerts::{AlertsPage, ALERT_BUTTONS};
pub use api_page::{ApiPage, API_BUTTONS};
pub use buttons::{ButtonAction, ButtonsPage, PRACTICE_BUTTONS};
pub use contact_form::ContactFormPage;
pub use dynamic_page::{DynamicPage, DYNAMIC_BUTTONS, LOADED_CONTENT};
pub use home::HomePage;
pub use login::{LoginPage, WelcomePage};
pub use tables::{TableColumn, TablesPage};

use super::app_state::{Page, ViewParams};
use super::dynamic::DelayPolicy;
use crate::api::ApiRecord;
use crate::error::Result;

/// What controllers need from the app when they are built
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub delay: DelayPolicy,
    pub records: Vec<ApiRecord>,
}

/// Horizontal row of buttons with one focused
#[derive(Debug, Clone)]
pub struct ButtonRow {
    pub labels: &'static [&'static str],
    pub selected: usize,
}

impl ButtonRow {
    pub fn new(labels: &'static [&'static str]) -> Self {
        Self {
            labels,
            selected: 0,
        }
    }

    pub fn next(&mut self) {
        if !self.labels.is_empty() {
            self.selected = (self.selected + 1) % self.labels.len();
        }
    }

    pub fn prev(&mut self) {
        if self.selected == 0 {
            self.selected = self.labels.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
    }
}

/// Controller of the page currently on screen
#[derive(Debug)]
pub enum PageController {
    Home(HomePage),
    About,
    Login(LoginPage),
    Welcome(WelcomePage),
    Forms(ContactFormPage),
    Dynamic(DynamicPage),
    Alerts(AlertsPage),
    Api(ApiPage),
    Buttons(ButtonsPage),
    Tables(TablesPage),
    /// Widgets with no terminal counterpart
    BrowserOnly(Page),
}

impl PageController {
    /// Build the controller for a page
    pub fn build(page: Page, params: &ViewParams, ctx: &PageContext) -> Result<Self> {
        let controller = match page {
            Page::Home => Self::Home(HomePage::default()),
            Page::About => Self::About,
            Page::Login => Self::Login(LoginPage::new()?),
            Page::Welcome => Self::Welcome(WelcomePage::new(
                params.username.clone().unwrap_or_default(),
            )),
            Page::Forms => Self::Forms(ContactFormPage::new()?),
            Page::Dynamic => Self::Dynamic(DynamicPage::new(ctx.delay)),
            Page::Alerts => Self::Alerts(AlertsPage::default()),
            Page::Api => Self::Api(ApiPage::new(ctx.delay)),
            Page::Buttons => Self::Buttons(ButtonsPage::default()),
            Page::Tables => Self::Tables(TablesPage::new(ctx.records.clone())),
            Page::DragDrop | Page::Download | Page::Iframe | Page::ShadowDom | Page::Upload => {
                Self::BrowserOnly(page)
            }
        };
        Ok(controller)
    }

    /// True when keystrokes go into a text input
    pub fn is_editing_text(&self) -> bool {
        match self {
            Self::Login(p) => p.form.is_editing_text(),
            Self::Forms(p) => p.form.is_editing_text(),
            _ => false,
        }
    }

    /// True while a simulated request is in flight
    pub fn is_loading(&self) -> bool {
        match self {
            Self::Dynamic(p) => p.content.is_loading(),
            Self::Api(p) => p.loader.is_loading(),
            _ => false,
        }
    }
}
