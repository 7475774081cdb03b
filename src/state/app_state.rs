//! Application state definitions

use super::pages::PageController;
use crate::error::{PlaygroundError, Result};

/// Every page of the practice site, keyed by its route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Alerts,
    Api,
    Login,
    Welcome,
    Buttons,
    DragDrop,
    Download,
    Dynamic,
    Forms,
    Iframe,
    ShadowDom,
    Tables,
    Upload,
}

impl Page {
    /// Site map order, as listed on the home page
    pub const ALL: [Page; 15] = [
        Page::Home,
        Page::About,
        Page::Alerts,
        Page::Api,
        Page::Login,
        Page::Welcome,
        Page::Buttons,
        Page::DragDrop,
        Page::Download,
        Page::Dynamic,
        Page::Forms,
        Page::Iframe,
        Page::ShadowDom,
        Page::Tables,
        Page::Upload,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about.html",
            Self::Alerts => "/alerts/",
            Self::Api => "/api/",
            Self::Login => "/auth/login.html",
            Self::Welcome => "/auth/welcome.html",
            Self::Buttons => "/buttons/",
            Self::DragDrop => "/dragdrop/",
            Self::Download => "/download/",
            Self::Dynamic => "/dynamic/",
            Self::Forms => "/forms/",
            Self::Iframe => "/iframe/iframe.html",
            Self::ShadowDom => "/shadowdom/",
            Self::Tables => "/tables/table.html",
            Self::Upload => "/upload/",
        }
    }

    /// Resolve a route; trailing-slash and `index.html` variants are accepted
    pub fn from_route(route: &str) -> Result<Self> {
        let trimmed = route.trim();
        let normalized = trimmed.strip_suffix("index.html").unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|page| {
                let known = page.route();
                normalized == known
                    || (known.ends_with('/') && normalized == known.trim_end_matches('/'))
            })
            .ok_or_else(|| PlaygroundError::UnknownRoute(route.to_string()))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Alerts => "Alerts",
            Self::Api => "Mock API",
            Self::Login => "Login",
            Self::Welcome => "Welcome",
            Self::Buttons => "Buttons",
            Self::DragDrop => "Drag and Drop",
            Self::Download => "File Download",
            Self::Dynamic => "Dynamic Content",
            Self::Forms => "Forms",
            Self::Iframe => "Iframe",
            Self::ShadowDom => "Shadow DOM",
            Self::Tables => "Tables",
            Self::Upload => "File Upload",
        }
    }

    /// Widgets that only exist inside a real browser
    pub fn is_browser_only(&self) -> bool {
        matches!(
            self,
            Self::DragDrop | Self::Download | Self::Iframe | Self::ShadowDom | Self::Upload
        )
    }
}

/// Parameters carried across a navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    /// Set by a successful login
    pub username: Option<String>,
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_page: Page,
    pub view_params: ViewParams,
    pub view_history: Vec<(Page, ViewParams)>,

    /// Controller of the current page, rebuilt on every navigation
    pub controller: PageController,

    // UI state
    pub status_message: Option<String>,
    pub error_queue: Vec<String>,
}

impl AppState {
    pub fn new(page: Page, controller: PageController) -> Self {
        Self {
            current_page: page,
            view_params: ViewParams::default(),
            view_history: Vec::new(),
            controller,
            status_message: None,
            error_queue: Vec::new(),
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod page {
        use super::*;

        #[test]
        fn test_routes_round_trip() {
            for page in Page::ALL {
                assert_eq!(Page::from_route(page.route()).unwrap(), page);
            }
        }

        #[test]
        fn test_route_variants() {
            assert_eq!(Page::from_route("/forms").unwrap(), Page::Forms);
            assert_eq!(Page::from_route("/forms/index.html").unwrap(), Page::Forms);
            assert_eq!(Page::from_route("/index.html").unwrap(), Page::Home);
            assert_eq!(Page::from_route(" /api/ ").unwrap(), Page::Api);
        }

        #[test]
        fn test_unknown_route() {
            let err = Page::from_route("/admin/").unwrap_err();
            assert!(matches!(err, PlaygroundError::UnknownRoute(r) if r == "/admin/"));
        }

        #[test]
        fn test_routes_are_unique() {
            let mut routes: Vec<_> = Page::ALL.iter().map(|p| p.route()).collect();
            routes.sort();
            routes.dedup();
            assert_eq!(routes.len(), Page::ALL.len());
        }

        #[test]
        fn test_browser_only_pages() {
            assert!(Page::ShadowDom.is_browser_only());
            assert!(Page::Upload.is_browser_only());
            assert!(!Page::Login.is_browser_only());
            assert!(!Page::Tables.is_browser_only());
        }

        #[test]
        fn test_default_is_home() {
            assert_eq!(Page::default(), Page::Home);
        }
    }

    mod sort_direction {
        use super::*;

        #[test]
        fn test_toggle() {
            assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
            assert_eq!(SortDirection::Desc.toggle(), SortDirection::Asc);
        }

        #[test]
        fn test_symbol() {
            assert_eq!(SortDirection::Asc.symbol(), "↑");
            assert_eq!(SortDirection::Desc.symbol(), "↓");
        }
    }

    mod error_queue {
        use super::*;

        #[test]
        fn test_errors_are_fifo() {
            let mut state = AppState::new(Page::About, PageController::About);
            assert_eq!(state.current_error(), None);
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            state.dismiss_error();
            assert_eq!(state.current_error(), None);
        }
    }
}
