//! Application state and core logic

use crate::api::{ApiClientTrait, FixtureApi};
use crate::config::PlaygroundConfig;
use crate::state::{
    AppState, ButtonAction, DialogPort, Form, Page, PageContext, PageController, ViewParams,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Poll interval while a simulated request is in flight
const FAST_POLL: Duration = Duration::from_millis(16);
/// Poll interval otherwise
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Mock API behind the API page
    api: Box<dyn ApiClientTrait>,
    /// Shared inputs for page controllers
    ctx: PageContext,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from the user configuration
    pub async fn new(config: &PlaygroundConfig) -> Result<Self> {
        let fixture = FixtureApi::load(config.fixture_path.as_deref()).await?;
        let ctx = PageContext {
            delay: config.delay_policy(),
            records: fixture.records().to_vec(),
        };
        Self::with_api(Box::new(fixture), ctx, config.start_page())
    }

    /// Create an App over any API client
    pub fn with_api(api: Box<dyn ApiClientTrait>, ctx: PageContext, start: Page) -> Result<Self> {
        // Welcome is only reachable through a login
        let start = if start == Page::Welcome {
            Page::Login
        } else {
            start
        };
        let controller = PageController::build(start, &ViewParams::default(), &ctx)?;
        Ok(Self {
            state: AppState::new(start, controller),
            api,
            ctx,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// How long the event loop may wait for input
    pub fn poll_interval(&self) -> Duration {
        if self.state.controller.is_loading() {
            FAST_POLL
        } else {
            IDLE_POLL
        }
    }

    /// Navigate to a new page; the page being left goes onto the history
    pub fn navigate(&mut self, page: Page, params: ViewParams) {
        let (page, params) = if page == Page::Welcome && params.username.is_none() {
            tracing::info!("Welcome requires a login, redirecting");
            (Page::Login, ViewParams::default())
        } else {
            (page, params)
        };

        let Some(controller) = self.build_controller(page, &params) else {
            return;
        };

        self.state.view_history.push((
            self.state.current_page,
            std::mem::take(&mut self.state.view_params),
        ));
        self.state.current_page = page;
        self.state.view_params = params;
        self.state.controller = controller;
        self.state.status_message = None;
        tracing::info!("Navigated to {}", page.route());
    }

    /// Go back to the previous page
    pub fn go_back(&mut self) {
        while let Some((page, params)) = self.state.view_history.pop() {
            if let Some(controller) = self.build_controller(page, &params) {
                self.state.current_page = page;
                self.state.view_params = params;
                self.state.controller = controller;
                self.state.status_message = None;
                tracing::info!("Back to {}", page.route());
                return;
            }
        }
    }

    fn build_controller(&mut self, page: Page, params: &ViewParams) -> Option<PageController> {
        match PageController::build(page, params, &self.ctx) {
            Ok(controller) => Some(controller),
            Err(e) => {
                tracing::warn!("Failed to open {}: {e}", page.route());
                self.push_error(format!("Could not open {}: {e}", page.title()));
                None
            }
        }
    }

    /// Handle a key press. Dialog-opening keys block on `dialogs` until the
    /// user answers.
    pub async fn handle_key(&mut self, key: KeyEvent, dialogs: &mut dyn DialogPort) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('q') && !self.state.controller.is_editing_text() {
            self.quit = true;
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.go_back();
            return Ok(());
        }

        match self.state.current_page {
            Page::Home => self.handle_home_key(key),
            Page::Login => self.handle_login_key(key),
            Page::Welcome => self.handle_welcome_key(key),
            Page::Forms => self.handle_forms_key(key),
            Page::Dynamic => self.handle_dynamic_key(key),
            Page::Alerts => self.handle_alerts_key(key, dialogs),
            Page::Api => self.handle_api_key(key),
            Page::Buttons => self.handle_buttons_key(key),
            Page::Tables => self.handle_tables_key(key),
            Page::About
            | Page::DragDrop
            | Page::Download
            | Page::Iframe
            | Page::ShadowDom
            | Page::Upload => {}
        }
        Ok(())
    }

    /// Advance timers; completes simulated requests whose delay has elapsed
    pub async fn tick(&mut self, now: Instant) {
        match &mut self.state.controller {
            PageController::Dynamic(page) => {
                if page.content.tick(now) {
                    self.state.status_message = Some("Content loaded".to_string());
                }
            }
            PageController::Api(page) => {
                if let Some(endpoint) = page.tick(now) {
                    let outcome = self.api.fetch(endpoint).await;
                    self.state.status_message = Some(match &outcome {
                        Ok(response) => format!("{} {}", response.status, endpoint.path()),
                        Err(e) => format!("{e} {}", endpoint.path()),
                    });
                    page.complete(outcome);
                }
            }
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let PageController::Home(home) = &mut self.state.controller else {
            return;
        };
        let target = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                home.move_selection_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                home.move_selection_down();
                None
            }
            KeyCode::Enter => home.selected_page(),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|n| home.select_number(n as usize)),
            _ => None,
        };
        if let Some(page) = target {
            self.navigate(page, ViewParams::default());
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        let PageController::Login(login) = &mut self.state.controller else {
            return;
        };
        let mut signed_in = None;
        match key.code {
            KeyCode::Tab | KeyCode::Down => login.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => login.form.prev_field(),
            KeyCode::Enter if login.enter_submits() => signed_in = login.submit(),
            KeyCode::Enter => login.form.next_field(),
            KeyCode::Char(c) => login.form.input_char(c),
            KeyCode::Backspace => login.form.backspace(),
            _ => {}
        }
        if let Some(username) = signed_in {
            self.navigate(
                Page::Welcome,
                ViewParams {
                    username: Some(username),
                },
            );
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('l')) {
            tracing::info!("Logged out");
            self.navigate(Page::Login, ViewParams::default());
            // Back must not lead to a signed-in page after a logout
            self.state
                .view_history
                .retain(|(page, _)| *page != Page::Welcome);
            self.state.status_message = Some("You have been logged out".to_string());
        }
    }

    fn handle_forms_key(&mut self, key: KeyEvent) {
        let PageController::Forms(page) = &mut self.state.controller else {
            return;
        };
        let on_multiline = page
            .form
            .active_field_mut()
            .is_some_and(|f| f.is_multiline());
        match key.code {
            KeyCode::Tab => page.form.next_field(),
            KeyCode::BackTab => page.form.prev_field(),
            KeyCode::Enter => match page.form.active_button() {
                Some(index) => page.press_button(index),
                None if on_multiline => page.input_char('\n'),
                None => {
                    page.submit();
                }
            },
            KeyCode::Char(c) => page.input_char(c),
            KeyCode::Backspace => page.backspace(),
            _ => {}
        }
        self.state.status_message = match (&page.submitted, page.error_count()) {
            (Some(_), _) => Some("Form submitted successfully!".to_string()),
            (None, 0) => None,
            (None, n) => Some(format!("Please fix {n} error(s)")),
        };
    }

    fn handle_dynamic_key(&mut self, key: KeyEvent) {
        let PageController::Dynamic(page) = &mut self.state.controller else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Right => page.buttons.next(),
            KeyCode::BackTab | KeyCode::Left => page.buttons.prev(),
            KeyCode::Enter | KeyCode::Char(' ') => page.activate(Instant::now()),
            _ => {}
        }
    }

    fn handle_alerts_key(&mut self, key: KeyEvent, dialogs: &mut dyn DialogPort) {
        let PageController::Alerts(page) = &mut self.state.controller else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Right => page.buttons.next(),
            KeyCode::BackTab | KeyCode::Left => page.buttons.prev(),
            KeyCode::Enter | KeyCode::Char(' ') => page.activate(dialogs),
            _ => {}
        }
    }

    fn handle_api_key(&mut self, key: KeyEvent) {
        let PageController::Api(page) = &mut self.state.controller else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Right => page.buttons.next(),
            KeyCode::BackTab | KeyCode::Left => page.buttons.prev(),
            KeyCode::Enter | KeyCode::Char(' ') => page.activate(Instant::now()),
            _ => {}
        }
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        let PageController::Buttons(page) = &mut self.state.controller else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Right => page.buttons.next(),
            KeyCode::BackTab | KeyCode::Left => page.buttons.prev(),
            KeyCode::Enter | KeyCode::Char(' ') => page.interact(ButtonAction::Click),
            KeyCode::Char('d') => page.interact(ButtonAction::DoubleClick),
            KeyCode::Char('r') => page.interact(ButtonAction::RightClick),
            _ => {}
        }
    }

    fn handle_tables_key(&mut self, key: KeyEvent) {
        let PageController::Tables(page) = &mut self.state.controller else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => page.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => page.move_selection_down(),
            KeyCode::Char('s') => page.cycle_sort_column(),
            KeyCode::Char('o') => page.toggle_sort_direction(),
            _ => {}
        }
    }
}
