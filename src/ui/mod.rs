//! UI module for rendering the TUI

mod alerts;
mod api;
mod auth;
mod buttons;
mod components;
mod dynamic;
mod form_page;
mod forms;
mod home;
mod info;
mod layout;
mod tables;
mod terminal_dialogs;
mod widgets;

pub use terminal_dialogs::TerminalDialogs;
pub use widgets::{render_scrollable_list, render_scrollable_table};

use crate::app::App;
use crate::state::PageController;
use components::{render_modal, ModalDialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content for the current page
    match &app.state.controller {
        PageController::Home(page) => home::draw(frame, main_area, page),
        PageController::About => info::draw_about(frame, main_area),
        PageController::Login(page) => auth::draw_login(frame, main_area, page),
        PageController::Welcome(page) => auth::draw_welcome(frame, main_area, page),
        PageController::Forms(page) => form_page::draw(frame, main_area, page),
        PageController::Dynamic(page) => dynamic::draw(frame, main_area, page),
        PageController::Alerts(page) => alerts::draw(frame, main_area, page),
        PageController::Api(page) => api::draw(frame, main_area, page),
        PageController::Buttons(page) => buttons::draw(frame, main_area, page),
        PageController::Tables(page) => tables::draw(frame, main_area, page),
        PageController::BrowserOnly(page) => info::draw_browser_only(frame, main_area, *page),
    }

    layout::draw_status_bar(frame, app);

    if let Some(message) = app.state.current_error() {
        render_modal(frame, &ModalDialog::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FixtureApi;
    use crate::state::{Page, PageContext, ViewParams};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let frame = terminal.draw(|frame| draw(frame, app)).unwrap();
        screen_text(frame.buffer)
    }

    fn app_at(page: Page) -> App {
        let fixture = FixtureApi::embedded().unwrap();
        let ctx = PageContext {
            records: fixture.records().to_vec(),
            ..Default::default()
        };
        App::with_api(Box::new(fixture), ctx, page).unwrap()
    }

    #[test]
    fn test_every_page_renders() {
        for page in Page::ALL {
            let mut app = app_at(Page::Home);
            app.navigate(
                page,
                ViewParams {
                    username: Some("test@example.com".to_string()),
                },
            );
            let text = render(&app);
            assert!(text.contains(page.route()), "{page:?}");
        }
    }

    #[test]
    fn test_login_shows_field_errors() {
        let mut app = app_at(Page::Login);
        if let PageController::Login(login) = &mut app.state.controller {
            login.submit();
        }
        let text = render(&app);
        assert!(text.contains("Username is required"));
        assert!(text.contains("Password is required"));
    }

    #[test]
    fn test_tables_lists_fixture_users() {
        let app = app_at(Page::Tables);
        let text = render(&app);
        assert!(text.contains("Leanne Graham"));
        assert!(text.contains("ID ↑"));
    }

    #[test]
    fn test_error_dialog_overlay() {
        let mut app = app_at(Page::About);
        app.push_error("fixture exploded");
        let text = render(&app);
        assert!(text.contains("fixture exploded"));
    }
}
