//! Application state and core logic

use crate::client::{ApiClient, ApiClientTrait};
use crate::config::TuiConfig;
use crate::gate::{registration, search};
use crate::state::{AppState, Form, ResultsMode, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<C: ApiClientTrait> {
    /// Current application state
    pub state: AppState,
    /// HTTP client for the HotelHelper service
    client: C,
    /// Whether the app should quit
    quit: bool,
}

impl App<ApiClient> {
    /// Create a new App instance against the configured service
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = ApiClient::new(config.server_url.as_deref())?;
        Ok(Self::with_client(client, config.results_mode()))
    }
}

impl<C: ApiClientTrait> App<C> {
    /// Create an App around an existing client (used by tests with a mock)
    pub fn with_client(client: C, results_mode: ResultsMode) -> Self {
        let state = AppState {
            results_mode,
            ..Default::default()
        };

        Self {
            state,
            client,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event, dispatching on the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Register => self.handle_register_key(key).await,
            View::Search => self.handle_search_key(key).await,
        }
        Ok(())
    }

    async fn handle_register_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.register_form.next_row(),
            KeyCode::BackTab | KeyCode::Up => self.state.register_form.prev_row(),
            KeyCode::Enter => self.submit_registration().await,
            KeyCode::Backspace => self.state.register_form.active_field_mut().pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.register_form.active_field_mut().push_char(c);
            }
            _ => {}
        }
    }

    async fn handle_search_key(&mut self, key: KeyEvent) {
        // Ctrl shortcuts act on the results container regardless of the active row
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => {
                    self.state.results_mode = self.state.results_mode.toggle();
                    if let Some(view) = &mut self.state.results {
                        view.toggle_mode();
                    }
                }
                KeyCode::Char('n') => {
                    if let Some(view) = &mut self.state.results {
                        view.select_next();
                    }
                }
                KeyCode::Char('p') => {
                    if let Some(view) = &mut self.state.results {
                        view.select_prev();
                    }
                }
                KeyCode::Char('r') => self.state.current_view = View::Register,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.search_form.next_row(),
            KeyCode::BackTab | KeyCode::Up => self.state.search_form.prev_row(),
            KeyCode::Enter => self.submit_search().await,
            _ => self.handle_search_row_key(key),
        }
    }

    /// Keys whose meaning depends on the active search-form row
    fn handle_search_row_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.search_form;

        if form.is_text_row_active() {
            match key.code {
                KeyCode::Backspace => form.search.pop_char(),
                KeyCode::Char(c) => form.search.push_char(c),
                _ => {}
            }
        } else if form.is_category_row_active() {
            match key.code {
                KeyCode::Left => form.category_cursor_left(),
                KeyCode::Right => form.category_cursor_right(),
                KeyCode::Char(' ') => form.toggle_category(),
                _ => {}
            }
        } else if form.is_radius_row_active() {
            match key.code {
                KeyCode::Left => form.radius.cursor_left(),
                KeyCode::Right => form.radius.cursor_right(),
                KeyCode::Char(' ') => form.radius.select_cursor(),
                _ => {}
            }
        }
    }

    /// Run the registration gate and, if it passes, submit the form.
    ///
    /// Both indicator regions are replaced on every attempt, so errors from a
    /// previous attempt can never accumulate.
    async fn submit_registration(&mut self) {
        let form = &self.state.register_form;
        let outcome = registration::validate(form.username.as_text(), form.password.as_text());

        self.state.username_indicator = Some(outcome.username.clone());
        self.state.password_indicator = Some(outcome.password.clone());

        if !outcome.should_submit() {
            return;
        }

        let username = form.username.as_text().to_string();
        let password = form.password.as_text().to_string();

        match self.client.register(&username, &password).await {
            Ok(()) => {
                tracing::info!(%username, "registration submitted");
                self.state.registered_user = Some(username);
                self.state.status_message = Some("Registration submitted".to_string());
                self.state.current_view = View::Search;
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration request failed");
                self.state.status_message = Some(format!("Registration failed: {err}"));
            }
        }
    }

    /// Plan the search submit; if the radius gate passes, tear down stale
    /// output, issue exactly one request, and redraw the region from the
    /// response.
    async fn submit_search(&mut self) {
        let query = self.state.search_form.query();

        match search::plan(&query) {
            search::SubmitPlan::Blocked { message } => {
                self.state.error_message = Some(message.to_string());
            }
            search::SubmitPlan::Send { body } => {
                // Stale UI is torn down before the request goes out so the
                // pending period never shows mixed old/new state
                self.state.clear_search_output();
                self.state.search_pending = true;

                let action = match self.client.search(&body).await {
                    Ok(response) => search::interpret(response),
                    Err(err) => {
                        tracing::warn!(error = %err, "search request failed");
                        search::RenderAction::ShowError(search::SEARCH_FAILED.to_string())
                    }
                };

                self.state.search_pending = false;
                self.state.apply_render_action(action);
            }
        }
    }
}
