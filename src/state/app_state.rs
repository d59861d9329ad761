//! Application state definitions

use crate::gate::registration::FieldIndicator;
use crate::gate::search::{Coordinate, RenderAction, SearchResult};
use crate::state::{RegisterForm, SearchForm};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    Search,
}

/// How the results region renders a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsMode {
    /// Markers plotted on a coordinate canvas
    #[default]
    Map,
    /// One row per result
    List,
}

impl ResultsMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Map => Self::List,
            Self::List => Self::Map,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Map => "Map",
            Self::List => "List",
        }
    }
}

/// The on-page representation of the most recent result set.
///
/// Created only from a successful response, torn down wholesale at the start
/// of the next submit attempt, never merged with a previous set.
#[derive(Debug, Clone)]
pub struct ResultsView {
    pub results: Vec<SearchResult>,
    pub mode: ResultsMode,
    pub selected: usize,
}

impl ResultsView {
    pub fn new(results: Vec<SearchResult>, mode: ResultsMode) -> Self {
        Self {
            results,
            mode,
            selected: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.results.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1) % self.results.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.results.is_empty() {
            if self.selected == 0 {
                self.selected = self.results.len() - 1;
            } else {
                self.selected -= 1;
            }
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    /// Bounding box of all markers as (south-west, north-east), for scaling
    /// the map canvas. `None` when the set is empty.
    pub fn marker_bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let first = self.results.first()?.geocodes.main;
        let mut sw = first;
        let mut ne = first;
        for result in &self.results {
            let c = result.geocodes.main;
            sw.latitude = sw.latitude.min(c.latitude);
            sw.longitude = sw.longitude.min(c.longitude);
            ne.latitude = ne.latitude.max(c.latitude);
            ne.longitude = ne.longitude.max(c.longitude);
        }
        Some((sw, ne))
    }
}

/// Application state shared between the event handlers and the renderer
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub register_form: RegisterForm,
    pub search_form: SearchForm,
    /// Indicator region under the username field; `None` until first attempt
    pub username_indicator: Option<FieldIndicator>,
    /// Indicator region under the password field; `None` until first attempt
    pub password_indicator: Option<FieldIndicator>,
    /// Inline error-message region of the search view
    pub error_message: Option<String>,
    /// Results region; `None` renders as an absent container
    pub results: Option<ResultsView>,
    /// True while a search request is in flight
    pub search_pending: bool,
    /// Preferred mode for the next result set
    pub results_mode: ResultsMode,
    /// Username of the account registered this session, if any
    pub registered_user: Option<String>,
    /// One-line status feedback (registration outcome, connection issues)
    pub status_message: Option<String>,
}

impl AppState {
    /// Tear down stale search UI before a request is issued. Order matters:
    /// the error message is cleared first, then the previous result container
    /// is removed, leaving the region empty while the request is pending.
    pub fn clear_search_output(&mut self) {
        self.error_message = None;
        self.results = None;
    }

    /// Apply a resolved response to the search view.
    pub fn apply_render_action(&mut self, action: RenderAction) {
        match action {
            RenderAction::ShowError(message) => {
                // The results region is left exactly as the teardown put it;
                // it is not cleared a second time.
                self.error_message = Some(message);
            }
            RenderAction::ShowResults(results) => {
                self.results = Some(ResultsView::new(results, self.results_mode));
            }
            RenderAction::Nothing => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::search::{Geocodes, Location};

    fn result(name: &str, lat: f64, lon: f64) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            location: Location {
                formatted_address: format!("{name} street"),
            },
            geocodes: Geocodes {
                main: Coordinate {
                    latitude: lat,
                    longitude: lon,
                },
            },
        }
    }

    mod results_view {
        use super::*;

        #[test]
        fn test_empty_set_is_a_present_container() {
            let view = ResultsView::new(Vec::new(), ResultsMode::Map);
            assert!(view.is_empty());
            assert!(view.selected_result().is_none());
            assert!(view.marker_bounds().is_none());
        }

        #[test]
        fn test_selection_wraps() {
            let mut view = ResultsView::new(
                vec![result("a", 51.0, 0.0), result("b", 52.0, 0.1)],
                ResultsMode::List,
            );
            view.select_next();
            assert_eq!(view.selected_result().unwrap().name, "b");
            view.select_next();
            assert_eq!(view.selected_result().unwrap().name, "a");
            view.select_prev();
            assert_eq!(view.selected_result().unwrap().name, "b");
        }

        #[test]
        fn test_selection_on_empty_is_noop() {
            let mut view = ResultsView::new(Vec::new(), ResultsMode::List);
            view.select_next();
            view.select_prev();
            assert!(view.selected_result().is_none());
        }

        #[test]
        fn test_marker_bounds_cover_all_results() {
            let view = ResultsView::new(
                vec![
                    result("a", 51.58, -0.02),
                    result("b", 51.62, -0.01),
                    result("c", 51.60, 0.01),
                ],
                ResultsMode::Map,
            );
            let (sw, ne) = view.marker_bounds().unwrap();
            assert_eq!(sw.latitude, 51.58);
            assert_eq!(sw.longitude, -0.02);
            assert_eq!(ne.latitude, 51.62);
            assert_eq!(ne.longitude, 0.01);
        }

        #[test]
        fn test_toggle_mode() {
            let mut view = ResultsView::new(Vec::new(), ResultsMode::Map);
            view.toggle_mode();
            assert_eq!(view.mode, ResultsMode::List);
            view.toggle_mode();
            assert_eq!(view.mode, ResultsMode::Map);
        }
    }

    mod search_output {
        use super::*;

        #[test]
        fn test_teardown_clears_error_and_results() {
            let mut state = AppState {
                error_message: Some("stale".to_string()),
                results: Some(ResultsView::new(
                    vec![result("a", 51.0, 0.0)],
                    ResultsMode::Map,
                )),
                ..Default::default()
            };
            state.clear_search_output();
            assert!(state.error_message.is_none());
            assert!(state.results.is_none());
        }

        #[test]
        fn test_show_error_leaves_results_region_untouched() {
            let mut state = AppState::default();
            state.clear_search_output();
            state.apply_render_action(RenderAction::ShowError("no results".to_string()));
            assert_eq!(state.error_message.as_deref(), Some("no results"));
            assert!(state.results.is_none());
        }

        #[test]
        fn test_show_results_builds_fresh_container() {
            let mut state = AppState::default();
            state.apply_render_action(RenderAction::ShowResults(vec![result("a", 51.0, 0.0)]));
            let view = state.results.as_ref().unwrap();
            assert_eq!(view.results.len(), 1);
            assert_eq!(view.selected, 0);
        }

        #[test]
        fn test_empty_results_render_empty_container_without_error() {
            let mut state = AppState::default();
            state.apply_render_action(RenderAction::ShowResults(Vec::new()));
            assert!(state.results.as_ref().unwrap().is_empty());
            assert!(state.error_message.is_none());
        }

        #[test]
        fn test_nothing_changes_nothing() {
            let mut state = AppState::default();
            state.error_message = Some("previous".to_string());
            state.apply_render_action(RenderAction::Nothing);
            assert_eq!(state.error_message.as_deref(), Some("previous"));
            assert!(state.results.is_none());
        }

        #[test]
        fn test_new_result_set_replaces_previous_never_merges() {
            let mut state = AppState::default();
            state.apply_render_action(RenderAction::ShowResults(vec![
                result("a", 51.0, 0.0),
                result("b", 51.1, 0.1),
            ]));
            state.clear_search_output();
            state.apply_render_action(RenderAction::ShowResults(vec![result("c", 52.0, 0.2)]));
            let view = state.results.as_ref().unwrap();
            assert_eq!(view.results.len(), 1);
            assert_eq!(view.results[0].name, "c");
        }

        #[test]
        fn test_preferred_mode_applies_to_new_container() {
            let mut state = AppState {
                results_mode: ResultsMode::List,
                ..Default::default()
            };
            state.apply_render_action(RenderAction::ShowResults(Vec::new()));
            assert_eq!(state.results.as_ref().unwrap().mode, ResultsMode::List);
        }
    }
}
