//! Form state management and form structs

use super::field::FormField;
use crate::gate::search::SearchQuery;

/// Foursquare category choices offered on the search form
pub const CATEGORIES: &[(u32, &str)] = &[
    (10000, "Arts and Entertainment"),
    (12000, "Community"),
    (13000, "Dining and Drinking"),
    (14000, "Events"),
    (16000, "Landmarks and Outdoors"),
    (17000, "Retail"),
    (18000, "Sports"),
    (19000, "Travel and Transportation"),
];

/// Radius options in meters, offered as an exclusive choice
pub const RADIUS_OPTIONS: &[u32] = &[500, 1000, 2500, 5000, 10000];

/// Trait for common form operations
pub trait Form {
    fn row_count(&self) -> usize;
    fn active_row(&self) -> usize;
    fn set_active_row(&mut self, index: usize);
    fn next_row(&mut self) {
        let count = self.row_count();
        let current = self.active_row();
        self.set_active_row((current + 1) % count);
    }
    fn prev_row(&mut self) {
        let count = self.row_count();
        let current = self.active_row();
        if current == 0 {
            self.set_active_row(count - 1);
        } else {
            self.set_active_row(current - 1);
        }
    }
}

// Registration form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub username: FormField,
    pub password: FormField,
    pub active_row_index: usize,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            username: FormField::text("username", "Username"),
            password: FormField::secret("password", "Password"),
            active_row_index: 0,
        }
    }

    /// The field currently receiving text input
    pub fn active_field_mut(&mut self) -> &mut FormField {
        match self.active_row_index {
            0 => &mut self.username,
            _ => &mut self.password,
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn row_count(&self) -> usize {
        2 // username, password
    }
    fn active_row(&self) -> usize {
        self.active_row_index
    }
    fn set_active_row(&mut self, index: usize) {
        self.active_row_index = index.min(1);
    }
}

/// Exclusive radius choice, initially unselected
#[derive(Debug, Clone, Default)]
pub struct RadiusSelection {
    /// Option the cursor is on when the radius row is active
    pub cursor: usize,
    /// Committed choice, if any
    pub selected: Option<usize>,
}

impl RadiusSelection {
    pub fn cursor_left(&mut self) {
        if self.cursor == 0 {
            self.cursor = RADIUS_OPTIONS.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1) % RADIUS_OPTIONS.len();
    }

    /// Commit the option under the cursor (replaces any previous choice)
    pub fn select_cursor(&mut self) {
        self.selected = Some(self.cursor);
    }

    /// The selected radius in meters, if any
    pub fn value(&self) -> Option<u32> {
        self.selected.map(|i| RADIUS_OPTIONS[i])
    }
}

// Search form
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub search: FormField,
    /// One toggle per entry in [`CATEGORIES`]
    pub category_selected: Vec<bool>,
    /// Cursor within the category row
    pub category_cursor: usize,
    pub radius: RadiusSelection,
    pub active_row_index: usize,
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            search: FormField::text("search", "Search"),
            category_selected: vec![false; CATEGORIES.len()],
            category_cursor: 0,
            radius: RadiusSelection::default(),
            active_row_index: 0,
        }
    }

    /// Returns true if the search text row is active
    pub fn is_text_row_active(&self) -> bool {
        self.active_row_index == 0
    }

    /// Returns true if the category row is active
    pub fn is_category_row_active(&self) -> bool {
        self.active_row_index == 1
    }

    /// Returns true if the radius row is active
    pub fn is_radius_row_active(&self) -> bool {
        self.active_row_index == 2
    }

    pub fn category_cursor_left(&mut self) {
        if self.category_cursor == 0 {
            self.category_cursor = CATEGORIES.len() - 1;
        } else {
            self.category_cursor -= 1;
        }
    }

    pub fn category_cursor_right(&mut self) {
        self.category_cursor = (self.category_cursor + 1) % CATEGORIES.len();
    }

    /// Toggle the category under the cursor
    pub fn toggle_category(&mut self) {
        self.category_selected[self.category_cursor] = !self.category_selected[self.category_cursor];
    }

    /// Snapshot the form into a query, read at submit time (never cached)
    pub fn query(&self) -> SearchQuery {
        let mut fields = vec![("search".to_string(), self.search.as_text().to_string())];
        for (i, (id, _)) in CATEGORIES.iter().enumerate() {
            if self.category_selected[i] {
                fields.push(("categories".to_string(), id.to_string()));
            }
        }
        SearchQuery {
            fields,
            radius: self.radius.value().map(|v| v.to_string()),
        }
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SearchForm {
    fn row_count(&self) -> usize {
        3 // search text, categories, radius
    }
    fn active_row(&self) -> usize {
        self.active_row_index
    }
    fn set_active_row(&mut self, index: usize) {
        self.active_row_index = index.min(2);
    }
}
