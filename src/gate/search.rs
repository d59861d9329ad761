//! Search submission planning and response interpretation
//!
//! `plan` decides whether a search may be sent (the radius gate) and builds
//! the request body; `interpret` maps the service's JSON response to a single
//! render action. Neither function performs I/O.

use serde::Deserialize;

/// Message shown when submitting without a radius selection
pub const SELECT_RADIUS: &str = "Please select a radius.";
/// Message shown for any transport or parse failure
pub const SEARCH_FAILED: &str = "An error occurred during the search.";

/// Snapshot of the search form at submit time: the native fields plus the
/// out-of-band radius selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Native form fields in submission order (`search`, repeated `categories`)
    pub fields: Vec<(String, String)>,
    /// Exclusive radius choice; `None` until the user picks one
    pub radius: Option<String>,
}

/// Decision for one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPlan {
    /// No radius selected; display the fixed message and send nothing
    Blocked { message: &'static str },
    /// Send exactly one request with this form-encoded body
    Send { body: Vec<(String, String)> },
}

/// Build the submission plan for a query.
///
/// The radius gate is hard: without a selection no request is issued, not
/// even a partial one. With a selection the body carries every native field
/// followed by the `radius` field, mirroring how the form serializes.
pub fn plan(query: &SearchQuery) -> SubmitPlan {
    let Some(radius) = &query.radius else {
        return SubmitPlan::Blocked {
            message: SELECT_RADIUS,
        };
    };

    let mut body = query.fields.clone();
    body.push(("radius".to_string(), radius.clone()));
    SubmitPlan::Send { body }
}

/// One search result as returned by the service. Shapes are presence-checked
/// by deserialization and otherwise taken at face value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub location: Location,
    pub geocodes: Geocodes,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub formatted_address: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geocodes {
    pub main: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Top-level response envelope: an error message or a result collection.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub error: Option<String>,
    pub results: Option<Vec<SearchResult>>,
}

/// What the resolved response means for the results region
#[derive(Debug, Clone, PartialEq)]
pub enum RenderAction {
    /// Display the service's message; leave the results region untouched
    ShowError(String),
    /// Replace the results region with a fresh container of these results
    /// (an empty collection renders an empty container, not an error)
    ShowResults(Vec<SearchResult>),
    /// Response carried neither field; do nothing
    Nothing,
}

/// Interpret a parsed response. The branches are mutually exclusive and
/// checked in order: `error` wins over `results` if a response carries both.
pub fn interpret(response: SearchResponse) -> RenderAction {
    if let Some(message) = response.error {
        RenderAction::ShowError(message)
    } else if let Some(results) = response.results {
        RenderAction::ShowResults(results)
    } else {
        RenderAction::Nothing
    }
}
