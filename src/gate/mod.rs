//! Pure submission-gate logic, independent of the terminal layer
//!
//! Each gate is a function from a form snapshot to an outcome value; the
//! event loop in `app` applies outcomes to state and performs any I/O the
//! outcome calls for.

pub mod registration;
pub mod search;
