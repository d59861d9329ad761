//! HTTP client module for the HotelHelper service

mod http;
mod traits;

pub use http::{ApiClient, TransportError};
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use traits::MockApiClientTrait;
