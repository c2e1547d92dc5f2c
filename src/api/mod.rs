//! REST client module for the Customers service

mod client;
mod error;
mod traits;

pub use client::{RestClient, DEFAULT_API_PREFIX, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use traits::CustomerApi;

#[cfg(test)]
pub use traits::MockCustomerApi;
