//! REST API client module for the randomuser.me people endpoint.
//!
//! The directory only ever issues one GET per load. The `PeopleSource`
//! trait is the seam the store depends on, so the HTTP client can be
//! swapped for a canned source in tests.

pub mod client;
pub mod error;

pub use client::{ApiClient, PeopleSource};
pub use error::{ApiError, FailureKind};
