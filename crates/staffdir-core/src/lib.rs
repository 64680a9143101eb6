//! Core library for staffdir.
//!
//! Holds everything that is not terminal-specific: the randomuser.me client,
//! the `Person` model, the directory store with its filtered view, the card
//! gallery renderer seam, the detail overlay state machine and the search bar.

pub mod api;
pub mod config;
pub mod gallery;
pub mod models;
pub mod overlay;
pub mod search;
pub mod store;
pub mod utils;

pub use api::{ApiClient, ApiError, PeopleSource};
pub use config::Config;
pub use gallery::{Card, CardGallery, GalleryView};
pub use models::{Person, PersonId};
pub use overlay::{DetailOverlay, Direction, OverlayControl};
pub use search::SearchBar;
pub use store::{DirectoryStore, LoadStatus};
