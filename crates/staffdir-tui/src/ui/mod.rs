//! Terminal UI module using ratatui.
//!
//! - `render`: frame rendering (title, search bar, card gallery, overlays)
//! - `input`: keyboard and mouse event handling
//! - `layout`: screen geometry shared by rendering and mouse hit-testing
//! - `styles`: color scheme and text styling

pub mod input;
pub mod layout;
pub mod render;
pub mod styles;
