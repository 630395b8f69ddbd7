//! A reorderable file tab strip for terminal editors.
//!
//! [`TabStrip`] renders the open files as one row of tabs with ratatui.
//! [`TabStripInput`] turns crossterm mouse events into at most one
//! [`TabStripEvent`] per gesture, and [`TabStripCallbacks`] hands that
//! event to the owner of the editor state.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod reorder;
pub mod ui;

pub use config::{Config, StripOptions, Theme};
pub use input::{TabStripCallbacks, TabStripEvent, TabStripInput};
pub use model::OpenFile;
pub use reorder::{move_item, reorder_paths};
pub use ui::{TabStrip, TabStripLayout};
