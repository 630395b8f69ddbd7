mod action;
mod callbacks;
mod drag;
mod handler;

pub use action::TabStripEvent;
pub use callbacks::TabStripCallbacks;
pub use drag::{DragState, Gesture, PressTarget};
pub use handler::TabStripInput;
