mod layout;
mod tab_strip;

pub use layout::{HitRegion, TabRegion, TabStripLayout, DIVIDER_WIDTH, TAB_PADDING};
pub use tab_strip::{DragPreview, TabStrip};
