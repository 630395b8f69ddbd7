/// User intent reported by the tab strip, at most one per gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabStripEvent {
    /// A tab body was clicked
    Select(String),
    /// A tab's close control was clicked
    Close(String),
    /// A drag finished; carries every path in the new order
    Reorder(Vec<String>),
}

impl TabStripEvent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            TabStripEvent::Select(_) => "select",
            TabStripEvent::Close(_) => "close",
            TabStripEvent::Reorder(_) => "reorder",
        }
    }
}
