use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use super::drag::{DragState, Gesture, PressTarget};
use super::TabStripEvent;
use crate::model::OpenFile;
use crate::reorder::reorder_paths;
use crate::ui::{DragPreview, HitRegion, TabStripLayout};

/// Mouse handler for the tab strip.
///
/// Owns the transient gesture state and the scroll offset; the open files
/// and active file are passed in on every call and never modified.
#[derive(Debug, Default)]
pub struct TabStripInput {
    drag: DragState,
    hovered: Option<usize>,
    scroll: Option<usize>,
}

impl TabStripInput {
    /// Handler with no gesture in progress that follows the active tab
    pub fn new() -> Self {
        Self::default()
    }

    /// Tab under the pointer, if any
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Current gesture state
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Drag to draw this frame
    pub fn drag_preview(&self) -> Option<DragPreview> {
        self.drag.preview()
    }

    /// Leftmost tab chosen with the wheel; `None` until the strip is scrolled
    pub fn scroll(&self) -> Option<usize> {
        self.scroll
    }

    /// Handle a mouse event against the layout that was last rendered.
    ///
    /// Returns the intent completed by this event, if any.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        files: &[OpenFile],
        layout: &TabStripLayout,
    ) -> Option<TabStripEvent> {
        let (x, y) = (event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match layout.hit_test(x, y) {
                    HitRegion::Body(index) => self.drag.press(PressTarget::Body(index)),
                    HitRegion::Close(index) => self.drag.press(PressTarget::Close(index)),
                    HitRegion::Strip | HitRegion::None => self.drag.cancel(),
                }
                debug!("Press at ({}, {}): {:?}", x, y, self.drag);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.drag.motion(layout.drop_slot(x, y));
                self.hovered = hovered_tab(layout, x, y);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let gesture = self.drag.release();
                debug!("Release at ({}, {}): {:?}", x, y, gesture);
                let event = finish(gesture, files, layout.hit_test(x, y));
                // The file list is about to change under the pointer
                if event.is_some() {
                    self.hovered = None;
                }
                event
            }
            MouseEventKind::Moved => {
                self.hovered = hovered_tab(layout, x, y);
                None
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                self.scroll_by(-1, files, layout, x, y);
                None
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                self.scroll_by(1, files, layout, x, y);
                None
            }
            _ => None,
        }
    }

    /// Handle a key event. Returns true if the key was consumed.
    ///
    /// Only Esc is handled, and only while a gesture is in progress.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc && !self.drag.is_idle() {
            debug!("Gesture cancelled");
            self.drag.cancel();
            return true;
        }
        false
    }

    /// Forget the pointer, e.g. when it leaves the window
    pub fn reset(&mut self) {
        self.drag.cancel();
        self.hovered = None;
    }

    /// Shift the leftmost tab by `delta` when the wheel turns over the strip
    fn scroll_by(
        &mut self,
        delta: isize,
        files: &[OpenFile],
        layout: &TabStripLayout,
        x: u16,
        y: u16,
    ) {
        if files.is_empty() || layout.hit_test(x, y) == HitRegion::None {
            return;
        }

        let current = self.scroll.unwrap_or_else(|| layout.first_visible());
        let offset = current.saturating_add_signed(delta).min(files.len() - 1);
        debug!("Scroll strip to tab {}", offset);
        self.scroll = Some(offset);
        // Hit regions move with the tabs
        self.hovered = None;
    }
}

fn finish(gesture: Gesture, files: &[OpenFile], released_on: HitRegion) -> Option<TabStripEvent> {
    match gesture {
        Gesture::None => None,
        // A click only counts when released on the tab it started on
        Gesture::Click(PressTarget::Body(index)) => match released_on {
            HitRegion::Body(i) | HitRegion::Close(i) if i == index => {
                files.get(index).map(|f| TabStripEvent::Select(f.path.clone()))
            }
            _ => None,
        },
        Gesture::Click(PressTarget::Close(index)) => {
            if released_on != HitRegion::Close(index) {
                return None;
            }
            files.get(index).map(|f| TabStripEvent::Close(f.path.clone()))
        }
        Gesture::Drop {
            source,
            destination,
        } => reorder_paths(files, source, destination).map(TabStripEvent::Reorder),
    }
}

fn hovered_tab(layout: &TabStripLayout, x: u16, y: u16) -> Option<usize> {
    match layout.hit_test(x, y) {
        HitRegion::Body(index) | HitRegion::Close(index) => Some(index),
        HitRegion::Strip | HitRegion::None => None,
    }
}
