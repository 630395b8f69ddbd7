use crate::ui::DragPreview;

/// Where a gesture started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// Body of the tab at this index
    Body(usize),
    /// Close control of the tab at this index
    Close(usize),
}

/// Gesture state, one press at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Button is down and the pointer has not left the pressed tab
    Pressed(PressTarget),
    /// A tab body is being dragged
    Dragging {
        source: usize,
        destination: Option<usize>,
    },
}

/// How a gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Nothing was in progress
    None,
    /// Released without dragging
    Click(PressTarget),
    /// Released after dragging
    Drop {
        source: usize,
        destination: Option<usize>,
    },
}

impl DragState {
    /// Start a gesture, discarding any unfinished one
    pub fn press(&mut self, target: PressTarget) {
        *self = DragState::Pressed(target);
    }

    /// Pointer moved with the button held; `slot` is the drop slot under it.
    ///
    /// A body press turns into a drag once the pointer leaves its own slot.
    /// Close presses never drag.
    pub fn motion(&mut self, slot: Option<usize>) {
        match *self {
            DragState::Pressed(PressTarget::Body(source)) if slot != Some(source) => {
                *self = DragState::Dragging {
                    source,
                    destination: slot,
                };
            }
            DragState::Dragging { source, .. } => {
                *self = DragState::Dragging {
                    source,
                    destination: slot,
                };
            }
            _ => {}
        }
    }

    /// Button released: end the gesture and report how it went
    pub fn release(&mut self) -> Gesture {
        let gesture = match *self {
            DragState::Idle => Gesture::None,
            DragState::Pressed(target) => Gesture::Click(target),
            DragState::Dragging {
                source,
                destination,
            } => Gesture::Drop {
                source,
                destination,
            },
        };
        *self = DragState::Idle;
        gesture
    }

    /// Abandon the gesture without reporting anything
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        *self == DragState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// What the widget should draw for this state
    pub fn preview(&self) -> Option<DragPreview> {
        match *self {
            DragState::Dragging {
                source,
                destination,
            } => Some(DragPreview {
                source,
                destination,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click() {
        let mut state = DragState::default();
        state.press(PressTarget::Body(2));
        assert_eq!(state.release(), Gesture::Click(PressTarget::Body(2)));
        assert!(state.is_idle());
    }

    #[test]
    fn test_motion_within_own_slot_is_still_a_click() {
        let mut state = DragState::default();
        state.press(PressTarget::Body(1));
        state.motion(Some(1));
        assert_eq!(state, DragState::Pressed(PressTarget::Body(1)));
        assert_eq!(state.release(), Gesture::Click(PressTarget::Body(1)));
    }

    #[test]
    fn test_drag_and_drop() {
        let mut state = DragState::default();
        state.press(PressTarget::Body(0));
        state.motion(Some(1));
        assert!(state.is_dragging());
        state.motion(Some(2));
        assert_eq!(
            state.preview(),
            Some(DragPreview {
                source: 0,
                destination: Some(2)
            })
        );
        // Coming back over the source keeps the drag alive
        state.motion(Some(0));
        assert!(state.is_dragging());
        state.motion(Some(2));
        assert_eq!(
            state.release(),
            Gesture::Drop {
                source: 0,
                destination: Some(2)
            }
        );
        assert!(state.preview().is_none());
    }

    #[test]
    fn test_drag_outside() {
        let mut state = DragState::default();
        state.press(PressTarget::Body(0));
        state.motion(None);
        assert_eq!(
            state.release(),
            Gesture::Drop {
                source: 0,
                destination: None
            }
        );
    }

    #[test]
    fn test_close_press_never_drags() {
        let mut state = DragState::default();
        state.press(PressTarget::Close(0));
        state.motion(Some(1));
        assert_eq!(state, DragState::Pressed(PressTarget::Close(0)));
    }

    #[test]
    fn test_cancel() {
        let mut state = DragState::default();
        state.press(PressTarget::Body(0));
        state.motion(Some(1));
        state.cancel();
        assert!(state.is_idle());
        assert_eq!(state.release(), Gesture::None);
    }

    #[test]
    fn test_idle_ignores_motion() {
        let mut state = DragState::default();
        state.motion(Some(1));
        assert!(state.is_idle());
    }
}
