use crate::model::Plane;
use crate::session::ViewportSize;

/// Pointer position in viewport pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEventKind {
    /// Primary button went down.
    Press(ScreenPoint),
    /// Pointer moved with the primary button held.
    Drag(ScreenPoint),
    Release,
    /// Pointer hovered without a button held.
    Move(ScreenPoint),
    Leave,
    /// Wheel notches, positive away from the user.
    Wheel {
        steps: f32,
        point: Option<ScreenPoint>,
    },
    Resize(ViewportSize),
}

/// An input event coming from one of the slice views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewEvent {
    pub source: Plane,
    pub kind: ViewEventKind,
}

impl ViewEvent {
    pub fn new(source: Plane, kind: ViewEventKind) -> Self {
        Self { source, kind }
    }
}

/// Keyboard and toolbar commands, applied to the focused plane where one
/// is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    SliceUp,
    SliceDown,
    ToggleMode,
    Reset,
    CenterOnCrosshair,
    RotateAxial,
}

/// How much of the display an event invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Redraw {
    #[default]
    None,
    /// The three slice views.
    Slices,
    /// Slice views and the 3D view.
    All,
}

impl Redraw {
    pub fn merge(self, other: Redraw) -> Redraw {
        self.max(other)
    }
}
