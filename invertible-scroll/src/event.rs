use crossterm::event::{MouseEvent, MouseEventKind};

/// A single wheel input, dispatched to the scroll node under the pointer.
///
/// Positive `delta_y` scrolls toward the end of the content, positive
/// `delta_x` toward the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelEvent {
    pub x: u16,
    pub y: u16,
    pub delta_x: i16,
    pub delta_y: i16,
    default_prevented: bool,
}

impl WheelEvent {
    pub fn new(delta_x: i16, delta_y: i16) -> Self {
        Self {
            x: 0,
            y: 0,
            delta_x,
            delta_y,
            default_prevented: false,
        }
    }

    pub fn vertical(delta_y: i16) -> Self {
        Self::new(0, delta_y)
    }

    pub fn at(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Suppress the node's native scroll for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Convert a crossterm mouse event. Returns `None` for anything that
    /// isn't a wheel motion.
    pub fn from_crossterm(event: &MouseEvent) -> Option<Self> {
        let (delta_x, delta_y) = match event.kind {
            MouseEventKind::ScrollUp => (0, -1),
            MouseEventKind::ScrollDown => (0, 1),
            MouseEventKind::ScrollLeft => (-1, 0),
            MouseEventKind::ScrollRight => (1, 0),
            _ => return None,
        };
        Some(Self::new(delta_x, delta_y).at(event.column, event.row))
    }
}
