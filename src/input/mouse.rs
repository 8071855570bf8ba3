use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Touch-style reading of a terminal mouse event. `x` is already scaled
/// from columns to the navigator's pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Start { x: f64, at: Instant },
    End { x: f64, at: Instant },
}

/// Only the left button participates; drags and wheel events are ignored.
pub fn touch_from_mouse(event: MouseEvent, pixels_per_column: f64, at: Instant) -> Option<TouchEvent> {
    let x = f64::from(event.column) * pixels_per_column;
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(TouchEvent::Start { x, at }),
        MouseEventKind::Up(MouseButton::Left) => Some(TouchEvent::End { x, at }),
        _ => None,
    }
}
