use std::time::Instant;

use crossterm::event::{Event, KeyEventKind, MouseEvent};
use tracing::debug;

use crate::app::App;
use crate::command::{ActionId, Command};
use crate::event::NavReason;
use crate::gesture::{RecordingSink, SwipeOutcome};

use super::keymap::map_key_to_command;
use super::mouse::{TouchEvent, touch_from_mouse};

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct InputEventOutcome {
    pub(crate) command: Option<Command>,
}

impl App {
    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        needs_redraw: &mut bool,
    ) -> InputEventOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                InputEventOutcome {
                    command: map_key_to_command(key),
                }
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, Instant::now(), needs_redraw),
            Event::Resize(_, _) => {
                *needs_redraw = true;
                InputEventOutcome::default()
            }
            _ => InputEventOutcome::default(),
        }
    }

    /// Press/release pairs go through the gesture navigator first; a release
    /// that did not swipe is treated as a click on whatever is under it.
    pub(crate) fn handle_mouse_event(
        &mut self,
        mouse: MouseEvent,
        at: Instant,
        needs_redraw: &mut bool,
    ) -> InputEventOutcome {
        let Some(touch) = touch_from_mouse(mouse, self.config.gesture.pixels_per_column, at) else {
            return InputEventOutcome::default();
        };

        match touch {
            TouchEvent::Start { x, at } => {
                self.nav.gestures.on_touch_start(x, at);
                InputEventOutcome::default()
            }
            TouchEvent::End { x, at } => {
                let mut sink = RecordingSink::default();
                let swipe = self.nav.gestures.on_touch_end(x, at, &mut sink);
                if let Some(path) = sink.take_last() {
                    return InputEventOutcome {
                        command: Some(Command::Navigate {
                            path,
                            reason: NavReason::Swipe,
                        }),
                    };
                }
                if let SwipeOutcome::Blocked(direction) = swipe {
                    debug!(?direction, "swipe blocked at edge");
                    self.state
                        .status
                        .set(ActionId::Swipe, "no page in that direction");
                    *needs_redraw = true;
                    return InputEventOutcome::default();
                }
                InputEventOutcome {
                    command: self.hit_map.command_at(mouse.column, mouse.row),
                }
            }
        }
    }
}
