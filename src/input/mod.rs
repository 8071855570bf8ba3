mod handler;
mod keymap;
mod mouse;

pub use keymap::map_key_to_command;
pub use mouse::{TouchEvent, touch_from_mouse};
