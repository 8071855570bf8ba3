use crossterm::event::Event;

use crate::command::{ActionId, Command, CommandOutcome};

/// Describes *why* the active page changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavReason {
    /// Previous/next page from the keyboard.
    Step,
    /// Direct jump (number key, header click).
    Jump,
    /// Horizontal swipe.
    Swipe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    PageChanged {
        from: String,
        to: String,
        reason: NavReason,
    },
    SelectionChanged {
        from: String,
        to: String,
    },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
    Wake,
}
