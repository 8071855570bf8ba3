use crate::command::ActionId;
use crate::theme::{Theme, ThemeMode};

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

impl StatusState {
    pub fn set(&mut self, id: ActionId, message: impl Into<String>) {
        self.last_action_id = Some(id);
        self.message = message.into();
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub theme_mode: ThemeMode,
    pub status: StatusState,
}

impl AppState {
    pub fn new(theme_mode: ThemeMode) -> Self {
        Self {
            theme_mode,
            status: StatusState::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.theme_mode)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemeMode::Dark)
    }
}
