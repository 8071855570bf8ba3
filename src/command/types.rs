use crate::event::NavReason;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NextPage,
    PrevPage,
    GotoPage { index: usize },
    Navigate { path: String, reason: NavReason },
    SelectProject { id: String },
    NextProject,
    PrevProject,
    ToggleTheme,
    Cancel,
    Quit,
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::NextPage => ActionId::NextPage,
            Self::PrevPage => ActionId::PrevPage,
            Self::GotoPage { .. } => ActionId::GotoPage,
            Self::Navigate { .. } => ActionId::Navigate,
            Self::SelectProject { .. } => ActionId::SelectProject,
            Self::NextProject => ActionId::NextProject,
            Self::PrevProject => ActionId::PrevProject,
            Self::ToggleTheme => ActionId::ToggleTheme,
            Self::Cancel => ActionId::Cancel,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    NextPage,
    PrevPage,
    GotoPage,
    Navigate,
    SelectProject,
    NextProject,
    PrevProject,
    ToggleTheme,
    Cancel,
    Quit,
    Swipe,
    Input,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NextPage => "next-page",
            Self::PrevPage => "prev-page",
            Self::GotoPage => "goto-page",
            Self::Navigate => "navigate",
            Self::SelectProject => "select-project",
            Self::NextProject => "next-project",
            Self::PrevProject => "prev-project",
            Self::ToggleTheme => "toggle-theme",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
            Self::Swipe => "swipe",
            Self::Input => "input",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}
