use ratatui::layout::{Position, Rect};

use crate::command::Command;
use crate::event::NavReason;

#[derive(Debug, Clone, PartialEq, Eq)]
enum HitTarget {
    Tab { path: String },
    ProjectRow { id: String },
}

/// Clickable regions recorded by the last drawn frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push_tab(&mut self, area: Rect, path: impl Into<String>) {
        self.regions
            .push((area, HitTarget::Tab { path: path.into() }));
    }

    pub fn push_project_row(&mut self, area: Rect, id: impl Into<String>) {
        self.regions
            .push((area, HitTarget::ProjectRow { id: id.into() }));
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn command_at(&self, column: u16, row: u16) -> Option<Command> {
        let position = Position::new(column, row);
        let (_, target) = self
            .regions
            .iter()
            .find(|(area, _)| area.contains(position))?;
        Some(match target {
            HitTarget::Tab { path } => Command::Navigate {
                path: path.clone(),
                reason: NavReason::Jump,
            },
            HitTarget::ProjectRow { id } => Command::SelectProject { id: id.clone() },
        })
    }
}
