use std::sync::Arc;

use crate::error::{AppError, AppResult};

use super::NavigationItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChange {
    pub from: String,
    pub to: String,
}

/// Owns the active route. Paths outside the item list are accepted so an
/// unmatched route can be represented, but `navigate` only moves between
/// known items.
#[derive(Debug, Clone)]
pub struct Router {
    items: Arc<[NavigationItem]>,
    active: String,
}

impl Router {
    pub fn new(items: Arc<[NavigationItem]>, start: impl Into<String>) -> Self {
        Self {
            items,
            active: start.into(),
        }
    }

    pub fn items(&self) -> &Arc<[NavigationItem]> {
        &self.items
    }

    pub fn active_path(&self) -> &str {
        &self.active
    }

    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.path == self.active)
    }

    pub fn navigate(&mut self, path: &str) -> AppResult<Option<RouteChange>> {
        if !self.items.iter().any(|item| item.path == path) {
            return Err(AppError::invalid_argument(format!("unknown route: {path}")));
        }
        if self.active == path {
            return Ok(None);
        }

        let from = std::mem::replace(&mut self.active, path.to_string());
        Ok(Some(RouteChange {
            from,
            to: self.active.clone(),
        }))
    }

    pub fn navigate_index(&mut self, index: usize) -> AppResult<Option<RouteChange>> {
        let Some(item) = self.items.get(index) else {
            return Err(AppError::invalid_argument(format!(
                "route index {index} out of range"
            )));
        };
        let path = item.path.clone();
        self.navigate(&path)
    }

    /// Steps to the adjacent item without wrapping. An unmatched active route
    /// never steps.
    pub fn step(&mut self, forward: bool) -> AppResult<Option<RouteChange>> {
        let Some(current) = self.active_index() else {
            return Ok(None);
        };
        let target = if forward {
            current + 1
        } else if current == 0 {
            return Ok(None);
        } else {
            current - 1
        };
        if target >= self.items.len() {
            return Ok(None);
        }
        self.navigate_index(target)
    }
}
