use std::sync::Arc;

use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppResult;
use crate::gesture::GestureNavigator;
use crate::nav::{NavigationItem, RouteChange, Router, default_nav_items};
use crate::selection::SelectionCoordinator;
use crate::theme::ThemeMode;
use crate::ui::HitMap;

use super::state::AppState;

/// Router and gesture navigator kept in step: every route change is
/// followed by a re-sync of the navigator's active index.
pub struct NavSubsystem {
    pub router: Router,
    pub gestures: GestureNavigator,
}

impl NavSubsystem {
    pub fn new(items: Arc<[NavigationItem]>, config: &Config) -> Self {
        let router = Router::new(Arc::clone(&items), config.ui.start_page.clone());
        let mut gestures = GestureNavigator::new(items, &config.gesture);
        gestures.sync_active_index(router.active_path());
        Self { router, gestures }
    }

    pub fn navigate(&mut self, path: &str) -> AppResult<Option<RouteChange>> {
        let change = self.router.navigate(path)?;
        self.gestures.sync_active_index(self.router.active_path());
        Ok(change)
    }

    pub fn navigate_index(&mut self, index: usize) -> AppResult<Option<RouteChange>> {
        let change = self.router.navigate_index(index)?;
        self.gestures.sync_active_index(self.router.active_path());
        Ok(change)
    }

    pub fn step(&mut self, forward: bool) -> AppResult<Option<RouteChange>> {
        let change = self.router.step(forward)?;
        self.gestures.sync_active_index(self.router.active_path());
        Ok(change)
    }
}

pub struct App {
    pub state: AppState,
    pub nav: NavSubsystem,
    pub selection: SelectionCoordinator,
    pub config: Config,
    pub(crate) hit_map: HitMap,
}

impl App {
    pub fn new_with_config(config: Config, catalog: Catalog) -> AppResult<Self> {
        let selection = SelectionCoordinator::initialize(Arc::new(catalog))?;
        let nav = NavSubsystem::new(Arc::from(default_nav_items()), &config);
        let state = AppState::new(ThemeMode::parse(&config.ui.theme));
        info!(
            page = nav.router.active_path(),
            projects = selection.catalog().len(),
            theme = state.theme_mode.as_str(),
            "app initialized"
        );

        Ok(Self {
            state,
            nav,
            selection,
            config,
            hit_map: HitMap::default(),
        })
    }
}
