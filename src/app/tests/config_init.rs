use crate::app::App;
use crate::catalog::{Catalog, sample_catalog};
use crate::config::Config;
use crate::error::AppError;
use crate::theme::ThemeMode;

#[test]
fn new_with_config_applies_theme_and_start_page() {
    let mut config = Config::default();
    config.ui.theme = "light".to_string();
    config.ui.start_page = "/projects".to_string();

    let app = App::new_with_config(config, sample_catalog()).expect("app init");

    assert_eq!(app.state.theme_mode, ThemeMode::Light);
    assert_eq!(app.nav.router.active_path(), "/projects");
    assert_eq!(app.nav.gestures.current_index(), Some(1));
    assert_eq!(app.selection.selected_id(), "1");
}

#[test]
fn new_with_config_rejects_empty_catalog() {
    let empty = Catalog::new(Vec::new()).expect("empty catalog is valid");
    let result = App::new_with_config(Config::default(), empty);
    assert!(matches!(result, Err(AppError::EmptyCatalog)));
}

#[test]
fn unknown_start_page_disables_swipes() {
    let mut config = Config::default();
    config.ui.start_page = "/resume".to_string();

    let app = App::new_with_config(config, sample_catalog()).expect("app init");
    assert_eq!(app.nav.gestures.current_index(), None);
}
