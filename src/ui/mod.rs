mod chrome;
mod hit;
mod layout;
mod pages;
mod text;

pub use chrome::{draw_footer, draw_header};
pub use hit::HitMap;
pub use layout::{ProjectsLayout, UiLayout, split_layout, split_projects};
pub use text::{truncate_to_width, wrap_to_width};

use ratatui::Frame;
use ratatui::widgets::Block;

use crate::app::StatusState;
use crate::nav::{NavigationItem, Page};
use crate::selection::SelectionCoordinator;
use crate::theme::Theme;

/// Everything a frame needs, borrowed from the app for one draw.
pub struct AppView<'a> {
    pub theme: Theme,
    pub nav_items: &'a [NavigationItem],
    pub active_path: &'a str,
    pub selection: &'a SelectionCoordinator,
    pub status: &'a StatusState,
}

/// Draws one full frame and returns the clickable regions it produced.
pub fn draw_app(frame: &mut Frame<'_>, view: &AppView<'_>) -> HitMap {
    let mut hits = HitMap::default();
    let area = frame.area();
    frame.render_widget(Block::default().style(view.theme.base()), area);

    let layout = split_layout(area);
    draw_header(frame, layout.header, view, &mut hits);
    match Page::from_path(view.active_path) {
        Some(Page::About) => pages::draw_about(frame, layout.body, view.theme),
        Some(Page::Projects) => pages::draw_projects(frame, layout.body, view, &mut hits),
        Some(page) => pages::draw_placeholder(frame, layout.body, view.theme, page.title()),
        None => pages::draw_placeholder(frame, layout.body, view.theme, "Page not found"),
    }
    draw_footer(frame, layout.footer, view);
    hits
}
