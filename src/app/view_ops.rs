use crate::error::AppResult;
use crate::ui::{self, AppView};

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    pub fn view(&self) -> AppView<'_> {
        AppView {
            theme: self.state.theme(),
            nav_items: self.nav.router.items(),
            active_path: self.nav.router.active_path(),
            selection: &self.selection,
            status: &self.state.status,
        }
    }

    /// Draws the current state and keeps the frame's click regions for the
    /// next mouse release.
    pub(crate) fn render_frame(&mut self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let size = session.size()?;
        if size.width == 0 || size.height == 0 {
            self.hit_map.clear();
            return Ok(());
        }

        let mut hit_map = None;
        let view = self.view();
        session.draw(|frame| {
            hit_map = Some(ui::draw_app(frame, &view));
        })?;
        if let Some(hit_map) = hit_map {
            self.hit_map = hit_map;
        }
        Ok(())
    }
}
