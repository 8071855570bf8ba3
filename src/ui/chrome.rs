use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::hit::HitMap;
use super::text::truncate_to_width;
use super::AppView;

const BRAND: &str = "Gonzalo Corral";
const KEY_HINTS: &str = "h/l page · j/k project · t theme · q quit";

pub fn draw_header(frame: &mut Frame<'_>, area: Rect, view: &AppView<'_>, hits: &mut HitMap) {
    let theme = view.theme;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border())
        .style(theme.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let mode = format!("◐ {}", theme.mode.as_str());
    let brand_row = Line::from(vec![
        Span::styled(BRAND, theme.heading()),
        Span::raw("  "),
        Span::styled(mode, theme.muted()),
    ]);
    frame.render_widget(Paragraph::new(brand_row), Rect { height: 1, ..inner });
    if inner.height < 2 {
        return;
    }

    let tab_row = Rect {
        y: inner.y + 1,
        height: 1,
        ..inner
    };
    let mut spans = Vec::with_capacity(view.nav_items.len() * 2);
    let mut x = tab_row.x;
    let right = tab_row.x.saturating_add(tab_row.width);
    for (index, item) in view.nav_items.iter().enumerate() {
        let label = format!(" {}:{} ", index + 1, item.label);
        let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        if x.saturating_add(width) > right {
            break;
        }
        let style = if item.path == view.active_path {
            theme.active_tab()
        } else {
            theme.muted()
        };
        hits.push_tab(Rect::new(x, tab_row.y, width, 1), item.path.clone());
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), tab_row);
}

pub fn draw_footer(frame: &mut Frame<'_>, area: Rect, view: &AppView<'_>) {
    let theme = view.theme;
    let action = view
        .status
        .last_action_id
        .map(|id| id.as_str())
        .unwrap_or("-");
    let message = if view.status.message.is_empty() {
        "ready"
    } else {
        view.status.message.as_str()
    };

    let left = format!("{} | {action}: {message}", view.active_path);
    let available = usize::from(area.width);
    let hints_width = KEY_HINTS.width();
    let text = if left.width() + hints_width + 3 <= available {
        let pad = available - left.width() - hints_width;
        format!("{left}{}{KEY_HINTS}", " ".repeat(pad))
    } else {
        truncate_to_width(&left, available)
    };

    frame.render_widget(
        Paragraph::new(Span::styled(text, theme.muted())).style(theme.base()),
        area,
    );
}
