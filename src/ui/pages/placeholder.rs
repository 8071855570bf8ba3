use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::Theme;
use crate::ui::layout::centered_rect;

pub fn draw_placeholder(frame: &mut Frame<'_>, area: Rect, theme: Theme, title: &str) {
    frame.render_widget(Block::default().style(theme.base()), area);

    let card = centered_rect(area, 40, 5);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    let text = vec![
        Line::from(Span::styled(title.to_string(), theme.heading())),
        Line::from(Span::styled("Coming soon", theme.muted())),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .style(theme.base()),
        card,
    );
}
