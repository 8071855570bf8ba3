use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Side-by-side below this width is too cramped; the list stacks above the detail.
const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;
const LIST_PANEL_WIDTH: u16 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn split_layout(area: Rect) -> UiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    UiLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectsLayout {
    pub detail: Rect,
    pub list: Rect,
}

pub fn split_projects(body: Rect) -> ProjectsLayout {
    if body.width >= WIDE_LAYOUT_MIN_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(LIST_PANEL_WIDTH)])
            .split(body);
        return ProjectsLayout {
            detail: chunks[0],
            list: chunks[1],
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Min(3)])
        .split(body);
    ProjectsLayout {
        list: chunks[0],
        detail: chunks[1],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{split_layout, split_projects};

    #[test]
    fn split_layout_reserves_header_and_footer() {
        let layout = split_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.body.height, 36);
        assert_eq!(layout.footer.y, 39);
    }

    #[test]
    fn projects_go_side_by_side_when_wide() {
        let wide = split_projects(Rect::new(0, 3, 120, 30));
        assert_eq!(wide.list.width, 42);
        assert!(wide.detail.x < wide.list.x);

        let narrow = split_projects(Rect::new(0, 3, 80, 30));
        assert_eq!(narrow.list.width, 80);
        assert!(narrow.list.y < narrow.detail.y);
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(10, 5, 20, 8);
        let centered = super::centered_rect(area, 99, 99);
        assert_eq!(centered, area);
    }
}
