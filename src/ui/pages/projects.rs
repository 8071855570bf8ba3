use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::catalog::CatalogEntry;
use crate::theme::{Theme, status_badge, tech_badge};
use crate::ui::AppView;
use crate::ui::hit::HitMap;
use crate::ui::layout::split_projects;
use crate::ui::text::{truncate_to_width, wrap_to_width};

const LIST_PREVIEW_LINES: usize = 4;
const LIST_TECH_PREVIEW: usize = 3;

pub fn draw_projects(frame: &mut Frame<'_>, area: Rect, view: &AppView<'_>, hits: &mut HitMap) {
    let layout = split_projects(area);
    draw_detail(frame, layout.detail, view);
    draw_list(frame, layout.list, view, hits);
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, view: &AppView<'_>) {
    let theme = view.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" Featured Projects ", theme.heading()));

    let lines = match view.selection.detail() {
        Ok(entry) => detail_lines(entry, &theme),
        Err(err) => vec![Line::from(Span::styled(err.to_string(), theme.muted()))],
    };
    let detail = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

fn detail_lines(entry: &CatalogEntry, theme: &Theme) -> Vec<Line<'static>> {
    let project = &entry.project;
    let status = status_badge(project.status, theme);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(project.title.clone(), theme.heading()),
            Span::raw("  "),
            Span::styled(
                format!(" {} {} ", status.badge.symbol, status.label),
                status.badge.style(),
            ),
        ]),
        match &project.image {
            Some(image) => Line::from(Span::styled(format!("▣ {image}"), theme.muted())),
            None => Line::from(Span::styled("▣ project image unavailable", theme.muted())),
        },
        Line::default(),
        Line::from(project.long_description.clone()),
        Line::default(),
        Line::from(Span::styled(
            "Technologies Used",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let mut badges = Vec::with_capacity(project.technologies.len() * 2);
    for tech in &project.technologies {
        let badge = tech_badge(tech, theme);
        badges.push(Span::styled(
            format!(" {} {tech} ", badge.symbol),
            badge.style(),
        ));
        badges.push(Span::raw(" "));
    }
    lines.push(Line::from(badges));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("⌂ View Code  ", theme.heading()),
        Span::raw(project.github_url.clone()),
    ]));
    if let Some(live) = &project.live_url {
        lines.push(Line::from(vec![
            Span::styled("↗ Live Demo  ", theme.heading()),
            Span::raw(live.clone()),
        ]));
    }
    lines
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, view: &AppView<'_>, hits: &mut HitMap) {
    let theme = view.theme;
    let catalog = view.selection.catalog();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(
            format!(" All Projects ({}) ", catalog.len()),
            theme.heading(),
        ));
    let inner = block.inner(area);
    frame.render_widget(block.style(theme.base()), area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = usize::from(inner.width);
    let rows: Vec<(&str, Vec<Line<'static>>)> = catalog
        .iter()
        .map(|entry| {
            let expanded = view.selection.is_expanded(&entry.id);
            (entry.id.as_str(), list_row_lines(entry, expanded, width, &theme))
        })
        .collect();

    let first = first_visible_row(&rows, view.selection.selected_index(), inner.height);
    let bottom = inner.y.saturating_add(inner.height);
    let mut y = inner.y;
    for (id, lines) in rows.iter().skip(first) {
        if y >= bottom {
            break;
        }
        let wanted = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let height = wanted.min(bottom - y);
        let row_area = Rect::new(inner.x, y, inner.width, height);
        frame.render_widget(Paragraph::new(lines.clone()), row_area);
        hits.push_project_row(row_area, *id);
        y = y.saturating_add(height);
    }
}

fn list_row_lines(entry: &CatalogEntry, expanded: bool, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let project = &entry.project;
    let marker = if expanded { "▾ " } else { "▸ " };
    let featured = if project.featured { " ★" } else { "" };
    let title = truncate_to_width(&format!("{marker}{}{featured}", project.title), width);
    let title_style = if expanded {
        theme.highlight()
    } else {
        Style::default().fg(theme.text)
    };

    let mut lines = vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(Span::styled(
            truncate_to_width(&format!("  {}", project.description), width),
            theme.muted(),
        )),
    ];
    if !expanded {
        return lines;
    }

    let body_width = width.saturating_sub(2).max(1);
    for text in wrap_to_width(&project.long_description, body_width)
        .into_iter()
        .take(LIST_PREVIEW_LINES)
    {
        lines.push(Line::from(format!("  {text}")));
    }

    let mut techs: Vec<String> = project
        .technologies
        .iter()
        .take(LIST_TECH_PREVIEW)
        .map(|tech| format!("[{tech}]"))
        .collect();
    if project.technologies.len() > LIST_TECH_PREVIEW {
        techs.push(format!(
            "+{} more",
            project.technologies.len() - LIST_TECH_PREVIEW
        ));
    }
    if !techs.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("  {}", techs.join(" ")), width),
            theme.muted(),
        )));
    }
    lines.push(Line::default());
    lines
}

/// Index of the first row to draw so the selected row ends inside `height`.
fn first_visible_row<T>(rows: &[(T, Vec<Line<'static>>)], selected: Option<usize>, height: u16) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    let height = usize::from(height);
    let mut first = 0;
    while first < selected {
        let used: usize = rows[first..=selected].iter().map(|(_, lines)| lines.len()).sum();
        if used <= height {
            break;
        }
        first += 1;
    }
    first
}
