use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::theme::Theme;

struct SocialLink {
    label: &'static str,
    href: &'static str,
}

const NAME: &str = "Gonzalo Corral";
const ROLE: &str = "Frontend Developer";
const BIO: &str = "I build fast, accessible web applications with React and TypeScript, \
    and enjoy turning complex data into interfaces that are easy to act on.";
const RESUME_PATH: &str = "resume/Gonzalo_Corral_Resume.pdf";
const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/gonzalocorral/",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/AntonioCorralG",
    },
    SocialLink {
        label: "Email",
        href: "mailto:youremail@example.com",
    },
];

pub fn draw_about(frame: &mut Frame<'_>, area: Rect, theme: Theme) {
    let mut lines = vec![
        Line::from(Span::styled(NAME, theme.heading())),
        Line::from(Span::styled(ROLE, theme.muted())),
        Line::default(),
        Line::from(BIO),
        Line::default(),
    ];
    for link in SOCIAL_LINKS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", link.label), theme.heading()),
            Span::raw(link.href),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Resume    ", theme.heading()),
        Span::raw(RESUME_PATH),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" About Me ", theme.heading()));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(theme.base())
            .wrap(Wrap { trim: true }),
        area,
    );
}
