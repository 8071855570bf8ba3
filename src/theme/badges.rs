use ratatui::style::{Color, Style};

use crate::catalog::ProjectStatus;

use super::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub symbol: &'static str,
    pub fg: Color,
    pub bg: Color,
}

impl BadgeStyle {
    pub fn style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub badge: BadgeStyle,
}

pub fn status_badge(status: ProjectStatus, theme: &Theme) -> StatusBadge {
    match status {
        ProjectStatus::Completed => StatusBadge {
            label: ProjectStatus::Completed.label(),
            badge: BadgeStyle {
                symbol: "✔",
                fg: Color::White,
                bg: theme.success,
            },
        },
        ProjectStatus::InProgress => StatusBadge {
            label: ProjectStatus::InProgress.label(),
            badge: BadgeStyle {
                symbol: "◐",
                fg: Color::White,
                bg: theme.accent,
            },
        },
        ProjectStatus::Planning => StatusBadge {
            label: ProjectStatus::Planning.label(),
            badge: BadgeStyle {
                symbol: "○",
                fg: Color::White,
                bg: theme.muted,
            },
        },
        ProjectStatus::Unknown => StatusBadge {
            label: ProjectStatus::Unknown.label(),
            badge: BadgeStyle {
                symbol: "?",
                fg: Color::White,
                bg: Color::Gray,
            },
        },
    }
}

/// Technology families with their own glyph. Unlisted names fall back to
/// [`TechKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechKind {
    Framework,
    Language,
    Styling,
    Runtime,
    Database,
    Cloud,
    Other,
}

impl TechKind {
    pub fn classify(name: &str) -> Self {
        match name {
            "React" | "Next.js" | "Vite" | "Express" | "Chakra UI" | "D3.js" | "Socket.io" => {
                Self::Framework
            }
            "TypeScript" | "JavaScript" | "Python" | "Rust" | "HTML5" => Self::Language,
            "CSS3" | "Tailwind CSS" => Self::Styling,
            "Node.js" => Self::Runtime,
            "MongoDB" | "PostgreSQL" | "Prisma" | "Firebase" => Self::Database,
            "AWS" | "Stripe" => Self::Cloud,
            _ => Self::Other,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Framework => "◆",
            Self::Language => "λ",
            Self::Styling => "✎",
            Self::Runtime => "▶",
            Self::Database => "▤",
            Self::Cloud => "☁",
            Self::Other => "•",
        }
    }
}

pub fn tech_badge(name: &str, theme: &Theme) -> BadgeStyle {
    BadgeStyle {
        symbol: TechKind::classify(name).symbol(),
        fg: theme.primary,
        bg: theme.section,
    }
}

#[cfg(test)]
mod tests {
    use super::{TechKind, status_badge, tech_badge};
    use crate::catalog::ProjectStatus;
    use crate::theme::{Theme, ThemeMode};

    #[test]
    fn status_badges_cover_every_status_and_fall_back() {
        let theme = Theme::for_mode(ThemeMode::Light);
        assert_eq!(
            status_badge(ProjectStatus::Completed, &theme).badge.bg,
            theme.success
        );
        assert_eq!(
            status_badge(ProjectStatus::InProgress, &theme).label,
            "in progress"
        );
        let fallback = status_badge(ProjectStatus::Unknown, &theme);
        assert_eq!(fallback.label, "unknown");
        assert_eq!(fallback.badge.symbol, "?");
    }

    #[test]
    fn unknown_technology_uses_fallback_glyph() {
        let theme = Theme::for_mode(ThemeMode::Dark);
        assert_eq!(TechKind::classify("PostgreSQL"), TechKind::Database);
        assert_eq!(TechKind::classify("COBOL"), TechKind::Other);
        assert_eq!(tech_badge("COBOL", &theme).symbol, "•");
        assert_eq!(tech_badge("React", &theme).symbol, "◆");
    }
}
