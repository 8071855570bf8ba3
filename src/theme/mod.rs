mod badges;

pub use badges::{BadgeStyle, StatusBadge, TechKind, status_badge, tech_badge};

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Case-insensitive; anything other than light or dark falls back to dark.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("light") {
            Self::Light
        } else if value.eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            warn!(theme = value, "unknown theme mode; using dark");
            Self::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolved colors for one mode. Passed by value into every draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub text: Color,
    pub muted: Color,
    pub surface: Color,
    pub section: Color,
    pub border: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                mode,
                primary: Color::Rgb(42, 82, 191),
                accent: Color::Rgb(221, 107, 32),
                success: Color::Rgb(47, 133, 90),
                text: Color::Rgb(26, 32, 44),
                muted: Color::Rgb(113, 128, 150),
                surface: Color::Rgb(255, 255, 255),
                section: Color::Rgb(247, 250, 252),
                border: Color::Rgb(226, 232, 240),
            },
            ThemeMode::Dark => Self {
                mode,
                primary: Color::Rgb(99, 140, 255),
                accent: Color::Rgb(246, 173, 85),
                success: Color::Rgb(104, 211, 145),
                text: Color::Rgb(237, 242, 247),
                muted: Color::Rgb(160, 174, 192),
                surface: Color::Rgb(26, 32, 44),
                section: Color::Rgb(23, 25, 35),
                border: Color::Rgb(74, 85, 104),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.section)
            .add_modifier(Modifier::BOLD)
    }

    pub fn active_tab(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}
