mod router;

pub use router::{Router, RouteChange};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub path: String,
    pub label: String,
}

impl NavigationItem {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Pages the shell knows how to draw, keyed by route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    About,
    Projects,
    Skills,
    Blog,
    Contact,
}

impl Page {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::About),
            "/projects" => Some(Self::Projects),
            "/skills" => Some(Self::Skills),
            "/blog" => Some(Self::Blog),
            "/contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Projects => "Featured Projects",
            Self::Skills => "Skills",
            Self::Blog => "Blog",
            Self::Contact => "Contact Me",
        }
    }
}

pub fn default_nav_items() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("/", "About"),
        NavigationItem::new("/projects", "Projects"),
        NavigationItem::new("/skills", "Skills"),
        NavigationItem::new("/blog", "Blog"),
        NavigationItem::new("/contact", "Contact"),
    ]
}
