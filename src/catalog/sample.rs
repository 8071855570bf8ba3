use super::types::{Catalog, CatalogEntry, Category, Project, ProjectStatus};

struct SampleProject {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    long_description: &'static str,
    image: &'static str,
    technologies: &'static [&'static str],
    github_url: &'static str,
    live_url: Option<&'static str>,
    status: ProjectStatus,
    category: Category,
    featured: bool,
}

const SAMPLE_PROJECTS: &[SampleProject] = &[
    SampleProject {
        id: "1",
        title: "E-Commerce Dashboard",
        description: "An admin dashboard for e-commerce operations with real-time analytics.",
        long_description: "Admin dashboard with analytics, inventory management and customer insights, updated in real time.",
        image: "projects/ecommerce-dashboard.jpg",
        technologies: &["React", "TypeScript", "Chakra UI", "Node.js", "MongoDB"],
        github_url: "https://github.com/yourusername/ecommerce-dashboard",
        live_url: Some("https://ecommerce-dashboard-demo.com"),
        status: ProjectStatus::Completed,
        category: Category::Fullstack,
        featured: true,
    },
    SampleProject {
        id: "2",
        title: "Task Management App",
        description: "A collaborative task manager with real-time updates.",
        long_description: "Team task manager with drag-and-drop boards, notifications, attachments and project tracking.",
        image: "projects/task-manager.jpg",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Express", "Firebase"],
        github_url: "https://github.com/yourusername/task-manager",
        live_url: Some("https://task-manager-demo.com"),
        status: ProjectStatus::Completed,
        category: Category::Fullstack,
        featured: true,
    },
    SampleProject {
        id: "3",
        title: "Weather Analytics Platform",
        description: "Data visualization for weather patterns and climate analysis.",
        long_description: "Charts and maps over several weather APIs for casual users and meteorologists alike.",
        image: "projects/weather-platform.jpg",
        technologies: &["React", "D3.js", "TypeScript", "Python", "PostgreSQL"],
        github_url: "https://github.com/yourusername/weather-platform",
        live_url: None,
        status: ProjectStatus::InProgress,
        category: Category::Frontend,
        featured: false,
    },
    SampleProject {
        id: "4",
        title: "Personal Finance Tracker",
        description: "Budget tracking and expense categorization.",
        long_description: "Budgets, expenses and goals with authentication, encryption and interactive reports.",
        image: "projects/finance-tracker.jpg",
        technologies: &["Next.js", "TypeScript", "Prisma", "PostgreSQL", "Stripe"],
        github_url: "https://github.com/yourusername/finance-tracker",
        live_url: Some("https://finance-tracker-demo.com"),
        status: ProjectStatus::Completed,
        category: Category::Fullstack,
        featured: true,
    },
    SampleProject {
        id: "5",
        title: "Learning Management System",
        description: "Online course delivery and student progress tracking.",
        long_description: "Course authoring with video streaming, quizzes, progress tracking and messaging.",
        image: "projects/lms-platform.jpg",
        technologies: &["React", "Node.js", "MongoDB", "Socket.io", "AWS"],
        github_url: "https://github.com/yourusername/lms-platform",
        live_url: None,
        status: ProjectStatus::Planning,
        category: Category::Fullstack,
        featured: false,
    },
];

fn to_entry(sample: &SampleProject) -> CatalogEntry {
    CatalogEntry {
        id: sample.id.to_string(),
        project: Project {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            long_description: sample.long_description.to_string(),
            image: Some(sample.image.to_string()),
            technologies: sample.technologies.iter().map(|t| t.to_string()).collect(),
            github_url: sample.github_url.to_string(),
            live_url: sample.live_url.map(str::to_string),
            status: sample.status,
            category: sample.category,
            featured: sample.featured,
        },
    }
}

/// Built-in projects shown when no catalog file is configured.
pub fn sample_catalog() -> Catalog {
    let entries = SAMPLE_PROJECTS.iter().map(to_entry).collect();
    Catalog::from_static(entries)
}
