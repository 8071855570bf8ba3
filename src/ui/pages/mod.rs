mod about;
mod placeholder;
mod projects;

pub use about::draw_about;
pub use placeholder::draw_placeholder;
pub use projects::draw_projects;
