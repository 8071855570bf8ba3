use tracing::{info, warn};

use crate::app::{AppState, NavSubsystem};
use crate::error::AppResult;
use crate::event::{AppEvent, NavReason};
use crate::nav::{Page, RouteChange};
use crate::selection::SelectionCoordinator;

use super::types::{ActionId, Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

/// Applies one command. Recoverable failures (unknown project id, bad page
/// index) become a status message and a `Noop`; anything else propagates.
pub fn dispatch(
    app: &mut AppState,
    nav: &mut NavSubsystem,
    selection: &mut SelectionCoordinator,
    cmd: Command,
) -> AppResult<CommandDispatchResult> {
    let action_id = cmd.action_id();
    let mut emitted_events = Vec::new();

    let result = match cmd {
        Command::NextPage => nav
            .step(true)
            .map(|change| route_outcome(app, change, NavReason::Step, action_id, &mut emitted_events)),
        Command::PrevPage => nav
            .step(false)
            .map(|change| route_outcome(app, change, NavReason::Step, action_id, &mut emitted_events)),
        Command::GotoPage { index } => nav
            .navigate_index(index)
            .map(|change| route_outcome(app, change, NavReason::Jump, action_id, &mut emitted_events)),
        Command::Navigate { path, reason } => nav
            .navigate(&path)
            .map(|change| route_outcome(app, change, reason, action_id, &mut emitted_events)),
        Command::SelectProject { id } => {
            let from = selection.selected_id().to_string();
            selection.select(&id).map(|entry| {
                let title = entry.project.title.clone();
                if from == id {
                    app.status.set(action_id, format!("{title} already selected"));
                    return CommandOutcome::Noop;
                }
                app.status.set(action_id, format!("selected {title}"));
                emitted_events.push(AppEvent::SelectionChanged { from, to: id });
                CommandOutcome::Applied
            })
        }
        Command::NextProject | Command::PrevProject => {
            if Page::from_path(nav.router.active_path()) != Some(Page::Projects) {
                app.status.set(action_id, "project list is on the projects page");
                Ok(CommandOutcome::Noop)
            } else {
                let step = if action_id == ActionId::NextProject {
                    selection.select_next()
                } else {
                    selection.select_prev()
                };
                step.map(|change| match change {
                    Some(change) => {
                        app.status.set(action_id, format!("selected project {}", change.to));
                        emitted_events.push(AppEvent::SelectionChanged {
                            from: change.from,
                            to: change.to,
                        });
                        CommandOutcome::Applied
                    }
                    None => {
                        app.status.set(action_id, "no more projects in that direction");
                        CommandOutcome::Noop
                    }
                })
            }
        }
        Command::ToggleTheme => {
            app.theme_mode = app.theme_mode.toggled();
            app.status
                .set(action_id, format!("{} theme", app.theme_mode.as_str()));
            Ok(CommandOutcome::Applied)
        }
        Command::Cancel => {
            nav.gestures.cancel();
            app.status.set(action_id, "gesture canceled");
            Ok(CommandOutcome::Applied)
        }
        Command::Quit => {
            app.status.set(action_id, "quit requested");
            Ok(CommandOutcome::QuitRequested)
        }
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) if err.is_recoverable() => {
            warn!(action = action_id.as_str(), error = %err, "command rejected");
            app.status.set(action_id, err.to_string());
            CommandOutcome::Noop
        }
        Err(err) => return Err(err),
    };

    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });
    Ok(CommandDispatchResult {
        outcome,
        emitted_events,
    })
}

fn route_outcome(
    app: &mut AppState,
    change: Option<RouteChange>,
    reason: NavReason,
    action_id: ActionId,
    events: &mut Vec<AppEvent>,
) -> CommandOutcome {
    let Some(change) = change else {
        app.status.set(action_id, "no page in that direction");
        return CommandOutcome::Noop;
    };

    info!(from = %change.from, to = %change.to, ?reason, "page changed");
    app.status.set(action_id, format!("page {}", change.to));
    events.push(AppEvent::PageChanged {
        from: change.from,
        to: change.to,
        reason,
    });
    CommandOutcome::Applied
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::dispatch;
    use crate::app::{AppState, NavSubsystem};
    use crate::catalog::sample_catalog;
    use crate::command::{Command, CommandOutcome};
    use crate::config::Config;
    use crate::event::{AppEvent, NavReason};
    use crate::nav::default_nav_items;
    use crate::selection::SelectionCoordinator;
    use crate::theme::ThemeMode;

    struct Fixture {
        app: AppState,
        nav: NavSubsystem,
        selection: SelectionCoordinator,
    }

    impl Fixture {
        fn new(start: &str) -> Self {
            let mut config = Config::default();
            config.ui.start_page = start.to_string();
            Self {
                app: AppState::default(),
                nav: NavSubsystem::new(Arc::from(default_nav_items()), &config),
                selection: SelectionCoordinator::initialize(Arc::new(sample_catalog()))
                    .expect("sample catalog is not empty"),
            }
        }

        fn run(&mut self, cmd: Command) -> super::CommandDispatchResult {
            dispatch(&mut self.app, &mut self.nav, &mut self.selection, cmd)
                .expect("dispatch should not fail")
        }
    }

    #[test]
    fn navigate_emits_page_changed_and_resyncs_gestures() {
        let mut fx = Fixture::new("/");
        let result = fx.run(Command::Navigate {
            path: "/skills".to_string(),
            reason: NavReason::Swipe,
        });

        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert!(result.emitted_events.contains(&AppEvent::PageChanged {
            from: "/".to_string(),
            to: "/skills".to_string(),
            reason: NavReason::Swipe,
        }));
        assert_eq!(fx.nav.gestures.current_index(), Some(2));
    }

    #[test]
    fn prev_page_on_first_page_is_noop() {
        let mut fx = Fixture::new("/");
        let result = fx.run(Command::PrevPage);
        assert_eq!(result.outcome, CommandOutcome::Noop);
        assert_eq!(fx.nav.router.active_path(), "/");
    }

    #[test]
    fn unknown_project_is_reported_not_fatal() {
        let mut fx = Fixture::new("/projects");
        let result = fx.run(Command::SelectProject {
            id: "missing".to_string(),
        });

        assert_eq!(result.outcome, CommandOutcome::Noop);
        assert_eq!(fx.selection.selected_id(), "1");
        assert!(fx.app.status.message.contains("missing"));
    }

    #[test]
    fn project_steps_only_apply_on_projects_page() {
        let mut fx = Fixture::new("/");
        assert_eq!(fx.run(Command::NextProject).outcome, CommandOutcome::Noop);
        assert_eq!(fx.selection.selected_id(), "1");

        fx.run(Command::GotoPage { index: 1 });
        let result = fx.run(Command::NextProject);
        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert!(fx.selection.is_expanded("2"));
        assert!(result.emitted_events.contains(&AppEvent::SelectionChanged {
            from: "1".to_string(),
            to: "2".to_string(),
        }));
    }

    #[test]
    fn goto_out_of_range_is_recoverable() {
        let mut fx = Fixture::new("/");
        let result = fx.run(Command::GotoPage { index: 42 });
        assert_eq!(result.outcome, CommandOutcome::Noop);
        assert_eq!(fx.nav.router.active_path(), "/");
    }

    #[test]
    fn toggle_theme_and_quit() {
        let mut fx = Fixture::new("/");
        fx.run(Command::ToggleTheme);
        assert_eq!(fx.app.theme_mode, ThemeMode::Light);
        assert_eq!(fx.run(Command::Quit).outcome, CommandOutcome::QuitRequested);
    }
}
