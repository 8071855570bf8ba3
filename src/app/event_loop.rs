use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info, warn};

use crate::command::{ActionId, CommandOutcome, dispatch};
use crate::error::AppResult;
use crate::event::{AppEvent, DomainEvent};

use super::actors::UiActor;
use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    input_poll_timeout: Duration,
    ui_actor: UiActor,
    session: TerminalSession,
    loop_event_tx: UnboundedSender<DomainEvent>,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;

        let result = self.drive_loop(&mut runtime).await;

        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        info!("session closed");
        result
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;
        let (loop_event_tx, loop_event_rx, loop_event_runtime) = EventBusRuntime::spawn();
        Ok(LoopRuntime {
            input_poll_timeout: Duration::from_millis(self.config.ui.input_poll_timeout_ms),
            ui_actor: UiActor::new(),
            session,
            loop_event_tx,
            loop_event_rx,
            loop_event_runtime,
        })
    }

    async fn drive_loop(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        loop {
            if runtime.ui_actor.needs_redraw() {
                self.render_frame(&mut runtime.session)?;
                runtime.ui_actor.clear_redraw();
            }

            let waited = wait_next_event(&mut runtime.loop_event_rx, runtime.input_poll_timeout).await;
            if matches!(self.handle_waited_event(waited, runtime)?, LoopControl::Break) {
                return Ok(());
            }
        }
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                if matches!(event, Event::Resize(_, _)) {
                    runtime.session.clear()?;
                }
                let outcome = self.handle_input_event(event, runtime.ui_actor.needs_redraw_mut());
                if let Some(command) = outcome.command {
                    let _ = runtime.loop_event_tx.send(DomainEvent::Command(command));
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                warn!(%message, "terminal input error");
                self.state
                    .status
                    .set(ActionId::Input, format!("input error: {message}"));
                runtime.ui_actor.mark_redraw();
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                debug!(?command, "dispatching command");
                let dispatched =
                    dispatch(&mut self.state, &mut self.nav, &mut self.selection, command)?;
                for event in dispatched.emitted_events {
                    let _ = runtime.loop_event_tx.send(DomainEvent::App(event));
                }
                runtime.ui_actor.mark_redraw();
                if dispatched.outcome == CommandOutcome::QuitRequested {
                    return Ok(LoopControl::Break);
                }
            }
            WaitEvent::Event(DomainEvent::App(event)) => {
                self.handle_app_event(&event);
            }
            WaitEvent::Event(DomainEvent::Wake) => {}
            WaitEvent::Closed => return Ok(LoopControl::Break),
        }
        Ok(LoopControl::Continue)
    }

    fn handle_app_event(&self, event: &AppEvent) {
        match event {
            AppEvent::PageChanged { from, to, reason } => {
                debug!(%from, %to, ?reason, "page transition");
            }
            AppEvent::SelectionChanged { from, to } => {
                debug!(%from, %to, "selection transition");
            }
            AppEvent::CommandExecuted { id, outcome } => {
                debug!(command = id.as_str(), ?outcome, "command executed");
            }
        }
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    wake_timeout: Duration,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = time::sleep(wake_timeout) => {
            WaitEvent::Event(DomainEvent::Wake)
        }
    }
}
