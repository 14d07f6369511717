use std::process::ExitCode;
use std::sync::mpsc;

use analyzer_core::{update, AppState, Msg, SubmissionState};
use analyzer_engine::{ClientSettings, EngineHandle};
use analyzer_logging::{analyzer_debug, analyzer_info};

use crate::cli::Cli;
use crate::effects::EffectRunner;
use crate::ui::{render, Terminal};

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    analyzer_logging::initialize(cli.log_destination(), cli.log_level(), &cli.log_file);

    let settings = ClientSettings::new(&cli.server)?;
    analyzer_info!("Analysis service at {}", settings.endpoint());
    let initial = cli.initial_messages()?;

    let (engine, events) = EngineHandle::new(settings)?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(engine, events, msg_tx.clone());

    for msg in initial {
        // The receiver lives in this function, so the send cannot fail.
        let _ = msg_tx.send(msg);
    }
    // Only the engine forwarder keeps the channel open from here on.
    drop(msg_tx);

    let mut app = App::new(AppState::with_policy(cli.policy()), runner);
    while let Ok(msg) = msg_rx.recv() {
        app.dispatch_msg(msg);
        // Coalesce whatever is already queued into a single redraw.
        while let Ok(next) = msg_rx.try_recv() {
            app.dispatch_msg(next);
        }
        app.render_if_dirty();
        if app.is_settled() {
            break;
        }
    }

    Ok(exit_code(app.state.submission()))
}

/// Only a successful analysis exits 0.
fn exit_code(submission: &SubmissionState) -> ExitCode {
    match submission {
        SubmissionState::Succeeded(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

struct App {
    state: AppState,
    runner: EffectRunner,
    in_flight: usize,
    needs_render: bool,
    terminal: Terminal,
}

impl App {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            in_flight: 0,
            needs_render: false,
            terminal: Terminal::default(),
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        if matches!(msg, Msg::AnalysisCompleted { .. }) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.in_flight += self.runner.enqueue(effects);
        self.needs_render |= was_dirty;
    }

    fn render_if_dirty(&mut self) {
        if std::mem::take(&mut self.needs_render) {
            self.terminal.draw(&render(&self.state.view()));
        }
    }

    /// A one-shot run is over once nothing is in flight and the form has an outcome.
    fn is_settled(&self) -> bool {
        let settled = self.in_flight == 0
            && matches!(
                self.state.submission(),
                SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
            );
        if settled {
            analyzer_debug!("Submission settled");
        }
        settled
    }
}
