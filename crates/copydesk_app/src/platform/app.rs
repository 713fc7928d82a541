use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use copydesk_core::{update, AppState, AppViewModel, Intent, Msg};
use copydesk_engine::{ClipboardWriter, EngineHandle, SystemClipboard};
use copydesk_logging::{copydesk_info, copydesk_warn};

use super::config::{read_config, AppConfig, CONFIG_FILENAME};
use super::effects::{EffectRunner, MsgSink};
use super::logging;
use super::ui::commands::{self, Command, HELP};
use super::ui::render;

/// Everything the UI loop reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Line(String),
    Msg(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match read_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(config.log_destination);
    if let Some(err) = config_error {
        copydesk_warn!("Using default configuration: {}", err);
    }
    copydesk_info!("Generation service at {}", config.base_url);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let engine = EngineHandle::new(
        config.client_settings(),
        Arc::new(MsgSink::new(event_tx.clone())),
    )
    .context("starting generation engine")?;
    let runner = EffectRunner::new(engine, SystemClipboard::new());
    runner.check_service();

    spawn_input_reader(event_tx).context("starting input reader")?;

    let mut controller = Controller::new(runner);
    let mut stdout = io::stdout();
    writeln!(stdout, "{HELP}\n")?;
    write!(stdout, "{}", render::render(&controller.view()))?;
    stdout.flush()?;

    while let Ok(event) = event_rx.recv() {
        let view = match event {
            AppEvent::Line(line) => match commands::parse(&line, controller.active()) {
                Command::Dispatch(msgs) => controller.dispatch_all(msgs),
                Command::Help => {
                    writeln!(stdout, "{HELP}")?;
                    None
                }
                Command::Quit => break,
                Command::Unknown(reason) => {
                    writeln!(stdout, "? {reason} (type `help`)")?;
                    None
                }
            },
            AppEvent::Msg(msg) => controller.dispatch(msg),
            AppEvent::InputClosed => break,
        };
        if let Some(view) = view {
            write!(stdout, "\n{}", render::render(&view))?;
            stdout.flush()?;
        }
    }

    copydesk_info!("Shutting down");
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("copydesk-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(AppEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        copydesk_warn!("Failed to read input: {}", err);
                        break;
                    }
                }
            }
            let _ = tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}

/// Owns the core state and feeds effects to the runner.
struct Controller<C: ClipboardWriter> {
    state: AppState,
    runner: EffectRunner<C>,
}

impl<C: ClipboardWriter> Controller<C> {
    fn new(runner: EffectRunner<C>) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    fn active(&self) -> Intent {
        self.state.active()
    }

    fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Applies messages in order and returns a view when anything changed.
    fn dispatch_all(&mut self, msgs: Vec<Msg>) -> Option<AppViewModel> {
        let mut changed = None;
        for msg in msgs {
            if let Some(view) = self.dispatch(msg) {
                changed = Some(view);
            }
        }
        changed
    }

    fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        if was_dirty {
            Some(self.state.view())
        } else {
            None
        }
    }
}
