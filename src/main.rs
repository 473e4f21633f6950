pub mod config;
pub mod countdown;
pub mod runtime;
pub mod schedule;
pub mod session;
pub mod ui;
pub mod util;

use crate::{
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{AppEvent, CrosstermEventSource, Runner},
    schedule::Side,
    session::Session,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

/// One countdown tick per second.
const TICK_RATE_MS: u64 = 1000;

/// guided debate-practice timer with per-segment prompts and a session log
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A guided debate-practice timer that walks you through the fixed speaking sequence, shows a coaching prompt per segment, and logs every transition."
)]
pub struct Cli {
    /// side to argue for (overrides the saved preference)
    #[clap(short = 's', long, value_enum)]
    side: Option<Side>,

    /// drop wall-clock timestamps from session log lines
    #[clap(long)]
    plain_log: bool,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub config: Config,
}

impl App {
    pub fn new(cli: &Cli, config: Config) -> Self {
        let side = cli.side.unwrap_or(config.default_side);
        let log_timestamps = config.log_timestamps && !cli.plain_log;

        Self {
            session: Session::new(side, log_timestamps),
            config,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut app = App::new(&cli, store.load());

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;
    res?;

    // remember the chosen side for the next launch
    app.config.default_side = app.session.selected_side();
    store.save(&app.config)?;

    Ok(())
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let event_source = CrosstermEventSource::new();
    let runner = Runner::new(event_source, Duration::from_millis(TICK_RATE_MS));

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            AppEvent::Tick => {
                if app.session.is_running() {
                    app.session.tick();
                    // Redraws cover the Running -> Complete edge too.
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            AppEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            AppEvent::Key(key) => {
                if handle_key(app, key) {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

/// Maps a key press onto a session command. Returns true when the app should
/// quit. Side-selection keys are locked outside Idle by the session itself.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('s') => {
            app.session.start();
            false
        }
        KeyCode::Char('r') => {
            app.session.reset();
            false
        }
        KeyCode::Char('t') => {
            app.session.switch_side();
            false
        }
        KeyCode::Char('a') => {
            app.session.set_side(Side::Affirmative);
            false
        }
        KeyCode::Char('n') => {
            app.session.set_side(Side::Negative);
            false
        }
        _ => false,
    }
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
