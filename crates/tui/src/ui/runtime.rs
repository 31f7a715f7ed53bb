//! Terminal session and event loop.
//!
//! Input is read on a plain thread (crossterm's reads block) and handed to
//! the async loop over a channel. The loop ticks at frame rate only while a
//! smooth scroll is running and otherwise wakes every few seconds, so an idle
//! page costs next to nothing.
use std::io::Stdout;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_types::{Effect, Msg};
use folio_util::UserPreferences;
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::config::PortfolioConfig;
use crate::ui::main_component::MainView;
use crate::ui::theme;

const FRAME: Duration = Duration::from_millis(16);
const IDLE: Duration = Duration::from_secs(5);
const INPUT_BUFFER: usize = 256;

/// Forwards terminal events until the receiving side goes away.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(INPUT_BUFFER);
    thread::spawn(move || {
        while !sender.is_closed() {
            match event::poll(FRAME) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!(%error, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    warn!(%error, "failed to poll terminal events");
                    break;
                }
            }
        }
    });
    receiver
}

type Screen = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen, mouse reporting on. A failure part way
/// through puts the terminal back before returning.
fn enter_screen() -> Result<Screen> {
    enable_raw_mode().context("enable raw mode")?;
    let mut out = std::io::stdout();
    let screen = execute!(out, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")
        .and_then(|()| Terminal::new(CrosstermBackend::new(out)).context("create terminal"));
    if screen.is_err() {
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        if let Err(error) = disable_raw_mode() {
            warn!(%error, "failed to leave raw mode");
        }
    }
    screen
}

fn leave_screen(screen: &mut Screen) -> Result<()> {
    disable_raw_mode()?;
    execute!(screen.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    screen.show_cursor()?;
    Ok(())
}

fn draw(screen: &mut Screen, app: &mut App, view: &mut MainView) -> Result<()> {
    screen.draw(|frame| view.render(frame, frame.area(), app))?;
    Ok(())
}

fn dispatch(app: &mut App, view: &mut MainView, event: Event) -> Vec<Effect> {
    match event {
        Event::Key(key) => view.handle_key_events(app, key),
        Event::Mouse(mouse) => view.handle_mouse_events(app, mouse),
        Event::Resize(columns, rows) => view.handle_message(app, Msg::Resize(columns, rows)),
        _ => Vec::new(),
    }
}

fn ticker(period: Duration) -> time::Interval {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Carries out effects. Returns `false` once the loop should stop.
fn process_effects(effects: Vec<Effect>, preferences: &UserPreferences) -> bool {
    let mut keep_running = true;
    for effect in effects {
        match effect {
            Effect::OpenLink(link) => {
                debug!(href = link.href(), target = ?link.target(), "opening link");
                if let Err(error) = open::that_detached(link.href()) {
                    warn!(href = link.href(), %error, "failed to open link");
                }
            }
            Effect::PersistTheme(mode) => {
                if let Err(error) = preferences.set_preferred_theme(Some(mode)) {
                    warn!(%error, "failed to save theme preference");
                }
            }
            Effect::Quit => keep_running = false,
        }
    }
    keep_running
}

/// Runs the page until the reader quits, then restores the terminal.
pub async fn run_app(config: PortfolioConfig, preferences: UserPreferences) -> Result<()> {
    let theme_mode = theme::resolve_mode(config.theme, preferences.preferred_theme());
    let (width, height) = crossterm::terminal::size().context("read terminal size")?;
    info!(%theme_mode, width, height, "starting portfolio viewer");

    let mut input = spawn_input_thread();
    let mut view = MainView::new();
    let mut app = App::new(config, theme_mode, width, height);
    let mut screen = enter_screen()?;

    let mut period = IDLE;
    let mut clock = ticker(period);

    let result = async {
        draw(&mut screen, &mut app, &mut view)?;
        let mut known_size = (width, height);

        loop {
            let wanted = if app.is_animating() { FRAME } else { IDLE };
            if wanted != period {
                period = wanted;
                clock = ticker(period);
            }

            let (effects, mut dirty) = tokio::select! {
                event = input.recv() => {
                    let Some(event) = event else { break };
                    (dispatch(&mut app, &mut view, event), true)
                }
                _ = clock.tick() => {
                    let was_animating = app.is_animating();
                    (view.handle_message(&mut app, Msg::Tick), was_animating)
                }
                _ = signal::ctrl_c() => break,
            };

            if !process_effects(effects, &preferences) {
                break;
            }

            // Not every terminal reports resizes.
            if let Ok(size) = crossterm::terminal::size()
                && size != known_size
            {
                known_size = size;
                app.update(&Msg::Resize(size.0, size.1));
                dirty = true;
            }

            if dirty {
                draw(&mut screen, &mut app, &mut view)?;
            }
        }
        anyhow::Ok(())
    }
    .await;

    app.shutdown();
    let teardown = leave_screen(&mut screen);
    info!("portfolio viewer closed");
    prefer_loop_error(result, teardown)
}

/// The event loop's own error wins over a teardown failure, which is logged.
fn prefer_loop_error(result: Result<()>, teardown: Result<()>) -> Result<()> {
    match (result, teardown) {
        (result, Ok(())) => result,
        (Ok(()), Err(error)) => Err(error),
        (Err(error), Err(teardown_error)) => {
            warn!(error = %format!("{teardown_error:#}"), "failed to restore terminal");
            Err(error)
        }
    }
}
