//! Terminal blockfall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `blockfall::term`. Logs go to `blockfall.log` because the terminal is
//! taken over by the alternate screen.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{error, info};

use blockfall::config::{config_file_path, load_config_from_path};
use blockfall::core::{GameConfig, Session, Snapshot};
use blockfall::input::{map_key, should_quit, KeyAction};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const LOG_FILE: &str = "blockfall.log";
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging()?;

    let config = load_or_default();
    let seed = seed_from_clock();
    info!("starting with seed {seed}");

    let mut session = Session::new(config, seed);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always stop timers and restore the terminal, even on error.
    session.stop();
    let restored = term.exit();
    if let Err(e) = &result {
        error!("exiting with error: {e:#}");
    }
    info!(
        "final score {} after {} lines",
        session.score(),
        session.lines()
    );
    result.and(restored)
}

fn init_logging() -> Result<()> {
    let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_module_path(false)
        .init();
    Ok(())
}

fn load_or_default() -> GameConfig {
    let path = config_file_path();
    match load_config_from_path(&path) {
        Ok(config) => {
            info!("configuration loaded from {}", path.display());
            config
        }
        Err(e) => {
            error!("failed to load {}: {e}; using defaults", path.display());
            GameConfig::default()
        }
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    session.start();

    let view = GameView::default();
    let mut snap = Snapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame.
        let deadline = Instant::now() + FRAME;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(KeyAction::Play(command)) => {
                            session.queue_command(command);
                        }
                        Some(KeyAction::Pause) => {
                            session.toggle_pause();
                        }
                        Some(KeyAction::Restart) => session.start(),
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the measured delta; sub-millisecond remainders carry over.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick += Duration::from_millis(elapsed_ms as u64);
        session.tick(elapsed_ms);
        if let Some(event) = session.take_last_event() {
            if event.cleared_rows > 0 {
                info!(
                    "cleared {} rows for {} points",
                    event.cleared_rows, event.score_gained
                );
            }
        }
    }
}
