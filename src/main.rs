//! Terminal word search runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `wordsearch-term`. Frames run every `TICK_MS`; the session clock advances
//! once per wall-clock second while the game is active.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{error, info};

use tui_wordsearch::core::GameSession;
use tui_wordsearch::engine::{apply_action, SecondTicker, SelectionCursor};
use tui_wordsearch::input::{handle_key_event, should_quit};
use tui_wordsearch::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use tui_wordsearch::types::TICK_MS;
use tui_wordsearch::{logging, AppConfig, ResultRecorder};

fn main() -> Result<()> {
    let config = AppConfig::from_env().context("reading WORDSEARCH_* configuration")?;
    logging::init(config.log_path.as_deref())?;
    info!(
        difficulty = config.difficulty.as_str(),
        theme = config.theme.as_str(),
        seed = config.seed,
        "starting"
    );
    let setup = config.session_setup()?;
    let session = GameSession::with_observer(setup, ResultRecorder::new(config.results_path.clone()));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("exiting with error: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut session: GameSession<ResultRecorder>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut cursor = SelectionCursor::new(session.grid().map(|g| g.size()).unwrap_or(0));
    let mut ticker = SecondTicker::new();
    let mut status: Option<String> = None;

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = session.snapshot();
        let hud = HudView {
            cursor: snap.playable().then(|| cursor.position()),
            anchor: cursor.anchor(),
            status: status.as_deref(),
        };
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        session.observer_mut().flush()?;
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        status = apply_action(&mut session, &mut cursor, action).message();
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Clock.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            if session.is_active() {
                if !ticker.is_running() {
                    ticker.start();
                }
            } else if ticker.is_running() {
                ticker.cancel();
            }
            for _ in 0..ticker.advance(elapsed.as_millis() as u32) {
                session.tick();
            }
        }

        session.observer_mut().flush()?;
    }
}
