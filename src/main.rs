//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a framebuffer-based renderer, and runs the control socket listener on the
//! side. Payloads drained from the socket queue are discarded: received
//! data drives no game events.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::adapter::Adapter;
use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, ServerInfoView, TerminalRenderer, Viewport};
use tui_2048::types::TICK_MS;

fn main() -> Result<()> {
    let adapter = Adapter::start_from_env()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, adapter);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut adapter: Option<Adapter>) -> Result<()> {
    let mut game = GameState::new(wall_clock_seed());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let server_info = adapter.as_ref().map(|a| ServerInfoView {
            host: &a.config().host,
            port: a.config().port,
        });
        view.render_into(&game.snapshot(), server_info.as_ref(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(dir) = handle_key_event(key) {
                        // Once the game-over banner is up only quit works.
                        if !game.is_game_over() {
                            game.apply_move(dir);
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            // Drain the socket queue; received payloads drive nothing.
            if let Some(adapter) = adapter.as_mut() {
                while adapter.poll_payload().is_some() {}
            }
        }
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos()
        .wrapping_add(0x9e3779b9)
}
