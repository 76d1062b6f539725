//! Terminal game runner.
//!
//! Single-threaded cooperative loop: render the current frame, poll input
//! until the next tick is due, then advance the gravity timer. Every core
//! operation runs to completion before the next event is admitted, so no
//! locking is needed anywhere.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use neotris::core::GameState;
use neotris::input::{map_key_event, should_quit, RepeatHandler};
use neotris::term::{GameView, TerminalRenderer, Viewport};
use neotris::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);
    game.start();

    let view = GameView::default();
    let mut repeat = RepeatHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Poll input with a timeout until the next tick is due.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = repeat.handle_key_press(key.code) {
                            game.apply_action(action);
                        } else if let Some(action) = map_key_event(key) {
                            match action {
                                // Horizontal movement is owned by the
                                // repeat handler above.
                                GameAction::MoveLeft | GameAction::MoveRight => {}
                                _ => {
                                    game.apply_action(action);
                                }
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        repeat.handle_key_release(key.code);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in repeat.update(TICK_MS) {
                game.apply_action(action);
            }
            game.tick(TICK_MS);

            if let Some(event) = game.take_settle_event() {
                if event.game_over {
                    // Drop any held repeat so it cannot fire into the
                    // next session.
                    repeat.reset();
                }
            }
        }
    }
}
