//! Held-direction auto-repeat for horizontal movement.
//!
//! While a direction key is held, the move repeats on a fixed timer. The
//! timer is keyed by direction: it restarts on a direction change and is
//! canceled on release. Terminals that never emit key-release events get a
//! timeout-based auto-release instead, so a single tap cannot turn into a
//! sustained hold.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::{GameAction, MOVE_REPEAT_MS};

const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 400;

/// Held horizontal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    Left,
    Right,
    None,
}

impl Held {
    fn action(self) -> Option<GameAction> {
        match self {
            Held::Left => Some(GameAction::MoveLeft),
            Held::Right => Some(GameAction::MoveRight),
            Held::None => None,
        }
    }
}

/// Tracks the held direction and produces repeated move actions.
#[derive(Debug, Clone)]
pub struct RepeatHandler {
    held: Held,
    repeat_timer_ms: u32,
    repeat_delay_ms: u32,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl RepeatHandler {
    pub fn new() -> Self {
        Self::with_repeat_delay(MOVE_REPEAT_MS)
    }

    pub fn with_repeat_delay(repeat_delay_ms: u32) -> Self {
        Self {
            held: Held::None,
            repeat_timer_ms: 0,
            repeat_delay_ms,
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Handle a direction key press. A newly held (or switched) direction
    /// moves immediately and starts its repeat timer; repeats of the same
    /// direction are left to [`update`](Self::update).
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let pressed = match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Held::Left,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Held::Right,
            _ => return None,
        };

        self.last_key_time = Instant::now();
        if self.held == pressed {
            return None;
        }

        self.held = pressed;
        self.repeat_timer_ms = 0;
        pressed.action()
    }

    /// Handle a direction key release: cancels the repeat for that
    /// direction only.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        let released = match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Held::Left,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Held::Right,
            _ => return,
        };
        if self.held == released {
            self.held = Held::None;
            self.repeat_timer_ms = 0;
        }
    }

    /// Advance the repeat timer by one frame and collect due repeats.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 8> {
        let mut actions = ArrayVec::new();

        // Auto-release when the terminal never reported a release.
        if self.held != Held::None {
            let since_key = self.last_key_time.elapsed().as_millis() as u32;
            if since_key > self.key_release_timeout_ms {
                self.held = Held::None;
                self.repeat_timer_ms = 0;
            }
        }

        let Some(action) = self.held.action() else {
            return actions;
        };

        self.repeat_timer_ms += elapsed_ms;
        while self.repeat_timer_ms >= self.repeat_delay_ms {
            self.repeat_timer_ms -= self.repeat_delay_ms;
            if actions.try_push(action).is_err() {
                break;
            }
        }
        actions
    }

    /// Drop all held state, e.g. when the game ends or restarts.
    pub fn reset(&mut self) {
        self.held = Held::None;
        self.repeat_timer_ms = 0;
        self.last_key_time = Instant::now();
    }
}

impl Default for RepeatHandler {
    fn default() -> Self {
        Self::new()
    }
}
