//! Held-key tracking for gameplay.
//!
//! Turns key presses and releases into the per-tick commands a session
//! expects. A lateral press moves once on the press edge; keeping the key held
//! repeats the move only after the auto-shift delay, and the session throttles
//! those repeats. Rotation and hard drop are one-shot requests consumed by the
//! next tick.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use crossterm::event::KeyCode;

use crate::types::{LateralCommand, RotateDirection, MOVE_REPEAT_MS};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Delay before a held lateral key starts repeating.
///
/// Longer than the release timeout, so a tap that never sees a release event
/// is dropped before it can repeat.
pub const DEFAULT_DAS_MS: u64 = 200;

const _: () = assert!(DEFAULT_DAS_MS > DEFAULT_KEY_RELEASE_TIMEOUT_MS);
const _: () = assert!(DEFAULT_DAS_MS > MOVE_REPEAT_MS);

/// Commands for one session tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickCommands {
    pub lateral: Option<LateralCommand>,
    pub rotate: Option<RotateDirection>,
    pub hard_drop: bool,
}

/// What a gameplay key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Lateral(LateralCommand),
    Rotate(RotateDirection),
    HardDrop,
}

/// Map keyboard input to gameplay keys.
pub fn game_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(GameKey::Lateral(LateralCommand::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(GameKey::Lateral(LateralCommand::Right))
        }
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(GameKey::Rotate(RotateDirection::Cw)),
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            Some(GameKey::Rotate(RotateDirection::Ccw))
        }
        KeyCode::Down
        | KeyCode::Char(' ')
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j') => Some(GameKey::HardDrop),
        _ => None,
    }
}

/// Tracks input state between ticks.
#[derive(Debug, Clone)]
pub struct GameInput {
    held: Option<LateralCommand>,
    tap: Option<LateralCommand>,
    rotate: Option<RotateDirection>,
    hard_drop: bool,
    held_since_ms: u64,
    last_lateral_key_ms: u64,
    das_delay_ms: u64,
    key_release_timeout_ms: u64,
}

impl GameInput {
    pub fn new() -> Self {
        Self {
            held: None,
            tap: None,
            rotate: None,
            hard_drop: false,
            held_since_ms: 0,
            last_lateral_key_ms: 0,
            das_delay_ms: DEFAULT_DAS_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn with_das_delay_ms(mut self, das_ms: u64) -> Self {
        self.das_delay_ms = das_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    pub fn das_delay_ms(&self) -> u64 {
        self.das_delay_ms
    }

    /// Record a key press at `now_ms`. Returns false if the key is not a
    /// gameplay key.
    ///
    /// A press of the lateral key already held (terminal auto-repeat) only
    /// keeps it alive; a new direction queues one move.
    pub fn handle_key_press(&mut self, code: KeyCode, now_ms: u64) -> bool {
        match game_key(code) {
            Some(GameKey::Lateral(dir)) => {
                self.last_lateral_key_ms = now_ms;
                if self.held != Some(dir) {
                    self.held = Some(dir);
                    self.held_since_ms = now_ms;
                    self.tap = Some(dir);
                }
                true
            }
            Some(GameKey::Rotate(dir)) => {
                self.rotate = Some(dir);
                true
            }
            Some(GameKey::HardDrop) => {
                self.hard_drop = true;
                true
            }
            None => false,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(GameKey::Lateral(dir)) = game_key(code) {
            if self.held == Some(dir) {
                self.held = None;
            }
        }
    }

    /// Commands for the tick at `now_ms`. One-shot requests are consumed.
    pub fn take_commands(&mut self, now_ms: u64) -> TickCommands {
        // Auto-release when terminal does not emit release events.
        if self.held.is_some()
            && now_ms.saturating_sub(self.last_lateral_key_ms) > self.key_release_timeout_ms
        {
            self.held = None;
        }

        let repeating = self
            .held
            .filter(|_| now_ms.saturating_sub(self.held_since_ms) >= self.das_delay_ms);

        TickCommands {
            lateral: self.tap.take().or(repeating),
            rotate: self.rotate.take(),
            hard_drop: std::mem::take(&mut self.hard_drop),
        }
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.tap = None;
        self.rotate = None;
        self.hard_drop = false;
    }
}

impl Default for GameInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            game_key(KeyCode::Left),
            Some(GameKey::Lateral(LateralCommand::Left))
        );
        assert_eq!(
            game_key(KeyCode::Char('d')),
            Some(GameKey::Lateral(LateralCommand::Right))
        );
        assert_eq!(game_key(KeyCode::Down), Some(GameKey::HardDrop));
        assert_eq!(game_key(KeyCode::Char(' ')), Some(GameKey::HardDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            game_key(KeyCode::Up),
            Some(GameKey::Rotate(RotateDirection::Cw))
        );
        assert_eq!(
            game_key(KeyCode::Char('Z')),
            Some(GameKey::Rotate(RotateDirection::Ccw))
        );
        assert_eq!(game_key(KeyCode::Esc), None);
    }

    #[test]
    fn test_tap_moves_once_without_release() {
        let mut input = GameInput::new();
        assert!(input.handle_key_press(KeyCode::Left, 1000));

        assert_eq!(input.take_commands(1000).lateral, Some(LateralCommand::Left));
        for now in (1016..1400).step_by(16) {
            assert_eq!(input.take_commands(now).lateral, None, "at {now}");
        }
    }

    #[test]
    fn test_held_lateral_repeats_after_das() {
        let mut input = GameInput::new().with_key_release_timeout_ms(10_000);
        input.handle_key_press(KeyCode::Right, 0);

        assert_eq!(input.take_commands(0).lateral, Some(LateralCommand::Right));
        assert_eq!(input.take_commands(DEFAULT_DAS_MS - 1).lateral, None);
        assert_eq!(
            input.take_commands(DEFAULT_DAS_MS).lateral,
            Some(LateralCommand::Right)
        );

        input.handle_key_release(KeyCode::Right);
        assert_eq!(input.take_commands(DEFAULT_DAS_MS + 16).lateral, None);
    }

    #[test]
    fn test_terminal_repeat_keeps_key_held() {
        let mut input = GameInput::new();
        input.handle_key_press(KeyCode::Left, 0);
        assert_eq!(input.take_commands(0).lateral, Some(LateralCommand::Left));

        // Auto-repeat presses arrive faster than the release timeout.
        for now in [100, 200, 300] {
            input.handle_key_press(KeyCode::Left, now);
        }
        assert_eq!(input.take_commands(300).lateral, Some(LateralCommand::Left));
    }

    #[test]
    fn test_release_of_other_direction_keeps_current() {
        let mut input = GameInput::new().with_key_release_timeout_ms(10_000);
        input.handle_key_press(KeyCode::Left, 0);
        input.handle_key_press(KeyCode::Right, 5);
        input.handle_key_release(KeyCode::Left);
        assert_eq!(input.take_commands(10).lateral, Some(LateralCommand::Right));
        assert_eq!(
            input.take_commands(5 + DEFAULT_DAS_MS).lateral,
            Some(LateralCommand::Right)
        );
    }

    #[test]
    fn test_one_shot_requests_are_consumed() {
        let mut input = GameInput::new();
        input.handle_key_press(KeyCode::Up, 0);
        input.handle_key_press(KeyCode::Char(' '), 0);

        let first = input.take_commands(1);
        assert_eq!(first.rotate, Some(RotateDirection::Cw));
        assert!(first.hard_drop);

        assert_eq!(input.take_commands(2), TickCommands::default());
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut input = GameInput::new()
            .with_das_delay_ms(10)
            .with_key_release_timeout_ms(50);
        input.handle_key_press(KeyCode::Right, 100);
        assert_eq!(input.take_commands(100).lateral, Some(LateralCommand::Right));
        assert_eq!(input.take_commands(150).lateral, Some(LateralCommand::Right));
        assert_eq!(input.take_commands(151).lateral, None);
    }

    #[test]
    fn test_non_movement_key_does_not_extend_auto_release_timeout() {
        let mut input = GameInput::new()
            .with_das_delay_ms(10)
            .with_key_release_timeout_ms(50);
        input.handle_key_press(KeyCode::Left, 0);
        input.take_commands(0);
        input.handle_key_press(KeyCode::Up, 40);
        assert_eq!(input.take_commands(51).lateral, None);
    }

    #[test]
    fn test_unknown_key_is_not_consumed() {
        let mut input = GameInput::new();
        assert!(!input.handle_key_press(KeyCode::Char('p'), 0));
        assert!(input.key_release_timeout_ms() < input.das_delay_ms());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut input = GameInput::new().with_key_release_timeout_ms(10_000);
        input.handle_key_press(KeyCode::Left, 0);
        input.handle_key_press(KeyCode::Up, 0);
        input.reset();
        assert_eq!(input.take_commands(1), TickCommands::default());
    }
}
