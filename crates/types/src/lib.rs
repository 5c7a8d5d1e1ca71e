//! Core types module - shared data structures and constants
//!
//! Pure data used by every other crate in the workspace: piece tags, rotation
//! states, game modes, per-tick commands, and the screen identifiers of the
//! top-level state machine. Nothing here depends on I/O.
//!
//! # Board Dimensions
//!
//! - **Width**: game-mode dependent (10 columns for [`GameMode::Standard`])
//! - **Height**: 20 rows, indexed 0 (top) to 19 (bottom)
//! - **Spawn origin**: column `width / 2 - 1`, row `-1` (one row above the board)
//!
//! # Timing Constants
//!
//! All values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame budget of the main loop (~60 Hz) |
//! | `MOVE_REPEAT_MS` | 120 | Minimum spacing of lateral and rotate commands |
//! | `DROP_INTERVAL_MS` | 800 | Initial gravity interval |
//! | `DROP_INTERVAL_STEP_MS` | 75 | Gravity speed-up per `LINES_PER_SPEEDUP` lines |
//! | `DROP_INTERVAL_FLOOR_MS` | 100 | Fastest gravity interval |
//! | `HARD_DROP_INTERVAL_MS` | 20 | Drop interval while a hard drop is in progress |
//!
//! # Examples
//!
//! ```
//! use tessalatrix_types::{GameMode, PieceKind, Rotation, ScreenId};
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(PieceKind::from_str("tee"), Some(PieceKind::Tee));
//! assert_eq!(GameMode::Standard.board_width(), 10);
//! assert!(ScreenId::Menu.can_transition_to(ScreenId::Game));
//! assert!(!ScreenId::Splash.can_transition_to(ScreenId::Game));
//! ```

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Widest board any game mode uses
pub const MAX_BOARD_WIDTH: u8 = 10;

/// Maximum number of occupied cells a piece definition may describe
pub const MAX_BLOCKS: usize = 5;

/// Number of rotation states per piece
pub const ROTATION_COUNT: usize = 4;

/// Frame budget in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Minimum time between two lateral (or two rotate) commands
pub const MOVE_REPEAT_MS: u64 = 120;

/// Initial gravity interval
pub const DROP_INTERVAL_MS: u64 = 800;

/// Gravity speed-up applied every `LINES_PER_SPEEDUP` cleared lines
pub const DROP_INTERVAL_STEP_MS: u64 = 75;

/// Fastest gravity interval reachable through speed-ups
pub const DROP_INTERVAL_FLOOR_MS: u64 = 100;

/// Cleared lines needed for each gravity speed-up
pub const LINES_PER_SPEEDUP: u32 = 10;

/// Drop interval used while a hard drop is in progress
pub const HARD_DROP_INTERVAL_MS: u64 = 20;

/// Bonus awarded per cleared line
pub const LINE_SCORE: u32 = 10;

/// Rows kept per game mode in the high-score table
pub const HIGH_SCORE_COUNT: usize = 10;

/// Longest player name accepted by name entry
pub const NAME_LEN_MAX: usize = 16;

/// How long the splash screen stays up without input
pub const SPLASH_DURATION_MS: u64 = 3000;

/// Blink period of the selected button
pub const BLINK_MS: u64 = 250;

/// Blink period of the name-entry cursor
pub const CURSOR_BLINK_MS: u64 = 300;

/// The seven placeable shapes.
///
/// Board cells store only this tag, which is all a renderer needs to pick a
/// color for a locked block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Square,
    Long,
    Ell,
    Bell,
    Tee,
    Ess,
    Bess,
}

impl PieceKind {
    /// Every shape, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Square,
        PieceKind::Long,
        PieceKind::Ell,
        PieceKind::Bell,
        PieceKind::Tee,
        PieceKind::Ess,
        PieceKind::Bess,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tessalatrix_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("Square"), Some(PieceKind::Square));
    /// assert_eq!(PieceKind::from_str("BESS"), Some(PieceKind::Bess));
    /// assert_eq!(PieceKind::from_str("zig"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Some(PieceKind::Square),
            "long" => Some(PieceKind::Long),
            "ell" => Some(PieceKind::Ell),
            "bell" => Some(PieceKind::Bell),
            "tee" => Some(PieceKind::Tee),
            "ess" => Some(PieceKind::Ess),
            "bess" => Some(PieceKind::Bess),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Square => "square",
            PieceKind::Long => "long",
            PieceKind::Ell => "ell",
            PieceKind::Bell => "bell",
            PieceKind::Tee => "tee",
            PieceKind::Ess => "ess",
            PieceKind::Bess => "bess",
        }
    }
}

/// A single board cell: empty, or the tag of the piece that locked there.
pub type Cell = Option<PieceKind>;

/// Rotation state of a piece. Index 0 is the spawn orientation of the table;
/// each successive index is a further 90° clockwise turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Build a rotation from any index, wrapping modulo 4.
    pub fn from_index(index: u8) -> Self {
        match index % ROTATION_COUNT as u8 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Index 0-3 into a piece's rotation table.
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub fn rotate(&self, direction: RotateDirection) -> Self {
        match direction {
            RotateDirection::Cw => self.rotate_cw(),
            RotateDirection::Ccw => self.rotate_ccw(),
        }
    }
}

/// Game mode. Determines board width and which catalog entries may be dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Standard,
}

impl GameMode {
    /// Every supported mode.
    pub const ALL: [GameMode; 1] = [GameMode::Standard];

    pub fn board_width(&self) -> u8 {
        match self {
            GameMode::Standard => 10,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Standard => "standard",
        }
    }

    /// Look a mode up by name (case-insensitive). Unknown names yield `None`;
    /// callers decide whether to fall back to the default mode.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Queued sideways movement for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateralCommand {
    Left,
    Right,
}

impl LateralCommand {
    pub fn dx(&self) -> i8 {
        match self {
            LateralCommand::Left => -1,
            LateralCommand::Right => 1,
        }
    }
}

/// Direction of a requested rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Cw,
    Ccw,
}

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    Continue,
    SessionOver,
}

/// Identity of a top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Splash,
    Menu,
    HighScoreTable,
    Game,
    GameOver,
    Exit,
}

impl ScreenId {
    /// Whether a screen may hand over to `to`.
    ///
    /// Staying on the same screen is always allowed. Every other request must
    /// follow one of the defined edges.
    pub fn can_transition_to(&self, to: ScreenId) -> bool {
        use ScreenId::*;

        if *self == to {
            return true;
        }
        matches!(
            (*self, to),
            (Splash, Menu)
                | (Menu, Game)
                | (Menu, HighScoreTable)
                | (Menu, Exit)
                | (HighScoreTable, Menu)
                | (Game, GameOver)
                | (GameOver, Menu)
                | (GameOver, Game)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ScreenId::Exit)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::Splash => "splash",
            ScreenId::Menu => "menu",
            ScreenId::HighScoreTable => "hiscore-table",
            ScreenId::Game => "game",
            ScreenId::GameOver => "game-over",
            ScreenId::Exit => "exit",
        }
    }
}
