//! Gess library - a type-safe rules engine for Gess
//!
//! Gess is played on a 20x20 grid of intersections. A move picks up a 3x3
//! footprint of your own stones and slides it; whatever the footprint lands on
//! is captured. You lose when you no longer own a ring.
//!
//! # Architecture
//!
//! - **Games**: board, footprint extraction, move validation, capture and
//!   ring detection, plus the turn-taking engine
//! - **Config**: TOML configuration for the suicide policy and logging
//! - **Session**: thread-safe registry of independent games
//! - **Console**: line-oriented front end used by the `gess` binary
//!
//! # Example
//!
//! ```
//! use gess::{Coord, Direction, GameEngine, TurnState, Player};
//!
//! let mut engine = GameEngine::new_game();
//! let turn = engine
//!     .submit_move(Coord::new(2, 2), Direction::N, 1)
//!     .unwrap();
//! assert_eq!(*turn.next(), TurnState::Next(Player::White));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

pub mod console;

// Crate-level exports - Configuration
pub use config::{ConfigError, GessConfig};

// Crate-level exports - Session management
pub use session::{SessionError, SessionId, SessionManager};

// Crate-level exports - Game types
pub use games::gess::{
    BOARD_SIZE, Capture, CaptureReport, Cell, Contract, Coord, CoordError, Direction,
    EngineState, Footprint, GameEngine, GameFinished, GameInProgress, GameNotOver, GameOutcome,
    GameResult, GameSetup, Grid, GridError, INTERIOR_MAX, INTERIOR_MIN, Move, MoveContract,
    MoveError, Player, PlayersTurn, RingMask, STARTING_STONES, SuicidePolicy, TurnResult,
    TurnState, ValidatedMove,
};

// Crate-level exports - Rules and invariants
pub use games::gess::{invariants, rules};
