//! Gess: board, rules, and the turn-taking engine.

mod action;
mod contracts;
mod coord;
mod engine;
mod footprint;
mod grid;
pub mod invariants;
mod phases;
pub mod rules;
mod typestate;
mod types;

pub use action::{Capture, CaptureReport, Move, MoveError, TurnResult, TurnState, ValidatedMove};
pub use contracts::{Contract, GameNotOver, MoveContract, PlayersTurn};
pub use coord::{BOARD_SIZE, Coord, CoordError, Direction, INTERIOR_MAX, INTERIOR_MIN};
pub use engine::GameEngine;
pub use footprint::{Footprint, RingMask};
pub use grid::{Grid, GridError, STARTING_STONES};
pub use phases::{EngineState, GameOutcome};
pub use rules::SuicidePolicy;
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use types::{Cell, Player};
