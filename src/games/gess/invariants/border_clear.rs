//! Border invariant: the outermost ring of the grid never holds a stone.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: every stone on the board is inside the playable interior.
pub struct BorderClearInvariant;

impl Invariant<GameEngine> for BorderClearInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.grid().border_is_clear()
    }

    fn description() -> &'static str {
        "No stone occupies the border"
    }
}
