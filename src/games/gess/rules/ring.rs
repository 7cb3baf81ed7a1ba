//! Ring detection.
//!
//! A ring is a hollow 3×3: empty center, eight stones of one color around
//! it. A player with no ring has lost.

use super::super::coord::{Coord, INTERIOR_MAX, INTERIOR_MIN};
use super::super::footprint::Footprint;
use super::super::{Grid, Player};
use tracing::instrument;

/// Every center whose footprint is an intact ring of `player`, row-major.
///
/// Ring cells must be playable, so centers lie one cell inside the interior.
#[instrument(skip(grid))]
pub fn rings(grid: &Grid, player: Player) -> Vec<Coord> {
    ring_centers()
        .filter(|&center| is_ring_at(grid, center, player))
        .collect()
}

/// Checks if `player` owns at least one intact ring.
#[instrument(skip(grid))]
pub fn has_intact_ring(grid: &Grid, player: Player) -> bool {
    ring_centers().any(|center| is_ring_at(grid, center, player))
}

fn ring_centers() -> impl Iterator<Item = Coord> {
    (INTERIOR_MIN + 1..INTERIOR_MAX).flat_map(|row| {
        (INTERIOR_MIN + 1..INTERIOR_MAX).map(move |col| Coord::new(row, col))
    })
}

fn is_ring_at(grid: &Grid, center: Coord, player: Player) -> bool {
    Footprint::extract(grid, center, player).is_ok_and(|fp| fp.is_ring())
}
