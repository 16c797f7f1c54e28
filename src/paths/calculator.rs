//! Builds a [`PathNetwork`] from a [`Board`].

use smallvec::SmallVec;
use tracing::trace;

use super::network::PathNetwork;
use crate::core::{PointId, Topology, SIDE_COUNT};
use crate::tiles::Board;

/// Replays every placed tile's connection groups through the topology.
#[derive(Clone, Debug, Default)]
pub struct PathCalculator {
    topology: Topology,
}

impl PathCalculator {
    /// Create a calculator over `topology`.
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self { topology }
    }

    /// The topology in use.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Build the network for `board` from scratch.
    ///
    /// For each occupied slot, each rotated connection group is mapped
    /// from sides to global point ids and recorded with
    /// [`PathNetwork::connect_points`].
    #[must_use]
    pub fn calculate(&self, board: &Board) -> PathNetwork {
        let mut network = PathNetwork::new();
        let mut tiles = 0usize;

        for (slot, tile) in board.occupied_slots() {
            let points = self.topology.points_of(slot);
            for group in tile.connections() {
                let ids: SmallVec<[PointId; SIDE_COUNT]> =
                    group.iter().map(|side| points[side.index()]).collect();
                network.connect_points(&ids);
            }
            tiles += 1;
        }

        trace!(tiles, paths = network.path_count(), "calculated path network");
        network
    }

    /// Network for `board` after the tile in `slot` was rotated. Rebuilds in
    /// full.
    #[must_use]
    pub fn update_for_rotation(&self, board: &Board, slot: usize) -> PathNetwork {
        trace!(slot, "rebuilding network after rotation");
        self.calculate(board)
    }

    /// Network for `board` after slots `a` and `b` were swapped. Rebuilds in
    /// full.
    #[must_use]
    pub fn update_for_swap(&self, board: &Board, a: usize, b: usize) -> PathNetwork {
        trace!(a, b, "rebuilding network after swap");
        self.calculate(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Tile, TileType};

    fn p(i: usize) -> PointId {
        PointId::new(i).unwrap()
    }

    fn curve(rotation: u8) -> Tile {
        Tile::new(TileType::Curve, rotation).unwrap()
    }

    #[test]
    fn test_empty_board_gives_fresh_network() {
        let calculator = PathCalculator::default();
        assert_eq!(calculator.calculate(&Board::empty()), PathNetwork::new());
    }

    #[test]
    fn test_curve_in_first_slot() {
        let calculator = PathCalculator::default();
        let board = Board::empty().with_tile(0, curve(0)).unwrap();
        let network = calculator.calculate(&board);

        assert_eq!(network.touch_count(p(13)), 1);
        assert_eq!(network.touch_count(p(3)), 1);
        assert_eq!(network.touch_count(p(0)), 0);
        assert_eq!(network.touch_count(p(12)), 0);
        assert!(network.are_connected(p(13), p(3)));
    }

    #[test]
    fn test_bridge_keeps_two_paths() {
        let calculator = PathCalculator::default();
        let board = Board::empty()
            .with_tile(4, Tile::unrotated(TileType::Bridge))
            .unwrap();
        let network = calculator.calculate(&board);

        // Slot 4 is [4, 18, 7, 17].
        assert!(network.are_connected(p(4), p(7)));
        assert!(network.are_connected(p(17), p(18)));
        assert!(!network.are_connected(p(4), p(17)));
        assert_eq!(network.path_count(), 2);
    }

    #[test]
    fn test_adjacent_tiles_share_points() {
        let calculator = PathCalculator::default();
        // Slot 0 curve {E,S} = {13, 3}; slot 1 curve rotated to {S,W} = {4, 13}.
        let board = Board::empty()
            .with_tile(0, curve(0))
            .unwrap()
            .with_tile(1, curve(1))
            .unwrap();
        let network = calculator.calculate(&board);

        assert_eq!(network.touch_count(p(13)), 2);
        assert!(network.are_connected(p(3), p(4)));
    }

    #[test]
    fn test_updates_match_full_rebuild() {
        let calculator = PathCalculator::default();
        let board = Board::empty()
            .with_tile(0, curve(0))
            .unwrap()
            .with_tile(5, Tile::unrotated(TileType::Intersection))
            .unwrap();

        let rotated = board.with_rotation(5, 3).unwrap();
        assert_eq!(calculator.update_for_rotation(&rotated, 5), calculator.calculate(&rotated));

        let swapped = board.with_swap(0, 5).unwrap();
        assert_eq!(calculator.update_for_swap(&swapped, 0, 5), calculator.calculate(&swapped));
    }
}
