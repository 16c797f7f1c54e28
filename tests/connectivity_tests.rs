//! Path network and degree validation integration tests.
//!
//! These tests build boards through the public API, compute their path
//! networks and check connectivity, touch counts and validation results.

use tile_link::core::{DisjointSet, PointId, Topology};
use tile_link::paths::{PathCalculator, PathNetwork};
use tile_link::tiles::{Board, Tile, TileType};
use tile_link::validation::{ConnectionValidator, DegreeIssue, Severity};

fn p(i: usize) -> PointId {
    PointId::new(i).unwrap()
}

fn tile(kind: TileType, rotation: u8) -> Tile {
    Tile::new(kind, rotation).unwrap()
}

fn place(board: Board, slot: usize, kind: TileType, rotation: u8) -> Board {
    board.with_tile(slot, tile(kind, rotation)).unwrap()
}

// =============================================================================
// Topology Tests
// =============================================================================

/// Every slot's points follow the row/column numbering.
#[test]
fn test_standard_slot_points() {
    let topology = Topology::standard();
    for slot in 0..9 {
        let (r, c) = (slot / 3, slot % 3);
        let north = 3 * r + c;
        let west = 12 + 4 * r + c;
        assert_eq!(
            topology.slot_points(slot).unwrap(),
            [p(north), p(west + 1), p(north + 3), p(west)],
            "slot {slot}"
        );
    }
}

/// Entity points are exactly the outer edge of the board.
#[test]
fn test_entity_points_on_outer_edge() {
    let topology = Topology::standard();
    let mut outer: Vec<PointId> = Vec::new();
    for slot in 0..9 {
        let [n, e, s, w] = topology.slot_points(slot).unwrap();
        let (r, c) = (slot / 3, slot % 3);
        if r == 0 {
            outer.push(n);
        }
        if r == 2 {
            outer.push(s);
        }
        if c == 0 {
            outer.push(w);
        }
        if c == 2 {
            outer.push(e);
        }
    }
    outer.sort();

    let mut entities: Vec<PointId> = topology.entity_points().to_vec();
    entities.sort();
    assert_eq!(entities, outer);
}

// =============================================================================
// Path Calculation Tests
// =============================================================================

/// A curve at rotation 0 in slot 0 joins east and south.
#[test]
fn test_single_curve_in_corner() {
    let board = place(Board::empty(), 0, TileType::Curve, 0);
    let network = PathCalculator::default().calculate(&board);

    assert_eq!(network.touch_count(p(13)), 1);
    assert_eq!(network.touch_count(p(3)), 1);
    assert_eq!(network.touch_count(p(0)), 0);
    assert_eq!(network.touch_count(p(12)), 0);
    assert!(network.are_connected(p(13), p(3)));
    assert!(!network.are_connected(p(0), p(12)));
    assert_eq!(network.paths(), vec![vec![p(3), p(13)]]);
}

/// A bridge keeps its two straights apart.
#[test]
fn test_bridge_does_not_join() {
    let board = place(Board::empty(), 4, TileType::Bridge, 0);
    let network = PathCalculator::default().calculate(&board);

    assert!(network.are_connected(p(4), p(7)));
    assert!(network.are_connected(p(17), p(18)));
    assert!(!network.are_connected(p(4), p(17)));
    assert_eq!(network.path_count(), 2);
}

/// A cross joins all four sides into one path.
#[test]
fn test_cross_joins_all_sides() {
    let board = place(Board::empty(), 4, TileType::XIntersection, 0);
    let network = PathCalculator::default().calculate(&board);

    assert_eq!(network.points_on_path(p(4)), vec![p(4), p(7), p(17), p(18)]);
    for point in [4, 7, 17, 18] {
        assert_eq!(network.touch_count(p(point)), 1);
    }
}

/// Neighbouring tiles meet at their shared point.
#[test]
fn test_adjacent_tiles_share_point() {
    let board = place(place(Board::empty(), 0, TileType::Curve, 0), 1, TileType::Curve, 1);
    let network = PathCalculator::default().calculate(&board);

    assert_eq!(network.touch_count(p(13)), 2);
    assert!(network.are_connected(p(3), p(4)));
    assert_eq!(network.path_count(), 1);
}

/// A column of bridges carries entity 0 (point 0) down to entity 8 (point 9).
#[test]
fn test_bridge_column_connects_entities() {
    let board = [0, 3, 6]
        .into_iter()
        .fold(Board::empty(), |board, slot| place(board, slot, TileType::Bridge, 0));
    let topology = Topology::standard();
    let network = PathCalculator::new(topology.clone()).calculate(&board);

    let top = topology.entity_point(tile_link::EntityId::new(0).unwrap());
    let bottom = topology.entity_point(tile_link::EntityId::new(8).unwrap());
    assert_eq!((top, bottom), (p(0), p(9)));
    assert!(network.are_connected(top, bottom));
    assert_eq!(network.points_on_path(top), vec![p(0), p(3), p(6), p(9)]);
}

/// Incremental entry points agree with a full rebuild.
#[test]
fn test_updates_match_full_rebuild() {
    let calculator = PathCalculator::default();
    let board = place(place(Board::empty(), 0, TileType::Curve, 0), 1, TileType::Intersection, 2);

    let rotated = board.with_rotation(1, 3).unwrap();
    assert_eq!(calculator.update_for_rotation(&rotated, 1), calculator.calculate(&rotated));

    let swapped = board.with_swap(0, 8).unwrap();
    assert_eq!(calculator.update_for_swap(&swapped, 0, 8), calculator.calculate(&swapped));
}

/// Networks built in different union orders compare equal.
#[test]
fn test_network_equality_ignores_union_order() {
    let mut a = PathNetwork::new();
    a.connect_points(&[p(3), p(13)]);
    a.connect_points(&[p(13), p(4)]);

    let mut b = PathNetwork::new();
    b.connect_points(&[p(4), p(13)]);
    b.connect_points(&[p(13), p(3)]);

    assert_eq!(a, b);
}

/// Re-connecting the same points accumulates touch counts.
#[test]
fn test_touch_counts_accumulate() {
    let mut network = PathNetwork::new();
    network.connect_points(&[p(5), p(6)]);
    network.connect_points(&[p(5), p(6)]);

    assert_eq!(network.touch_count(p(5)), 2);
    assert_eq!(network.touch_count(p(6)), 2);
    assert_eq!(network.path_count(), 1);
}

// =============================================================================
// Validation Tests
// =============================================================================

/// Four curves looping around the centre junctions.
fn four_cycle() -> Board {
    let board = place(Board::empty(), 0, TileType::Curve, 0);
    let board = place(board, 1, TileType::Curve, 1);
    let board = place(board, 4, TileType::Curve, 2);
    place(board, 3, TileType::Curve, 3)
}

#[test]
fn test_four_cycle_is_valid() {
    let network = PathCalculator::default().calculate(&four_cycle());

    for point in [3, 4, 13, 17] {
        assert_eq!(network.touch_count(p(point)), 2, "point {point}");
    }
    assert_eq!(network.touched_points().count(), 4);

    let validator = ConnectionValidator::default();
    assert!(validator.is_valid(&network));
    assert!(validator.validate(&network).is_valid());
}

/// Breaking the loop leaves two dead ends and nothing worse.
#[test]
fn test_broken_cycle_warns() {
    let board = four_cycle().without_tile(4).unwrap();
    let network = PathCalculator::default().calculate(&board);
    let result = ConnectionValidator::default().validate(&network);

    assert!(!result.is_valid());
    assert!(!result.has_errors());
    let dead_ends: Vec<PointId> = result
        .with_severity(Severity::Warning)
        .map(|e| e.point)
        .collect();
    assert_eq!(dead_ends, vec![p(4), p(17)]);
}

/// Tiles on the rim may end on entity points without warnings.
#[test]
fn test_entity_to_entity_curve_is_valid() {
    let board = place(Board::empty(), 0, TileType::Curve, 2);
    let network = PathCalculator::default().calculate(&board);

    assert!(network.are_connected(p(0), p(12)));
    assert!(ConnectionValidator::default().is_valid(&network));
}

/// Branching at an entity point is an error.
#[test]
fn test_entity_branch_is_error() {
    let mut network = PathNetwork::new();
    network.connect_points(&[p(0), p(3)]);
    network.connect_points(&[p(0), p(13)]);

    let result = ConnectionValidator::default().validate(&network);
    assert!(result.has_errors());
    assert_eq!(result.entries()[0].issue, DegreeIssue::EntityBranch { touches: 2 });
}

/// Three sides ending on an entity point is still a branch error.
#[test]
fn test_entity_three_touches_is_error() {
    let mut network = PathNetwork::new();
    for other in [3, 13, 4] {
        network.connect_points(&[p(0), p(other)]);
    }
    assert_eq!(network.touch_count(p(0)), 3);

    let result = ConnectionValidator::default().validate(&network);
    assert!(result.has_errors());
    let errors: Vec<_> = result.with_severity(Severity::Error).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].point, p(0));
    assert_eq!(errors[0].issue, DegreeIssue::EntityBranch { touches: 3 });
    assert_eq!(result.with_severity(Severity::Warning).count(), 3);
}

/// Three sides meeting at a junction is an error.
#[test]
fn test_over_connected_junction_is_error() {
    let mut network = PathNetwork::new();
    for other in [3, 4, 17] {
        network.connect_points(&[p(13), p(other)]);
    }

    let result = ConnectionValidator::default().validate(&network);
    let errors: Vec<_> = result.with_severity(Severity::Error).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].point, p(13));
    assert_eq!(errors[0].issue, DegreeIssue::OverConnected { touches: 3 });
}

// =============================================================================
// Disjoint Set Tests
// =============================================================================

#[test]
fn test_disjoint_set_reset() {
    let mut sets = DisjointSet::new(6);
    sets.union(0, 1);
    sets.union(2, 3);
    sets.union(1, 3);
    assert_eq!(sets.count_sets(), 3);
    assert!(sets.connected(0, 2));

    sets.reset();
    assert_eq!(sets.count_sets(), 6);
    assert!(!sets.connected(0, 2));
}

#[test]
#[should_panic(expected = "element 24 out of range")]
fn test_disjoint_set_rejects_out_of_range() {
    let mut sets = DisjointSet::new(24);
    sets.find(24);
}
