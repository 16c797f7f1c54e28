//! Tile catalog: tile types, their rotation limits and their side wiring.
//!
//! Each [`TileType`] wires some of its four sides together in
//! *connection groups*. A group of sides is one path segment: every side in
//! it is reachable from every other. Rotating a tile by `r` quarter turns
//! clockwise shifts every side index by `r mod 4`.
//!
//! | Type | Base groups | Rotations |
//! |---|---|---|
//! | `Curve` | `{E, S}` | 4 |
//! | `TwoCurves` | `{E, S}`, `{W, N}` | 2 |
//! | `Intersection` | `{E, S, W}` | 4 |
//! | `XIntersection` | `{N, E, S, W}` | 1 |
//! | `Bridge` | `{N, S}`, `{E, W}` | 2 |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SIDE_COUNT;
use crate::error::{Result, RulesError};

/// A tile side. Indices run clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Side {
    /// All sides in index order.
    pub const ALL: [Side; SIDE_COUNT] = [Side::North, Side::East, Side::South, Side::West];

    /// Side index (0=N, 1=E, 2=S, 3=W).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The side this one lands on after `rotation` clockwise quarter turns.
    #[must_use]
    pub const fn rotated(self, rotation: u8) -> Side {
        Side::ALL[(self as usize + rotation as usize) % SIDE_COUNT]
    }
}

/// Sides wired together inside one tile.
pub type ConnectionGroup = SmallVec<[Side; SIDE_COUNT]>;

/// All connection groups of a placed tile. No tile has more than two.
pub type Connections = SmallVec<[ConnectionGroup; 2]>;

use Side::{East, North, South, West};

/// The kinds of tile in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// A single quarter-circle joining two adjacent sides.
    Curve,
    /// Two opposed quarter-circles.
    TwoCurves,
    /// A T-junction joining three sides.
    Intersection,
    /// A cross joining all four sides.
    XIntersection,
    /// Two straight segments crossing without joining.
    Bridge,
}

impl TileType {
    /// Every tile type.
    pub const ALL: [TileType; 5] = [
        TileType::Curve,
        TileType::TwoCurves,
        TileType::Intersection,
        TileType::XIntersection,
        TileType::Bridge,
    ];

    /// Number of distinct rotations; valid rotations are `0..max_rotations()`.
    #[must_use]
    pub const fn max_rotations(self) -> u8 {
        match self {
            TileType::Curve => 4,
            TileType::TwoCurves => 2,
            TileType::Intersection => 4,
            TileType::XIntersection => 1,
            TileType::Bridge => 2,
        }
    }

    /// Connection groups at rotation 0.
    #[must_use]
    pub const fn base_connections(self) -> &'static [&'static [Side]] {
        match self {
            TileType::Curve => &[&[East, South]],
            TileType::TwoCurves => &[&[East, South], &[West, North]],
            TileType::Intersection => &[&[East, South, West]],
            TileType::XIntersection => &[&[North, East, South, West]],
            TileType::Bridge => &[&[North, South], &[East, West]],
        }
    }

    /// Connection groups after `rotation` quarter turns.
    ///
    /// Pure function of `(self, rotation)`; the rotation is taken mod 4 and
    /// is not checked against [`Self::max_rotations`].
    #[must_use]
    pub fn connections(self, rotation: u8) -> Connections {
        self.base_connections()
            .iter()
            .map(|group| group.iter().map(|side| side.rotated(rotation)).collect())
            .collect()
    }

    /// Single-letter code used when rendering boards.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            TileType::Curve => 'C',
            TileType::TwoCurves => 'D',
            TileType::Intersection => 'T',
            TileType::XIntersection => 'X',
            TileType::Bridge => 'B',
        }
    }
}

/// An immutable (type, rotation) pair.
///
/// ```
/// use tile_link::tiles::{Side, Tile, TileType};
///
/// let tile = Tile::new(TileType::Curve, 1).unwrap();
/// assert_eq!(tile.connections()[0].as_slice(), &[Side::South, Side::West]);
/// assert!(Tile::new(TileType::Bridge, 2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileFields")]
pub struct Tile {
    kind: TileType,
    rotation: u8,
}

#[derive(Deserialize)]
struct TileFields {
    kind: TileType,
    rotation: u8,
}

impl TryFrom<TileFields> for Tile {
    type Error = RulesError;

    fn try_from(fields: TileFields) -> Result<Self> {
        Self::new(fields.kind, fields.rotation)
    }
}

impl Tile {
    /// Create a tile, failing if `rotation >= kind.max_rotations()`.
    pub fn new(kind: TileType, rotation: u8) -> Result<Self> {
        let max = kind.max_rotations();
        if rotation >= max {
            return Err(RulesError::InvalidRotation { rotation, max });
        }
        Ok(Self { kind, rotation })
    }

    /// A tile at rotation 0.
    #[must_use]
    pub const fn unrotated(kind: TileType) -> Self {
        Self { kind, rotation: 0 }
    }

    /// Tile type.
    #[must_use]
    pub const fn kind(self) -> TileType {
        self.kind
    }

    /// Current rotation.
    #[must_use]
    pub const fn rotation(self) -> u8 {
        self.rotation
    }

    /// Rotation limit of this tile's type.
    #[must_use]
    pub const fn max_rotations(self) -> u8 {
        self.kind.max_rotations()
    }

    /// The same tile at another rotation.
    pub fn with_rotation(self, rotation: u8) -> Result<Self> {
        Self::new(self.kind, rotation)
    }

    /// The same tile turned one step further, wrapping at the limit.
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            kind: self.kind,
            rotation: (self.rotation + 1) % self.kind.max_rotations(),
        }
    }

    /// Connection groups at the current rotation.
    #[must_use]
    pub fn connections(self) -> Connections {
        self.kind.connections(self.rotation)
    }

    /// Every side this tile routes a path to.
    #[must_use]
    pub fn sides(self) -> ConnectionGroup {
        let mut sides: ConnectionGroup = self.connections().into_iter().flatten().collect();
        sides.sort_unstable();
        sides
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.letter(), self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides(groups: &Connections) -> Vec<Vec<Side>> {
        groups.iter().map(|g| g.to_vec()).collect()
    }

    #[test]
    fn test_side_rotation_wraps() {
        assert_eq!(North.rotated(1), East);
        assert_eq!(West.rotated(1), North);
        assert_eq!(South.rotated(3), East);
        assert_eq!(East.rotated(4), East);
    }

    #[test]
    fn test_rotation_limits() {
        assert_eq!(TileType::Curve.max_rotations(), 4);
        assert_eq!(TileType::TwoCurves.max_rotations(), 2);
        assert_eq!(TileType::Intersection.max_rotations(), 4);
        assert_eq!(TileType::XIntersection.max_rotations(), 1);
        assert_eq!(TileType::Bridge.max_rotations(), 2);
    }

    #[test]
    fn test_curve_rotations() {
        assert_eq!(sides(&TileType::Curve.connections(0)), vec![vec![East, South]]);
        assert_eq!(sides(&TileType::Curve.connections(1)), vec![vec![South, West]]);
        assert_eq!(sides(&TileType::Curve.connections(2)), vec![vec![West, North]]);
        assert_eq!(sides(&TileType::Curve.connections(3)), vec![vec![North, East]]);
    }

    #[test]
    fn test_two_curves_half_turn_is_symmetric() {
        let mut base = sides(&TileType::TwoCurves.connections(0));
        let mut turned = sides(&TileType::TwoCurves.connections(2));
        for group in base.iter_mut().chain(turned.iter_mut()) {
            group.sort();
        }
        base.sort();
        turned.sort();
        assert_eq!(base, turned);
    }

    #[test]
    fn test_bridge_keeps_segments_apart() {
        let groups = TileType::Bridge.connections(1);
        assert_eq!(groups.len(), 2);
        assert_eq!(sides(&groups), vec![vec![East, West], vec![South, North]]);
    }

    #[test]
    fn test_tile_new_checks_rotation() {
        assert!(Tile::new(TileType::XIntersection, 0).is_ok());
        assert_eq!(
            Tile::new(TileType::XIntersection, 1),
            Err(RulesError::InvalidRotation { rotation: 1, max: 1 })
        );
        assert!(Tile::new(TileType::Curve, 3).is_ok());
    }

    #[test]
    fn test_with_rotation_leaves_original() {
        let tile = Tile::unrotated(TileType::Intersection);
        let turned = tile.with_rotation(2).unwrap();
        assert_eq!(tile.rotation(), 0);
        assert_eq!(turned.rotation(), 2);
        assert_eq!(turned.kind(), TileType::Intersection);
    }

    #[test]
    fn test_rotated_wraps() {
        let tile = Tile::new(TileType::Bridge, 1).unwrap();
        assert_eq!(tile.rotated().rotation(), 0);
        assert_eq!(Tile::unrotated(TileType::XIntersection).rotated().rotation(), 0);
    }

    #[test]
    fn test_sides() {
        let tile = Tile::new(TileType::Intersection, 1).unwrap();
        assert_eq!(tile.sides().as_slice(), &[North, South, West]);
    }

    #[test]
    fn test_deserialize_checks_rotation() {
        let tile: Tile = serde_json::from_str(r#"{"kind":"Curve","rotation":3}"#).unwrap();
        assert_eq!(tile, Tile::new(TileType::Curve, 3).unwrap());
        assert!(serde_json::from_str::<Tile>(r#"{"kind":"Bridge","rotation":2}"#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new(TileType::TwoCurves, 1).unwrap().to_string(), "D1");
        assert_eq!(Tile::unrotated(TileType::Curve).to_string(), "C0");
    }
}
