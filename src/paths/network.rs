//! Connectivity and degree of the 24 connection points.
//!
//! A [`PathNetwork`] pairs a [`DisjointSet`] over the points with a touch
//! count per point. It is built by replaying tile connection groups through
//! [`PathNetwork::connect_points`] and is read-only once it is handed to a
//! [`GameState`](crate::core::GameState).

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{DisjointSet, PointId, POINT_COUNT};

/// Connectivity classes and touch counts for every connection point.
///
/// ```
/// use tile_link::core::PointId;
/// use tile_link::paths::PathNetwork;
///
/// let p = |i| PointId::new(i).unwrap();
/// let mut network = PathNetwork::new();
/// network.connect_points(&[p(3), p(13)]);
///
/// assert!(network.are_connected(p(3), p(13)));
/// assert_eq!(network.touch_count(p(3)), 1);
/// assert_eq!(network.touch_count(p(0)), 0);
/// ```
#[derive(Clone, Debug)]
pub struct PathNetwork {
    sets: DisjointSet,
    touches: [u32; POINT_COUNT],
}

impl PathNetwork {
    /// A network with every point alone and untouched.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sets: DisjointSet::new(POINT_COUNT),
            touches: [0; POINT_COUNT],
        }
    }

    /// Record one tile segment joining `points`.
    ///
    /// Fewer than two points is a no-op. Otherwise every listed point gains
    /// one touch and all of them join the first point's class. Touches
    /// accumulate across calls even when the points are already joined.
    pub fn connect_points(&mut self, points: &[PointId]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        for point in points {
            self.touches[point.index()] += 1;
        }
        for point in rest {
            self.sets.union(first.index(), point.index());
        }
    }

    /// Representative point of `point`'s class.
    ///
    /// Two points share a path id iff they are connected.
    #[must_use]
    pub fn path_id(&self, point: PointId) -> PointId {
        PointId::from_raw(self.sets.root(point.index()) as u8)
    }

    /// Number of tile sides terminating at `point`.
    #[must_use]
    pub fn touch_count(&self, point: PointId) -> u32 {
        self.touches[point.index()]
    }

    /// Whether `a` and `b` are in the same class.
    #[must_use]
    pub fn are_connected(&self, a: PointId, b: PointId) -> bool {
        self.sets.connected(a.index(), b.index())
    }

    /// Every point in `point`'s class, ascending.
    #[must_use]
    pub fn points_on_path(&self, point: PointId) -> Vec<PointId> {
        let id = self.path_id(point);
        PointId::all().filter(|p| self.path_id(*p) == id).collect()
    }

    /// Every class with at least two points, each ascending, ordered by
    /// their smallest point.
    #[must_use]
    pub fn paths(&self) -> Vec<Vec<PointId>> {
        let mut by_root: FxHashMap<PointId, SmallVec<[PointId; 8]>> = FxHashMap::default();
        for point in PointId::all() {
            by_root.entry(self.path_id(point)).or_default().push(point);
        }

        let mut paths: Vec<Vec<PointId>> = by_root
            .into_values()
            .filter(|members| members.len() >= 2)
            .map(SmallVec::into_vec)
            .collect();
        paths.sort_unstable_by_key(|members| members[0]);
        paths
    }

    /// Number of classes with at least two points.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths().len()
    }

    /// Number of classes, singletons included.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.sets.count_sets()
    }

    /// Points with a non-zero touch count.
    pub fn touched_points(&self) -> impl Iterator<Item = PointId> + '_ {
        PointId::all().filter(|p| self.touch_count(*p) > 0)
    }

    /// Smallest point in each point's class, used for structural equality.
    fn canonical_classes(&self) -> [u8; POINT_COUNT] {
        let mut smallest: FxHashMap<PointId, u8> = FxHashMap::default();
        let mut labels = [0u8; POINT_COUNT];
        for point in PointId::all() {
            let label = *smallest.entry(self.path_id(point)).or_insert(point.index() as u8);
            labels[point.index()] = label;
        }
        labels
    }
}

impl Default for PathNetwork {
    fn default() -> Self {
        Self::new()
    }
}

/// Networks are equal when they have the same classes and touch counts,
/// whatever shape their internal forests have.
impl PartialEq for PathNetwork {
    fn eq(&self, other: &Self) -> bool {
        self.touches == other.touches && self.canonical_classes() == other.canonical_classes()
    }
}

impl Eq for PathNetwork {}
