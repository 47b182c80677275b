//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Cells are addressed on the horizontal `(x, z)` plane. `x` grows to the
//! right and `z` grows away from the viewer; row-major order walks `x` first.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// An integer grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub z: i32,
}

/// Offsets of the Moore neighbourhood, in row-major order.
const MOORE: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Return a coordinate shifted by (dx, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// The eight Moore neighbours, row-major. Not bounds-checked.
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        MOORE.map(|(dx, dz)| self.shift(dx, dz))
    }

    /// Whether `other` is a distinct cell of this cell's Moore neighbourhood.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.z - other.z).abs() <= 1
    }

    /// Whether `other` differs from `self` on both axes by exactly one.
    #[inline]
    pub fn is_diagonal_to(self, other: Coord) -> bool {
        (self.x - other.x).abs() == 1 && (self.z - other.z).abs() == 1
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z.cmp(&other.z).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a grid anchored at the origin: `[0, width) × [0, height)`.
///
/// `Bounds` owns the mapping between coordinates and dense row-major
/// indices, so every component agrees on what index a cell has.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Create bounds of the given size. Negative sizes are clamped to zero.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the bounds hold no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `c` lies inside the bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.z >= 0 && c.z < self.height
    }

    /// Row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.z as usize * self.width as usize + c.x as usize)
    }

    /// Coordinate of a row-major index. The index must be `< len()`.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let w = self.width.max(1) as usize;
        Coord::new((idx % w) as i32, (idx / w) as i32)
    }

    /// In-bounds Moore neighbours of `c`, row-major.
    pub fn neighborhood(self, c: Coord) -> impl Iterator<Item = Coord> {
        c.neighbors_8().into_iter().filter(move |&n| self.contains(n))
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major iterator over the coordinates of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let c = self.bounds.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}
