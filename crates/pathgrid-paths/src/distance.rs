use pathgrid_core::Coord;

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dz = f64::from(a.z - b.z);
    dx.hypot(dz)
}

/// Octile distance: exact 8-connected cost with unit orthogonal and √2
/// diagonal steps on an obstacle-free grid.
#[inline]
pub fn octile(a: Coord, b: Coord) -> f64 {
    let dx = (a.x - b.x).abs();
    let dz = (a.z - b.z).abs();
    let (lo, hi) = if dx < dz { (dx, dz) } else { (dz, dx) };
    f64::from(hi - lo) + f64::from(lo) * std::f64::consts::SQRT_2
}

/// Manhattan (L1) distance.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.z - b.z).abs()
}

/// Chebyshev (L∞) distance.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs().max((a.z - b.z).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    #[test]
    fn unit_steps() {
        let o = Coord::ZERO;
        assert_eq!(euclidean(o, Coord::new(1, 0)), 1.0);
        assert!((euclidean(o, Coord::new(1, 1)) - SQRT_2).abs() < 1e-12);
        assert_eq!(euclidean(o, Coord::new(3, 4)), 5.0);
    }

    #[test]
    fn octile_never_below_euclidean() {
        let o = Coord::ZERO;
        for x in 0..6 {
            for z in 0..6 {
                let c = Coord::new(x, z);
                assert!(octile(o, c) + 1e-12 >= euclidean(o, c));
            }
        }
        assert!((octile(o, Coord::new(2, 3)) - (1.0 + 2.0 * SQRT_2)).abs() < 1e-12);
    }

    #[test]
    fn integer_metrics() {
        let a = Coord::new(1, 5);
        let b = Coord::new(4, 1);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
    }
}
