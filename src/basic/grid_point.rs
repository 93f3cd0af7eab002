use super::dir::Dir;
use crate::basic::Point;
use std::fmt::{Debug, Error, Formatter};

/// A cell on the board, `h` is the column and `v` the row,
/// both counted from the top-left corner
#[derive(Eq, PartialEq, Copy, Clone, Add, Hash)]
pub struct GridPoint {
    pub h: isize,
    pub v: isize,
}

/// Number of columns (`h`) and rows (`v`)
pub type GridDim = GridPoint;

impl GridPoint {
    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let (dh, dv) = dir.delta();
        let dist = dist as isize;
        Self {
            h: self.h + dh * dist,
            v: self.v + dv * dist,
        }
    }

    /// Top-left corner of the cell in pixels
    pub fn to_point(self, unit_size: f32) -> Point {
        Point {
            x: self.h as f32 * unit_size,
            y: self.v as f32 * unit_size,
        }
    }

    /// Treating self as a dimension, whether `point` lies in [0, h) x [0, v)
    pub fn contains(self, point: GridPoint) -> bool {
        (0..self.h).contains(&point.h) && (0..self.v).contains(&point.v)
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.h, self.v)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use Dir::*;

    #[test]
    fn test_translate() {
        let p = GridPoint { h: 1, v: 1 };
        assert_eq!(p.translate(U, 1), GridPoint { h: 1, v: 0 });
        assert_eq!(p.translate(D, 2), GridPoint { h: 1, v: 3 });
        assert_eq!(p.translate(L, 1), GridPoint { h: 0, v: 1 });
        assert_eq!(p.translate(R, 1), GridPoint { h: 2, v: 1 });
        assert_eq!(GridPoint { h: 0, v: 0 }.translate(U, 1), GridPoint { h: 0, v: -1 });
    }

    #[test]
    fn test_contains() {
        let dim = GridDim { h: 27, v: 15 };
        assert!(dim.contains(GridPoint { h: 0, v: 0 }));
        assert!(dim.contains(GridPoint { h: 26, v: 14 }));
        assert!(!dim.contains(GridPoint { h: 27, v: 0 }));
        assert!(!dim.contains(GridPoint { h: 0, v: 15 }));
        assert!(!dim.contains(GridPoint { h: -1, v: 3 }));
        assert!(!dim.contains(GridPoint { h: 3, v: -1 }));
    }

    #[test]
    fn test_to_point() {
        // one step right at 69px per cell
        let p = GridPoint { h: 2, v: 1 }.to_point(69.);
        assert_eq!(p, Point { x: 138., y: 69. });
    }
}
