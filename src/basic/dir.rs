use std::ops::{Add, Neg};

use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self + 2
    }
}

impl Add<u8> for Dir {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs % 4)
    }
}

impl Dir {
    // clockwise order starting from U
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// Offset of one step in this direction as (dh, dv),
    /// v grows downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (0, -1),
            R => (1, 0),
            D => (0, 1),
            L => (-1, 0),
        }
    }

    pub fn is_opposite(self, other: Self) -> bool {
        other == -self
    }
}

#[test]
fn test_dir_math() {
    let test_plus = [(U, 1, R), (U, 2, D), (R, 3, U), (D, 4, D)];

    for &(start, add, expect) in &test_plus {
        assert_eq!(start + add, expect);
    }

    for dir in Dir::iter() {
        assert_eq!(-(-dir), dir);
        assert_ne!(-dir, dir);
    }
}

#[test]
fn test_is_opposite() {
    for (a, b, opposite) in [
        (U, D, true),
        (D, U, true),
        (L, R, true),
        (R, L, true),
        (U, L, false),
        (U, R, false),
        (U, U, false),
        (L, D, false),
    ] {
        assert_eq!(a.is_opposite(b), opposite, "{:?} <-> {:?}", a, b);
    }
}
