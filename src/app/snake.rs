use crate::basic::{Dir, GridPoint};
use std::collections::VecDeque;

/// Cells occupied by the snake, head first
#[derive(Clone, Debug)]
pub struct Snake {
    segments: VecDeque<GridPoint>,
}

impl Snake {
    pub fn new(pos: GridPoint) -> Self {
        Self { segments: VecDeque::from([pos]) }
    }

    pub fn head(&self) -> GridPoint {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.segments.iter().copied()
    }

    /// The cell the head would move into
    pub fn next_head(&self, dir: Dir) -> GridPoint {
        self.head().translate(dir, 1)
    }

    /// Move one cell in `dir`, the tail stays in place when growing
    pub fn advance(&mut self, dir: Dir, grow: bool) {
        let new_head = self.next_head(dir);
        self.segments.push_front(new_head);
        if !grow {
            self.segments.pop_back();
        }
    }
}

impl FromIterator<GridPoint> for Snake {
    /// Panics if the iterator is empty
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        let segments: VecDeque<_> = iter.into_iter().collect();
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Self { segments }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn p(h: isize, v: isize) -> GridPoint {
        GridPoint { h, v }
    }

    #[test]
    fn test_advance_translates() {
        let mut snake: Snake = [p(3, 1), p(2, 1), p(1, 1)].into_iter().collect();
        snake.advance(Dir::D, false);
        assert_eq!(snake.segments().collect_vec(), vec![p(3, 2), p(3, 1), p(2, 1)]);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_advance_grows() {
        let mut snake = Snake::new(p(1, 1));
        snake.advance(Dir::R, true);
        assert_eq!(snake.segments().collect_vec(), vec![p(2, 1), p(1, 1)]);
        snake.advance(Dir::R, false);
        assert_eq!(snake.segments().collect_vec(), vec![p(3, 1), p(2, 1)]);
    }
}
