use crate::app::maze::Maze;
use crate::basic::{GridDim, GridPoint};
use rand::Rng;

/// Uniformly sample cells of the board until one is open in the maze.
///
/// The fruit may land on the snake. `avoid` is skipped as well, unless it
/// is the only open cell, so an eaten fruit never reappears in place.
///
/// Terminates as long as the maze has an open cell inside the board,
/// which `Session` checks on construction.
pub fn random_open_cell(
    maze: &Maze,
    board_dim: GridDim,
    avoid: Option<GridPoint>,
    rng: &mut impl Rng,
) -> GridPoint {
    let avoid = avoid.filter(|_| maze.open_cells_within(board_dim).nth(1).is_some());

    loop {
        let candidate = GridPoint {
            h: rng.gen_range(0..board_dim.h),
            v: rng.gen_range(0..board_dim.v),
        };
        if maze.is_open(candidate) && Some(candidate) != avoid {
            return candidate;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::app::maze::DEFAULT_LAYOUT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_always_open_and_within_board() {
        let maze = Maze::parse(DEFAULT_LAYOUT).unwrap();
        // the board is wider than the maze, as in the default window
        let board = GridDim { h: 27, v: 15 };
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            let fruit = random_open_cell(&maze, board, None, &mut rng);
            assert!(board.contains(fruit), "{:?}", fruit);
            assert!(maze.is_open(fruit), "{:?}", fruit);
        }
    }

    #[test]
    fn test_avoid() {
        let maze = Maze::parse("#..#").unwrap();
        let board = maze.dim();
        let avoid = GridPoint { h: 1, v: 0 };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert_eq!(random_open_cell(&maze, board, Some(avoid), &mut rng), GridPoint { h: 2, v: 0 });
        }
    }

    #[test]
    fn test_avoid_only_open_cell() {
        let maze = Maze::parse("#.##").unwrap();
        let only = GridPoint { h: 1, v: 0 };
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(random_open_cell(&maze, maze.dim(), Some(only), &mut rng), only);
    }

    #[test]
    fn test_board_smaller_than_maze() {
        // the open cell at h = 3 is outside the board and must never be chosen
        let maze = Maze::parse(".#..").unwrap();
        let board = GridDim { h: 2, v: 1 };
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            assert_eq!(random_open_cell(&maze, board, None, &mut rng), GridPoint { h: 0, v: 0 });
        }
    }
}
