use crate::app::maze::Maze;
use crate::app::snake::Snake;
use crate::basic::GridDim;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Collision {
    /// Head left the board
    OutOfBounds,
    /// Head ran into its own body
    Itself { segment_index: usize },
    /// Head entered a wall cell of the maze
    Wall,
}

/// Checks the head of the snake against the board limits, the rest
/// of its body, and the maze. Any of them ends the game, the order in
/// which they are checked only decides which one is reported.
pub fn find_collision(snake: &Snake, maze: &Maze, board_dim: GridDim) -> Option<Collision> {
    let head = snake.head();

    if !board_dim.contains(head) {
        return Some(Collision::OutOfBounds);
    }

    if let Some(segment_index) = snake.segments().skip(1).position(|seg| seg == head) {
        return Some(Collision::Itself { segment_index: segment_index + 1 });
    }

    if maze.is_wall(head) {
        return Some(Collision::Wall);
    }

    None
}
