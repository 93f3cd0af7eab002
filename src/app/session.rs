use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use tracing::{debug, info};

use crate::app::collisions::{find_collision, Collision};
use crate::app::fruit::random_open_cell;
use crate::app::maze::{Maze, MazeError};
use crate::app::snake::Snake;
use crate::basic::{Dir, GridDim, GridPoint};

/// Reported once per lost game, before the session resets
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameOver {
    pub score: u32,
    pub cause: Collision,
}

/// Receives the final score while the session is stopped,
/// the session restarts as soon as this returns
pub trait GameOverListener {
    fn game_over(&mut self, report: GameOver);
}

impl<F: FnMut(GameOver)> GameOverListener for F {
    fn game_over(&mut self, report: GameOver) {
        self(report)
    }
}

/// What a single call to [`Session::tick`] did
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tick {
    /// The session was not running
    Idle,
    Moved,
    /// The snake ate the fruit and grew by one
    Ate,
    /// The snake crashed, the session has already been reset
    GameOver(GameOver),
}

/// All gameplay state of one player, independent of any window
pub struct Session<R: Rng = ThreadRng> {
    maze: Maze,
    board_dim: GridDim,

    start_pos: GridPoint,
    start_dir: Dir,

    snake: Snake,
    dir: Dir,
    fruit: GridPoint,
    score: u32,
    running: bool,

    rng: R,
}

impl Session {
    pub fn new(maze: Maze, board_dim: GridDim) -> Result<Self, MazeError> {
        Self::with_rng(maze, board_dim, thread_rng())
    }
}

impl<R: Rng> Session<R> {
    pub const START_POS: GridPoint = GridPoint { h: 1, v: 1 };
    pub const START_DIR: Dir = Dir::R;

    pub fn with_rng(maze: Maze, board_dim: GridDim, rng: R) -> Result<Self, MazeError> {
        if maze.open_cells_within(board_dim).next().is_none() {
            return Err(MazeError::NoOpenCells);
        }

        let mut session = Self {
            maze,
            board_dim,

            start_pos: Self::START_POS,
            start_dir: Self::START_DIR,

            // overwritten by initialize()
            snake: Snake::new(Self::START_POS),
            dir: Self::START_DIR,
            fruit: Self::START_POS,
            score: 0,
            running: false,

            rng,
        };
        session.check_start()?;
        session.initialize();
        Ok(session)
    }

    fn check_start(&self) -> Result<(), MazeError> {
        if !self.board_dim.contains(self.start_pos) || self.maze.is_wall(self.start_pos) {
            return Err(MazeError::StartIsWall { start: self.start_pos });
        }
        Ok(())
    }

    pub fn initialize(&mut self) {
        self.snake = Snake::new(self.start_pos);
        self.dir = self.start_dir;
        self.score = 0;
        self.running = true;
        // keep the fresh snake from starting on top of the fruit
        self.place_fruit(self.start_pos);
    }

    fn place_fruit(&mut self, avoid: GridPoint) {
        self.fruit = random_open_cell(&self.maze, self.board_dim, Some(avoid), &mut self.rng);
    }

    /// Takes effect on the next tick, a direct reversal is ignored
    pub fn set_direction(&mut self, dir: Dir) {
        if !dir.is_opposite(self.dir) {
            self.dir = dir;
        }
    }

    pub fn tick(&mut self, listener: &mut impl GameOverListener) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        let ate = self.snake.next_head(self.dir) == self.fruit;
        self.snake.advance(self.dir, ate);

        if let Some(cause) = find_collision(&self.snake, &self.maze, self.board_dim) {
            let report = GameOver { score: self.score, cause };
            info!(score = report.score, cause = ?report.cause, "game over");

            self.running = false;
            listener.game_over(report);
            self.initialize();
            return Tick::GameOver(report);
        }

        if ate {
            self.score += 1;
            // the head is on the old fruit
            self.place_fruit(self.fruit);
            debug!(score = self.score, len = self.snake.len(), fruit = ?self.fruit, "ate fruit");
            Tick::Ate
        } else {
            Tick::Moved
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn fruit(&self) -> GridPoint {
        self.fruit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }
}

#[cfg(test)]
impl<R: Rng> Session<R> {
    /// Change where the snake appears after every (re)start,
    /// the session is re-initialized immediately
    pub(crate) fn start_at(mut self, pos: GridPoint, dir: Dir) -> Result<Self, MazeError> {
        self.start_pos = pos;
        self.start_dir = dir;
        self.check_start()?;
        self.initialize();
        Ok(self)
    }

    pub(crate) fn board_dim(&self) -> GridDim {
        self.board_dim
    }

    pub(crate) fn set_fruit(&mut self, fruit: GridPoint) {
        self.fruit = fruit;
    }

    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}
