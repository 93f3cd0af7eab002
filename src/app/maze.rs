use crate::basic::{GridDim, GridPoint};
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// The layout of the original game, 10 columns by 12 rows
pub const DEFAULT_LAYOUT: &str = "
    ##########
    #........#
    #.######.#
    #.#....#.#
    #.#.##.#.#
    #...#....#
    #.#...#..#
    #.######.#
    #........#
    ##.##.####
    #........#
    ##########
";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Wall,
    Open,
}

impl Cell {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Open),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum MazeError {
    Empty,
    Ragged { row: usize, expected: usize, found: usize },
    UnknownCell { row: usize, col: usize, found: char },
    NoOpenCells,
    StartIsWall { start: GridPoint },
}

impl Display for MazeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use MazeError::*;
        match self {
            Empty => write!(f, "maze layout has no rows"),
            Ragged { row, expected, found } => write!(
                f,
                "maze row {} has {} cells, expected {}",
                row, found, expected
            ),
            UnknownCell { row, col, found } => write!(
                f,
                "unknown maze cell {:?} at row {}, column {} (expected '#' or '.')",
                found, row, col
            ),
            NoOpenCells => write!(f, "maze has no open cells within the board"),
            StartIsWall { start } => write!(f, "starting cell {:?} is not open", start),
        }
    }
}

/// Immutable wall/open grid, stored row-major
#[derive(Clone, Debug)]
pub struct Maze {
    dim: GridDim,
    cells: Vec<Cell>,
}

impl Maze {
    /// Parse a layout made of rows of `#` (wall) and `.` (open),
    /// surrounding whitespace and blank lines are ignored
    pub fn parse(layout: &str) -> Result<Self, MazeError> {
        let rows = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect_vec();

        let width = match rows.first() {
            Some(first) => first.chars().count(),
            None => return Err(MazeError::Empty),
        };

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::Ragged { row, expected: width, found });
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or(MazeError::UnknownCell { row, col, found: c })?;
                cells.push(cell);
            }
        }

        if !cells.contains(&Cell::Open) {
            return Err(MazeError::NoOpenCells);
        }

        Ok(Self {
            dim: GridDim { h: width as isize, v: rows.len() as isize },
            cells,
        })
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    /// Cells beyond the layout are solid
    pub fn cell(&self, point: GridPoint) -> Cell {
        if self.dim.contains(point) {
            self.cells[(point.v * self.dim.h + point.h) as usize]
        } else {
            Cell::Wall
        }
    }

    pub fn is_wall(&self, point: GridPoint) -> bool {
        self.cell(point) == Cell::Wall
    }

    pub fn is_open(&self, point: GridPoint) -> bool {
        self.cell(point) == Cell::Open
    }

    fn point_at(&self, idx: usize) -> GridPoint {
        GridPoint {
            h: idx as isize % self.dim.h,
            v: idx as isize / self.dim.h,
        }
    }

    /// All wall cells of the layout in row-major order
    pub fn walls(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.cells
            .iter()
            .positions(|cell| *cell == Cell::Wall)
            .map(|idx| self.point_at(idx))
    }

    /// Open cells that also lie inside the board
    pub fn open_cells_within(&self, board_dim: GridDim) -> impl Iterator<Item = GridPoint> + '_ {
        self.cells
            .iter()
            .positions(|cell| *cell == Cell::Open)
            .map(|idx| self.point_at(idx))
            .filter(move |point| board_dim.contains(*point))
    }
}
