use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder};
use ggez::Context;

use crate::app::maze::Maze;
use crate::app::palette::Palette;
use crate::app::snake::Snake;
use crate::basic::{GridPoint, Point};
use crate::error::{ErrorConversion, Result};

fn cells_mesh(
    cells: impl Iterator<Item = GridPoint>,
    unit_size: f32,
    color: Color,
    ctx: &Context,
) -> Result<Option<Mesh>> {
    let mut builder = MeshBuilder::new();
    let mut empty = true;
    for cell in cells {
        let rect = cell.to_point(unit_size).rect(Point::square(unit_size));
        builder.rectangle(DrawMode::fill(), rect, color)?;
        empty = false;
    }

    // an empty mesh can't be uploaded
    if empty {
        return Ok(None);
    }
    Ok(Some(Mesh::from_data(ctx, builder.build())))
}

/// Filled wall cells, None if the maze has no walls.
/// The maze never changes so this is only built once.
pub fn maze_mesh(
    maze: &Maze,
    unit_size: f32,
    palette: &Palette,
    ctx: &Context,
) -> Result<Option<Mesh>> {
    cells_mesh(maze.walls(), unit_size, palette.wall_color, ctx).with_trace_step("maze_mesh")
}

pub fn snake_mesh(
    snake: &Snake,
    unit_size: f32,
    palette: &Palette,
    ctx: &Context,
) -> Result<Option<Mesh>> {
    cells_mesh(snake.segments(), unit_size, palette.snake_color, ctx).with_trace_step("snake_mesh")
}

pub fn fruit_mesh(
    fruit: GridPoint,
    unit_size: f32,
    palette: &Palette,
    ctx: &Context,
) -> Result<Option<Mesh>> {
    cells_mesh(std::iter::once(fruit), unit_size, palette.fruit_color, ctx)
        .with_trace_step("fruit_mesh")
}
