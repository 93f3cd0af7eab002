#[macro_use]
extern crate derive_more;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::maze::{Maze, DEFAULT_LAYOUT};
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::app::App;
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod basic;
mod error;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "maze_snake=info".into()))
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result {
    let prefs = Prefs::default();

    let wm = WindowMode::default()
        .dimensions(prefs.window_dim.x, prefs.window_dim.y)
        .resizable(false);
    let ws = WindowSetup::default().title("Maze Snake");

    let (ctx, event_loop) = ContextBuilder::new("maze_snake", "maze_snake")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(Error::from)
        .with_trace_step("ContextBuilder::build")?;

    let maze = Maze::parse(DEFAULT_LAYOUT)
        .map_err(Error::from)
        .with_trace_step("Maze::parse")?;
    let app = App::new(maze, prefs, Palette::default(), &ctx)?;

    event::run(ctx, event_loop, app)
}
