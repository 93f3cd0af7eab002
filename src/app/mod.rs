use std::collections::HashMap;
use std::time::Instant;

use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::Context;
use tracing::{debug, info};

use crate::app::control::{Control, State};
use crate::app::keyboard::Keyboard;
use crate::app::maze::Maze;
use crate::app::message::{Message, MessageID, Position};
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::app::session::{GameOver, Session, Tick};
use crate::error::{Error, ErrorConversion, Result};

pub mod collisions;
pub mod control;
pub mod fruit;
pub mod keyboard;
pub mod maze;
pub mod message;
pub mod palette;
pub mod prefs;
pub mod rendering;
pub mod session;
pub mod snake;

/// The window side of the game, drives a [`Session`] from the
/// ggez event loop and draws it
pub struct App {
    session: Session,
    control: Control,
    keyboard: Keyboard,

    prefs: Prefs,
    palette: Palette,

    /// Walls never change, built once
    maze_mesh: Option<Mesh>,
    messages: HashMap<MessageID, Message>,
}

impl App {
    pub fn new(maze: Maze, prefs: Prefs, palette: Palette, ctx: &Context) -> Result<Self> {
        let board_dim = prefs.board_dim();
        info!(
            maze = ?maze.dim(),
            board = ?board_dim,
            unit_size = prefs.unit_size,
            tick_interval = ?prefs.tick_interval,
            "starting session"
        );

        let session = Session::new(maze, board_dim)
            .map_err(Error::from)
            .with_trace_step("App::new")?;
        let maze_mesh = rendering::maze_mesh(session.maze(), prefs.unit_size, &palette, ctx)
            .with_trace_step("App::new")?;

        Ok(Self {
            session,
            control: Control::new(prefs.tick_interval),
            keyboard: Keyboard::default(),

            prefs,
            palette,

            maze_mesh,
            messages: HashMap::new(),
        })
    }

    /// Display a notification message in the top-right
    /// corner with limited duration, overwrite any
    /// previous notification message
    fn display_notification<S: ToString>(&mut self, text: S) {
        self.messages.insert(
            MessageID::Notification,
            Message::new(
                text.to_string(),
                Position::TopRight,
                self.prefs.message_font_size,
                self.palette.text_color,
                Some(self.prefs.message_duration),
            ),
        );
    }

    fn draw_messages(&mut self, canvas: &mut Canvas, ctx: &Context) {
        // remove the ones that have outlived their durations
        let now = Instant::now();
        self.messages.retain(|_, message| !message.is_expired(now));

        let score = Message::score(
            self.session.score(),
            self.prefs.score_font_size,
            self.palette.text_color,
        );
        for message in self.messages.values().chain(Some(&score)) {
            if let Some(drawable) = message.get_drawable(ctx) {
                drawable.draw(canvas);
            }
        }
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, _ctx: &mut Context) -> Result {
        while self.session.is_running() && self.control.can_update() {
            let messages = &mut self.messages;
            let prefs = &self.prefs;
            let palette = &self.palette;
            let mut notify = |report: GameOver| {
                messages.insert(
                    MessageID::GameOver,
                    Message::game_over(report.score, prefs.message_font_size, palette.text_color),
                );
            };

            // the session has already restarted, hold it
            // until the player dismisses the message
            if let Tick::GameOver(_) = self.session.tick(&mut notify) {
                self.control.game_over();
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);
        let unit_size = self.prefs.unit_size;
        let draw_param = DrawParam::default();

        if let Some(mesh) = &self.maze_mesh {
            canvas.draw(mesh, draw_param);
        }
        if let Some(mesh) = rendering::snake_mesh(self.session.snake(), unit_size, &self.palette, ctx)? {
            canvas.draw(&mesh, draw_param);
        }
        if let Some(mesh) = rendering::fruit_mesh(self.session.fruit(), unit_size, &self.palette, ctx)? {
            canvas.draw(&mesh, draw_param);
        }

        self.draw_messages(&mut canvas, ctx);

        canvas
            .finish(ctx)
            .map_err(Error::from)
            .with_trace_step("App::draw")
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        let Some(key) = input.keycode else {
            return Ok(());
        };

        match (self.control.state(), key) {
            (_, KeyCode::Escape) => ctx.request_quit(),
            (State::GameOver, KeyCode::Space | KeyCode::Return) => {
                self.messages.remove(&MessageID::GameOver);
                self.control.play();
                debug!("game over dismissed");
            }
            (State::GameOver, _) => {}
            (State::Playing, KeyCode::Space) => {
                self.control.pause();
                self.display_notification("Paused");
                debug!("paused");
            }
            (State::Paused, KeyCode::Space) => {
                self.control.play();
                self.display_notification("Resumed");
                debug!("resumed");
            }
            (State::Paused, _) => {}
            (State::Playing, k) => {
                if let Some(dir) = self.keyboard.dir_for(k) {
                    self.session.set_direction(dir);
                    debug!(requested = ?dir, dir = ?self.session.dir(), "direction");
                }
            }
        }

        Ok(())
    }
}
