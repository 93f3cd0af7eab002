use crate::basic::{GridDim, Point};
use std::time::Duration;

pub struct Prefs {
    /// Size of the window in pixels
    pub window_dim: Point,
    /// Edge length of a cell in pixels
    pub unit_size: f32,
    pub tick_interval: Duration,

    pub score_font_size: f32,
    pub message_font_size: f32,
    pub message_duration: Duration,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            window_dim: Point { x: 1920., y: 1080. },
            unit_size: 69.,
            tick_interval: Duration::from_millis(500),

            score_font_size: 20.,
            message_font_size: 50.,
            message_duration: Duration::from_secs(2),
        }
    }
}

impl Prefs {
    /// Number of whole cells that fit in the window
    pub fn board_dim(&self) -> GridDim {
        GridDim {
            h: (self.window_dim.x / self.unit_size) as isize,
            v: (self.window_dim.y / self.unit_size) as isize,
        }
    }
}
