use crate::basic::Point;
use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextAlign, TextLayout};
use ggez::Context;
use std::time::{Duration, Instant};

/// Finite number of possible messages
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum MessageID {
    /// Final score, stays until dismissed
    GameOver,
    /// Temporary info when pausing or resuming
    Notification,
}

#[derive(Copy, Clone, Debug)]
pub enum Position {
    TopLeft,
    TopRight,
    Center,
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub h_margin: f32,
    pub v_margin: f32,
    pub font_size: f32,
    pub color: Color,
    // None means unlimited duration
    pub disappear: Option<Instant>,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 20.;

    pub fn new(
        text: String,
        position: Position,
        font_size: f32,
        color: Color,
        duration: Option<Duration>,
    ) -> Self {
        Self {
            text,
            position,
            h_margin: Self::DEFAULT_MARGIN,
            v_margin: Self::DEFAULT_MARGIN,
            font_size,
            color,
            disappear: duration.map(|d| Instant::now() + d),
        }
    }

    pub fn game_over(score: u32, font_size: f32, color: Color) -> Self {
        Self::new(
            format!("Game Over! Your score: {}\nPress space to play again", score),
            Position::Center,
            font_size,
            color,
            None,
        )
    }

    /// Persistent score overlay in the top-left corner
    pub fn score(score: u32, font_size: f32, color: Color) -> Self {
        let mut message = Self::new(format!("Score: {}", score), Position::TopLeft, font_size, color, None);
        message.h_margin = 10.;
        message.v_margin = 10.;
        message
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        matches!(self.disappear, Some(deadline) if deadline <= now)
    }
}

pub struct MessageDrawable {
    pub text: Text,
    pub dest: Point,
    pub color: Color,
}

impl MessageDrawable {
    pub fn draw(&self, canvas: &mut Canvas) {
        let dp = DrawParam::default().dest(self.dest).color(self.color);

        canvas.draw(&self.text, dp)
    }
}

impl Message {
    /// A return value of None signifies that the message has reached
    /// its end of life and should be removed
    pub fn get_drawable(&self, ctx: &Context) -> Option<MessageDrawable> {
        let (width, height) = ctx.gfx.drawable_size();

        let (dest, layout) = match self.position {
            Position::TopLeft => (
                Point { x: self.h_margin, y: self.v_margin },
                TextLayout { h_align: TextAlign::Begin, v_align: TextAlign::Begin },
            ),
            Position::TopRight => (
                Point { x: width - self.h_margin, y: self.v_margin },
                TextLayout { h_align: TextAlign::End, v_align: TextAlign::Begin },
            ),
            Position::Center => (
                Point { x: width / 2., y: height / 2. },
                TextLayout { h_align: TextAlign::Middle, v_align: TextAlign::Middle },
            ),
        };

        // fade out
        let mut color = self.color;
        if let Some(deadline) = self.disappear {
            match deadline.checked_duration_since(Instant::now()) {
                None => return None, // Message has reached its end of life
                Some(time_left) => {
                    let millis = time_left.as_millis();
                    if millis < 200 {
                        // linear fade out
                        color.a = millis as f32 / 200.;
                    }
                }
            }
        }

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size))
            .set_bounds([width - 2. * self.h_margin, height - 2. * self.v_margin])
            .set_layout(layout);

        Some(MessageDrawable { text, dest, color })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_game_over_text() {
        let message = Message::game_over(7, 50., Color::WHITE);
        assert!(message.text.starts_with("Game Over! Your score: 7"));
        assert!(message.disappear.is_none());
        assert!(!message.is_expired(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn test_expiry() {
        let message = Message::new(
            "Paused".to_string(),
            Position::TopRight,
            50.,
            Color::WHITE,
            Some(Duration::from_secs(2)),
        );
        assert!(!message.is_expired(Instant::now()));
        assert!(message.is_expired(Instant::now() + Duration::from_secs(3)));
    }
}
