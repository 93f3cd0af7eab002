use ggez::graphics::Color;

pub struct Palette {
    pub background_color: Color,
    pub wall_color: Color,
    pub snake_color: Color,
    pub fruit_color: Color,
    pub text_color: Color,
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            background_color: Color::BLACK,
            wall_color: Color::WHITE,
            snake_color: Color::GREEN,
            fruit_color: Color::RED,
            text_color: Color::WHITE,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
