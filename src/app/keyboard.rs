use crate::basic::Dir;
use ggez::input::keyboard::KeyCode;

/// One key per direction
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

impl Controls {
    pub const ARROWS: Self = Self {
        u: KeyCode::Up,
        d: KeyCode::Down,
        l: KeyCode::Left,
        r: KeyCode::Right,
    };

    pub const WASD: Self = Self {
        u: KeyCode::W,
        d: KeyCode::S,
        l: KeyCode::A,
        r: KeyCode::D,
    };

    pub fn dir_for(&self, key: KeyCode) -> Option<Dir> {
        match key {
            k if k == self.u => Some(Dir::U),
            k if k == self.d => Some(Dir::D),
            k if k == self.l => Some(Dir::L),
            k if k == self.r => Some(Dir::R),
            _ => None,
        }
    }
}

/// Translates key presses into direction requests, the first
/// matching set of controls wins
pub struct Keyboard {
    controls: Vec<Controls>,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new(vec![Controls::ARROWS, Controls::WASD])
    }
}

impl Keyboard {
    pub fn new(controls: Vec<Controls>) -> Self {
        Self { controls }
    }

    pub fn dir_for(&self, key: KeyCode) -> Option<Dir> {
        self.controls.iter().find_map(|controls| controls.dir_for(key))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keyboard = Keyboard::default();
        for (key, dir) in [
            (KeyCode::Up, Dir::U),
            (KeyCode::Down, Dir::D),
            (KeyCode::Left, Dir::L),
            (KeyCode::Right, Dir::R),
            (KeyCode::W, Dir::U),
            (KeyCode::A, Dir::L),
            (KeyCode::S, Dir::D),
            (KeyCode::D, Dir::R),
        ] {
            assert_eq!(keyboard.dir_for(key), Some(dir), "{:?}", key);
        }
        assert_eq!(keyboard.dir_for(KeyCode::Space), None);
        assert_eq!(keyboard.dir_for(KeyCode::Q), None);
    }

    #[test]
    fn test_arrows_only() {
        let keyboard = Keyboard::new(vec![Controls::ARROWS]);
        assert_eq!(keyboard.dir_for(KeyCode::Left), Some(Dir::L));
        assert_eq!(keyboard.dir_for(KeyCode::A), None);
    }
}
