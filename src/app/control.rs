use std::time::{Duration, Instant};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
    /// The game over notification is showing
    GameOver,
}

// combines the tick schedule with game state management
pub struct Control {
    tick_interval: Duration,
    last_update: Instant,

    // amount of time which ticks have not yet
    // been accounted for (will be included next time
    // this in done), in units of ticks
    remainder: f64,

    // number of ticks that still need to be
    // performed to catch up with the current time
    missed_updates: Option<usize>,

    game_state: State,

    // used to store the progress into the current
    // tick when the game is paused
    frozen_tick_fraction: Option<f64>,
}

impl Control {
    /// Upper bound on catch-up ticks after a stall (e.g. the window
    /// being dragged), anything beyond is dropped
    const MAX_MISSED_UPDATES: usize = 4;

    pub fn new(tick_interval: Duration) -> Self {
        assert!(!tick_interval.is_zero(), "tick interval must be positive");
        Self {
            tick_interval,
            last_update: Instant::now(),
            remainder: 0.,

            missed_updates: None,

            game_state: State::Playing,
            frozen_tick_fraction: None,
        }
    }

    // repeatedly called in update() as while loop condition
    pub fn can_update(&mut self) -> bool {
        if self.game_state != State::Playing {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                // calculate how many ticks should have occurred
                // since the last call to can_update
                let ticks = self.tick_fraction();
                let missed_updates = ticks as usize;

                if missed_updates > 0 {
                    self.remainder = ticks % 1.;
                    self.last_update = Instant::now();

                    let missed_updates = missed_updates.min(Self::MAX_MISSED_UPDATES);
                    self.missed_updates = Some(missed_updates - 1);

                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    pub fn play(&mut self) {
        self.game_state = State::Playing;
        self.missed_updates = None;
        if let Some(frac) = self.frozen_tick_fraction.take() {
            self.remainder = frac;
            self.last_update = Instant::now();
        }
    }

    pub fn pause(&mut self) {
        self.freeze();
        self.game_state = State::Paused;
    }

    pub fn game_over(&mut self) {
        self.freeze();
        self.game_state = State::GameOver;
    }

    fn freeze(&mut self) {
        if self.frozen_tick_fraction.is_none() {
            self.frozen_tick_fraction = Some(self.tick_fraction().min(1.));
        }
        self.missed_updates = None;
    }

    // ticks elapsed since the last one, may be more than 1
    fn tick_fraction(&self) -> f64 {
        match self.frozen_tick_fraction {
            Some(frac) => frac,
            None => {
                self.last_update.elapsed().as_secs_f64() / self.tick_interval.as_secs_f64()
                    + self.remainder
            }
        }
    }
}
