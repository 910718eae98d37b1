//! Display mode selection
//!
//! Each pass of the top-level loop draws a roll in `0..=100` and maps
//! it to a display mode. Clock faces render once and hold; animations
//! run to natural completion before the next draw. The generator is
//! injected so replays with a seeded or scripted source stay
//! deterministic.

use rand::Rng;

/// Seconds a clock face stays up before the next draw.
pub const CLOCK_HOLD_SECS: u64 = 30;

/// Highest roll (inclusive) that selects the date face.
pub const DATE_ROLL_MAX: u8 = 35;

/// Highest roll (inclusive) that selects the time face; anything above
/// runs an animation.
pub const TIME_ROLL_MAX: u8 = 85;

/// The display modes the scheduler cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Weekday plus month/day, held for [`CLOCK_HOLD_SECS`].
    ClockDate,
    /// Hour:minute plus weekday, held for [`CLOCK_HOLD_SECS`].
    ClockTime,
    /// Game of Life, run for its full epoch count.
    Life,
    /// Random walk, run for its full tick count.
    RandomWalk,
}

impl Mode {
    /// Draw the next mode to display.
    pub fn choose(rng: &mut impl Rng) -> Self {
        let roll: u8 = rng.random_range(0..=100);
        let coin = roll > TIME_ROLL_MAX && rng.random_bool(0.5);
        Self::from_roll(roll, coin)
    }

    /// Pure mapping from a scheduler roll to a mode.
    ///
    /// `animation_coin` resolves the Life/RandomWalk split and only
    /// matters for rolls above [`TIME_ROLL_MAX`].
    pub fn from_roll(roll: u8, animation_coin: bool) -> Self {
        if roll <= DATE_ROLL_MAX {
            Mode::ClockDate
        } else if roll <= TIME_ROLL_MAX {
            Mode::ClockTime
        } else if animation_coin {
            Mode::Life
        } else {
            Mode::RandomWalk
        }
    }

    /// Whether this mode runs a full animation session.
    pub fn is_animation(self) -> bool {
        matches!(self, Mode::Life | Mode::RandomWalk)
    }
}
