//! Hour-of-day brightness policy
//!
//! The panel runs at one of two fixed contrast levels, selected from
//! the current hour alone. No state is kept between readings.

/// First hour of the awake window.
pub const AWAKE_START_HOUR: u8 = 7;

/// First hour past the awake window.
pub const AWAKE_STOP_HOUR: u8 = 20;

/// Contrast level outside the awake window.
pub const DIM_CONTRAST: u8 = 64;

/// Contrast level during the awake window.
pub const BRIGHT_CONTRAST: u8 = 231;

/// Selects which dimming rule is live.
///
/// The shipped rule (`hour > start && hour >= stop`) only goes dim from
/// [`AWAKE_STOP_HOUR`] to midnight; the overnight and early-morning
/// hours stay at full brightness. Set this to `false` to dim every
/// hour outside the awake window instead.
pub const DIM_EVENING_ONLY: bool = true;

/// Contrast level for the given hour of day (0-23).
pub fn contrast_for(hour: u8) -> u8 {
    let dim = if DIM_EVENING_ONLY {
        dim_evening_only(hour)
    } else {
        dim_outside_awake(hour)
    };
    if dim {
        DIM_CONTRAST
    } else {
        BRIGHT_CONTRAST
    }
}

/// Dim only from the stop hour to midnight.
fn dim_evening_only(hour: u8) -> bool {
    hour > AWAKE_START_HOUR && hour >= AWAKE_STOP_HOUR
}

/// Dim every hour outside `[start, stop)`.
fn dim_outside_awake(hour: u8) -> bool {
    !(AWAKE_START_HOUR..AWAKE_STOP_HOUR).contains(&hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evening_only_rule_dims_exactly_20_through_23() {
        for hour in 0..24 {
            let expected = hour >= 20;
            assert_eq!(dim_evening_only(hour), expected, "hour {}", hour);
        }
    }

    #[test]
    fn test_awake_window_rule_dims_night_and_early_morning() {
        for hour in 0..24 {
            let expected = hour < 7 || hour >= 20;
            assert_eq!(dim_outside_awake(hour), expected, "hour {}", hour);
        }
    }

    #[test]
    fn test_contrast_levels_follow_the_live_rule() {
        for hour in 0..24 {
            let expected = if hour >= 20 { DIM_CONTRAST } else { BRIGHT_CONTRAST };
            assert_eq!(contrast_for(hour), expected, "hour {}", hour);
        }
    }
}
