//! Wall-clock access through the RP2040 RTC
//!
//! Most boards give the RTC no backup supply, so a cold boot starts
//! counting from a fixed default date. The clock is decorative; a
//! wrong date must never take the display loop down, so reads fall
//! back instead of failing.

use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};

use lumen_core::clock::{ClockReading, Weekday};

/// Where time starts when the RTC comes up cold.
const DEFAULT_BOOT: DateTime = DateTime {
    year: 2024,
    month: 1,
    day: 1,
    day_of_week: DayOfWeek::Monday,
    hour: 0,
    minute: 0,
    second: 0,
};

/// Owned handle to the on-chip RTC.
pub struct WallClock {
    rtc: Rtc<'static, RTC>,
}

impl WallClock {
    /// Bring up the RTC, starting it at the default date if it is not
    /// already counting.
    pub fn new(rtc: RTC) -> Self {
        let mut rtc = Rtc::new(rtc);
        if !rtc.is_running() {
            let _ = rtc.set_datetime(DEFAULT_BOOT);
        }
        Self { rtc }
    }

    /// Current wall-clock reading.
    pub fn read(&mut self) -> ClockReading {
        match self.rtc.now() {
            Ok(now) => ClockReading {
                hour: now.hour,
                minute: now.minute,
                day: now.day,
                month: now.month,
                weekday: weekday_from(now.day_of_week),
            },
            Err(_) => ClockReading {
                hour: DEFAULT_BOOT.hour,
                minute: DEFAULT_BOOT.minute,
                day: DEFAULT_BOOT.day,
                month: DEFAULT_BOOT.month,
                weekday: Weekday::Monday,
            },
        }
    }
}

fn weekday_from(day: DayOfWeek) -> Weekday {
    match day {
        DayOfWeek::Monday => Weekday::Monday,
        DayOfWeek::Tuesday => Weekday::Tuesday,
        DayOfWeek::Wednesday => Weekday::Wednesday,
        DayOfWeek::Thursday => Weekday::Thursday,
        DayOfWeek::Friday => Weekday::Friday,
        DayOfWeek::Saturday => Weekday::Saturday,
        DayOfWeek::Sunday => Weekday::Sunday,
    }
}
