//! Wall-clock value types and clock-face formatting
//!
//! The RTC wrapper in the firmware produces [`ClockReading`] values;
//! everything downstream (clock faces, brightness policy) consumes the
//! plain fields without touching hardware.

use core::fmt::Write;

use heapless::String;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Three-letter abbreviation as shown on the matrix.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Monday => "MON",
            Weekday::Tuesday => "TUE",
            Weekday::Wednesday => "WED",
            Weekday::Thursday => "THU",
            Weekday::Friday => "FRI",
            Weekday::Saturday => "SAT",
            Weekday::Sunday => "SUN",
        }
    }
}

/// One wall-clock reading, as consumed by the clock faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Month, 1-12.
    pub month: u8,
    /// Day of week.
    pub weekday: Weekday,
}

impl ClockReading {
    /// The time face's top line: zero-padded `HH:MM`.
    pub fn time_face(&self) -> String<5> {
        let mut line = String::new();
        let _ = write!(line, "{:02}:{:02}", self.hour, self.minute);
        line
    }

    /// The date face's bottom line: zero-padded `MM/DD`.
    pub fn date_face(&self) -> String<5> {
        let mut line = String::new();
        let _ = write!(line, "{:02}/{:02}", self.month, self.day);
        line
    }
}
