//! Lumen - LED matrix clock firmware
//!
//! Main firmware binary for an RP2040 driving a chain of MAX7219
//! modules. Brings up the panel, the on-chip RTC, and a ROSC-seeded
//! generator, then loops the mode scheduler forever: draw a mode,
//! show it through its hold or natural completion, repeat.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::Timer;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use {defmt_rtt as _, panic_probe as _};

use lumen_core::scheduler::{Mode, CLOCK_HOLD_SECS};
use lumen_display::MatrixDisplay;

use crate::max7219::Max7219;
use crate::modes::Fault;
use crate::wall_clock::WallClock;

mod max7219;
mod modes;
mod wall_clock;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Lumen firmware starting...");

    let p = embassy_rp::init(Default::default());

    // SPI0 to the panel chain: clock on GP18, data on GP19, manual
    // chip select on GP17. The MAX7219 tops out around 10 MHz.
    let mut config = spi::Config::default();
    config.frequency = 10_000_000;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, config);
    let cs = Output::new(p.PIN_17, Level::High);

    let mut display = Max7219::new(spi, cs);
    unwrap!(display.init());
    info!("Panel up: {}x{}", display.width(), display.height());

    let mut clock = WallClock::new(p.RTC);
    let mut rng = SmallRng::seed_from_u64(RoscRng.next_u64());

    loop {
        unwrap!(run_mode(&mut display, &mut clock, &mut rng).await);
    }
}

/// One scheduler cycle: pick a mode and show it to completion.
async fn run_mode<D: MatrixDisplay>(
    display: &mut D,
    clock: &mut WallClock,
    rng: &mut SmallRng,
) -> Result<(), Fault> {
    let mode = Mode::choose(rng);
    debug!("mode: {}", mode);

    match mode {
        Mode::ClockDate => {
            modes::show_date(display, clock)?;
            Timer::after_secs(CLOCK_HOLD_SECS).await;
        }
        Mode::ClockTime => {
            modes::show_time(display, clock)?;
            Timer::after_secs(CLOCK_HOLD_SECS).await;
        }
        Mode::Life => modes::run_life(display, clock, rng).await?,
        Mode::RandomWalk => modes::run_walk(display, clock, rng).await?,
    }
    Ok(())
}
