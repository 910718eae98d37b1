//! Display mode runners
//!
//! One runner per scheduler mode. The clock faces paint a single
//! frame and return; the animation runners drive their core session
//! to natural completion with fixed-interval pacing. Each runner
//! applies the brightness policy on entry, so every mode change lands
//! at the contrast the current hour calls for.

use defmt::*;
use embassy_time::Timer;
use rand::Rng;

use lumen_core::brightness;
use lumen_core::life::{self, LifeSession};
use lumen_core::walk::{self, WalkError, WalkSession};
use lumen_display::{render, DisplayError, MatrixDisplay};

use crate::wall_clock::WallClock;

/// Anything that ends a mode run. All variants are fatal: the firmware
/// exists to decorate a wall, and retrying device I/O buys nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Fault {
    /// Panel I/O failed.
    Device(DisplayError),
    /// An engine rejected its session parameters.
    Invariant(WalkError),
}

impl From<DisplayError> for Fault {
    fn from(err: DisplayError) -> Self {
        Fault::Device(err)
    }
}

impl From<WalkError> for Fault {
    fn from(err: WalkError) -> Self {
        Fault::Invariant(err)
    }
}

/// Render the date face once.
pub fn show_date<D: MatrixDisplay>(display: &mut D, clock: &mut WallClock) -> Result<(), Fault> {
    let reading = clock.read();
    display.contrast(brightness::contrast_for(reading.hour))?;
    display.frame(|d| render::draw_date(d, &reading))?;
    Ok(())
}

/// Render the time face once.
pub fn show_time<D: MatrixDisplay>(display: &mut D, clock: &mut WallClock) -> Result<(), Fault> {
    let reading = clock.read();
    display.contrast(brightness::contrast_for(reading.hour))?;
    display.frame(|d| render::draw_time(d, &reading))?;
    Ok(())
}

/// Run a full Life invocation: seeded epochs back to back, with the
/// boxed label and a long hold on every seed frame.
pub async fn run_life<D: MatrixDisplay>(
    display: &mut D,
    clock: &mut WallClock,
    rng: &mut impl Rng,
) -> Result<(), Fault> {
    let reading = clock.read();
    display.contrast(brightness::contrast_for(reading.hour))?;

    let cols = display.width() / render::SCALE;
    let rows = display.height() / render::SCALE;
    let mut session = LifeSession::new(rng, cols, rows);
    info!(
        "life: {} epochs of {} generations on {}x{}",
        life::EPOCHS,
        life::GENERATIONS_PER_EPOCH,
        cols,
        rows
    );

    loop {
        display.frame(|d| {
            render::draw_board(d, session.board(), render::SCALE);
            if session.is_seed_frame() {
                render::draw_label(d, "LIFE");
            }
        })?;

        if session.is_seed_frame() {
            Timer::after_secs(life::SEED_PAUSE_SECS).await;
        } else {
            Timer::after_millis(life::FRAME_INTERVAL_MS).await;
        }

        if !session.advance(rng) {
            break;
        }
    }
    Ok(())
}

/// Run a full random-walk session. The freshly placed nodes render
/// before the first tick.
pub async fn run_walk<D: MatrixDisplay>(
    display: &mut D,
    clock: &mut WallClock,
    rng: &mut impl Rng,
) -> Result<(), Fault> {
    let reading = clock.read();
    display.contrast(brightness::contrast_for(reading.hour))?;

    let mut session = WalkSession::new(rng, display.width(), display.height())?;
    info!(
        "walk: {} nodes for {} ticks, trail={}",
        session.nodes().len(),
        walk::TICKS_PER_SESSION,
        session.leave_trail()
    );

    loop {
        display.frame(|d| render::draw_walkers(d, &session))?;
        Timer::after_millis(walk::TICK_INTERVAL_MS).await;
        if !session.advance(rng) {
            break;
        }
    }
    Ok(())
}
