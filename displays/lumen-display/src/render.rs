//! Render adapter
//!
//! Translates engine state into draw calls. Nothing here touches a
//! device directly; everything goes through the `MatrixDisplay` traits
//! so the same painting runs against the real panel and the host-side
//! frame buffer in tests.

use lumen_core::clock::ClockReading;
use lumen_core::life::Board;
use lumen_core::walk::WalkSession;

use crate::font::LCD_FONT;
use crate::surface::{Color, DrawSurface, MatrixDisplay, Rect};

/// Pixel scale for animation cells; 1 paints single points, larger
/// values paint filled squares with a dark grid line between cells.
pub const SCALE: u16 = 1;

/// Left margin for the clock-face text lines.
const TEXT_X: i16 = 1;

/// Top row of the upper text line.
const TOP_LINE_Y: i16 = 1;

/// Top row of the lower text line.
const BOTTOM_LINE_Y: i16 = 9;

/// Paint every live cell of a Life board. Cells past the visible edge
/// are clipped by the surface.
pub fn draw_board<D: MatrixDisplay>(display: &mut D, board: &Board, scale: u16) {
    for cell in board.iter() {
        let left = cell.x * scale as i16;
        let top = cell.y * scale as i16;
        if scale == 1 {
            display.point(left, top, Color::On);
        } else {
            let right = left + scale as i16;
            let bottom = top + scale as i16;
            display.rect(
                Rect::new(left, top, right, bottom),
                Some(Color::On),
                Some(Color::Off),
            );
        }
    }
}

/// Overlay a centered, boxed label on top of whatever is already
/// painted. Used on the seed frame of each Life epoch.
pub fn draw_label<D: MatrixDisplay>(display: &mut D, label: &str) {
    let (w, h) = LCD_FONT.text_extent(label);
    let (w, h) = (w as i16, h as i16);
    let left = (display.width() as i16 - w) / 2;
    let top = (display.height() as i16 - h) / 2;

    display.rect(
        Rect::new(left - 1, top, left + w + 1, top + h + 1),
        Some(Color::Off),
        Some(Color::On),
    );
    display.text(left + 1, top + 1, label, &LCD_FONT, Color::On);
}

/// Paint a walk frame: the trail first (when the session keeps one),
/// then the current node positions.
pub fn draw_walkers<D: MatrixDisplay>(display: &mut D, session: &WalkSession) {
    if session.leave_trail() {
        for cell in session.trail() {
            display.point(cell.x, cell.y, Color::On);
        }
    }
    for node in session.nodes() {
        display.point(node.x, node.y, Color::On);
    }
}

/// The date face: weekday on top, month/day below.
pub fn draw_date<D: MatrixDisplay>(display: &mut D, reading: &ClockReading) {
    display.text(
        TEXT_X,
        TOP_LINE_Y,
        reading.weekday.abbrev(),
        &LCD_FONT,
        Color::On,
    );
    display.text(
        TEXT_X,
        BOTTOM_LINE_Y,
        reading.date_face().as_str(),
        &LCD_FONT,
        Color::On,
    );
}

/// The time face: hour:minute on top, weekday below.
pub fn draw_time<D: MatrixDisplay>(display: &mut D, reading: &ClockReading) {
    display.text(
        TEXT_X,
        TOP_LINE_Y,
        reading.time_face().as_str(),
        &LCD_FONT,
        Color::On,
    );
    display.text(
        TEXT_X,
        BOTTOM_LINE_Y,
        reading.weekday.abbrev(),
        &LCD_FONT,
        Color::On,
    );
}
