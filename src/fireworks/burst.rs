//! Burst geometry and sampling.

use std::ops::RangeInclusive;

use rand::Rng;

use super::palette::{Color, PALETTE};

/// Character drawn at every glyph position.
pub const GLYPH: char = '*';

/// Columns an anchor may be sampled from (1-based, inclusive).
pub const ANCHOR_COLS: RangeInclusive<u16> = 15..=65;

/// Rows an anchor may be sampled from (1-based, inclusive).
pub const ANCHOR_ROWS: RangeInclusive<u16> = 5..=15;

/// `(dx, dy)` offsets from the anchor, in drawing order.
///
/// Together they form a diamond with an empty center.
pub const GLYPH_OFFSETS: [(i16, i16); 12] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (0, -2),
    (0, 2),
    (-2, 0),
    (2, 0),
];

/// A 1-based screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub col: u16,
    pub row: u16,
}

impl Point {
    pub fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Shift by an offset, or `None` if the result leaves the u16 range.
    pub fn offset(&self, dx: i16, dy: i16) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add_signed(dx)?,
            row: self.row.checked_add_signed(dy)?,
        })
    }
}

/// One frame's explosion: an anchor and a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Burst {
    pub anchor: Point,
    pub color: Color,
}

impl Burst {
    pub fn new(anchor: Point, color: Color) -> Self {
        Self { anchor, color }
    }

    /// Glyph positions in [`GLYPH_OFFSETS`] order.
    ///
    /// Positions that would land before column or row 1 are skipped. Sampled
    /// anchors are always far enough from the edge for all 12 to exist.
    pub fn glyphs(&self) -> impl Iterator<Item = Point> + '_ {
        GLYPH_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.anchor.offset(dx, dy))
            .filter(|p| p.col >= 1 && p.row >= 1)
    }
}

/// Draws bursts uniformly from the anchor bounds and the palette.
pub struct BurstSampler<R> {
    rng: R,
}

impl<R: Rng> BurstSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn sample(&mut self) -> Burst {
        let col = self.rng.gen_range(ANCHOR_COLS);
        let row = self.rng.gen_range(ANCHOR_ROWS);
        let color = PALETTE[self.rng.gen_range(0..PALETTE.len())];
        Burst::new(Point::new(col, row), color)
    }
}
