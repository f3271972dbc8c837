//! Pixel canvas rasterised onto grid cells.
//!
//! The game draws in pixels; a terminal can only show whole character cells.
//! [`Canvas`] keeps one paint slot per grid cell and marks every cell a
//! filled rectangle touches.

use crate::core::{DrawSurface, GameConfig, Paint, Rect};
use crate::types::Rgb;

/// Denominator for converting a glow blur radius into halo brightness.
const GLOW_SCALE: u16 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    grid_size: i32,
    cols: u16,
    rows: u16,
    cells: Vec<Option<Paint>>,
}

impl Canvas {
    pub fn new(width: i32, height: i32, grid_size: i32) -> Self {
        let grid_size = grid_size.max(1);
        let cols = (width.max(0) / grid_size) as u16;
        let rows = (height.max(0) / grid_size) as u16;
        Self {
            width: width.max(0),
            height: height.max(0),
            grid_size,
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    pub fn for_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height, config.grid_size)
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Paint> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// Number of painted cells.
    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Halo colour for an unpainted cell next to a glowing one.
    ///
    /// Neighbours are checked up, down, left, right; the first glowing one
    /// wins.
    pub fn halo(&self, col: u16, row: u16) -> Option<Rgb> {
        if self.cell(col, row).is_some() {
            return None;
        }
        let neighbours = [
            (Some(col), row.checked_sub(1)),
            (Some(col), row.checked_add(1)),
            (col.checked_sub(1), Some(row)),
            (col.checked_add(1), Some(row)),
        ];
        neighbours
            .into_iter()
            .filter_map(|(c, r)| self.cell(c?, r?))
            .find(|p| p.glow > 0)
            .map(|p| p.color.scaled(p.glow as u16, GLOW_SCALE))
    }
}

impl DrawSurface for Canvas {
    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.x.saturating_add(rect.w).min(self.width);
        let y1 = rect.y.saturating_add(rect.h).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        // Partial cells past the last whole column or row are not drawn.
        let g = self.grid_size;
        let last_col = ((x1 - 1) / g).min(self.cols as i32 - 1);
        let last_row = ((y1 - 1) / g).min(self.rows as i32 - 1);
        let cols = self.cols as usize;
        for row in (y0 / g)..=last_row {
            for col in (x0 / g)..=last_col {
                self.cells[row as usize * cols + col as usize] = Some(paint);
            }
        }
    }
}
