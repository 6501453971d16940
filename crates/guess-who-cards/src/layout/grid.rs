//! Grid geometry
//!
//! This module handles the placement of the card grid on a page. The grid is
//! centered on the page; each cell is a card plus `padding` on every side.

use crate::constants::GRID_FIT_TOLERANCE;
use crate::types::{CardError, Result};

use super::{GridPosition, Rect};

/// Fixed-topology card grid, all lengths in points
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of card columns per page
    pub columns: usize,
    /// Number of card rows per page
    pub rows: usize,
    /// Page width
    pub page_width: f32,
    /// Page height
    pub page_height: f32,
    /// Minimum horizontal distance between the grid and the page edge
    pub margin_x: f32,
    /// Minimum vertical distance between the grid and the page edge
    pub margin_y: f32,
    /// Card width
    pub card_width: f32,
    /// Card height
    pub card_height: f32,
    /// Gap around each card inside its cell
    pub padding: f32,
}

impl Grid {
    /// Total number of slots on a page
    pub fn slots_per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Width of one cell (card plus padding)
    pub fn cell_width(&self) -> f32 {
        self.card_width + 2.0 * self.padding
    }

    /// Height of one cell (card plus padding)
    pub fn cell_height(&self) -> f32 {
        self.card_height + 2.0 * self.padding
    }

    /// Width of the whole grid
    pub fn grid_width(&self) -> f32 {
        self.columns as f32 * self.cell_width()
    }

    /// Height of the whole grid
    pub fn grid_height(&self) -> f32 {
        self.rows as f32 * self.cell_height()
    }

    /// Top-left corner of the grid (x, y) in page coordinates
    pub fn origin(&self) -> (f32, f32) {
        let x = (self.page_width - self.grid_width()) / 2.0;
        let y = self.page_height - (self.page_height - self.grid_height()) / 2.0;
        (x, y)
    }

    /// Grid position of a row-major slot index
    pub fn position_of(&self, slot: usize) -> GridPosition {
        GridPosition::new(slot / self.columns, slot % self.columns)
    }

    /// Row-major slot index of a grid position
    pub fn slot_index(&self, pos: GridPosition) -> usize {
        pos.row * self.columns + pos.col
    }

    /// Card rectangle for a grid position.
    ///
    /// Row 0 is at the top of the page, so y decreases as the row grows.
    pub fn slot_rect(&self, pos: GridPosition) -> Rect {
        let (origin_x, origin_y) = self.origin();
        let x = origin_x + pos.col as f32 * self.cell_width() + self.padding;
        let y = origin_y - (pos.row + 1) as f32 * self.cell_height() + self.padding;
        Rect::new(x, y, self.card_width, self.card_height)
    }

    /// Printable area (page minus margins)
    pub fn printable_area(&self) -> Rect {
        Rect::new(
            self.margin_x,
            self.margin_y,
            self.page_width - 2.0 * self.margin_x,
            self.page_height - 2.0 * self.margin_y,
        )
    }

    /// Check that the grid produces non-empty slots that fit the printable area
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(CardError::Config(format!(
                "Grid must have at least one column and one row (got {}x{})",
                self.columns, self.rows
            )));
        }

        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(CardError::Config(
                "Page dimensions must be positive".to_string(),
            ));
        }

        if self.card_width <= 0.0 || self.card_height <= 0.0 {
            return Err(CardError::Config(
                "Card dimensions must be positive".to_string(),
            ));
        }

        if self.padding < 0.0 || self.margin_x < 0.0 || self.margin_y < 0.0 {
            return Err(CardError::Config(
                "Padding and margins cannot be negative".to_string(),
            ));
        }

        let printable = self.printable_area();
        if printable.width <= 0.0 || printable.height <= 0.0 {
            return Err(CardError::Config(
                "Margins leave no printable area".to_string(),
            ));
        }

        if self.grid_width() > printable.width + GRID_FIT_TOLERANCE
            || self.grid_height() > printable.height + GRID_FIT_TOLERANCE
        {
            return Err(CardError::Config(format!(
                "A {}x{} grid of {:.1}x{:.1}pt cells does not fit in the {:.1}x{:.1}pt printable area",
                self.columns,
                self.rows,
                self.cell_width(),
                self.cell_height(),
                printable.width,
                printable.height
            )));
        }

        Ok(())
    }
}
