//! Layout data types
//!
//! These types represent the intermediate results between sheet planning
//! and page rendering.

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Card faces (printed first in duplex)
    Front,
    /// Card backs (printed second, after a long-edge flip)
    Back,
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the same card after a long-edge flip: column reversed, row kept
    pub fn mirrored(self, columns: usize) -> Self {
        Self {
            row: self.row,
            col: columns - 1 - self.col,
        }
    }
}

/// A rectangular area in points, origin at the bottom-left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Same size, moved by (dx, dy)
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrunk by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    /// Check whether `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.top() <= self.top() + EPS
    }
}

/// One slot of one page: which card (if any) is printed there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAssignment {
    /// Page index within its stream
    pub page: usize,
    /// Row-major slot index within the page
    pub slot: usize,
    /// Deck index of the card (None = blank slot)
    pub card: Option<usize>,
}

/// A full slot-index → card mapping for one page side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    /// Which side of the physical sheet
    pub side: SheetSide,
    /// Page index within its stream (front and back share indices)
    pub index: usize,
    /// Card per slot, row-major (None = blank)
    pub slots: Vec<Option<usize>>,
}

impl PagePlan {
    /// Card at a grid position
    pub fn card_at(&self, pos: GridPosition, columns: usize) -> Option<usize> {
        self.slots
            .get(pos.row * columns + pos.col)
            .copied()
            .flatten()
    }

    /// Number of non-blank slots
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Every slot of this page as an assignment
    pub fn assignments(&self) -> impl Iterator<Item = SlotAssignment> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(slot, card)| SlotAssignment {
                page: self.index,
                slot,
                card: *card,
            })
    }
}

/// Paired front and back page streams for a deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    /// Number of columns in the page grid
    pub columns: usize,
    /// Number of rows in the page grid
    pub rows: usize,
    /// Front pages, in order
    pub fronts: Vec<PagePlan>,
    /// Back pages; `backs[p]` is printed on the reverse of `fronts[p]`
    pub backs: Vec<PagePlan>,
}

impl SheetPlan {
    /// Number of physical sheets (front/back pairs)
    pub fn page_count(&self) -> usize {
        self.fronts.len()
    }

    /// Front and back of each sheet, in print order
    pub fn sheets(&self) -> impl Iterator<Item = (&PagePlan, &PagePlan)> {
        self.fronts.iter().zip(self.backs.iter())
    }

    /// All front-stream slots, page by page
    pub fn front_assignments(&self) -> impl Iterator<Item = SlotAssignment> + '_ {
        self.fronts.iter().flat_map(PagePlan::assignments)
    }

    /// All back-stream slots, page by page
    pub fn back_assignments(&self) -> impl Iterator<Item = SlotAssignment> + '_ {
        self.backs.iter().flat_map(PagePlan::assignments)
    }
}
