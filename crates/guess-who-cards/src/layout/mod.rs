//! Layout calculation modules for card sheets
//!
//! This module handles all the geometric calculations for the deck:
//! - Grid geometry (slot rectangles on a letter-size page)
//! - Sheet planning (which card goes in which slot, front and back)
//! - Image fitting (crop rectangle that fills a card's image area)

mod fit;
mod grid;
mod sheet;
mod types;

pub use fit::*;
pub use grid::*;
pub use sheet::*;
pub use types::*;
