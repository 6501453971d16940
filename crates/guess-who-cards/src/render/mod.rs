//! Page rendering into backend-neutral draw commands
//!
//! - Draw command types consumed by the PDF backend
//! - Front and back card drawing
//! - Crop marks
//! - Page sequencing over sets and duplex pairs

mod card;
mod commands;
mod marks;
mod page;

pub use card::*;
pub use commands::*;
pub use marks::*;
pub use page::*;
