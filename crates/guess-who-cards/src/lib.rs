pub mod constants;
mod deck;
pub mod enhance;
pub mod font;
pub mod layout;
mod options;
pub mod pattern;
mod pdf;
pub mod render;
mod stats;
mod types;

pub use deck::{collect_images, decode_card, derive_label, load_deck};
pub use font::{DirFontCache, FontHandle, FontResolver, GoogleFontsFetcher, builtin_font};
pub use layout::layout;
pub use options::*;
pub use pdf::{generate_pdf, render_pdf_bytes};
pub use stats::{DeckStatistics, calculate_statistics};
pub use types::*;
