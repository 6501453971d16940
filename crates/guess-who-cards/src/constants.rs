//! Shared constants for card sheet generation
//!
//! Lengths in the configuration are inches; everything drawn on a page is
//! in PDF points.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Convert inches to millimeters
#[inline]
pub fn in_to_mm(inches: f32) -> f32 {
    inches * MM_PER_INCH
}

// =============================================================================
// Layout
// =============================================================================

/// Slack allowed when checking that the card grid fits the printable area (points)
pub const GRID_FIT_TOLERANCE: f32 = 0.01;

// =============================================================================
// Text Metrics
// =============================================================================

/// Fraction of the font size a glyph's visual center sits above the baseline
pub const GLYPH_CENTER_RATIO: f32 = 1.0 / 3.0;

/// Half height of a glyph box relative to its font size
pub const GLYPH_HALF_EXTENT_RATIO: f32 = 0.5;

// =============================================================================
// Font Download
// =============================================================================

/// Google Fonts CSS API endpoint
pub const GOOGLE_FONTS_CSS_URL: &str = "https://fonts.googleapis.com/css2";

/// Legacy user agent; makes the CSS API answer with TTF rather than WOFF2 URLs
pub const LEGACY_USER_AGENT: &str = "Mozilla/4.0";

/// Timeout for each font download request (seconds)
pub const FONT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Attempts before a font download is declared failed
pub const FONT_FETCH_ATTEMPTS: usize = 3;

/// File extension of cached font files
pub const FONT_FILE_EXTENSION: &str = "ttf";

// =============================================================================
// Output
// =============================================================================

/// Title written into the PDF metadata
pub const DOCUMENT_TITLE: &str = "Guess Who - Custom Cards";
