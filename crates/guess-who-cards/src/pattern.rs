//! Decorative glyph scatter for card backs
//!
//! Placements are random on every render. The random source is a parameter
//! so callers (and tests) decide how it is seeded.

use crate::constants::GLYPH_HALF_EXTENT_RATIO;
use crate::font::FontHandle;
use crate::layout::Rect;
use crate::options::CardBackOptions;
use rand::Rng;

/// One decorative glyph, positioned relative to the card's bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    /// Glyph center x (card-local points)
    pub x: f32,
    /// Glyph center y (card-local points)
    pub y: f32,
    /// Counter-clockwise rotation in degrees, [0, 360)
    pub rotation_degrees: f32,
    /// Fill opacity, [0, 1]
    pub opacity: f32,
    /// Font size in points
    pub size: f32,
}

/// Parameters of the scatter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternStyle {
    /// Number of glyphs per card
    pub count: usize,
    /// Inclusive opacity range
    pub opacity: [f32; 2],
    /// Inclusive font size range in points
    pub size: [f32; 2],
    /// Advance width of the glyph text at 1pt
    pub glyph_width: f32,
}

impl PatternStyle {
    pub fn new(options: &CardBackOptions, font: &FontHandle) -> Self {
        Self {
            count: options.glyph_count,
            opacity: options.glyph_opacity,
            size: options.glyph_size,
            glyph_width: font.text_width(&options.glyph, 1.0),
        }
    }

    /// Distance from the glyph center to its farthest box corner, per point of size.
    ///
    /// The box stays within this radius at any rotation.
    pub fn extent(&self) -> f32 {
        (self.glyph_width / 2.0).hypot(GLYPH_HALF_EXTENT_RATIO)
    }
}

/// Generate `style.count` glyph placements inside `bounds`.
///
/// Each glyph center keeps its rotated extent away from the bounds. A glyph
/// too large for the bounds is shrunk until it fits. Overlapping placements
/// are allowed.
pub fn generate_pattern<R: Rng + ?Sized>(
    bounds: &Rect,
    style: &PatternStyle,
    rng: &mut R,
) -> Vec<GlyphPlacement> {
    let extent = style.extent();
    let max_size = bounds.width.min(bounds.height).max(0.0) / 2.0 / extent;

    (0..style.count)
        .map(|_| {
            let size = sample(rng, style.size).min(max_size);
            let margin = size * extent;
            GlyphPlacement {
                x: sample_axis(rng, bounds.x, bounds.right(), margin),
                y: sample_axis(rng, bounds.y, bounds.top(), margin),
                rotation_degrees: rng.random_range(0.0..360.0),
                opacity: sample(rng, style.opacity),
                size,
            }
        })
        .collect()
}

fn sample<R: Rng + ?Sized>(rng: &mut R, [low, high]: [f32; 2]) -> f32 {
    if high > low {
        rng.random_range(low..=high)
    } else {
        low
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32, margin: f32) -> f32 {
    let (low, high) = (low + margin, high - margin);
    if high > low {
        rng.random_range(low..=high)
    } else {
        (low + high) / 2.0
    }
}
