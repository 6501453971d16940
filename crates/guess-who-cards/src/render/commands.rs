use crate::layout::{CropRect, Rect, SheetSide};
use crate::types::RgbColor;

/// How a text run is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextMode {
    Fill,
    /// Outline only, with the given stroke width in points
    Stroke { width: f32 },
}

/// A positioned run of text in the document font
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Baseline origin x
    pub x: f32,
    /// Baseline origin y
    pub y: f32,
    pub size: f32,
    pub color: RgbColor,
    pub mode: TextMode,
    /// Counter-clockwise rotation about the origin, in degrees
    pub rotation_degrees: f32,
    pub opacity: f32,
}

/// One drawing operation on a page, coordinates in points from the bottom-left
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: RgbColor,
    },
    StrokeRect {
        rect: Rect,
        color: RgbColor,
        width: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: RgbColor,
        width: f32,
    },
    /// The `crop` region of deck card `card`'s image, scaled to fill `rect`
    Image {
        card: usize,
        crop: CropRect,
        rect: Rect,
    },
    Text(TextRun),
}

/// All commands for one output page
#[derive(Debug, Clone, PartialEq)]
pub struct PageCommands {
    pub side: SheetSide,
    /// Zero-based set this page belongs to
    pub set: usize,
    /// Page index within the set's front (or back) stream
    pub index: usize,
    pub commands: Vec<DrawCommand>,
}
