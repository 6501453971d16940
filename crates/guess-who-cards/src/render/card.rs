//! Front and back card drawing
//!
//! All geometry is resolved before these functions run; they only turn a
//! slot rectangle plus style into draw commands.

use crate::constants::{GLYPH_CENTER_RATIO, in_to_pt};
use crate::font::FontHandle;
use crate::layout::{CropRect, Rect};
use crate::options::CardOptions;
use crate::pattern::GlyphPlacement;
use crate::types::{CardSource, RgbColor};

use super::{CropMarkStyle, DrawCommand, TextMode, TextRun, crop_marks};

/// Card styling in points, resolved once from the options
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub background: RgbColor,
    pub image_padding: f32,
    pub label_height: f32,
    pub label_font_size: f32,
    pub label_color: RgbColor,
    pub label_outline_color: RgbColor,
    pub label_outline_width: f32,
    pub label_bottom_padding: f32,
    pub border_color: RgbColor,
    pub border_width: f32,
    pub crop_marks: Option<CropMarkStyle>,
    pub frame_color: RgbColor,
    pub frame_width: f32,
    pub frame_margin: f32,
    pub glyph: String,
    pub glyph_color: RgbColor,
}

impl CardStyle {
    pub fn from_options(options: &CardOptions) -> Self {
        let marks = &options.crop_marks;
        Self {
            background: options.card.background_color,
            image_padding: in_to_pt(options.image.padding),
            label_height: in_to_pt(options.name_label.height),
            label_font_size: options.name_label.font_size,
            label_color: options.name_label.color,
            label_outline_color: options.name_label.outline_color,
            label_outline_width: options.name_label.outline_width,
            label_bottom_padding: in_to_pt(options.name_label.bottom_padding),
            border_color: options.border.color,
            border_width: options.border.width,
            crop_marks: marks.enabled.then(|| CropMarkStyle {
                length: in_to_pt(marks.length),
                offset: in_to_pt(marks.offset),
                color: marks.color,
                width: marks.width,
            }),
            frame_color: options.card_back.frame_color,
            frame_width: options.card_back.frame_width,
            frame_margin: in_to_pt(options.card_back.frame_margin),
            glyph: options.card_back.glyph.clone(),
            glyph_color: options.card_back.glyph_color,
        }
    }

    /// Image area of a card: the slot minus the label strip, inset by the image padding
    pub fn image_area(&self, slot: &Rect) -> Rect {
        Rect::new(
            slot.x + self.image_padding,
            slot.y + self.label_height + self.image_padding,
            slot.width - 2.0 * self.image_padding,
            slot.height - self.label_height - 2.0 * self.image_padding,
        )
    }

    /// Area inside the back frame, relative to the card's bottom-left corner
    pub fn back_interior(&self, slot: &Rect) -> Rect {
        Rect::new(0.0, 0.0, slot.width, slot.height).inset(self.frame_margin)
    }
}

/// Draw a card face: background, cropped image, label, border, crop marks
pub fn render_front(
    slot: &Rect,
    card_index: usize,
    card: &CardSource,
    crop: &CropRect,
    font: &FontHandle,
    style: &CardStyle,
) -> Vec<DrawCommand> {
    let mut commands = vec![
        DrawCommand::FillRect {
            rect: *slot,
            color: style.background,
        },
        DrawCommand::Image {
            card: card_index,
            crop: *crop,
            rect: style.image_area(slot),
        },
    ];

    let size = style.label_font_size;
    let max_width = slot.width - 2.0 * style.image_padding;
    let text = fit_label(&card.label, font, size, max_width);
    if !text.is_empty() {
        let x = slot.center_x() - font.text_width(&text, size) / 2.0;
        let y = slot.y + style.label_bottom_padding;
        let run = |color, mode| TextRun {
            text: text.clone(),
            x,
            y,
            size,
            color,
            mode,
            rotation_degrees: 0.0,
            opacity: 1.0,
        };

        if style.label_outline_width > 0.0 {
            commands.push(DrawCommand::Text(run(
                style.label_outline_color,
                TextMode::Stroke {
                    width: style.label_outline_width,
                },
            )));
        }
        commands.push(DrawCommand::Text(run(style.label_color, TextMode::Fill)));
    }

    finish_card(&mut commands, slot, style);
    commands
}

/// Draw a card back: set color, glyph scatter, inner frame, border, crop marks
pub fn render_back(
    slot: &Rect,
    placements: &[GlyphPlacement],
    font: &FontHandle,
    background: RgbColor,
    style: &CardStyle,
) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::FillRect {
        rect: *slot,
        color: background,
    }];

    for placement in placements {
        let size = placement.size;
        let width = font.text_width(&style.glyph, size);

        // Offset from glyph center to baseline origin, rotated with the glyph
        let (sin, cos) = placement.rotation_degrees.to_radians().sin_cos();
        let (dx, dy) = (-width / 2.0, -size * GLYPH_CENTER_RATIO);

        commands.push(DrawCommand::Text(TextRun {
            text: style.glyph.clone(),
            x: slot.x + placement.x + dx * cos - dy * sin,
            y: slot.y + placement.y + dx * sin + dy * cos,
            size,
            color: style.glyph_color,
            mode: TextMode::Fill,
            rotation_degrees: placement.rotation_degrees,
            opacity: placement.opacity,
        }));
    }

    if style.frame_width > 0.0 {
        commands.push(DrawCommand::StrokeRect {
            rect: slot.inset(style.frame_margin),
            color: style.frame_color,
            width: style.frame_width,
        });
    }

    finish_card(&mut commands, slot, style);
    commands
}

/// Border and crop marks; identical on both faces so cut lines align
fn finish_card(commands: &mut Vec<DrawCommand>, slot: &Rect, style: &CardStyle) {
    if style.border_width > 0.0 {
        commands.push(DrawCommand::StrokeRect {
            rect: *slot,
            color: style.border_color,
            width: style.border_width,
        });
    }

    if let Some(marks) = &style.crop_marks {
        commands.extend(crop_marks(slot, marks));
    }
}

/// Drop trailing characters until the label fits `max_width` (keeps at least one)
pub fn fit_label(label: &str, font: &FontHandle, size: f32, max_width: f32) -> String {
    let mut chars: Vec<char> = label.chars().collect();
    while chars.len() > 1 && font.text_width(&chars.iter().collect::<String>(), size) > max_width {
        chars.pop();
    }
    chars.into_iter().collect()
}
