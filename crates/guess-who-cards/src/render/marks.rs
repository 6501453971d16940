//! Crop marks around a card

use crate::layout::Rect;
use crate::types::RgbColor;

use super::DrawCommand;

/// Crop mark geometry in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropMarkStyle {
    /// Length of each mark
    pub length: f32,
    /// Gap between the card edge and the mark
    pub offset: f32,
    pub color: RgbColor,
    pub width: f32,
}

/// Two marks per corner, each pointing away from the card along its edge line
pub fn crop_marks(rect: &Rect, style: &CropMarkStyle) -> Vec<DrawCommand> {
    let near = style.offset;
    let far = style.offset + style.length;

    // (corner x, corner y, horizontal direction, vertical direction)
    let corners = [
        (rect.x, rect.top(), -1.0, 1.0),
        (rect.right(), rect.top(), 1.0, 1.0),
        (rect.x, rect.y, -1.0, -1.0),
        (rect.right(), rect.y, 1.0, -1.0),
    ];

    let line = |from: (f32, f32), to: (f32, f32)| DrawCommand::Line {
        from,
        to,
        color: style.color,
        width: style.width,
    };

    corners
        .iter()
        .flat_map(|&(x, y, dx, dy)| {
            [
                line((x + dx * near, y), (x + dx * far, y)),
                line((x, y + dy * near), (x, y + dy * far)),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_stay_outside_card() {
        let rect = Rect::new(100.0, 100.0, 90.0, 99.0);
        let style = CropMarkStyle {
            length: 10.0,
            offset: 3.0,
            color: RgbColor::BLACK,
            width: 0.5,
        };
        let marks = crop_marks(&rect, &style);
        assert_eq!(marks.len(), 8);

        for mark in marks {
            let DrawCommand::Line { from, to, .. } = mark else {
                panic!("expected line");
            };
            for (x, y) in [from, to] {
                let inside = x > rect.x && x < rect.right() && y > rect.y && y < rect.top();
                assert!(!inside, "mark point ({x}, {y}) inside card");
            }
            let length = ((to.0 - from.0).powi(2) + (to.1 - from.1).powi(2)).sqrt();
            assert!((length - 10.0).abs() < 1e-4);
        }
    }
}
