//! Image fitting
//!
//! Computes the part of a source image that fills a card's image area
//! without distortion: the binding dimension is used in full and the other
//! one is center-cropped.

/// Crop rectangle in source-image pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRect {
    /// Whole-pixel bounds (x, y, width, height) inside a `image_width` x `image_height` image
    pub fn to_pixels(&self, image_width: u32, image_height: u32) -> (u32, u32, u32, u32) {
        let x = (self.x.round() as u32).min(image_width.saturating_sub(1));
        let y = (self.y.round() as u32).min(image_height.saturating_sub(1));
        let width = (self.width.round() as u32).clamp(1, image_width - x);
        let height = (self.height.round() as u32).clamp(1, image_height - y);
        (x, y, width, height)
    }
}

/// Compute the crop that fills a `slot_width` x `slot_height` area.
///
/// Fills the full image height and center-crops the width; when the image is
/// too narrow for that, fills the full width and center-crops the height.
pub fn fit_image(
    image_width: u32,
    image_height: u32,
    slot_width: f32,
    slot_height: f32,
) -> CropRect {
    let iw = image_width as f32;
    let ih = image_height as f32;
    let aspect = slot_width / slot_height;

    let crop_width = ih * aspect;
    if crop_width <= iw {
        CropRect {
            x: (iw - crop_width) / 2.0,
            y: 0.0,
            width: crop_width,
            height: ih,
        }
    } else {
        let crop_height = iw / aspect;
        CropRect {
            x: 0.0,
            y: (ih - crop_height) / 2.0,
            width: iw,
            height: crop_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(iw: u32, ih: u32, sw: f32, sh: f32) {
        let crop = fit_image(iw, ih, sw, sh);
        assert!(crop.x >= 0.0 && crop.y >= 0.0, "{crop:?}");
        assert!(crop.x + crop.width <= iw as f32 + 1e-3, "{crop:?}");
        assert!(crop.y + crop.height <= ih as f32 + 1e-3, "{crop:?}");

        let ratio = crop.width / crop.height;
        assert!(((ratio - sw / sh) / (sw / sh)).abs() < 1e-4, "{crop:?}");
    }

    #[test]
    fn test_crop_stays_inside_and_keeps_aspect() {
        let images = [(100, 100), (640, 480), (480, 640), (1, 1000), (1000, 1), (37, 91)];
        let slots = [(90.0, 80.0), (80.0, 90.0), (1.0, 1.0), (300.0, 10.0), (10.0, 300.0)];
        for (iw, ih) in images {
            for (sw, sh) in slots {
                assert_valid(iw, ih, sw, sh);
            }
        }
    }

    #[test]
    fn test_wide_image_crops_width() {
        let crop = fit_image(400, 100, 1.0, 1.0);
        assert_eq!(crop, CropRect { x: 150.0, y: 0.0, width: 100.0, height: 100.0 });
    }

    #[test]
    fn test_tall_image_crops_height() {
        let crop = fit_image(100, 400, 1.0, 1.0);
        assert_eq!(crop, CropRect { x: 0.0, y: 150.0, width: 100.0, height: 100.0 });
    }

    #[test]
    fn test_matching_aspect_uses_full_image() {
        let crop = fit_image(200, 100, 2.0, 1.0);
        assert_eq!(crop, CropRect { x: 0.0, y: 0.0, width: 200.0, height: 100.0 });
    }

    #[test]
    fn test_pixel_bounds_clamped() {
        let crop = fit_image(3, 1000, 1.0, 1.0);
        let (x, y, w, h) = crop.to_pixels(3, 1000);
        assert!(x + w <= 3);
        assert!(y + h <= 1000);
        assert!(w >= 1 && h >= 1);
    }
}
