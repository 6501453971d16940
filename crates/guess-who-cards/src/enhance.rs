//! Portrait enhancement
//!
//! Each adjustment blends the image with a "degenerate" version of itself:
//! factor 0 gives the degenerate image, 1 the original, above 1 extrapolates.

use crate::options::EnhanceOptions;
use crate::types::RgbColor;
use image::{DynamicImage, Rgb, RgbImage, imageops};

/// Flatten any alpha onto `background` and return an RGB image
pub fn flatten(image: &DynamicImage, background: RgbColor) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let bg = background.to_rgb8();
    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = a as f32 / 255.0;
        let mix = |fg: u8, bg: u8| (fg as f32 * alpha + bg as f32 * (1.0 - alpha)).round() as u8;
        Rgb([mix(r, bg[0]), mix(g, bg[1]), mix(b, bg[2])])
    })
}

/// Apply the configured enhancements in order: auto-contrast, saturation,
/// contrast, brightness, sharpness
pub fn enhance(mut image: RgbImage, options: &EnhanceOptions) -> RgbImage {
    if options.auto_contrast {
        auto_contrast(&mut image);
    }
    if options.saturation != 1.0 {
        let gray = grayscale(&image);
        image = blend(&gray, &image, options.saturation);
    }
    if options.contrast != 1.0 {
        let mean = mean_luma(&image);
        let flat = RgbImage::from_pixel(image.width(), image.height(), Rgb([mean; 3]));
        image = blend(&flat, &image, options.contrast);
    }
    if options.brightness != 1.0 {
        let black = RgbImage::new(image.width(), image.height());
        image = blend(&black, &image, options.brightness);
    }
    if options.sharpness != 1.0 {
        let smooth = smooth(&image);
        image = blend(&smooth, &image, options.sharpness);
    }
    image
}

/// Stretch each channel so its darkest value maps to 0 and brightest to 255
pub fn auto_contrast(image: &mut RgbImage) {
    let mut low = [u8::MAX; 3];
    let mut high = [u8::MIN; 3];
    for pixel in image.pixels() {
        for c in 0..3 {
            low[c] = low[c].min(pixel[c]);
            high[c] = high[c].max(pixel[c]);
        }
    }

    for pixel in image.pixels_mut() {
        for c in 0..3 {
            if high[c] > low[c] {
                let span = (high[c] - low[c]) as f32;
                pixel[c] = ((pixel[c] - low[c]) as f32 * 255.0 / span).round() as u8;
            }
        }
    }
}

fn luma(pixel: &Rgb<u8>) -> f32 {
    0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32
}

fn grayscale(image: &RgbImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let l = luma(image.get_pixel(x, y)).round() as u8;
        Rgb([l; 3])
    })
}

fn mean_luma(image: &RgbImage) -> u8 {
    let count = (image.width() as u64 * image.height() as u64).max(1);
    let total: f64 = image.pixels().map(|p| luma(p) as f64).sum();
    (total / count as f64).round() as u8
}

fn smooth(image: &RgbImage) -> RgbImage {
    const KERNEL: [f32; 9] = [
        1.0 / 13.0,
        1.0 / 13.0,
        1.0 / 13.0,
        1.0 / 13.0,
        5.0 / 13.0,
        1.0 / 13.0,
        1.0 / 13.0,
        1.0 / 13.0,
        1.0 / 13.0,
    ];
    imageops::filter3x3(image, &KERNEL)
}

fn blend(degenerate: &RgbImage, image: &RgbImage, factor: f32) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let d = degenerate.get_pixel(x, y);
        let p = image.get_pixel(x, y);
        Rgb([0, 1, 2].map(|c| {
            let value = d[c] as f32 + (p[c] as f32 - d[c] as f32) * factor;
            value.round().clamp(0.0, 255.0) as u8
        }))
    })
}
