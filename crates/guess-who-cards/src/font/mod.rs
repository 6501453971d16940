//! Font resolution
//!
//! A logical font name resolves through a cascade, first match wins:
//! 1. one of the 14 standard PDF fonts (no I/O)
//! 2. `{name}.ttf` in the font cache
//! 3. a download of the derived family name, stored in the cache
//!
//! Results are memoized for the lifetime of the resolver.

mod cache;
mod fetch;
mod names;

pub use cache::*;
pub use fetch::*;
pub use names::*;

use crate::types::{CardError, Result};
use printpdf::BuiltinFont;
use std::collections::HashMap;
use std::sync::Arc;

/// The standard PDF fonts every viewer provides
pub const BUILTIN_FONTS: [&str; 14] = [
    "Courier",
    "Courier-Bold",
    "Courier-BoldOblique",
    "Courier-Oblique",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-BoldOblique",
    "Helvetica-Oblique",
    "Symbol",
    "Times-Bold",
    "Times-BoldItalic",
    "Times-Italic",
    "Times-Roman",
    "ZapfDingbats",
];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FONTS.contains(&name)
}

/// Map a standard PDF font name to printpdf's built-in font
pub fn builtin_font(name: &str) -> Option<BuiltinFont> {
    let font = match name {
        "Courier" => BuiltinFont::Courier,
        "Courier-Bold" => BuiltinFont::CourierBold,
        "Courier-BoldOblique" => BuiltinFont::CourierBoldOblique,
        "Courier-Oblique" => BuiltinFont::CourierOblique,
        "Helvetica" => BuiltinFont::Helvetica,
        "Helvetica-Bold" => BuiltinFont::HelveticaBold,
        "Helvetica-BoldOblique" => BuiltinFont::HelveticaBoldOblique,
        "Helvetica-Oblique" => BuiltinFont::HelveticaOblique,
        "Symbol" => BuiltinFont::Symbol,
        "Times-Bold" => BuiltinFont::TimesBold,
        "Times-BoldItalic" => BuiltinFont::TimesBoldItalic,
        "Times-Italic" => BuiltinFont::TimesItalic,
        "Times-Roman" => BuiltinFont::TimesRoman,
        "ZapfDingbats" => BuiltinFont::ZapfDingbats,
        _ => return None,
    };
    Some(font)
}

/// Where a resolved font's glyphs come from
#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    /// Standard PDF font, referenced by name
    Builtin,
    /// TrueType file to embed
    TrueType(Arc<[u8]>),
}

/// A usable font
#[derive(Debug, Clone, PartialEq)]
pub struct FontHandle {
    name: String,
    source: FontSource,
    /// TrueType data used for measuring; for built-in fonts, the
    /// metric-compatible face printpdf bundles
    metrics: Arc<[u8]>,
}

impl FontHandle {
    /// Handle for a standard PDF font; `None` if `name` is not one
    pub fn builtin(name: &str) -> Option<Self> {
        let metrics: Arc<[u8]> = Arc::from(builtin_font(name)?.get_subset_font().bytes);
        ttf_parser::Face::parse(&metrics, 0).ok()?;
        Some(Self {
            name: name.to_string(),
            source: FontSource::Builtin,
            metrics,
        })
    }

    /// Handle for TrueType bytes, checked to parse
    pub fn truetype(name: &str, bytes: Vec<u8>) -> Result<Self> {
        ttf_parser::Face::parse(&bytes, 0).map_err(|e| CardError::FontUnavailable {
            name: name.to_string(),
            reason: format!("not a usable TrueType font: {}", e),
        })?;
        let bytes: Arc<[u8]> = Arc::from(bytes);
        Ok(Self {
            name: name.to_string(),
            source: FontSource::TrueType(bytes.clone()),
            metrics: bytes,
        })
    }

    /// Logical font name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Width of `text` set at `size` points, from the font's horizontal advances.
    ///
    /// Characters the font has no glyph for are measured as its missing glyph.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let Ok(face) = ttf_parser::Face::parse(&self.metrics, 0) else {
            return 0.0;
        };
        let advance: f32 = text
            .chars()
            .map(|ch| face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0)))
            .filter_map(|glyph| face.glyph_hor_advance(glyph))
            .map(f32::from)
            .sum();
        advance / face.units_per_em() as f32 * size
    }
}

/// Memoizing font resolver over an injected cache and fetcher
pub struct FontResolver<C, F> {
    cache: C,
    fetcher: F,
    resolved: HashMap<String, FontHandle>,
}

impl<C: FontCache, F: FontFetcher> FontResolver<C, F> {
    pub fn new(cache: C, fetcher: F) -> Self {
        Self {
            cache,
            fetcher,
            resolved: HashMap::new(),
        }
    }

    /// Resolve a logical font name, reusing earlier results
    pub fn resolve(&mut self, name: &str) -> Result<FontHandle> {
        if let Some(handle) = self.resolved.get(name) {
            return Ok(handle.clone());
        }

        let handle = self.resolve_uncached(name)?;
        self.resolved.insert(name.to_string(), handle.clone());
        Ok(handle)
    }

    fn resolve_uncached(&self, name: &str) -> Result<FontHandle> {
        if let Some(handle) = FontHandle::builtin(name) {
            return Ok(handle);
        }

        if self.cache.has(name) {
            log::debug!("Using cached font '{}'", name);
            let bytes = self.cache.read(name).map_err(|e| CardError::FontUnavailable {
                name: name.to_string(),
                reason: format!("cached file unreadable: {}", e),
            })?;
            return FontHandle::truetype(name, bytes);
        }

        let family = derive_family_name(name);
        log::info!(
            "Font '{}' not found locally, downloading '{}' from Google Fonts",
            name,
            family
        );
        let bytes = self
            .fetcher
            .fetch(&family)
            .map_err(|e| CardError::FontUnavailable {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        let handle = FontHandle::truetype(name, bytes)?;
        if let FontSource::TrueType(bytes) = handle.source() {
            match self.cache.write(name, bytes) {
                Ok(()) => log::info!("Cached font '{}'", name),
                Err(e) => log::warn!("Could not cache font '{}': {}", name, e),
            }
        }
        Ok(handle)
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_name_has_metrics() {
        for name in BUILTIN_FONTS {
            let handle = FontHandle::builtin(name).unwrap();
            assert!(handle.text_width("A", 10.0) > 0.0, "{name}");
        }
        assert!(builtin_font("Lobster").is_none());
        assert!(FontHandle::builtin("Lobster").is_none());
    }

    #[test]
    fn test_builtin_widths_follow_glyph_advances() {
        let font = FontHandle::builtin("Helvetica-Bold").unwrap();
        // Wide capitals and narrow lowercase differ in a proportional face
        assert!(font.text_width("MMMM", 10.0) > 2.0 * font.text_width("iiii", 10.0));
        // A long name at label size is wider than a 1.25in card
        assert!(font.text_width("Bartholomew Longname", 9.0) > 90.0);
        assert_eq!(font.text_width("", 9.0), 0.0);
    }

    #[test]
    fn test_courier_is_monospaced() {
        let font = FontHandle::builtin("Courier").unwrap();
        let narrow = font.text_width("iii", 10.0);
        let wide = font.text_width("MMM", 10.0);
        assert!((narrow - wide).abs() < 1e-3);
        assert!((narrow - 18.0).abs() < 0.1);
    }

    #[test]
    fn test_width_scales_with_size() {
        let font = FontHandle::builtin("Times-Roman").unwrap();
        let small = font.text_width("Hello", 10.0);
        let large = font.text_width("Hello", 20.0);
        assert!((large - 2.0 * small).abs() < 1e-3);
    }
}
