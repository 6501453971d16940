use crate::constants::in_to_pt;
use crate::layout::Grid;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete card-sheet configuration.
///
/// Lengths are inches, line widths and font sizes are points. Every section
/// is defaulted, so a configuration file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    pub page: PageOptions,
    pub card: CardLayoutOptions,
    pub image: ImageOptions,
    pub name_label: LabelOptions,
    pub border: BorderOptions,
    pub crop_marks: CropMarkOptions,
    pub game: GameOptions,
    pub duplex: DuplexOptions,
    pub card_back: CardBackOptions,
    pub image_extensions: Vec<String>,
    pub image_enhance: EnhanceOptions,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            page: PageOptions::default(),
            card: CardLayoutOptions::default(),
            image: ImageOptions::default(),
            name_label: LabelOptions::default(),
            border: BorderOptions::default(),
            crop_marks: CropMarkOptions::default(),
            game: GameOptions::default(),
            duplex: DuplexOptions::default(),
            card_back: CardBackOptions::default(),
            image_extensions: [".png", ".jpg", ".jpeg", ".bmp", ".gif", ".tiff", ".webp"]
                .map(String::from)
                .to_vec(),
            image_enhance: EnhanceOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    pub width: f32,
    pub height: f32,
    pub margin_x: f32,
    pub margin_y: f32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            width: 8.5,
            height: 11.0,
            margin_x: 0.5,
            margin_y: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardLayoutOptions {
    pub width: f32,
    pub height: f32,
    pub columns: usize,
    pub rows: usize,
    /// Spacing around each card in the grid
    pub padding: f32,
    pub background_color: RgbColor,
}

impl Default for CardLayoutOptions {
    fn default() -> Self {
        Self {
            width: 1.25,
            height: 1.375,
            columns: 5,
            rows: 5,
            padding: 0.125,
            background_color: RgbColor::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    /// Inset of the image area inside the card
    pub padding: f32,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self { padding: 0.06 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Height of the label strip at the bottom of the card
    pub height: f32,
    /// Logical font name (built-in PDF font or a Google Fonts name)
    pub font: String,
    pub font_size: f32,
    pub color: RgbColor,
    pub outline_color: RgbColor,
    /// Outline stroke width (0 disables the outline)
    pub outline_width: f32,
    /// Gap between the card bottom and the text baseline
    pub bottom_padding: f32,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            height: 0.28,
            font: "Helvetica-Bold".to_string(),
            font_size: 9.0,
            color: RgbColor::BLACK,
            outline_color: RgbColor::WHITE,
            outline_width: 2.0,
            bottom_padding: 0.08,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderOptions {
    pub color: RgbColor,
    /// Stroke width (0 disables the border)
    pub width: f32,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            color: RgbColor::WHITE,
            width: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropMarkOptions {
    pub enabled: bool,
    pub length: f32,
    /// Gap between the card edge and the start of a mark
    pub offset: f32,
    pub color: RgbColor,
    pub width: f32,
}

impl Default for CropMarkOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            length: 0.15,
            offset: 0.04,
            color: RgbColor::new(0.4, 0.4, 0.4),
            width: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub max_cards: usize,
    /// Number of identical sets to produce
    pub sets: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_cards: 24,
            sets: 2,
        }
    }
}

/// Shift applied to back pages to correct printer misregistration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplexOptions {
    pub back_offset_x: f32,
    pub back_offset_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardBackOptions {
    /// One back color per set, cycled when there are more sets than colors
    pub set_colors: Vec<RgbColor>,
    pub frame_color: RgbColor,
    pub frame_width: f32,
    pub frame_margin: f32,
    pub glyph: String,
    pub glyph_color: RgbColor,
    pub glyph_count: usize,
    pub glyph_opacity: [f32; 2],
    pub glyph_size: [f32; 2],
}

impl Default for CardBackOptions {
    fn default() -> Self {
        Self {
            set_colors: vec![RgbColor::new(0.18, 0.38, 0.72), RgbColor::new(0.72, 0.18, 0.18)],
            frame_color: RgbColor::WHITE,
            frame_width: 1.5,
            frame_margin: 0.07,
            glyph: "?".to_string(),
            glyph_color: RgbColor::WHITE,
            glyph_count: 15,
            glyph_opacity: [0.2, 0.4],
            glyph_size: [10.0, 22.0],
        }
    }
}

impl CardBackOptions {
    /// Back color for a zero-based set index
    pub fn set_color(&self, set: usize) -> RgbColor {
        if self.set_colors.is_empty() {
            return RgbColor::BLACK;
        }
        self.set_colors[set % self.set_colors.len()]
    }
}

/// Image enhancement factors; 1.0 leaves the image unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceOptions {
    pub auto_contrast: bool,
    pub saturation: f32,
    pub contrast: f32,
    pub brightness: f32,
    pub sharpness: f32,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            auto_contrast: true,
            saturation: 1.3,
            contrast: 1.1,
            brightness: 1.0,
            sharpness: 1.0,
        }
    }
}

impl CardOptions {
    /// Load options from a YAML file, or JSON when the extension is `.json`
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let options = if is_json {
            serde_json::from_str(&text)?
        } else {
            Self::from_yaml(&text)?
        };
        Ok(options)
    }

    /// Parse options from YAML text; an empty document yields the defaults
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(text)?)
    }

    /// Save options to a file, format chosen like [`CardOptions::load`]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let text = if is_json {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yml::to_string(self)?
        };
        tokio::fs::write(path, text).await?;
        Ok(())
    }

    /// Card grid in points
    pub fn grid(&self) -> Grid {
        Grid {
            columns: self.card.columns,
            rows: self.card.rows,
            page_width: in_to_pt(self.page.width),
            page_height: in_to_pt(self.page.height),
            margin_x: in_to_pt(self.page.margin_x),
            margin_y: in_to_pt(self.page.margin_y),
            card_width: in_to_pt(self.card.width),
            card_height: in_to_pt(self.card.height),
            padding: in_to_pt(self.card.padding),
        }
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("page.width", self.page.width),
            ("page.height", self.page.height),
            ("page.margin_x", self.page.margin_x),
            ("page.margin_y", self.page.margin_y),
            ("card.width", self.card.width),
            ("card.height", self.card.height),
            ("card.padding", self.card.padding),
            ("image.padding", self.image.padding),
            ("name_label.height", self.name_label.height),
            ("name_label.font_size", self.name_label.font_size),
            ("name_label.outline_width", self.name_label.outline_width),
            ("name_label.bottom_padding", self.name_label.bottom_padding),
            ("border.width", self.border.width),
            ("crop_marks.length", self.crop_marks.length),
            ("crop_marks.offset", self.crop_marks.offset),
            ("crop_marks.width", self.crop_marks.width),
            ("duplex.back_offset_x", self.duplex.back_offset_x),
            ("duplex.back_offset_y", self.duplex.back_offset_y),
            ("card_back.frame_width", self.card_back.frame_width),
            ("card_back.frame_margin", self.card_back.frame_margin),
            ("card_back.glyph_size[0]", self.card_back.glyph_size[0]),
            ("card_back.glyph_size[1]", self.card_back.glyph_size[1]),
            ("image_enhance.saturation", self.image_enhance.saturation),
            ("image_enhance.contrast", self.image_enhance.contrast),
            ("image_enhance.brightness", self.image_enhance.brightness),
            ("image_enhance.sharpness", self.image_enhance.sharpness),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(CardError::Config(format!("{} must be a finite number", name)));
        }

        self.grid().validate()?;

        if self.game.max_cards == 0 {
            return Err(CardError::Config("max_cards must be at least 1".to_string()));
        }

        if self.game.sets == 0 {
            return Err(CardError::Config("sets must be at least 1".to_string()));
        }

        if self.image.padding < 0.0 || self.name_label.height < 0.0 {
            return Err(CardError::Config(
                "Image padding and label height cannot be negative".to_string(),
            ));
        }

        let image_width = self.card.width - 2.0 * self.image.padding;
        let image_height = self.card.height - self.name_label.height - 2.0 * self.image.padding;
        if image_width <= 0.0 || image_height <= 0.0 {
            return Err(CardError::Config(format!(
                "Label strip and image padding leave no image area ({:.3}x{:.3} in)",
                image_width, image_height
            )));
        }

        if self.name_label.font.trim().is_empty() {
            return Err(CardError::Config("Label font name is empty".to_string()));
        }

        if self.name_label.font_size <= 0.0 {
            return Err(CardError::Config("Label font size must be positive".to_string()));
        }

        if self.border.width < 0.0
            || self.name_label.outline_width < 0.0
            || self.crop_marks.width < 0.0
            || self.card_back.frame_width < 0.0
        {
            return Err(CardError::Config("Line widths cannot be negative".to_string()));
        }

        if self.card_back.set_colors.is_empty() {
            return Err(CardError::Config(
                "card_back.set_colors needs at least one color".to_string(),
            ));
        }

        let [opacity_low, opacity_high] = self.card_back.glyph_opacity;
        if !(0.0..=1.0).contains(&opacity_low)
            || !(0.0..=1.0).contains(&opacity_high)
            || opacity_low > opacity_high
        {
            return Err(CardError::Config(
                "glyph_opacity must be an ascending range within [0, 1]".to_string(),
            ));
        }

        let [size_low, size_high] = self.card_back.glyph_size;
        if size_low <= 0.0 || size_low > size_high {
            return Err(CardError::Config(
                "glyph_size must be an ascending range of positive sizes".to_string(),
            ));
        }

        if self.card_back.glyph_count > 0 && self.card_back.glyph.is_empty() {
            return Err(CardError::Config("card_back.glyph is empty".to_string()));
        }

        let colors = [
            self.card.background_color,
            self.name_label.color,
            self.name_label.outline_color,
            self.border.color,
            self.crop_marks.color,
            self.card_back.frame_color,
            self.card_back.glyph_color,
        ];
        if !colors
            .iter()
            .chain(self.card_back.set_colors.iter())
            .all(RgbColor::is_normalized)
        {
            return Err(CardError::Config(
                "Color components must be within [0, 1]".to_string(),
            ));
        }

        if self.image_extensions.is_empty() {
            return Err(CardError::Config("No image extensions configured".to_string()));
        }

        Ok(())
    }
}
