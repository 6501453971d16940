use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Font '{name}' unavailable: {reason}")]
    FontUnavailable { name: String, reason: String },
    #[error("Invalid image {path:?}: {reason}")]
    InvalidImage { path: PathBuf, reason: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("No image files found in {0:?}")]
    NoImages(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CardError>;

/// Normalized RGB color, written as `[r, g, b]` in config files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct RgbColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor::new(1.0, 1.0, 1.0);
    pub const BLACK: RgbColor = RgbColor::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// All components within [0, 1]
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Components scaled to 8-bit channel values
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl From<[f32; 3]> for RgbColor {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<RgbColor> for [f32; 3] {
    fn from(color: RgbColor) -> Self {
        [color.r, color.g, color.b]
    }
}

/// One input portrait: decoded pixels plus the text printed under it
#[derive(Debug, Clone)]
pub struct CardSource {
    pub path: PathBuf,
    pub label: String,
    pub image: Arc<RgbImage>,
}

impl CardSource {
    pub fn new(path: impl AsRef<Path>, label: impl Into<String>, image: RgbImage) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            label: label.into(),
            image: Arc::new(image),
        }
    }

    /// Pixel dimensions (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Ordered set of cards, in file-name order
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<CardSource>,
}

impl Deck {
    pub fn new(cards: Vec<CardSource>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardSource> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[CardSource] {
        &self.cards
    }

    pub fn truncate(&mut self, max_cards: usize) {
        self.cards.truncate(max_cards);
    }
}
