//! PDF output
//!
//! Translates draw commands into printpdf operations. Images are cropped and
//! embedded once per card and reused by every set.

use crate::constants::{DOCUMENT_TITLE, in_to_mm};
use crate::font::{FontHandle, FontSource, builtin_font};
use crate::layout::{CropRect, Rect, SheetPlan, layout};
use crate::options::CardOptions;
use crate::render::{DrawCommand, PageCommands, TextMode, TextRun, render_pages};
use crate::stats::{DeckStatistics, calculate_statistics};
use crate::types::{CardError, Deck, Result, RgbColor};
use printpdf::*;
use rand::Rng;
use std::collections::HashMap;
use std::path::Path;

/// Lay out, render and write the deck to `output_path`.
///
/// Validation, layout and rendering all finish before the file is created,
/// so a failure never leaves a partial document behind.
pub async fn generate_pdf(
    deck: &Deck,
    options: &CardOptions,
    font: &FontHandle,
    output_path: impl AsRef<Path>,
) -> Result<DeckStatistics> {
    options.validate()?;

    let deck = deck.clone();
    let options = options.clone();
    let font = font.clone();
    let output_path = output_path.as_ref().to_owned();

    let (bytes, stats) = tokio::task::spawn_blocking(move || {
        let plan = layout(&deck, &options.grid())?;
        let stats = calculate_statistics(&plan, &options);
        log::info!(
            "Generating {} cards x {} set(s) -> {} pages",
            stats.cards,
            stats.sets,
            stats.output_pages
        );
        let bytes = render_pdf_bytes(&plan, &deck, &options, &font, &mut rand::rng())?;
        Ok::<_, CardError>((bytes, stats))
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Saved {:?}", output_path);

    Ok(stats)
}

/// Render a planned deck to PDF bytes
pub fn render_pdf_bytes<R: Rng + ?Sized>(
    plan: &SheetPlan,
    deck: &Deck,
    options: &CardOptions,
    font: &FontHandle,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let pages = render_pages(plan, deck, options, font, rng)?;

    let mut writer = PdfWriter::new(font)?;
    let width = Mm(in_to_mm(options.page.width));
    let height = Mm(in_to_mm(options.page.height));
    for page in &pages {
        writer.add_page(page, deck, width, height)?;
    }

    Ok(writer.save())
}

enum DocumentFont {
    Builtin(BuiltinFont),
    Embedded(FontId),
}

struct EmbeddedImage {
    id: XObjectId,
    width: u32,
    height: u32,
}

struct PdfWriter {
    doc: PdfDocument,
    font: DocumentFont,
    images: HashMap<usize, EmbeddedImage>,
    alpha_states: HashMap<u32, ExtendedGraphicsStateId>,
}

impl PdfWriter {
    fn new(font: &FontHandle) -> Result<Self> {
        let mut doc = PdfDocument::new(DOCUMENT_TITLE);

        let font = match font.source() {
            FontSource::Builtin => DocumentFont::Builtin(builtin_font(font.name()).ok_or_else(
                || CardError::FontUnavailable {
                    name: font.name().to_string(),
                    reason: "not a standard PDF font".to_string(),
                },
            )?),
            FontSource::TrueType(bytes) => {
                let mut warnings = Vec::new();
                let parsed = ParsedFont::from_bytes(&bytes[..], 0, &mut warnings).ok_or_else(|| {
                    CardError::FontUnavailable {
                        name: font.name().to_string(),
                        reason: "failed to parse font for embedding".to_string(),
                    }
                })?;
                DocumentFont::Embedded(doc.add_font(&parsed))
            }
        };

        Ok(Self {
            doc,
            font,
            images: HashMap::new(),
            alpha_states: HashMap::new(),
        })
    }

    fn add_page(&mut self, page: &PageCommands, deck: &Deck, width: Mm, height: Mm) -> Result<()> {
        let mut ops = Vec::new();
        for command in &page.commands {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    ops.push(Op::SetFillColor { col: pdf_color(*color) });
                    ops.push(Op::DrawPolygon {
                        polygon: Polygon {
                            rings: vec![PolygonRing {
                                points: rect_points(rect),
                            }],
                            mode: PaintMode::Fill,
                            winding_order: WindingOrder::NonZero,
                        },
                    });
                }
                DrawCommand::StrokeRect { rect, color, width } => {
                    push_stroke_style(&mut ops, *color, *width);
                    ops.push(Op::DrawLine {
                        line: Line {
                            points: rect_points(rect),
                            is_closed: true,
                        },
                    });
                }
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    push_stroke_style(&mut ops, *color, *width);
                    ops.push(Op::DrawLine {
                        line: Line {
                            points: vec![line_point(from.0, from.1), line_point(to.0, to.1)],
                            is_closed: false,
                        },
                    });
                }
                DrawCommand::Image { card, crop, rect } => {
                    let image = self.embed_image(*card, crop, deck)?;
                    ops.push(Op::UseXobject {
                        id: image.id.clone(),
                        transform: XObjectTransform {
                            translate_x: Some(Pt(rect.x)),
                            translate_y: Some(Pt(rect.y)),
                            rotate: None,
                            scale_x: Some(rect.width / image.width as f32),
                            scale_y: Some(rect.height / image.height as f32),
                            dpi: Some(72.0),
                        },
                    });
                }
                DrawCommand::Text(run) => self.push_text(&mut ops, run),
            }
        }

        self.doc.pages.push(PdfPage::new(width, height, ops));
        Ok(())
    }

    /// Crop and embed a card image the first time it is drawn
    fn embed_image(
        &mut self,
        card: usize,
        crop: &CropRect,
        deck: &Deck,
    ) -> Result<&EmbeddedImage> {
        if !self.images.contains_key(&card) {
            let source = deck
                .get(card)
                .ok_or_else(|| CardError::Pdf(format!("No image for card {}", card)))?;
            let (image_width, image_height) = source.dimensions();
            let (x, y, width, height) = crop.to_pixels(image_width, image_height);
            let cropped = ::image::imageops::crop_imm(source.image.as_ref(), x, y, width, height)
                .to_image();

            let raw = RawImage {
                pixels: RawImageData::U8(cropped.into_raw()),
                width: width as usize,
                height: height as usize,
                data_format: RawImageFormat::RGB8,
                tag: Vec::new(),
            };
            let id = self.doc.add_image(&raw);
            self.images.insert(card, EmbeddedImage { id, width, height });
        }

        self.images
            .get(&card)
            .ok_or_else(|| CardError::Pdf(format!("Image for card {} not embedded", card)))
    }

    fn push_text(&mut self, ops: &mut Vec<Op>, run: &TextRun) {
        ops.push(Op::SaveGraphicsState);

        if run.opacity < 1.0 {
            let gs = self.alpha_state(run.opacity);
            ops.push(Op::LoadGraphicsState { gs });
        }

        match run.mode {
            TextMode::Fill => ops.push(Op::SetFillColor {
                col: pdf_color(run.color),
            }),
            TextMode::Stroke { width } => {
                push_stroke_style(ops, run.color, width);
                ops.push(Op::SetTextRenderingMode {
                    mode: TextRenderingMode::Stroke,
                });
            }
        }

        let matrix = if run.rotation_degrees == 0.0 {
            TextMatrix::Translate(Pt(run.x), Pt(run.y))
        } else {
            TextMatrix::TranslateRotate(Pt(run.x), Pt(run.y), run.rotation_degrees)
        };
        let items = vec![TextItem::Text(run.text.clone())];

        ops.push(Op::StartTextSection);
        match &self.font {
            DocumentFont::Builtin(font) => {
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(run.size),
                    font: *font,
                });
                ops.push(Op::SetTextMatrix { matrix });
                ops.push(Op::WriteTextBuiltinFont { items, font: *font });
            }
            DocumentFont::Embedded(font) => {
                ops.push(Op::SetFontSize {
                    size: Pt(run.size),
                    font: font.clone(),
                });
                ops.push(Op::SetTextMatrix { matrix });
                ops.push(Op::WriteText {
                    items,
                    font: font.clone(),
                });
            }
        }
        ops.push(Op::EndTextSection);

        ops.push(Op::RestoreGraphicsState);
    }

    /// Graphics state for a fill opacity, shared per whole percent
    fn alpha_state(&mut self, opacity: f32) -> ExtendedGraphicsStateId {
        let percent = (opacity.clamp(0.0, 1.0) * 100.0).round() as u32;
        if let Some(id) = self.alpha_states.get(&percent) {
            return id.clone();
        }

        let state =
            ExtendedGraphicsState::default().with_current_fill_alpha(percent as f32 / 100.0);
        let id = self.doc.add_graphics_state(state);
        self.alpha_states.insert(percent, id.clone());
        id
    }

    fn save(self) -> Vec<u8> {
        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("PDF warning: {:?}", warning);
        }
        bytes
    }
}

fn pdf_color(color: RgbColor) -> Color {
    Color::Rgb(Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
        icc_profile: None,
    })
}

fn push_stroke_style(ops: &mut Vec<Op>, color: RgbColor, width: f32) {
    ops.push(Op::SetOutlineColor {
        col: pdf_color(color),
    });
    ops.push(Op::SetOutlineThickness { pt: Pt(width) });
}

fn line_point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

fn rect_points(rect: &Rect) -> Vec<LinePoint> {
    vec![
        line_point(rect.x, rect.y),
        line_point(rect.right(), rect.y),
        line_point(rect.right(), rect.top()),
        line_point(rect.x, rect.top()),
    ]
}
