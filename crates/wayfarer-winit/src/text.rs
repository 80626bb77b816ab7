//! HUD text rasterized with fontdue.

use std::collections::HashMap;
use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::assets::AssetError;
use crate::canvas::Canvas;

/// Which point of the text box sits on the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    /// Middle of the left edge.
    Left,
    /// Middle of the right edge.
    Right,
    /// Middle of the top edge.
    Top,
}

struct Glyph {
    bitmap: Vec<u8>,
    width: usize,
    height: usize,
    xmin: i32,
    ymin: i32,
    advance: f32,
}

/// Draws single-line text onto a [`Canvas`]. Glyphs are cached per
/// character and pixel size.
pub struct TextPainter {
    font: Font,
    cache: HashMap<(char, u32), Glyph>,
}

impl TextPainter {
    pub fn from_bytes(data: &[u8]) -> Result<Self, AssetError> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| AssetError::InvalidFont(e.to_string()))?;
        Ok(Self {
            font,
            cache: HashMap::new(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, AssetError> {
        let data = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&data)
    }

    fn glyph(&mut self, ch: char, size: u32) -> &Glyph {
        let font = &self.font;
        self.cache.entry((ch, size)).or_insert_with(|| {
            let (m, bitmap) = font.rasterize(ch, size as f32);
            Glyph {
                bitmap,
                width: m.width,
                height: m.height,
                xmin: m.xmin,
                ymin: m.ymin,
                advance: m.advance_width,
            }
        })
    }

    /// Ascent and descent at `size`, falling back to a 0.8/0.2 split.
    fn line_metrics(&self, size: u32) -> (f32, f32) {
        let size = size as f32;
        self.font
            .horizontal_line_metrics(size)
            .map(|m| (m.ascent, m.descent))
            .unwrap_or((size * 0.8, -(size * 0.2)))
    }

    /// Width and height of `text` at `size`, in pixels.
    pub fn measure(&mut self, text: &str, size: u32) -> (i32, i32) {
        let width: f32 = text.chars().map(|c| self.glyph(c, size).advance).sum();
        let (ascent, descent) = self.line_metrics(size);
        (width.ceil() as i32, (ascent - descent).ceil() as i32)
    }

    /// Draw `text` with the `anchor` point of its box at (x, y).
    pub fn draw(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        x: i32,
        y: i32,
        size: u32,
        anchor: Anchor,
        color: u32,
    ) {
        let (w, h) = self.measure(text, size);
        let (left, top) = match anchor {
            Anchor::Center => (x - w / 2, y - h / 2),
            Anchor::Left => (x, y - h / 2),
            Anchor::Right => (x - w, y - h / 2),
            Anchor::Top => (x - w / 2, y),
        };
        let baseline = top + self.line_metrics(size).0.ceil() as i32;
        let rgb = color & 0x00FF_FFFF;

        let mut pen = left as f32;
        for ch in text.chars() {
            let g = self.glyph(ch, size);
            let gx = pen.round() as i32 + g.xmin;
            let gy = baseline - g.ymin - g.height as i32;
            for row in 0..g.height {
                for col in 0..g.width {
                    let alpha = g.bitmap[row * g.width + col];
                    if alpha > 0 {
                        canvas.put(gx + col as i32, gy + row as i32, ((alpha as u32) << 24) | rgb);
                    }
                }
            }
            pen += g.advance;
        }
    }
}
