//! CPU pixel buffers: [`Canvas`] (the frame being drawn) and [`Sprite`]
//! (an image blitted onto it). Pixels are `0xAARRGGBB`.

use wayfarer_core::Color;

pub const BLACK: u32 = 0xFF000000;

/// Opaque pixel from RGB components.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    BLACK | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Opaque pixel for a terrain colour. The default colour maps to a light
/// gray so it shows on dark backgrounds.
#[inline]
pub fn color_to_pixel(c: Color) -> u32 {
    if c.is_default() {
        rgb(200, 200, 200)
    } else {
        rgb(c.r(), c.g(), c.b())
    }
}

/// Alpha-blend `src` over the opaque `dst`.
#[inline]
fn blend(dst: u32, src: u32) -> u32 {
    let a = src >> 24;
    match a {
        0 => dst,
        255 => src,
        _ => {
            let inv = 255 - a;
            let ch = |shift: u32| {
                let s = (src >> shift) & 0xFF;
                let d = (dst >> shift) & 0xFF;
                ((s * a + d * inv) / 255) << shift
            };
            BLACK | ch(16) | ch(8) | ch(0)
        }
    }
}

// ---------------------------------------------------------------------------
// Sprite
// ---------------------------------------------------------------------------

/// An image with per-pixel alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Sprite {
    /// A single-colour sprite.
    pub fn solid(width: usize, height: usize, pixel: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        }
    }

    /// Convert from a decoded RGBA image.
    pub fn from_rgba(img: &image::RgbaImage) -> Self {
        let (w, h) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();
        Self {
            width: w as usize,
            height: h as usize,
            pixels,
        }
    }

    /// Nearest-neighbour 2× upscale.
    pub fn scale2x(&self) -> Self {
        let (w, h) = (self.width * 2, self.height * 2);
        let mut pixels = Vec::with_capacity(w * h);
        for y in 0..h {
            let row = &self.pixels[(y / 2) * self.width..(y / 2 + 1) * self.width];
            for x in 0..w {
                pixels.push(row[x / 2]);
            }
        }
        Self {
            width: w,
            height: h,
            pixels,
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// Opaque frame buffer. Drawing outside the bounds is clipped.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn fill(&mut self, pixel: u32) {
        self.pixels.fill(pixel);
    }

    /// Blend `pixel` at (x, y), ignoring points off the canvas.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, pixel: u32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = y as usize * self.width + x as usize;
        self.pixels[i] = blend(self.pixels[i], pixel);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, pixel: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, pixel);
            }
        }
    }

    /// Rectangle outline `thickness` pixels wide, drawn inside the rect.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, thickness: i32, pixel: u32) {
        let t = thickness.min(w / 2).min(h / 2).max(0);
        self.fill_rect(x, y, w, t, pixel);
        self.fill_rect(x, y + h - t, w, t, pixel);
        self.fill_rect(x, y + t, t, h - 2 * t, pixel);
        self.fill_rect(x + w - t, y + t, t, h - 2 * t, pixel);
    }

    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        for sy in 0..sprite.height {
            let row = &sprite.pixels[sy * sprite.width..(sy + 1) * sprite.width];
            for (sx, &p) in row.iter().enumerate() {
                self.put(x + sx as i32, y + sy as i32, p);
            }
        }
    }

    /// Copy into a surface buffer of `buf_width`×`buf_height`. Areas outside
    /// the canvas are cleared to black.
    pub fn blit_to_buffer(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let copy_w = self.width.min(buf_width);
        let copy_h = self.height.min(buf_height);

        if buf_width > self.width || buf_height > self.height {
            buf.fill(BLACK);
        }

        for y in 0..copy_h {
            let src = y * self.width;
            let dst = y * buf_width;
            if dst + copy_w <= buf.len() {
                buf[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale2x_duplicates_pixels() {
        let s = Sprite {
            width: 2,
            height: 1,
            pixels: vec![1, 2],
        };
        let d = s.scale2x();
        assert_eq!((d.width, d.height), (4, 2));
        assert_eq!(d.pixels, vec![1, 1, 2, 2, 1, 1, 2, 2]);
    }

    #[test]
    fn transparent_pixels_are_skipped() {
        let mut c = Canvas::new(2, 1);
        c.fill(rgb(10, 20, 30));
        let s = Sprite {
            width: 2,
            height: 1,
            pixels: vec![0x00FFFFFF, rgb(1, 2, 3)],
        };
        c.blit(&s, 0, 0);
        assert_eq!(c.pixels(), &[rgb(10, 20, 30), rgb(1, 2, 3)]);
    }

    #[test]
    fn drawing_is_clipped() {
        let mut c = Canvas::new(4, 4);
        c.fill_rect(-2, -2, 4, 4, rgb(255, 0, 0));
        c.blit(&Sprite::solid(3, 3, rgb(0, 255, 0)), 3, 3);
        assert_eq!(c.pixel(1, 1), Some(rgb(255, 0, 0)));
        assert_eq!(c.pixel(2, 2), Some(BLACK));
        assert_eq!(c.pixel(3, 3), Some(rgb(0, 255, 0)));
        assert_eq!(c.pixel(4, 4), None);
    }

    #[test]
    fn stroke_leaves_the_middle() {
        let mut c = Canvas::new(10, 10);
        c.stroke_rect(0, 0, 10, 10, 3, rgb(9, 9, 9));
        assert_eq!(c.pixel(0, 0), Some(rgb(9, 9, 9)));
        assert_eq!(c.pixel(2, 5), Some(rgb(9, 9, 9)));
        assert_eq!(c.pixel(5, 5), Some(BLACK));
        assert_eq!(c.pixel(3, 3), Some(BLACK));
    }

    #[test]
    fn half_alpha_blends() {
        assert_eq!(blend(BLACK, 0x80FFFFFF), rgb(128, 128, 128));
    }

    #[test]
    fn smaller_buffer_gets_the_top_left() {
        let mut c = Canvas::new(3, 2);
        c.fill_rect(0, 0, 1, 1, rgb(1, 1, 1));
        let mut buf = vec![0; 4];
        c.blit_to_buffer(&mut buf, 2, 2);
        assert_eq!(buf, vec![rgb(1, 1, 1), BLACK, BLACK, BLACK]);
    }
}
