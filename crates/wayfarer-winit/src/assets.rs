//! Sprite and frame loading with generated fallbacks.
//!
//! Layout under the asset directory:
//!
//! ```text
//! <asset_dir>/font.ttf
//! <asset_dir>/images/<terrain name>.png
//! <asset_dir>/images/map_frame.png
//! <asset_dir>/images/hud_frame.png
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use wayfarer_core::tile::{self, Tile};

use crate::canvas::{Sprite, color_to_pixel};

/// Errors raised while loading assets.
#[derive(Debug)]
pub enum AssetError {
    /// The font data could not be parsed.
    InvalidFont(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::InvalidFont(e) => write!(f, "invalid font data: {e}"),
            AssetError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            AssetError::Image { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::InvalidFont(_) => None,
            AssetError::Io { source, .. } => Some(source),
            AssetError::Image { source, .. } => Some(source),
        }
    }
}

/// Decode a PNG (or any format `image` was built with) into a sprite.
pub fn load_sprite(path: &Path) -> Result<Sprite, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Sprite::from_rgba(&img.to_rgba8()))
}

/// Load a tile sprite and fit it to `size`×`size`.
fn load_tile(path: &Path, size: u32) -> Result<Sprite, AssetError> {
    let img = image::open(path)
        .map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    if img.dimensions() == (size, size) {
        Ok(Sprite::from_rgba(&img))
    } else {
        Ok(Sprite::from_rgba(&imageops::resize(&img, size, size, FilterType::Nearest)))
    }
}

/// Everything drawn from image files. Tile sprites are stored already
/// scaled 2×.
pub struct SpriteSet {
    tiles: HashMap<&'static str, Sprite>,
    pub map_frame: Option<Sprite>,
    pub hud_frame: Option<Sprite>,
}

impl SpriteSet {
    /// Flat-colour tiles and no frames.
    pub fn fallback(tile_size: u32) -> Self {
        let tiles = tile::REGISTRY
            .iter()
            .map(|t| (t.name, flat_tile(*t, tile_size)))
            .collect();
        Self {
            tiles,
            map_frame: None,
            hud_frame: None,
        }
    }

    /// Load every sprite from `asset_dir`. Missing or broken files are
    /// logged and replaced by generated ones.
    pub fn load(asset_dir: &Path, tile_size: u32) -> Self {
        let images = asset_dir.join("images");
        let mut set = Self::fallback(tile_size);
        for t in tile::REGISTRY {
            let path = images.join(format!("{}.png", t.name));
            match load_tile(&path, tile_size) {
                Ok(s) => {
                    set.tiles.insert(t.name, s.scale2x());
                }
                Err(e) => log::warn!("{e}; drawing {} as a flat tile", t.name),
            }
        }
        set.map_frame = load_frame(&images.join("map_frame.png"));
        set.hud_frame = load_frame(&images.join("hud_frame.png"));
        set
    }

    /// 2× sprite for `t`.
    pub fn tile(&self, t: Tile) -> Option<&Sprite> {
        self.tiles.get(t.name)
    }
}

fn flat_tile(t: Tile, tile_size: u32) -> Sprite {
    let side = tile_size as usize * 2;
    Sprite::solid(side, side, color_to_pixel(t.color))
}

fn load_frame(path: &Path) -> Option<Sprite> {
    match load_sprite(path) {
        Ok(s) => Some(s.scale2x()),
        Err(e) => {
            log::warn!("{e}; drawing a plain frame");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextPainter;

    #[test]
    fn missing_assets_fall_back() {
        let set = SpriteSet::load(Path::new("/nonexistent/wayfarer-assets"), 16);
        assert!(set.map_frame.is_none());
        assert!(set.hud_frame.is_none());
        for t in tile::REGISTRY {
            let s = set.tile(t);
            assert_eq!(s.map(|s| (s.width, s.height)), Some((32, 32)));
        }
        let water = set.tile(&tile::WATER).map(|s| s.pixels[0]);
        assert_eq!(water, Some(color_to_pixel(tile::WATER.color)));
    }

    #[test]
    fn missing_image_reports_path() {
        let err = load_sprite(Path::new("/nonexistent/x.png")).err();
        let msg = err.map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.starts_with("/nonexistent/x.png"), "{msg}");
    }

    #[test]
    fn bad_font_is_an_error() {
        assert!(matches!(
            TextPainter::from_bytes(b"not a font"),
            Err(AssetError::InvalidFont(_))
        ));
        assert!(matches!(
            TextPainter::from_file(Path::new("/nonexistent/font.ttf")),
            Err(AssetError::Io { .. })
        ));
    }
}
