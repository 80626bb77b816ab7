//! The tile registry: every terrain kind the map can hold.
//!
//! Terrain kinds are process-wide statics. Grid cells hold a [`Tile`] (a
//! `&'static TerrainKind`), so a kind is never copied per cell and identity
//! comparisons are pointer comparisons.

use std::fmt;

use crate::style::Color;

/// A terrain kind with its display glyph, name and colour.
#[derive(Debug, PartialEq, Eq)]
pub struct TerrainKind {
    pub symbol: char,
    pub name: &'static str,
    pub color: Color,
}

/// A reference to a registered terrain kind, as stored in grid cells.
pub type Tile = &'static TerrainKind;

impl TerrainKind {
    pub const fn new(symbol: char, name: &'static str, color: Color) -> Self {
        Self {
            symbol,
            name,
            color,
        }
    }

    /// Legend text, e.g. `"~ WATER"`.
    pub fn legend(&self) -> String {
        format!("{} {}", self.symbol, self.name.to_uppercase())
    }

    /// Whether enemies may never appear on this terrain. Only water blocks
    /// spawns, and only by name.
    pub fn blocks_spawns(&self) -> bool {
        self.name == WATER.name
    }

    /// Identity comparison against another registered kind.
    #[inline]
    pub fn is(&self, other: &TerrainKind) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub static PLAINS: TerrainKind = TerrainKind::new('.', "plains", Color::YELLOW);
pub static FOREST: TerrainKind = TerrainKind::new('8', "forest", Color::GREEN);
pub static PINES: TerrainKind = TerrainKind::new('Y', "pines", Color::GREEN);
pub static MOUNTAIN: TerrainKind = TerrainKind::new('A', "mountain", Color::DEFAULT);
pub static WATER: TerrainKind = TerrainKind::new('~', "water", Color::CYAN);
pub static TOWN: TerrainKind = TerrainKind::new('M', "town", Color::MAGENTA);
pub static PLAYER_MARKER: TerrainKind = TerrainKind::new('X', "player", Color::RED);

/// Every registered kind, player marker included.
pub static REGISTRY: [Tile; 7] = [
    &PLAINS,
    &FOREST,
    &PINES,
    &MOUNTAIN,
    &WATER,
    &TOWN,
    &PLAYER_MARKER,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_uppercases_name() {
        assert_eq!(WATER.legend(), "~ WATER");
        assert_eq!(PLAYER_MARKER.legend(), "X PLAYER");
    }

    #[test]
    fn only_water_blocks_spawns() {
        for t in REGISTRY {
            assert_eq!(t.blocks_spawns(), t.is(&WATER), "{t}");
        }
    }

    #[test]
    fn identity_is_by_reference() {
        assert!(FOREST.is(&FOREST));
        // Same colour, different kinds.
        assert!(!FOREST.is(&PINES));
    }

    #[test]
    fn registry_names_are_unique() {
        for (i, a) in REGISTRY.iter().enumerate() {
            for b in &REGISTRY[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }
}
