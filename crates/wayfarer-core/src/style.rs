//! Display colors for terrain and combatants.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
///
/// [`Color::DEFAULT`] means "terminal default": text renderers reset the
/// foreground, graphical renderers pick their own neutral shade.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// The default / unset colour (0).
    pub const DEFAULT: Self = Self(0);

    pub const RED: Self = Self::from_rgb(205, 49, 49);
    pub const GREEN: Self = Self::from_rgb(13, 188, 121);
    pub const YELLOW: Self = Self::from_rgb(229, 229, 16);
    pub const CYAN: Self = Self::from_rgb(17, 168, 205);
    pub const MAGENTA: Self = Self::from_rgb(188, 63, 188);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Whether this is the unset colour.
    #[inline]
    pub const fn is_default(self) -> bool {
        self.0 == Self::DEFAULT.0
    }
}
