//! Input events: [`Msg`] and [`Key`].

/// A keyboard key, as far as the game cares about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Enter,
    Escape,
    /// A printable character.
    Char(char),
    /// Input with no binding, such as a typed word. Confirms in text
    /// combat, moves nothing.
    Other,
}

/// An input message delivered to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A key was pressed (edge event, never a held-key repeat).
    KeyDown(Key),
    /// Request to quit: window closed, interrupt, or end of input.
    Quit,
}

impl Msg {
    /// Convenience: a `KeyDown` for a character.
    pub fn char(c: char) -> Self {
        Self::KeyDown(Key::Char(c))
    }
}
