//! Translates winit keyboard events into wayfarer [`Msg`] values.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key as WKey, NamedKey};

use wayfarer_core::{Key, Msg};

/// Key-down edges only: releases and auto-repeats are dropped.
pub(crate) fn translate_keyboard(event: &KeyEvent) -> Option<Msg> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    translate_key(&event.logical_key)
}

pub(crate) fn translate_key(key: &WKey) -> Option<Msg> {
    let key = match key {
        WKey::Named(NamedKey::Enter) => Key::Enter,
        WKey::Named(NamedKey::Escape) => Key::Escape,
        WKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return None,
            }
        }
        _ => return None,
    };
    Some(Msg::KeyDown(key))
}
