use duet_layout::{FocusTarget, KeyPress, Modifiers};
use iced::event::Status;
use iced::keyboard::{self, Key};

/// Translate an iced key press into the dispatcher's input.
///
/// The filter field is the only widget that captures key presses, so a
/// captured event is treated as typed into a text input.
pub(crate) fn key_press(
    key: &Key,
    modifiers: keyboard::Modifiers,
    status: Status,
) -> KeyPress {
    let focus = match status {
        Status::Captured => FocusTarget::TextInput,
        Status::Ignored => FocusTarget::None,
    };

    KeyPress {
        key: key_text(key),
        modifiers: convert_modifiers(modifiers),
        focus,
    }
}

fn key_text(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_string()),
        Key::Named(named) => Some(format!("{named:?}")),
        Key::Unidentified => None,
    }
}

fn convert_modifiers(modifiers: keyboard::Modifiers) -> Modifiers {
    let mut converted = Modifiers::empty();
    converted.set(Modifiers::SHIFT, modifiers.shift());
    converted.set(Modifiers::CONTROL, modifiers.control());
    converted.set(Modifiers::ALT, modifiers.alt());
    converted.set(Modifiers::META, modifiers.logo());
    converted
}
