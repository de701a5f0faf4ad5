use iced::{Subscription, event, keyboard, window};

use crate::app::{App, Event};

pub(super) fn subscription(app: &App) -> Subscription<Event> {
    let win_subs = window::events().map(|(id, event)| Event::Window(id, event));

    if !app.features.sidebar().is_listening() {
        return win_subs;
    }

    let key_subs = event::listen_with(key_pressed);
    Subscription::batch(vec![win_subs, key_subs])
}

fn key_pressed(
    event: iced::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Event> {
    let iced::Event::Keyboard(keyboard::Event::KeyPressed {
        key, modifiers, ..
    }) = event
    else {
        return None;
    };

    Some(Event::KeyPressed {
        key,
        modifiers,
        status,
    })
}
