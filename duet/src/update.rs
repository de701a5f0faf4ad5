use duet_layout::Side;
use iced::{Task, window};

use super::{App, Event};
use crate::features::Feature;
use crate::features::explorer::ExplorerEvent;
use crate::features::sidebar::{self, SidebarEvent};
use crate::ui::widgets::{explorer_panel, titlebar};

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    use Event::*;

    match event {
        Titlebar(event) => handle_titlebar(app, event),
        ExplorerPanel(event) => handle_explorer_panel(app, event),
        KeyPressed {
            key,
            modifiers,
            status,
        } => {
            let press = sidebar::key_press(&key, modifiers, status);
            app.features
                .sidebar_mut()
                .reduce(SidebarEvent::KeyPressed(press), &())
        },
        Window(id, window::Event::CloseRequested) => {
            teardown(app).chain(window::close(id))
        },
        Window(..) => Task::none(),
    }
}

fn handle_titlebar(
    app: &mut App,
    event: titlebar::TitlebarEvent,
) -> Task<Event> {
    use titlebar::TitlebarEvent::*;

    match event {
        ToggleLeft => toggle_panel(app, Side::Left),
        ToggleRight => toggle_panel(app, Side::Right),
        ToggleFullScreen => toggle_full_screen(app),
        MinimizeWindow => {
            window::latest().and_then(|id| window::minimize(id, true))
        },
        CloseWindow => {
            teardown(app).chain(window::latest().and_then(window::close))
        },
        StartWindowDrag => window::latest().and_then(window::drag),
    }
}

fn handle_explorer_panel(
    app: &mut App,
    event: explorer_panel::ExplorerPanelEvent,
) -> Task<Event> {
    match event {
        explorer_panel::ExplorerPanelEvent::FilterChanged(filter) => app
            .features
            .explorer_mut()
            .reduce(ExplorerEvent::FilterChanged(filter), &()),
    }
}

fn toggle_panel(app: &mut App, side: Side) -> Task<Event> {
    app.features
        .sidebar_mut()
        .reduce(SidebarEvent::Toggle(side), &())
}

/// Release the keyboard shortcuts before the window goes away.
fn teardown(app: &mut App) -> Task<Event> {
    log::info!("closing window");
    app.features
        .sidebar_mut()
        .reduce(SidebarEvent::Teardown, &())
}

fn toggle_full_screen(app: &mut App) -> Task<Event> {
    app.is_fullscreen = !app.is_fullscreen;

    let mode = if app.is_fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };

    window::latest().and_then(move |id| window::set_mode(id, mode))
}
