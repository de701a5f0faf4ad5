#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use duet_layout::Platform;
use iced::{Element, Subscription, Task, Theme, event, keyboard, window};

use crate::features::Features;
use crate::features::sidebar::{ShortcutLabels, SidebarFeature};
use crate::fonts::FontsConfig;
use crate::theme::ThemeManager;
use crate::ui::widgets::{explorer_panel, titlebar};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
const APP_TITLE: &str = "Desktop App";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    Titlebar(titlebar::TitlebarEvent),
    ExplorerPanel(explorer_panel::ExplorerPanelEvent),
    KeyPressed {
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
        status: event::Status,
    },
    Window(window::Id, window::Event),
}

pub(crate) struct App {
    platform: Platform,
    labels: ShortcutLabels,
    theme_manager: ThemeManager,
    fonts: FontsConfig,
    features: Features,
    is_fullscreen: bool,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let platform = Platform::current();
        log::info!("starting on {platform:?}");

        let app = App {
            platform,
            labels: ShortcutLabels::new(platform),
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            features: Features::new(SidebarFeature::load()),
            is_fullscreen: false,
        };

        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        String::from(APP_TITLE)
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }
}
