mod app;
mod features;
mod fonts;
mod icons;
mod theme;
mod ui;

use duet_layout::Platform;
use env_logger::Env;
use iced::{Size, window};
use image::ImageFormat;

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::icons::APP_ICON_DATA;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .antialiasing(true)
        .window(window_settings(Platform::current()))
        .resizable(true)
        .subscription(App::subscription)
        .run()
}

/// Borderless window everywhere except macOS, which keeps its native
/// traffic lights over a transparent titlebar.
fn window_settings(platform: Platform) -> window::Settings {
    window::Settings {
        decorations: platform.is_mac(),
        min_size: Some(Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        }),
        icon: window::icon::from_file_data(
            APP_ICON_DATA,
            Some(ImageFormat::Png),
        )
        .ok(),
        exit_on_close_request: false,
        #[cfg(target_os = "macos")]
        platform_specific: window::settings::PlatformSpecific {
            title_hidden: true,
            titlebar_transparent: true,
            fullsize_content_view: true,
        },
        ..window::Settings::default()
    }
}
