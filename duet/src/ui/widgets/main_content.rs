use iced::widget::{Row, Space, column, container, row, text};
use iced::{Border, Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;
use crate::ui::components::key_cap::{self, KeyCapProps};

const CONTENT_MAX_WIDTH: f32 = 448.0;
const CONTENT_PADDING: f32 = 32.0;
const HEADING_GAP: f32 = 12.0;
const DESCRIPTION_GAP: f32 = 24.0;
const DESCRIPTION_SIZE: f32 = 14.0;
const SHORTCUTS_PADDING: f32 = 16.0;
const SHORTCUTS_SPACING: f32 = 8.0;
const SHORTCUTS_RADIUS: f32 = 8.0;
const KEY_SPACING: f32 = 4.0;
const LABEL_GAP: f32 = 16.0;

const HEADING: &str = "Native Desktop Layout";
const DESCRIPTION: &str = "Three-column layout with collapsible sidebars, \
    OS-aware titlebar, and keyboard shortcuts. Built with Rust and iced.";

/// The main area is static and emits no events.
#[derive(Debug, Clone)]
pub(crate) enum MainContentEvent {}

/// Props for rendering the main content area.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MainContentProps<'a> {
    pub(crate) left_keys: &'a [&'static str],
    pub(crate) right_keys: &'a [&'static str],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Centered welcome text with the shortcut reference card.
pub(crate) fn view<'a>(
    props: MainContentProps<'a>,
) -> Element<'a, MainContentEvent> {
    let palette = props.theme.palette();

    let heading = text(HEADING)
        .size(props.fonts.heading.size)
        .font(props.fonts.heading.font_type)
        .color(palette.foreground);

    let description = text(DESCRIPTION)
        .size(DESCRIPTION_SIZE)
        .color(palette.text_secondary)
        .align_x(alignment::Horizontal::Center);

    let shortcuts = column![
        shortcut_row("Toggle left sidebar", props.left_keys, props),
        shortcut_row("Toggle right sidebar", props.right_keys, props),
    ]
    .spacing(SHORTCUTS_SPACING);

    let card_background = palette.sidebar;
    let card_border = palette.border;
    let card = container(shortcuts)
        .padding(SHORTCUTS_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(card_background.into()),
            border: Border {
                color: card_border,
                width: 1.0,
                radius: SHORTCUTS_RADIUS.into(),
            },
            ..Default::default()
        });

    let body = column![
        heading,
        Space::new().height(Length::Fixed(HEADING_GAP)),
        description,
        Space::new().height(Length::Fixed(DESCRIPTION_GAP)),
        card,
    ]
    .align_x(alignment::Horizontal::Center)
    .max_width(CONTENT_MAX_WIDTH);

    let background = palette.background;
    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CONTENT_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn shortcut_row<'a>(
    label: &'a str,
    keys: &'a [&'static str],
    props: MainContentProps<'a>,
) -> Element<'a, MainContentEvent> {
    let palette = props.theme.palette();

    let caps = Row::with_children(keys.iter().map(|key| {
        key_cap::view(KeyCapProps {
            label: key,
            text_size: props.fonts.ui.caption_size,
            theme: props.theme,
        })
    }))
    .spacing(KEY_SPACING);

    row![
        text(label)
            .size(props.fonts.ui.size)
            .color(palette.text_secondary),
        Space::new().width(Length::Fill),
        caps,
    ]
    .spacing(LABEL_GAP)
    .align_y(alignment::Vertical::Center)
    .into()
}
