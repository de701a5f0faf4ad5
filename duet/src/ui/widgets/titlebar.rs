use duet_layout::Side;
use iced::widget::{MouseArea, Space, Stack, container, row, text};
use iced::{Element, Length, alignment};

use crate::features::sidebar::PanelGeometry;
use crate::fonts::FontsConfig;
use crate::icons::{
    FOLDER, INFO, PANEL_LEFT, PANEL_RIGHT, WINDOW_CLOSE, WINDOW_MINIMIZE,
};
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::ui::components::labeled_icon::{self, LabeledIconProps};
use crate::ui::components::panel_toggle::{self, PanelToggleProps};

pub(crate) const TITLEBAR_HEIGHT: f32 = 38.0;
const TITLEBAR_SECTION_PADDING: f32 = 16.0;
const TITLEBAR_CENTER_PADDING: f32 = 4.0;
const TITLEBAR_CONTROL_BUTTON_SIZE: f32 = 24.0;
const TITLEBAR_CONTROL_ICON_SIZE: f32 = 14.0;
const TITLEBAR_CONTROLS_SPACING: f32 = 6.0;
const TITLEBAR_RIGHT_PADDING: f32 = 8.0;
const TITLEBAR_HEADER_ICON_SIZE: f32 = 16.0;

/// UI events emitted by the window titlebar.
#[derive(Debug, Clone)]
pub(crate) enum TitlebarEvent {
    ToggleLeft,
    ToggleRight,
    StartWindowDrag,
    ToggleFullScreen,
    MinimizeWindow,
    CloseWindow,
}

/// Props for rendering the titlebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TitlebarProps<'a> {
    pub(crate) title: &'a str,
    /// Space reserved for native window buttons on the left edge.
    pub(crate) inset: f32,
    pub(crate) left_header: PanelGeometry,
    pub(crate) right_header: PanelGeometry,
    pub(crate) left_tooltip: &'a str,
    pub(crate) right_tooltip: &'a str,
    /// Draw minimize/close buttons; off where the host draws its own.
    pub(crate) window_controls: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// The draggable window header with panel toggles.
pub(crate) fn view<'a>(props: TitlebarProps<'a>) -> Element<'a, TitlebarEvent> {
    let palette = props.theme.palette();

    let left_section =
        header_section(FOLDER, "EXPLORER", props.left_header, props);
    let right_section =
        header_section(INFO, "INSPECTOR", props.right_header, props);

    let left_toggle = panel_toggle::view(PanelToggleProps {
        icon: PANEL_LEFT,
        side: Side::Left,
        open: !props.left_header.is_collapsed(),
        tooltip: props.left_tooltip,
        theme: props.theme,
    })
    .map(|_| TitlebarEvent::ToggleLeft);

    let right_toggle = panel_toggle::view(PanelToggleProps {
        icon: PANEL_RIGHT,
        side: Side::Right,
        open: !props.right_header.is_collapsed(),
        tooltip: props.right_tooltip,
        theme: props.theme,
    })
    .map(|_| TitlebarEvent::ToggleRight);

    let title = text(props.title)
        .size(props.fonts.ui.size)
        .color(palette.text_muted);

    let center_zone = container(
        row![
            left_toggle,
            Space::new().width(Length::Fill),
            title,
            Space::new().width(Length::Fill),
            right_toggle,
        ]
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .padding([0.0, TITLEBAR_CENTER_PADDING]);

    let mut base_row = row![
        Space::new().width(Length::Fixed(props.inset)),
        left_section,
        center_zone,
        right_section,
    ]
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    if props.window_controls {
        base_row = base_row.push(window_controls(props));
    }

    let drag_surface = MouseArea::new(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(TitlebarEvent::StartWindowDrag)
    .on_double_click(TitlebarEvent::ToggleFullScreen);

    let content = Stack::new().push(drag_surface).push(base_row);

    let background = palette.titlebar;
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(TITLEBAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn header_section<'a>(
    icon: &'static [u8],
    label: &'a str,
    geometry: PanelGeometry,
    props: TitlebarProps<'a>,
) -> Element<'a, TitlebarEvent> {
    let theme = props.theme.with_opacity(geometry.opacity);
    let palette = theme.palette();

    let content = container(labeled_icon::view(LabeledIconProps {
        icon,
        label,
        icon_size: TITLEBAR_HEADER_ICON_SIZE,
        text_size: props.fonts.ui.caption_size,
        font: props.fonts.heading.font_type,
        icon_color: palette.text_secondary,
        text_color: palette.text_secondary,
        theme,
    }))
    .width(Length::Fixed(geometry.content_width))
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .padding([0.0, TITLEBAR_SECTION_PADDING]);

    container(content)
        .width(Length::Fixed(geometry.width))
        .height(Length::Fill)
        .clip(true)
        .into()
}

fn window_controls<'a>(props: TitlebarProps<'a>) -> Element<'a, TitlebarEvent> {
    let control = |icon, variant| {
        icon_button::view(IconButtonProps {
            icon,
            theme: props.theme,
            size: TITLEBAR_CONTROL_BUTTON_SIZE,
            icon_size: TITLEBAR_CONTROL_ICON_SIZE,
            variant,
            pressed: false,
        })
    };

    let controls = row![
        control(WINDOW_MINIMIZE, IconButtonVariant::Standard)
            .map(|_| TitlebarEvent::MinimizeWindow),
        control(WINDOW_CLOSE, IconButtonVariant::Danger)
            .map(|_| TitlebarEvent::CloseWindow),
    ]
    .spacing(TITLEBAR_CONTROLS_SPACING)
    .align_y(alignment::Vertical::Center);

    container(controls)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, TITLEBAR_RIGHT_PADDING])
        .into()
}
