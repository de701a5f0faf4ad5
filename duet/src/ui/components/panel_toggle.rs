use duet_layout::Side;
use iced::widget::{container, text, tooltip};
use iced::{Border, Element};

use super::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::theme::ThemeProps;

const TOGGLE_SIZE: f32 = 28.0;
const TOGGLE_ICON_SIZE: f32 = 16.0;
const TOOLTIP_GAP: f32 = 6.0;
const TOOLTIP_TEXT_SIZE: f32 = 12.0;
const TOOLTIP_RADIUS: f32 = 4.0;

/// Props for rendering a side panel toggle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelToggleProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) side: Side,
    pub(crate) open: bool,
    pub(crate) tooltip: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Toggle button with a tooltip that opens towards the window centre.
pub(crate) fn view<'a>(
    props: PanelToggleProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.palette();
    let button = icon_button::view(IconButtonProps {
        icon: props.icon,
        theme: props.theme,
        size: TOGGLE_SIZE,
        icon_size: TOGGLE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
        pressed: props.open,
    });

    let background = palette.titlebar;
    let border = palette.border;
    let foreground = palette.foreground;
    let label = container(
        text(props.tooltip)
            .size(TOOLTIP_TEXT_SIZE)
            .color(foreground),
    )
    .padding([4.0, 8.0])
    .style(move |_| container::Style {
        background: Some(background.into()),
        border: Border {
            color: border,
            width: 1.0,
            radius: TOOLTIP_RADIUS.into(),
        },
        ..Default::default()
    });

    tooltip(button, label, tooltip_position(props.side))
        .gap(TOOLTIP_GAP)
        .into()
}

fn tooltip_position(side: Side) -> tooltip::Position {
    match side {
        Side::Left => tooltip::Position::Right,
        Side::Right => tooltip::Position::Left,
    }
}
