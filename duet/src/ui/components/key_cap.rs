use iced::widget::{container, text};
use iced::{Border, Element, Length, alignment};

use crate::theme::ThemeProps;

const KEY_CAP_RADIUS: f32 = 4.0;

#[derive(Debug, Clone, Copy)]
pub(crate) struct KeyCapProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) text_size: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// A single keyboard key drawn as a bordered cap.
pub(crate) fn view<'a, Message: 'a>(
    props: KeyCapProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.palette();
    let background = palette.background;
    let border = palette.border;

    container(
        text(props.label)
            .size(props.text_size)
            .color(palette.foreground),
    )
    .padding([2.0, 6.0])
    .width(Length::Shrink)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(background.into()),
        border: Border {
            color: border,
            width: 1.0,
            radius: KEY_CAP_RADIUS.into(),
        },
        ..Default::default()
    })
    .into()
}
