use iced::widget::{row, svg, text};
use iced::{Element, Font, Length, alignment};

use crate::theme::ThemeProps;

const LABELED_ICON_SPACING: f32 = 8.0;

/// Props for rendering an icon followed by a label.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LabeledIconProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) label: &'a str,
    pub(crate) icon_size: f32,
    pub(crate) text_size: f32,
    pub(crate) font: Font,
    pub(crate) icon_color: iced::Color,
    pub(crate) text_color: iced::Color,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a, Message: 'a>(
    props: LabeledIconProps<'a>,
) -> Element<'a, Message> {
    let icon_color = props.theme.fade(props.icon_color);
    let text_color = props.theme.fade(props.text_color);

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, _| svg::Style {
            color: Some(icon_color),
        });

    let label = text(props.label)
        .size(props.text_size)
        .font(props.font)
        .color(text_color);

    row![icon, label]
        .spacing(LABELED_ICON_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}
