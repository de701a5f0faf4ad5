use iced::widget::{Column, Space, column, container, scrollable, text};
use iced::{Element, Length};

use crate::features::inspector::Property;
use crate::features::sidebar::PanelGeometry;
use crate::fonts::FontsConfig;
use crate::icons::LAYERS;
use crate::theme::ThemeProps;
use crate::ui::components::labeled_icon::{self, LabeledIconProps};

const PANEL_PADDING_X: f32 = 16.0;
const HEADER_PADDING_Y: f32 = 10.0;
const BODY_PADDING_Y: f32 = 12.0;
const PROPERTY_SPACING: f32 = 12.0;
const PROPERTY_VALUE_GAP: f32 = 2.0;
const FOOTER_ICON_SIZE: f32 = 14.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

/// The inspector is read-only and emits no events.
#[derive(Debug, Clone)]
pub(crate) enum InspectorPanelEvent {}

/// Props for rendering the inspector panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InspectorPanelProps<'a> {
    pub(crate) properties: &'a [Property],
    pub(crate) summary: &'a str,
    pub(crate) geometry: PanelGeometry,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Right side panel: property list of the current document.
pub(crate) fn view<'a>(
    props: InspectorPanelProps<'a>,
) -> Element<'a, InspectorPanelEvent> {
    let theme = props.theme.with_opacity(props.geometry.opacity);
    let palette = theme.palette();

    let header = container(
        text("PROPERTIES")
            .size(props.fonts.ui.caption_size)
            .font(props.fonts.heading.font_type)
            .color(theme.fade(palette.text_secondary)),
    )
    .width(Length::Fill)
    .padding([HEADER_PADDING_Y, PANEL_PADDING_X]);

    let properties = props.properties.iter().map(|property| {
        column![
            text(property.key.to_uppercase())
                .size(props.fonts.ui.caption_size)
                .color(theme.fade(palette.text_muted)),
            text(property.value)
                .size(props.fonts.ui.size)
                .color(theme.fade(palette.foreground)),
        ]
        .spacing(PROPERTY_VALUE_GAP)
        .into()
    });

    let body = scrollable(
        Column::with_children(properties)
            .spacing(PROPERTY_SPACING)
            .width(Length::Fill)
            .padding([BODY_PADDING_Y, PANEL_PADDING_X]),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let footer = container(labeled_icon::view(LabeledIconProps {
        icon: LAYERS,
        label: props.summary,
        icon_size: FOOTER_ICON_SIZE,
        text_size: props.fonts.ui.size,
        font: props.fonts.ui.font_type,
        icon_color: palette.text_muted,
        text_color: palette.text_muted,
        theme,
    }))
    .width(Length::Fill)
    .padding([BODY_PADDING_Y, PANEL_PADDING_X]);

    let content = column![
        header,
        separator(theme),
        body,
        separator(theme),
        footer
    ]
    .width(Length::Fixed(props.geometry.content_width))
    .height(Length::Fill);

    let background = palette.sidebar;
    container(content)
        .width(Length::Fixed(props.geometry.width))
        .height(Length::Fill)
        .clip(true)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn separator<'a>(theme: ThemeProps<'a>) -> Element<'a, InspectorPanelEvent> {
    let color = theme.fade(theme.palette().border);

    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}
