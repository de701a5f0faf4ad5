use iced::widget::{
    Column, Space, column, container, row, scrollable, svg, text, text_input,
};
use iced::{Border, Element, Length, alignment};

use crate::features::explorer::{TreeItem, TreeItemKind};
use crate::features::sidebar::PanelGeometry;
use crate::fonts::FontsConfig;
use crate::icons::{FILE, FOLDER, SEARCH, SETTINGS};
use crate::theme::ThemeProps;
use crate::ui::components::labeled_icon::{self, LabeledIconProps};

const PANEL_PADDING_X: f32 = 12.0;
const PANEL_PADDING_Y: f32 = 8.0;
const TREE_PADDING: f32 = 4.0;
const TREE_ROW_PADDING_Y: f32 = 3.0;
const TREE_BASE_INDENT: f32 = 8.0;
const TREE_INDENT_STEP: f32 = 16.0;
const SMALL_ICON_SIZE: f32 = 14.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

/// UI events emitted by the explorer panel.
#[derive(Debug, Clone)]
pub(crate) enum ExplorerPanelEvent {
    FilterChanged(String),
}

/// Props for rendering the explorer panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExplorerPanelProps<'a> {
    pub(crate) items: &'a [TreeItem],
    pub(crate) filter: &'a str,
    pub(crate) geometry: PanelGeometry,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Left side panel: file filter, project tree and settings footer.
pub(crate) fn view<'a>(
    props: ExplorerPanelProps<'a>,
) -> Element<'a, ExplorerPanelEvent> {
    let theme = props.theme.with_opacity(props.geometry.opacity);
    let palette = theme.palette();

    let content = column![
        search_row(props, theme),
        separator(theme),
        tree(props, theme),
        separator(theme),
        container(labeled_icon::view(LabeledIconProps {
            icon: SETTINGS,
            label: "Settings",
            icon_size: SMALL_ICON_SIZE,
            text_size: props.fonts.ui.size,
            font: props.fonts.ui.font_type,
            icon_color: palette.text_muted,
            text_color: palette.text_muted,
            theme,
        }))
        .width(Length::Fill)
        .padding([PANEL_PADDING_Y, PANEL_PADDING_X]),
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

fn search_row<'a>(
    props: ExplorerPanelProps<'a>,
    theme: ThemeProps<'a>,
) -> Element<'a, ExplorerPanelEvent> {
    let palette = theme.palette();
    let icon_color = theme.fade(palette.text_muted);
    let value_color = theme.fade(palette.foreground);
    let placeholder_color = theme.fade(palette.text_muted);
    let selection_color = theme.fade(palette.accent);

    let icon = svg::Svg::new(svg::Handle::from_memory(SEARCH))
        .width(Length::Fixed(SMALL_ICON_SIZE))
        .height(Length::Fixed(SMALL_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(icon_color),
        });

    let input = text_input("Search files…", props.filter)
        .on_input(ExplorerPanelEvent::FilterChanged)
        .size(props.fonts.ui.size)
        .padding(0)
        .style(move |_, _| text_input::Style {
            background: iced::Color::TRANSPARENT.into(),
            border: Border::default(),
            icon: icon_color,
            placeholder: placeholder_color,
            value: value_color,
            selection: selection_color,
        });

    container(
        row![icon, input]
            .spacing(PANEL_PADDING_Y)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding([PANEL_PADDING_Y, PANEL_PADDING_X])
    .into()
}

fn tree<'a>(
    props: ExplorerPanelProps<'a>,
    theme: ThemeProps<'a>,
) -> Element<'a, ExplorerPanelEvent> {
    let palette = theme.palette();

    if props.items.is_empty() {
        let empty = text("No matching files")
            .size(props.fonts.ui.size)
            .color(theme.fade(palette.text_muted));

        return container(empty)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([PANEL_PADDING_Y, PANEL_PADDING_X])
            .into();
    }

    let rows = props
        .items
        .iter()
        .map(|item| tree_row(*item, props, theme));

    scrollable(
        Column::with_children(rows)
            .width(Length::Fill)
            .padding(TREE_PADDING),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn tree_row<'a>(
    item: TreeItem,
    props: ExplorerPanelProps<'a>,
    theme: ThemeProps<'a>,
) -> Element<'a, ExplorerPanelEvent> {
    let palette = theme.palette();
    let (icon, icon_color) = match item.kind {
        TreeItemKind::Folder => (FOLDER, palette.accent),
        TreeItemKind::File => (FILE, palette.text_secondary),
    };

    let entry = labeled_icon::view(LabeledIconProps {
        icon,
        label: item.label,
        icon_size: SMALL_ICON_SIZE,
        text_size: props.fonts.ui.size,
        font: props.fonts.ui.font_type,
        icon_color,
        text_color: palette.foreground,
        theme,
    });

    row![
        Space::new().width(Length::Fixed(row_indent(item.indent))),
        entry,
    ]
    .padding([TREE_ROW_PADDING_Y, 0.0])
    .align_y(alignment::Vertical::Center)
    .into()
}

fn separator<'a>(theme: ThemeProps<'a>) -> Element<'a, ExplorerPanelEvent> {
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

fn row_indent(indent: usize) -> f32 {
    TREE_BASE_INDENT + indent as f32 * TREE_INDENT_STEP
}

#[cfg(test)]
mod tests {
    use super::row_indent;

    #[test]
    fn given_nesting_depth_when_indenting_then_each_level_adds_a_step() {
        assert_eq!(row_indent(0), 8.0);
        assert_eq!(row_indent(2), 40.0);
    }
}
