use duet_layout::{Side, SidebarState};
use iced::widget::{Space, column, container, row};
use iced::{Element, Length, Theme};

use super::{APP_TITLE, App, Event};
use crate::features::inspector::{LAYERS_SUMMARY, PROPERTIES};
use crate::features::sidebar::{header_geometry, panel_geometry};
use crate::theme::ThemeProps;
use crate::ui::widgets::{
    explorer_panel, inspector_panel, main_content, titlebar,
};

const SEPARATOR_WIDTH: f32 = 1.0;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let state = app.features.sidebar().state();

    let header = view_header(app, theme_props, state);
    let content = view_content(app, theme_props, state);

    column![header, horizontal_separator(theme_props), content]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the titlebar with both panel header sections.
fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    state: SidebarState,
) -> Element<'a, Event, Theme, iced::Renderer> {
    titlebar::view(titlebar::TitlebarProps {
        title: APP_TITLE,
        inset: app.platform.titlebar_inset(),
        left_header: header_geometry(state, Side::Left, app.platform),
        right_header: header_geometry(state, Side::Right, app.platform),
        left_tooltip: app.labels.tooltip(Side::Left),
        right_tooltip: app.labels.tooltip(Side::Right),
        window_controls: !app.platform.is_mac(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(Event::Titlebar)
}

/// Render the side panels around the main content area.
fn view_content<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    state: SidebarState,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let left = panel_geometry(state, Side::Left);
    let right = panel_geometry(state, Side::Right);

    let explorer = explorer_panel::view(explorer_panel::ExplorerPanelProps {
        items: app.features.explorer().visible_items(),
        filter: app.features.explorer().filter(),
        geometry: left,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(Event::ExplorerPanel);

    let inspector =
        inspector_panel::view(inspector_panel::InspectorPanelProps {
            properties: PROPERTIES,
            summary: LAYERS_SUMMARY,
            geometry: right,
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(|event| match event {});

    let main = main_content::view(main_content::MainContentProps {
        left_keys: app.labels.keys(Side::Left),
        right_keys: app.labels.keys(Side::Right),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| match event {});

    let mut content = row![explorer];
    if !left.is_collapsed() {
        content = content.push(vertical_separator(theme_props));
    }
    content = content.push(main);
    if !right.is_collapsed() {
        content = content.push(vertical_separator(theme_props));
    }

    content
        .push(inspector)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn horizontal_separator<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    separator(theme_props, Length::Fill, Length::Fixed(SEPARATOR_WIDTH))
}

fn vertical_separator<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    separator(theme_props, Length::Fixed(SEPARATOR_WIDTH), Length::Fill)
}

fn separator<'a>(
    theme_props: ThemeProps<'a>,
    width: Length,
    height: Length,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let color = theme_props.palette().border;

    container(Space::new())
        .width(width)
        .height(height)
        .style(move |_| iced::widget::container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}
