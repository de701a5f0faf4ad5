use iced::widget::{button, container, svg};
use iced::{Border, Color, Element, Length, alignment};

use crate::theme::ThemeProps;

const ICON_BUTTON_PADDING: f32 = 0.0;
const ICON_BUTTON_RADIUS: f32 = 4.0;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    Standard,
    Danger,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
    /// Toggle state; pressed buttons keep the accent color.
    pub(crate) pressed: bool,
}

/// Render a square icon button used for panel toggles and window controls.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.palette();
    let colors = resolve_variant_colors(
        props.variant,
        props.pressed,
        VariantPalette {
            base: palette.text_secondary,
            accent: palette.accent,
            danger: palette.danger,
        },
    );
    let hover_background = palette.control_hover;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                colors.hover
            } else {
                colors.base
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(hover_background.into())
                },
                button::Status::Active | button::Status::Disabled => None,
            };

            button::Style {
                background,
                border: Border {
                    radius: ICON_BUTTON_RADIUS.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

#[derive(Debug, Clone, Copy)]
struct VariantPalette {
    base: Color,
    accent: Color,
    danger: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct VariantColors {
    base: Color,
    hover: Color,
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    pressed: bool,
    palette: VariantPalette,
) -> VariantColors {
    match variant {
        IconButtonVariant::Standard if pressed => VariantColors {
            base: palette.accent,
            hover: palette.accent,
        },
        IconButtonVariant::Standard => VariantColors {
            base: palette.base,
            hover: palette.accent,
        },
        IconButtonVariant::Danger => VariantColors {
            base: palette.base,
            hover: palette.danger,
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{
        IconButtonVariant, VariantColors, VariantPalette,
        resolve_variant_colors,
    };

    const PALETTE: VariantPalette = VariantPalette {
        base: Color::WHITE,
        accent: Color::from_rgb(0.0, 0.0, 1.0),
        danger: Color::from_rgb(1.0, 0.0, 0.0),
    };

    #[test]
    fn given_released_standard_button_when_resolving_then_hover_uses_accent() {
        let colors =
            resolve_variant_colors(IconButtonVariant::Standard, false, PALETTE);

        assert_eq!(
            colors,
            VariantColors {
                base: PALETTE.base,
                hover: PALETTE.accent,
            }
        );
    }

    #[test]
    fn given_pressed_standard_button_when_resolving_then_accent_is_kept() {
        let colors =
            resolve_variant_colors(IconButtonVariant::Standard, true, PALETTE);

        assert_eq!(colors.base, PALETTE.accent);
        assert_eq!(colors.hover, PALETTE.accent);
    }

    #[test]
    fn given_danger_button_when_resolving_then_hover_uses_danger() {
        let colors =
            resolve_variant_colors(IconButtonVariant::Danger, true, PALETTE);

        assert_eq!(colors.base, PALETTE.base);
        assert_eq!(colors.hover, PALETTE.danger);
    }
}
