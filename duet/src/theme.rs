use iced::theme::Palette;
use iced::{Color, Theme, color};

/// Colors of the shell surfaces.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) titlebar: Color,
    pub(crate) sidebar: Color,
    pub(crate) border: Color,
    pub(crate) control_hover: Color,
    pub(crate) text_secondary: Color,
    pub(crate) text_muted: Color,
    pub(crate) accent: Color,
    pub(crate) danger: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
}

impl Default for IcedColorPalette {
    fn default() -> Self {
        Self {
            foreground: color!(0xECEFF4),
            background: color!(0x161822),
            titlebar: color!(0x0F1115),
            sidebar: color!(0x1B1D28),
            border: color!(0x2A2D3A),
            control_hover: color!(0x232530),
            text_secondary: color!(0xC0C5CE),
            text_muted: color!(0x6B7280),
            accent: color!(0x4FA6ED),
            danger: color!(0xE06C75),
            success: color!(0x98C379),
            warning: color!(0xE5C07B),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), IcedColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn from_palette(
        id: String,
        iced_palette: IcedColorPalette,
    ) -> Self {
        Self { id, iced_palette }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
///
/// `opacity` fades every color taken through [`ThemeProps::fade`]; side
/// panels use it while collapsed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) opacity: f32,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            opacity: 1.0,
        }
    }

    pub(crate) fn with_opacity(self, opacity: f32) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    pub(crate) fn palette(&self) -> &'a IcedColorPalette {
        self.theme.iced_palette()
    }

    pub(crate) fn fade(&self, color: Color) -> Color {
        Color {
            a: color.a * self.opacity,
            ..color
        }
    }
}

/// Holds the active theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use iced::{Color, Theme};

    use super::{AppTheme, ThemeProps};

    #[test]
    fn given_default_theme_when_converted_then_iced_palette_uses_shell_colors()
    {
        let theme = AppTheme::default();

        let palette = Theme::from(&theme).palette();

        assert_eq!(palette.primary, Color::from_rgb8(0x4F, 0xA6, 0xED));
        assert_eq!(palette.background, theme.iced_palette().background);
    }

    #[test]
    fn given_faded_props_when_color_resolved_then_alpha_is_scaled() {
        let theme = AppTheme::default();
        let props = ThemeProps::new(&theme).with_opacity(0.5);

        let faded = props.fade(Color::from_rgb(1.0, 1.0, 1.0));

        assert_eq!(faded.a, 0.5);
        assert_eq!(ThemeProps::new(&theme).with_opacity(3.0).opacity, 1.0);
    }
}
