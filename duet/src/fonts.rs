use iced::{
    Font,
    font::{Family, Weight},
};

#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
    pub(crate) caption_size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 12.0,
            caption_size: 11.0,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HeadingFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for HeadingFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::Semibold,
                family: Family::SansSerif,
                ..Font::default()
            },
            size: 20.0,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) heading: HeadingFonts,
}
