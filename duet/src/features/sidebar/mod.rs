mod event;
mod feature;
mod keymap;
mod model;

pub(crate) use event::SidebarEvent;
pub(crate) use feature::SidebarFeature;
pub(crate) use keymap::key_press;
pub(crate) use model::{
    PanelGeometry, ShortcutLabels, header_geometry, panel_geometry,
};
