pub(crate) mod icon_button;
pub(crate) mod key_cap;
pub(crate) mod labeled_icon;
pub(crate) mod panel_toggle;
