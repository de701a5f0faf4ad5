pub(crate) mod explorer_panel;
pub(crate) mod inspector_panel;
pub(crate) mod main_content;
pub(crate) mod titlebar;
