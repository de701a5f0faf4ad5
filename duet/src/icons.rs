pub(crate) const PANEL_LEFT: &[u8] =
    include_bytes!("../../assets/svg/panel-left.svg");
pub(crate) const PANEL_RIGHT: &[u8] =
    include_bytes!("../../assets/svg/panel-right.svg");
pub(crate) const FILE: &[u8] = include_bytes!("../../assets/svg/file.svg");
pub(crate) const FOLDER: &[u8] = include_bytes!("../../assets/svg/folder.svg");
pub(crate) const SEARCH: &[u8] = include_bytes!("../../assets/svg/search.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../../assets/svg/settings.svg");
pub(crate) const INFO: &[u8] = include_bytes!("../../assets/svg/info.svg");
pub(crate) const LAYERS: &[u8] = include_bytes!("../../assets/svg/layers.svg");
pub(crate) const WINDOW_MINIMIZE: &[u8] =
    include_bytes!("../../assets/svg/window-minimize.svg");
pub(crate) const WINDOW_CLOSE: &[u8] =
    include_bytes!("../../assets/svg/window-close.svg");
pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../../assets/logo/logo-small.png");
