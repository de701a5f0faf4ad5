use duet_layout::{Platform, Side, SidebarState};

/// Width of an open side panel.
pub(crate) const SIDEBAR_WIDTH: f32 = 280.0;

/// Rendered size of a side panel section.
///
/// `width` is the outer slot and collapses to zero. The content keeps
/// `content_width` so it clips instead of reflowing while hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelGeometry {
    pub(crate) width: f32,
    pub(crate) content_width: f32,
    pub(crate) opacity: f32,
}

impl PanelGeometry {
    fn new(open: bool, content_width: f32) -> Self {
        if open {
            Self {
                width: content_width,
                content_width,
                opacity: 1.0,
            }
        } else {
            Self {
                width: 0.0,
                content_width,
                opacity: 0.0,
            }
        }
    }

    pub(crate) fn is_collapsed(&self) -> bool {
        self.width <= 0.0
    }
}

/// Geometry of the panel body on `side`.
pub(crate) fn panel_geometry(state: SidebarState, side: Side) -> PanelGeometry {
    PanelGeometry::new(state.is_open(side), SIDEBAR_WIDTH)
}

/// Geometry of the titlebar section above the panel on `side`.
///
/// The left section gives up the native window-button inset so the toggle
/// lines up with the panel edge.
pub(crate) fn header_geometry(
    state: SidebarState,
    side: Side,
    platform: Platform,
) -> PanelGeometry {
    let content_width = match side {
        Side::Left => SIDEBAR_WIDTH - platform.titlebar_inset(),
        Side::Right => SIDEBAR_WIDTH,
    };

    PanelGeometry::new(state.is_open(side), content_width)
}

/// Keys of the shortcut toggling `side`, as shown to the user.
pub(crate) fn shortcut_keys(side: Side, platform: Platform) -> Vec<&'static str> {
    let modifier = platform.modifier_key_label();
    match side {
        Side::Left => vec![modifier, "B"],
        Side::Right => vec![modifier, "Shift", "B"],
    }
}

/// Tooltip text of the toggle button for `side`.
pub(crate) fn toggle_tooltip(side: Side, platform: Platform) -> String {
    format!("Toggle sidebar ({})", shortcut_keys(side, platform).join("+"))
}

/// Shortcut labels for the host platform, built once at startup.
#[derive(Debug, Clone)]
pub(crate) struct ShortcutLabels {
    left_keys: Vec<&'static str>,
    right_keys: Vec<&'static str>,
    left_tooltip: String,
    right_tooltip: String,
}

impl ShortcutLabels {
    pub(crate) fn new(platform: Platform) -> Self {
        Self {
            left_keys: shortcut_keys(Side::Left, platform),
            right_keys: shortcut_keys(Side::Right, platform),
            left_tooltip: toggle_tooltip(Side::Left, platform),
            right_tooltip: toggle_tooltip(Side::Right, platform),
        }
    }

    pub(crate) fn keys(&self, side: Side) -> &[&'static str] {
        match side {
            Side::Left => &self.left_keys,
            Side::Right => &self.right_keys,
        }
    }

    pub(crate) fn tooltip(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_tooltip,
            Side::Right => &self.right_tooltip,
        }
    }
}

#[cfg(test)]
mod tests {
    use duet_layout::{Platform, Side, SidebarState};

    use super::{
        SIDEBAR_WIDTH, ShortcutLabels, header_geometry, panel_geometry,
        shortcut_keys, toggle_tooltip,
    };

    #[test]
    fn given_open_panel_when_measured_then_full_width_and_opaque() {
        let geometry = panel_geometry(SidebarState::default(), Side::Left);

        assert_eq!(geometry.width, SIDEBAR_WIDTH);
        assert_eq!(geometry.opacity, 1.0);
        assert!(!geometry.is_collapsed());
    }

    #[test]
    fn given_closed_panel_when_measured_then_slot_collapses_but_content_keeps_width()
     {
        let state = SidebarState::new(true, false);

        let geometry = panel_geometry(state, Side::Right);

        assert_eq!(geometry.width, 0.0);
        assert_eq!(geometry.content_width, SIDEBAR_WIDTH);
        assert_eq!(geometry.opacity, 0.0);
        assert!(geometry.is_collapsed());
    }

    #[test]
    fn given_mac_when_left_header_measured_then_inset_is_subtracted() {
        let state = SidebarState::default();

        let mac = header_geometry(state, Side::Left, Platform::Mac);
        let linux = header_geometry(state, Side::Left, Platform::Linux);
        let right = header_geometry(state, Side::Right, Platform::Mac);

        assert_eq!(mac.width, 208.0);
        assert_eq!(linux.width, SIDEBAR_WIDTH);
        assert_eq!(right.width, SIDEBAR_WIDTH);
    }

    #[test]
    fn given_closed_left_panel_on_mac_when_header_measured_then_width_is_zero()
    {
        let state = SidebarState::new(false, true);

        let geometry = header_geometry(state, Side::Left, Platform::Mac);

        assert_eq!(geometry.width, 0.0);
        assert_eq!(geometry.content_width, 208.0);
    }

    #[test]
    fn given_mac_when_tooltips_built_then_command_glyph_is_used() {
        assert_eq!(
            toggle_tooltip(Side::Left, Platform::Mac),
            "Toggle sidebar (⌘+B)"
        );
        assert_eq!(
            toggle_tooltip(Side::Right, Platform::Mac),
            "Toggle sidebar (⌘+Shift+B)"
        );
    }

    #[test]
    fn given_linux_when_keys_listed_then_ctrl_is_used() {
        assert_eq!(shortcut_keys(Side::Left, Platform::Linux), ["Ctrl", "B"]);
        assert_eq!(
            shortcut_keys(Side::Right, Platform::Windows),
            ["Ctrl", "Shift", "B"]
        );
        assert_eq!(
            toggle_tooltip(Side::Right, Platform::Linux),
            "Toggle sidebar (Ctrl+Shift+B)"
        );
    }

    #[test]
    fn given_platform_when_labels_built_then_each_side_gets_its_shortcut() {
        let labels = ShortcutLabels::new(Platform::Windows);

        assert_eq!(labels.keys(Side::Left), ["Ctrl", "B"]);
        assert_eq!(labels.tooltip(Side::Left), "Toggle sidebar (Ctrl+B)");
        assert_eq!(labels.keys(Side::Right).len(), 3);
    }
}
