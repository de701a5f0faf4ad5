use std::sync::OnceLock;

/// Width reserved on the left of the titlebar for the macOS window buttons.
pub const MACOS_TRAFFIC_LIGHT_WIDTH: f32 = 72.0;

static CURRENT: OnceLock<Platform> = OnceLock::new();

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Mac,
    Windows,
    Linux,
}

impl Platform {
    /// Classify a host platform identifier by prefix.
    ///
    /// `mac*` is Mac and `win*` is Windows, compared case-insensitively.
    /// Anything else, or no identifier at all, counts as Linux.
    pub fn from_identifier(identifier: Option<&str>) -> Self {
        let identifier = identifier.unwrap_or_default().to_ascii_lowercase();

        if identifier.starts_with("mac") {
            Self::Mac
        } else if identifier.starts_with("win") {
            Self::Windows
        } else {
            Self::Linux
        }
    }

    /// Inspect the host this process was built for.
    pub fn detect() -> Self {
        Self::from_identifier(Some(std::env::consts::OS))
    }

    /// Return the platform of this process, detecting it on first use.
    pub fn current() -> Self {
        *CURRENT.get_or_init(|| {
            let platform = Self::detect();
            log::debug!("detected platform {platform:?}");
            platform
        })
    }

    /// Label of the shortcut modifier key as shown to the user.
    pub fn modifier_key_label(self) -> &'static str {
        match self {
            Self::Mac => "⌘",
            Self::Windows | Self::Linux => "Ctrl",
        }
    }

    /// Horizontal space the titlebar leaves for native window buttons.
    pub fn titlebar_inset(self) -> f32 {
        match self {
            Self::Mac => MACOS_TRAFFIC_LIGHT_WIDTH,
            Self::Windows | Self::Linux => 0.0,
        }
    }

    pub fn is_mac(self) -> bool {
        self == Self::Mac
    }
}

#[cfg(test)]
mod tests {
    use super::Platform;

    #[test]
    fn given_identifiers_when_classified_then_prefix_decides() {
        let cases = [
            (Some("MacIntel"), Platform::Mac),
            (Some("macos"), Platform::Mac),
            (Some("Win32"), Platform::Windows),
            (Some("windows"), Platform::Windows),
            (Some("Linux x86_64"), Platform::Linux),
            (Some("freebsd"), Platform::Linux),
            (Some(""), Platform::Linux),
            (None, Platform::Linux),
        ];

        for (identifier, expected) in cases {
            assert_eq!(
                Platform::from_identifier(identifier),
                expected,
                "{identifier:?}"
            );
        }
    }

    #[test]
    fn given_platform_when_label_requested_then_mac_uses_command_glyph() {
        assert_eq!(Platform::Mac.modifier_key_label(), "⌘");
        assert_eq!(Platform::Windows.modifier_key_label(), "Ctrl");
        assert_eq!(Platform::Linux.modifier_key_label(), "Ctrl");
    }

    #[test]
    fn given_platform_when_inset_requested_then_only_mac_reserves_space() {
        assert_eq!(Platform::Mac.titlebar_inset(), 72.0);
        assert_eq!(Platform::Windows.titlebar_inset(), 0.0);
        assert_eq!(Platform::Linux.titlebar_inset(), 0.0);
    }

    #[test]
    fn given_repeated_calls_when_current_requested_then_value_is_stable() {
        let first = Platform::current();

        assert_eq!(Platform::current(), first);
        assert_eq!(first, Platform::detect());
    }
}
