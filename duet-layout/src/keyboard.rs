use bitflags::bitflags;

use crate::error::KeyboardError;
use crate::state::Side;
use crate::storage::Storage;
use crate::store::SidebarStore;

/// Letter that toggles the side panels together with a platform modifier.
const SHORTCUT_KEY: &str = "b";

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers : u8 {
        const SHIFT   = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT     = 0b0000_0100;
        const META    = 0b0000_1000;
    }
}

impl Modifiers {
    /// Return whether either platform shortcut modifier (Command/Meta or
    /// Control) is held. Both are accepted regardless of the host OS.
    pub fn has_platform_modifier(self) -> bool {
        self.intersects(Self::META | Self::CONTROL)
    }
}

/// UI element that owns keyboard focus when a key is pressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    None,
    TextInput,
    TextArea,
    Select,
    ContentEditable,
    Other,
}

impl FocusTarget {
    /// Return whether the target accepts free-text keyboard input.
    pub fn is_editable(self) -> bool {
        matches!(
            self,
            Self::TextInput | Self::TextArea | Self::Select | Self::ContentEditable
        )
    }
}

/// A single key press as seen by the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// Logical key text; `None` when the host did not report one.
    pub key: Option<String>,
    pub modifiers: Modifiers,
    pub focus: FocusTarget,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: Some(key.into()),
            modifiers,
            focus: FocusTarget::None,
        }
    }

    pub fn with_focus(mut self, focus: FocusTarget) -> Self {
        self.focus = focus;
        self
    }
}

/// Panel action bound to a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleLeft,
    ToggleRight,
}

impl Shortcut {
    pub fn side(self) -> Side {
        match self {
            Self::ToggleLeft => Side::Left,
            Self::ToggleRight => Side::Right,
        }
    }
}

/// Result of offering a key press to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a shortcut; the host handles the key as usual.
    Ignored,
    /// The shortcut ran and the host's default action must be suppressed.
    Handled(Shortcut),
}

impl KeyOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Map a key press to a panel shortcut.
///
/// Presses aimed at editable controls never match. Otherwise Meta or
/// Control plus `b` (any case) toggles the left panel, and adding Shift
/// toggles the right one. Shift is only consulted after the base
/// combination matched.
pub fn resolve(press: &KeyPress) -> Option<Shortcut> {
    if press.focus.is_editable() {
        return None;
    }

    if !press.modifiers.has_platform_modifier() {
        return None;
    }

    let key = press.key.as_deref()?;
    if !key.eq_ignore_ascii_case(SHORTCUT_KEY) {
        return None;
    }

    if press.modifiers.contains(Modifiers::SHIFT) {
        Some(Shortcut::ToggleRight)
    } else {
        Some(Shortcut::ToggleLeft)
    }
}

/// Proof of an active dispatcher subscription.
///
/// Hand it back to [`KeyboardDispatcher::unsubscribe`] exactly once when
/// the owning UI session ends.
#[must_use = "an unused subscription can never be unsubscribed"]
#[derive(Debug, PartialEq, Eq)]
pub struct KeyboardSubscription {
    id: u64,
}

impl KeyboardSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Routes global key presses to sidebar toggles while subscribed.
#[derive(Debug, Default)]
pub struct KeyboardDispatcher {
    active: Option<u64>,
    next_id: u64,
}

impl KeyboardDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start receiving key presses.
    pub fn subscribe(&mut self) -> Result<KeyboardSubscription, KeyboardError> {
        if self.active.is_some() {
            return Err(KeyboardError::AlreadySubscribed);
        }

        self.next_id += 1;
        let id = self.next_id;
        self.active = Some(id);
        log::debug!("keyboard dispatcher subscribed ({id})");

        Ok(KeyboardSubscription { id })
    }

    /// Stop receiving key presses. Consumes the subscription handle.
    pub fn unsubscribe(
        &mut self,
        subscription: KeyboardSubscription,
    ) -> Result<(), KeyboardError> {
        if self.active != Some(subscription.id) {
            return Err(KeyboardError::UnknownSubscription(subscription.id));
        }

        self.active = None;
        log::debug!("keyboard dispatcher unsubscribed ({})", subscription.id);

        Ok(())
    }

    pub fn is_subscribed(&self) -> bool {
        self.active.is_some()
    }

    /// Offer a key press and apply the matching toggle to `store`.
    pub fn dispatch<S: Storage>(
        &self,
        press: &KeyPress,
        store: &mut SidebarStore<S>,
    ) -> KeyOutcome {
        if !self.is_subscribed() {
            return KeyOutcome::Ignored;
        }

        let Some(shortcut) = resolve(press) else {
            return KeyOutcome::Ignored;
        };

        log::debug!("keyboard shortcut {shortcut:?}");
        match shortcut {
            Shortcut::ToggleLeft => store.toggle_left(),
            Shortcut::ToggleRight => store.toggle_right(),
        }

        KeyOutcome::Handled(shortcut)
    }
}
