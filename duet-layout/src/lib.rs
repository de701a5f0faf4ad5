//! Sidebar layout core for the Duet desktop shell.
//!
//! The crate owns everything about the two collapsible side panels that is
//! not drawing:
//! - [`SidebarStore`] keeps the open/closed flags and writes them through a
//!   [`Storage`] medium on every toggle,
//! - [`KeyboardDispatcher`] turns `Cmd/Ctrl+B` and `Cmd/Ctrl+Shift+B` into
//!   toggles while it holds an explicit [`KeyboardSubscription`],
//! - [`Platform`] classifies the host once and provides the modifier label
//!   and titlebar inset used by front-ends.
//!
//! Front-ends usually:
//! 1. Build a [`SidebarStore`] over [`FileStorage::open_default`].
//! 2. Call [`KeyboardDispatcher::subscribe`] when their window opens and
//!    forward every key press as a [`KeyPress`].
//! 3. Render from [`SidebarStore::state`] and call the toggles from buttons.
//! 4. Hand the subscription back with [`KeyboardDispatcher::unsubscribe`]
//!    on teardown.

mod error;
pub mod keyboard;
pub mod platform;
mod state;
pub mod storage;
mod store;

pub use error::{KeyboardError, StateDecodeError, StorageError};
pub use keyboard::{
    FocusTarget, KeyOutcome, KeyPress, KeyboardDispatcher,
    KeyboardSubscription, Modifiers, Shortcut,
};
pub use platform::Platform;
pub use state::{Side, SidebarState};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{SIDEBAR_STATE_KEY, SidebarStore};
