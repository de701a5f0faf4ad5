use crate::state::{Side, SidebarState};
use crate::storage::Storage;

/// Storage key holding the serialized [`SidebarState`].
pub const SIDEBAR_STATE_KEY: &str = "duet:sidebar";

/// Owner of the sidebar open/closed flags.
///
/// The store is the only writer of its [`SidebarState`]. Every toggle flips
/// one flag in memory and then writes the whole state through the storage
/// medium. Persistence is best effort: read and write failures are logged
/// and never reach the caller.
#[derive(Debug)]
pub struct SidebarStore<S> {
    state: SidebarState,
    storage: S,
}

impl<S: Storage> SidebarStore<S> {
    /// Build a store on top of `storage`, restoring the last saved state.
    pub fn new(storage: S) -> Self {
        let state = load(&storage);
        Self { state, storage }
    }

    /// Return a snapshot of both flags.
    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn left_open(&self) -> bool {
        self.state.left_open
    }

    pub fn right_open(&self) -> bool {
        self.state.right_open
    }

    pub fn is_open(&self, side: Side) -> bool {
        self.state.is_open(side)
    }

    pub fn toggle_left(&mut self) {
        self.toggle(Side::Left);
    }

    pub fn toggle_right(&mut self) {
        self.toggle(Side::Right);
    }

    /// Flip the panel on `side` and persist the resulting state.
    pub fn toggle(&mut self, side: Side) {
        let open = self.state.flip(side);
        log::debug!("sidebar {side:?} toggled, open={open}");
        save(&mut self.storage, &self.state);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the storage medium, e.g. to hand it to the next session.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Read the persisted state, falling back to defaults on any failure.
pub fn load<S: Storage + ?Sized>(storage: &S) -> SidebarState {
    let raw = match storage.get(SIDEBAR_STATE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return SidebarState::default(),
        Err(err) => {
            log::warn!("sidebar state unavailable, using defaults: {err}");
            return SidebarState::default();
        },
    };

    match SidebarState::decode(&raw) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("ignoring stored sidebar state: {err}");
            SidebarState::default()
        },
    }
}

/// Write the whole state under [`SIDEBAR_STATE_KEY`]. Failures are logged.
pub fn save<S: Storage + ?Sized>(storage: &mut S, state: &SidebarState) {
    let payload = match state.encode() {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("failed to encode sidebar state: {err}");
            return;
        },
    };

    if let Err(err) = storage.set(SIDEBAR_STATE_KEY, &payload) {
        log::warn!("failed to persist sidebar state: {err}");
    }
}
