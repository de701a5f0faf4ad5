use duet_layout::{
    FileStorage, KeyOutcome, KeyPress, KeyboardDispatcher,
    KeyboardSubscription, SidebarState, SidebarStore, Storage,
};
use iced::Task;

use super::event::SidebarEvent;
use crate::app::Event as AppEvent;
use crate::features::Feature;

/// Sidebar feature root that owns the layout store and shortcut dispatch.
pub(crate) struct SidebarFeature<S: Storage = FileStorage> {
    store: SidebarStore<S>,
    dispatcher: KeyboardDispatcher,
    subscription: Option<KeyboardSubscription>,
}

impl SidebarFeature {
    /// Restore the layout from the per-user storage file.
    pub(crate) fn load() -> Self {
        let storage = FileStorage::open_default();
        log::info!("sidebar layout storage: {}", storage.path().display());
        Self::with_storage(storage)
    }
}

impl<S: Storage> SidebarFeature<S> {
    /// Build the feature over `storage` and start listening for shortcuts.
    pub(crate) fn with_storage(storage: S) -> Self {
        let mut dispatcher = KeyboardDispatcher::new();
        let subscription = match dispatcher.subscribe() {
            Ok(subscription) => Some(subscription),
            Err(err) => {
                log::warn!("keyboard shortcuts unavailable: {err}");
                None
            },
        };

        Self {
            store: SidebarStore::new(storage),
            dispatcher,
            subscription,
        }
    }

    /// Return a snapshot of both panel flags.
    pub(crate) fn state(&self) -> SidebarState {
        self.store.state()
    }

    /// Return whether key presses are still routed to the dispatcher.
    pub(crate) fn is_listening(&self) -> bool {
        self.subscription.is_some() && self.dispatcher.is_subscribed()
    }

    fn handle_key(&mut self, press: &KeyPress) {
        if let KeyOutcome::Handled(shortcut) =
            self.dispatcher.dispatch(press, &mut self.store)
        {
            log::debug!("shortcut {shortcut:?} handled");
        }
    }

    fn teardown(&mut self) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };

        match self.dispatcher.unsubscribe(subscription) {
            Ok(()) => log::info!("keyboard shortcuts released"),
            Err(err) => log::warn!("failed to release shortcuts: {err}"),
        }
    }
}

impl<S: Storage + 'static> Feature for SidebarFeature<S> {
    type Event = SidebarEvent;
    type Ctx<'a>
        = ()
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: SidebarEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            SidebarEvent::Toggle(side) => self.store.toggle(side),
            SidebarEvent::KeyPressed(press) => self.handle_key(&press),
            SidebarEvent::Teardown => self.teardown(),
        }

        Task::none()
    }
}
