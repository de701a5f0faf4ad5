use iced::Task;

use crate::app::Event as AppEvent;

pub(crate) mod explorer;
pub(crate) mod inspector;
pub(crate) mod sidebar;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>
    where
        Self: 'a;

    /// Reduce a typed feature event into state mutations and routed app tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for the stateful features.
pub(crate) struct Features {
    sidebar: sidebar::SidebarFeature,
    explorer: explorer::ExplorerFeature,
}

impl Features {
    pub(crate) fn new(sidebar: sidebar::SidebarFeature) -> Self {
        Self {
            sidebar,
            explorer: explorer::ExplorerFeature::new(),
        }
    }

    /// Return read-only access to sidebar state and queries.
    pub(crate) fn sidebar(&self) -> &sidebar::SidebarFeature {
        &self.sidebar
    }

    /// Return mutable access for routing sidebar events.
    pub(crate) fn sidebar_mut(&mut self) -> &mut sidebar::SidebarFeature {
        &mut self.sidebar
    }

    pub(crate) fn explorer(&self) -> &explorer::ExplorerFeature {
        &self.explorer
    }

    pub(crate) fn explorer_mut(&mut self) -> &mut explorer::ExplorerFeature {
        &mut self.explorer
    }
}
