use duet_layout::{KeyPress, Side};

/// Events that open, close or stop driving the side panels.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    Toggle(Side),
    KeyPressed(KeyPress),
    Teardown,
}
