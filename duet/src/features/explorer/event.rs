/// Events emitted by the explorer panel.
#[derive(Debug, Clone)]
pub(crate) enum ExplorerEvent {
    FilterChanged(String),
}
