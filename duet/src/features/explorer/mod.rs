mod event;
mod feature;
mod model;

pub(crate) use event::ExplorerEvent;
pub(crate) use feature::ExplorerFeature;
pub(crate) use model::{TreeItem, TreeItemKind};
