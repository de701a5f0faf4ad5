use iced::Task;

use super::event::ExplorerEvent;
use super::model::{TREE_ITEMS, TreeItem, TreeItemKind};
use crate::app::Event as AppEvent;
use crate::features::Feature;

/// Explorer feature root that owns the tree filter.
#[derive(Debug)]
pub(crate) struct ExplorerFeature {
    filter: String,
    visible: Vec<TreeItem>,
}

impl ExplorerFeature {
    pub(crate) fn new() -> Self {
        Self {
            filter: String::new(),
            visible: TREE_ITEMS.to_vec(),
        }
    }

    /// Return the current filter text as typed.
    pub(crate) fn filter(&self) -> &str {
        &self.filter
    }

    /// Return the rows to display.
    ///
    /// With a filter, a row is kept when its label contains the filter
    /// (case-insensitive) or when it is a folder above a kept row.
    pub(crate) fn visible_items(&self) -> &[TreeItem] {
        &self.visible
    }

    fn set_filter(&mut self, filter: String) {
        self.visible = visible_items(TREE_ITEMS, &filter);
        self.filter = filter;
    }
}

impl Feature for ExplorerFeature {
    type Event = ExplorerEvent;
    type Ctx<'a>
        = ()
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: ExplorerEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            ExplorerEvent::FilterChanged(filter) => self.set_filter(filter),
        }

        Task::none()
    }
}

fn visible_items(items: &[TreeItem], filter: &str) -> Vec<TreeItem> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    let mut keep = vec![false; items.len()];
    let mut ancestors: Vec<usize> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        ancestors.truncate(item.indent);

        if item.label.to_lowercase().contains(&needle) {
            keep[index] = true;
            for &ancestor in &ancestors {
                keep[ancestor] = true;
            }
        }

        if item.kind == TreeItemKind::Folder {
            ancestors.push(index);
        }
    }

    items
        .iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(*item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::ExplorerFeature;
    use crate::features::Feature;
    use crate::features::explorer::ExplorerEvent;

    fn labels(feature: &ExplorerFeature) -> Vec<&'static str> {
        feature
            .visible_items()
            .iter()
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn given_empty_filter_when_listing_then_every_row_is_visible() {
        let feature = ExplorerFeature::new();

        assert_eq!(feature.visible_items().len(), 12);
        assert_eq!(labels(&feature)[0], "src");
    }

    #[test]
    fn given_filter_matching_nested_file_when_listing_then_parent_folders_stay()
    {
        let mut feature = ExplorerFeature::new();

        let _task = feature
            .reduce(ExplorerEvent::FilterChanged(String::from("platform")), &());

        assert_eq!(labels(&feature), vec!["src", "hooks", "usePlatform.ts"]);
    }

    #[test]
    fn given_filter_in_other_case_when_listing_then_match_is_case_insensitive()
    {
        let mut feature = ExplorerFeature::new();

        let _task = feature
            .reduce(ExplorerEvent::FilterChanged(String::from("  JSON ")), &());

        assert_eq!(labels(&feature), vec!["package.json", "tsconfig.json"]);
        assert_eq!(feature.filter(), "  JSON ");
    }

    #[test]
    fn given_filter_without_matches_when_listing_then_tree_is_empty() {
        let mut feature = ExplorerFeature::new();

        let _task = feature
            .reduce(ExplorerEvent::FilterChanged(String::from("zzz")), &());

        assert!(feature.visible_items().is_empty());
    }
}
