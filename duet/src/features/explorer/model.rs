/// Kind of an explorer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TreeItemKind {
    File,
    Folder,
}

/// One row of the explorer tree. `indent` is the nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeItem {
    pub(crate) label: &'static str,
    pub(crate) kind: TreeItemKind,
    pub(crate) indent: usize,
}

const fn folder(label: &'static str, indent: usize) -> TreeItem {
    TreeItem {
        label,
        kind: TreeItemKind::Folder,
        indent,
    }
}

const fn file(label: &'static str, indent: usize) -> TreeItem {
    TreeItem {
        label,
        kind: TreeItemKind::File,
        indent,
    }
}

/// Project tree shown in the explorer, in display order.
pub(crate) const TREE_ITEMS: &[TreeItem] = &[
    folder("src", 0),
    folder("components", 1),
    file("Icons.tsx", 2),
    folder("hooks", 1),
    file("useSidebarState.ts", 2),
    file("usePlatform.ts", 2),
    file("App.tsx", 1),
    file("index.css", 1),
    file("main.tsx", 1),
    file("package.json", 0),
    file("tsconfig.json", 0),
    file("vite.config.ts", 0),
];
