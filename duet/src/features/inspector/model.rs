/// Key/value pair shown in the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Property {
    pub(crate) key: &'static str,
    pub(crate) value: &'static str,
}

pub(crate) const PROPERTIES: &[Property] = &[
    Property {
        key: "Name",
        value: "App.tsx",
    },
    Property {
        key: "Type",
        value: "TypeScript React",
    },
    Property {
        key: "Size",
        value: "4.2 KB",
    },
    Property {
        key: "Lines",
        value: "186",
    },
    Property {
        key: "Modified",
        value: "Just now",
    },
    Property {
        key: "Encoding",
        value: "UTF-8",
    },
];

/// Footer summary of the inspected document.
pub(crate) const LAYERS_SUMMARY: &str = "3 layers";
