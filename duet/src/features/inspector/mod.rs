mod model;

pub(crate) use model::{LAYERS_SUMMARY, PROPERTIES, Property};
