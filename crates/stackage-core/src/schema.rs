mod model;
pub use model::ModelDescriptor;

mod property;
pub use property::{PropertyConfig, PropertyDescriptor};

mod ty;
pub use ty::PropertyType;

use indexmap::IndexMap;

/// The normalized intermediate schema for one generation run.
///
/// Built once by the [`Builder`](crate::Builder), owned exclusively by it
/// until handed to the emitter, and immutable thereafter. Models iterate in
/// introspection order.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<String, ModelDescriptor>,
}

impl Schema {
    pub fn models(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.values()
    }

    /// Get a model by its table identifier.
    pub fn model(&self, name: &str) -> Option<&ModelDescriptor> {
        self.models.get(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
