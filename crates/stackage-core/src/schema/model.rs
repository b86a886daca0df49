use super::PropertyDescriptor;

use indexmap::IndexSet;

/// The normalized description of one model, ready for emission.
#[derive(Debug, Clone)]
pub struct ModelDescriptor {
    /// Table identifier.
    pub name: String,

    /// Prefixed export name, e.g. `AppOrderModel`.
    pub full_name: String,

    /// Name of the identity column.
    pub primary_key: String,

    /// Properties in emission order. Names are expected to be unique; a
    /// collision is reported during the merge phase but does not block
    /// generation.
    pub properties: Vec<PropertyDescriptor>,

    /// Generated names of the models this one references, in the order the
    /// references were merged. One import is emitted per entry.
    pub associated_models: IndexSet<String>,
}

impl ModelDescriptor {
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// True when a property with the same leading-capitalized form already
    /// exists. This is the collision test applied before merging a derived
    /// property.
    pub fn has_property_like(&self, name: &str) -> bool {
        let candidate = leading_capitalized(name);
        self.properties
            .iter()
            .any(|property| leading_capitalized(&property.name) == candidate)
    }
}

/// Capitalize the first character, leaving the rest untouched.
fn leading_capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
