/// Canonical semantic type of a property.
///
/// Columns map to one of the scalar variants; relation properties reference
/// a generated model class by name, wrapped in `List` for multi-valued
/// relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    Number,
    String,
    Date,

    /// Reference to a generated model class, by its full (prefixed) name.
    Model(String),

    /// Array marker for multi-valued relations.
    List(Box<PropertyType>),
}

impl PropertyType {
    pub fn model(name: impl Into<String>) -> Self {
        Self::Model(name.into())
    }

    pub fn list(item: PropertyType) -> Self {
        Self::List(Box::new(item))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}
