use super::PropertyType;

use serde::Serialize;

/// One property of a [`ModelDescriptor`](super::ModelDescriptor).
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub ty: PropertyType,
    pub config: PropertyConfig,
}

/// Property configuration as it appears in the generated property map.
///
/// Serializes to the compact JSON the emitter embeds in generated source, so
/// key order here is emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyConfig {
    pub nullable: bool,

    /// For a relation property: name of its paired foreign-key property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,

    /// For a foreign-key property: name of the relation property it backs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key_for: Option<String>,
}

impl PropertyDescriptor {
    /// A plain column property.
    pub fn column(name: impl Into<String>, ty: PropertyType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            config: PropertyConfig {
                nullable,
                ..PropertyConfig::default()
            },
        }
    }
}
