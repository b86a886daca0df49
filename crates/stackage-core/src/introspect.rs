use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::Result;

/// Source of model metadata for a generation run.
///
/// This is an explicit introspection seam: implementations enumerate the
/// models they know about, and everything the pipeline needs is carried on
/// the records themselves. Metadata may come from a JSON dump of a connected
/// ORM instance ([`MetadataDump`]) or from a plain slice of records.
pub trait Introspect {
    fn list_models(&self) -> Vec<&ModelRecord>;
}

/// One introspected model: its table, columns, and declared associations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Table identifier.
    pub table_name: String,

    /// Name of the identity column.
    pub primary_key: String,

    /// Column name -> column metadata, in declaration order.
    #[serde(default)]
    pub columns: IndexMap<String, ColumnRecord>,

    /// Association alias -> association metadata, in declaration order.
    #[serde(default)]
    pub associations: IndexMap<String, AssociationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRecord {
    /// Native type token as reported by the ORM, e.g. `INTEGER` or
    /// `STRING(255)`.
    pub native_type: String,

    #[serde(default)]
    pub allow_null: bool,

    /// True when the ORM synthesized this column (join keys, timestamps).
    #[serde(default)]
    pub auto_generated: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationRecord {
    /// Association kind tag, e.g. `HasMany` or `BelongsTo`.
    pub kind: String,

    /// Alias the association was declared under.
    pub alias: String,

    /// Foreign-key column name.
    pub foreign_key: String,

    /// Identifier column name. A one-to-one side owns the physical column
    /// exactly when this equals `foreign_key`.
    pub identifier: String,

    /// Declaring model's table.
    pub source: String,

    /// Target model's table.
    pub target: String,

    /// Join-table metadata, present for many-to-many associations.
    #[serde(default)]
    pub through: Option<ThroughRecord>,
}

/// Join table implementing a many-to-many association.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThroughRecord {
    pub table_name: String,

    #[serde(default)]
    pub columns: IndexMap<String, ColumnRecord>,
}

impl ThroughRecord {
    /// True when the join table carries only ORM-synthesized columns, i.e.
    /// it implements a pure many-to-many join with no user data.
    pub fn is_auto_generated(&self) -> bool {
        self.columns.values().all(|column| column.auto_generated)
    }
}

/// A full metadata dump, as captured from a connected ORM instance.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDump {
    pub models: Vec<ModelRecord>,
}

impl MetadataDump {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Introspect for MetadataDump {
    fn list_models(&self) -> Vec<&ModelRecord> {
        self.models.iter().collect()
    }
}

impl Introspect for [ModelRecord] {
    fn list_models(&self) -> Vec<&ModelRecord> {
        self.iter().collect()
    }
}

impl Introspect for Vec<ModelRecord> {
    fn list_models(&self) -> Vec<&ModelRecord> {
        self.iter().collect()
    }
}
