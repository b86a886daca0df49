use crate::diagnostics::{Diagnostics, Warning};
use crate::introspect::{AssociationRecord, ModelRecord};

/// How many records the relation property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// A classified association, ready to be merged into the declaring model.
///
/// Produced transiently during the resolution pass and consumed by the
/// builder's merge phase; never retained after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub cardinality: Cardinality,

    /// Declaring model's table.
    pub model: String,

    /// Association alias; becomes the relation property name.
    pub property: String,

    /// Foreign-key name; becomes the paired key property name.
    pub key: String,

    /// True when the foreign-key column physically exists on the declaring
    /// model's table. False for virtual/inverse sides, where the key name is
    /// synthesized.
    pub owner: bool,

    /// Target model's table.
    pub target: String,
}

/// Association kind tags the resolver classifies.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AssociationKind {
    BelongsToMany,
    HasMany,
    HasOne,
    BelongsTo,
    Other(String),
}

impl AssociationKind {
    fn parse(tag: &str) -> Self {
        match tag {
            "BelongsToMany" => Self::BelongsToMany,
            "HasMany" => Self::HasMany,
            "HasOne" => Self::HasOne,
            "BelongsTo" => Self::BelongsTo,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Classify one raw association into zero or one [`Reference`].
///
/// Unrecognized kinds and unsupported many-to-many shapes produce a warning
/// and no reference; the association is dropped from the generated schema.
pub fn resolve(
    model: &ModelRecord,
    association: &AssociationRecord,
    diagnostics: &mut Diagnostics,
) -> Option<Reference> {
    match AssociationKind::parse(&association.kind) {
        AssociationKind::BelongsToMany => resolve_belongs_to_many(model, association, diagnostics),

        // The foreign key lives on the belongs-to side; this side is virtual.
        AssociationKind::HasMany => Some(Reference {
            cardinality: Cardinality::Many,
            model: model.table_name.clone(),
            property: association.alias.clone(),
            key: format!("{}Ids", association.alias),
            owner: false,
            target: association.target.clone(),
        }),

        AssociationKind::HasOne | AssociationKind::BelongsTo => {
            // This side owns the physical column exactly when the declared
            // foreign key is its own identifier column. Owners use the real
            // column name; virtual sides synthesize one from the alias.
            let owner = association.foreign_key == association.identifier;
            let key = if owner {
                association.foreign_key.clone()
            } else {
                format!("{}Id", association.alias)
            };

            Some(Reference {
                cardinality: Cardinality::One,
                model: model.table_name.clone(),
                property: association.alias.clone(),
                key,
                owner,
                target: association.target.clone(),
            })
        }

        AssociationKind::Other(kind) => {
            diagnostics.warn(Warning::UnknownAssociationKind {
                model: model.table_name.clone(),
                alias: association.alias.clone(),
                kind,
            });
            None
        }
    }
}

fn resolve_belongs_to_many(
    model: &ModelRecord,
    association: &AssociationRecord,
    diagnostics: &mut Diagnostics,
) -> Option<Reference> {
    // Only a pure join table (every column ORM-synthesized) is treated as a
    // direct many-to-many. A join table with user-declared columns would have
    // to be decomposed into two one-to-many legs through the join model,
    // which is not supported; the association is dropped with a named
    // warning rather than approximated.
    match &association.through {
        Some(through) if through.is_auto_generated() => Some(Reference {
            cardinality: Cardinality::Many,
            model: model.table_name.clone(),
            property: association.alias.clone(),
            key: format!("{}Ids", association.alias),
            // The join table owns both key columns.
            owner: false,
            target: association.target.clone(),
        }),
        Some(through) => {
            diagnostics.warn(Warning::UnsupportedThroughTable {
                model: model.table_name.clone(),
                alias: association.alias.clone(),
                through: through.table_name.clone(),
            });
            None
        }
        None => {
            diagnostics.warn(Warning::MissingThroughTable {
                model: model.table_name.clone(),
                alias: association.alias.clone(),
            });
            None
        }
    }
}
