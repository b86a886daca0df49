use crate::diagnostics::{Diagnostics, Warning};
use crate::introspect::{Introspect, ModelRecord};
use crate::mapper;
use crate::resolver::{self, Cardinality, Reference};
use crate::schema::{ModelDescriptor, PropertyConfig, PropertyDescriptor, PropertyType, Schema};

use heck::ToLowerCamelCase;
use indexmap::{IndexMap, IndexSet};

/// Assembles a [`Schema`] from introspected model metadata.
///
/// The build runs in two phases: first every model's base properties are
/// collected (and its associations resolved into references), then a second
/// pass merges all cross-model references. Models may reference each other
/// freely, including cycles; the second pass sees the complete collection,
/// so no ordering between models matters.
#[derive(Debug, Default)]
pub struct Builder {
    /// If set, prefix every generated class name with this string.
    prefix: Option<String>,
}

/// Used to track state during the build process.
struct BuildSchema<'a> {
    /// Build options.
    builder: &'a Builder,

    /// Models as they are collected, keyed by table identifier.
    models: IndexMap<String, ModelDescriptor>,

    /// References resolved during collection, merged in phase 2.
    references: Vec<Reference>,
}

impl Builder {
    pub fn new() -> Self {
        Self { prefix: None }
    }

    pub fn prefix(&mut self, prefix: &str) -> &mut Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn build(&self, source: &dyn Introspect, diagnostics: &mut Diagnostics) -> Schema {
        let mut build = BuildSchema {
            builder: self,
            models: IndexMap::new(),
            references: vec![],
        };

        for model in source.list_models() {
            build.collect_model(model, diagnostics);
        }

        let references = std::mem::take(&mut build.references);
        for reference in &references {
            build.merge_reference(reference, diagnostics);
        }

        Schema {
            models: build.models,
        }
    }

    /// Generated class name for a table identifier.
    pub fn full_name(&self, table: &str) -> String {
        format!("{}{}Model", self.prefix.as_deref().unwrap_or(""), table)
    }
}

impl BuildSchema<'_> {
    /// Phase 1: seed a descriptor from the model's columns and resolve its
    /// associations into references for the merge phase.
    fn collect_model(&mut self, record: &ModelRecord, diagnostics: &mut Diagnostics) {
        for association in record.associations.values() {
            if let Some(reference) = resolver::resolve(record, association, diagnostics) {
                self.references.push(reference);
            }
        }

        let mut descriptor = ModelDescriptor {
            name: record.table_name.clone(),
            full_name: self.builder.full_name(&record.table_name),
            primary_key: record.primary_key.clone(),
            properties: vec![],
            associated_models: IndexSet::new(),
        };

        for (name, column) in &record.columns {
            let ty = mapper::map_column(&record.table_name, name, &column.native_type, diagnostics);
            descriptor
                .properties
                .push(PropertyDescriptor::column(name.clone(), ty, column.allow_null));
        }

        self.models.insert(record.table_name.clone(), descriptor);
    }

    /// Phase 2: merge one reference into its declaring model as a relation
    /// property plus its paired foreign-key property.
    fn merge_reference(&mut self, reference: &Reference, diagnostics: &mut Diagnostics) {
        if !self.models.contains_key(&reference.target) {
            diagnostics.warn(dangling(reference));
            return;
        }

        let target_name = self.builder.full_name(&reference.target);
        let property_name = reference.property.to_lower_camel_case();
        let key_name = reference.key.to_lower_camel_case();
        let many = reference.cardinality == Cardinality::Many;

        let relation_ty = if many {
            PropertyType::list(PropertyType::model(target_name.clone()))
        } else {
            PropertyType::model(target_name.clone())
        };
        let key_ty = if many {
            PropertyType::list(PropertyType::Number)
        } else {
            PropertyType::Number
        };

        let Some(model) = self.models.get_mut(&reference.model) else {
            diagnostics.warn(dangling(reference));
            return;
        };

        // Name collisions are reported but do not block generation; the
        // derived properties are appended regardless.
        for name in [&property_name, &key_name] {
            if model.has_property_like(name) {
                diagnostics.warn(Warning::PropertyCollision {
                    model: model.name.clone(),
                    property: name.clone(),
                });
            }
        }

        model.associated_models.insert(target_name);
        model.properties.push(PropertyDescriptor {
            name: property_name.clone(),
            ty: relation_ty,
            config: PropertyConfig {
                nullable: false,
                foreign_key: Some(key_name.clone()),
                foreign_key_for: None,
            },
        });
        model.properties.push(PropertyDescriptor {
            name: key_name,
            ty: key_ty,
            config: PropertyConfig {
                nullable: false,
                foreign_key: None,
                foreign_key_for: Some(property_name),
            },
        });
    }
}

fn dangling(reference: &Reference) -> Warning {
    Warning::DanglingReference {
        model: reference.model.clone(),
        alias: reference.property.clone(),
        target: reference.target.clone(),
    }
}
