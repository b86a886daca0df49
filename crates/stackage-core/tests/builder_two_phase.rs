use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use stackage_core::diagnostics::{Diagnostics, Warning};
use stackage_core::introspect::{AssociationRecord, ColumnRecord, ModelRecord};
use stackage_core::schema::PropertyType;
use stackage_core::Builder;

fn column(native_type: &str, allow_null: bool) -> ColumnRecord {
    ColumnRecord {
        native_type: native_type.to_string(),
        allow_null,
        auto_generated: false,
    }
}

fn model(table: &str, columns: &[(&str, &str, bool)]) -> ModelRecord {
    ModelRecord {
        table_name: table.to_string(),
        primary_key: "id".to_string(),
        columns: columns
            .iter()
            .map(|(name, native, null)| (name.to_string(), column(native, *null)))
            .collect(),
        associations: IndexMap::new(),
    }
}

fn has_many(source: &str, alias: &str, target: &str) -> AssociationRecord {
    AssociationRecord {
        kind: "HasMany".to_string(),
        alias: alias.to_string(),
        foreign_key: format!("{}Id", source.to_lowercase()),
        identifier: "id".to_string(),
        source: source.to_string(),
        target: target.to_string(),
        through: None,
    }
}

fn belongs_to(source: &str, alias: &str, target: &str, foreign_key: &str) -> AssociationRecord {
    AssociationRecord {
        kind: "BelongsTo".to_string(),
        alias: alias.to_string(),
        foreign_key: foreign_key.to_string(),
        identifier: foreign_key.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        through: None,
    }
}

#[test]
fn base_columns_map_to_semantic_types() {
    let models = vec![model(
        "Order",
        &[
            ("id", "INTEGER", false),
            ("reference", "STRING(64)", false),
            ("placedAt", "DATE", true),
        ],
    )];

    let mut diagnostics = Diagnostics::new();
    let schema = Builder::new().build(&models, &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert!(!schema.is_empty());
    assert_eq!(schema.len(), 1);

    let order = schema.model("Order").unwrap();
    assert_eq!(order.full_name, "OrderModel");
    assert_eq!(order.primary_key, "id");
    assert_eq!(order.properties.len(), 3);
    assert_eq!(order.property("id").unwrap().ty, PropertyType::Number);
    assert_eq!(
        order.property("reference").unwrap().ty,
        PropertyType::String
    );
    assert_eq!(order.property("placedAt").unwrap().ty, PropertyType::Date);
    assert!(order.property("placedAt").unwrap().config.nullable);
    assert!(order.associated_models.is_empty());
}

#[test]
fn has_many_merges_relation_and_key_pair() {
    let mut order = model("Order", &[("id", "INTEGER", false)]);
    order
        .associations
        .insert("items".to_string(), has_many("Order", "items", "Item"));
    let item = model("Item", &[("id", "INTEGER", false)]);

    let mut diagnostics = Diagnostics::new();
    let schema = Builder::new().build(&vec![order, item], &mut diagnostics);

    assert!(diagnostics.is_empty());

    let order = schema.model("Order").unwrap();
    let items = order.property("items").unwrap();
    assert!(items.ty.is_list());
    assert_eq!(
        items.ty,
        PropertyType::list(PropertyType::model("ItemModel"))
    );
    assert_eq!(items.config.foreign_key.as_deref(), Some("itemsIds"));
    assert_eq!(items.config.foreign_key_for, None);

    let items_ids = order.property("itemsIds").unwrap();
    assert_eq!(items_ids.ty, PropertyType::list(PropertyType::Number));
    assert_eq!(items_ids.config.foreign_key_for.as_deref(), Some("items"));

    assert!(order.associated_models.contains("ItemModel"));
    // The inverse side declared nothing, so it gains nothing.
    let item = schema.model("Item").unwrap();
    assert_eq!(item.properties.len(), 1);
}

#[test]
fn owning_one_to_one_uses_real_column_name() {
    let mut item = model(
        "Item",
        &[("id", "INTEGER", false), ("orderId", "INTEGER", false)],
    );
    item.associations.insert(
        "order".to_string(),
        belongs_to("Item", "order", "Order", "orderId"),
    );
    let order = model("Order", &[("id", "INTEGER", false)]);

    let mut diagnostics = Diagnostics::new();
    let schema = Builder::new().build(&vec![order, item], &mut diagnostics);

    let item = schema.model("Item").unwrap();
    let relation = item.property("order").unwrap();
    assert!(!relation.ty.is_list());
    assert_eq!(relation.ty, PropertyType::model("OrderModel"));
    assert_eq!(relation.config.foreign_key.as_deref(), Some("orderId"));

    // The key property reuses the physical column name, which collides with
    // the base column; the collision is reported and both are kept.
    assert_eq!(
        diagnostics.warnings(),
        &[Warning::PropertyCollision {
            model: "Item".to_string(),
            property: "orderId".to_string(),
        }]
    );
    let keys: Vec<_> = item
        .properties
        .iter()
        .filter(|property| property.name == "orderId")
        .collect();
    assert_eq!(keys.len(), 2);
}

#[test]
fn mutually_referencing_models_build_without_ordering() {
    let mut user = model("User", &[("id", "INTEGER", false)]);
    user.associations
        .insert("posts".to_string(), has_many("User", "posts", "Post"));
    let mut post = model(
        "Post",
        &[("id", "INTEGER", false), ("authorId", "INTEGER", false)],
    );
    post.associations.insert(
        "author".to_string(),
        belongs_to("Post", "author", "User", "authorId"),
    );

    let mut diagnostics = Diagnostics::new();
    // Post first: phase 2 must still find User.
    let schema = Builder::new().build(&vec![post, user], &mut diagnostics);

    let post = schema.model("Post").unwrap();
    assert_eq!(
        post.property("author").unwrap().ty,
        PropertyType::model("UserModel")
    );
    let user = schema.model("User").unwrap();
    assert_eq!(
        user.property("posts").unwrap().ty,
        PropertyType::list(PropertyType::model("PostModel"))
    );
}

#[test]
fn prefix_applies_to_every_generated_name() {
    let mut order = model("Order", &[("id", "INTEGER", false)]);
    order
        .associations
        .insert("items".to_string(), has_many("Order", "items", "Item"));
    let item = model("Item", &[("id", "INTEGER", false)]);

    let mut diagnostics = Diagnostics::new();
    let schema = Builder::new()
        .prefix("App")
        .build(&vec![order, item], &mut diagnostics);

    let order = schema.model("Order").unwrap();
    assert_eq!(order.full_name, "AppOrderModel");
    assert_eq!(
        order.property("items").unwrap().ty,
        PropertyType::list(PropertyType::model("AppItemModel"))
    );
    assert!(order.associated_models.contains("AppItemModel"));
}

#[test]
fn dangling_target_skips_reference_but_not_run() {
    let mut order = model("Order", &[("id", "INTEGER", false)]);
    order
        .associations
        .insert("items".to_string(), has_many("Order", "items", "Item"));
    order
        .associations
        .insert("ghosts".to_string(), has_many("Order", "ghosts", "Ghost"));
    let item = model("Item", &[("id", "INTEGER", false)]);

    let mut diagnostics = Diagnostics::new();
    let schema = Builder::new().build(&vec![order, item], &mut diagnostics);

    assert_eq!(
        diagnostics.warnings(),
        &[Warning::DanglingReference {
            model: "Order".to_string(),
            alias: "ghosts".to_string(),
            target: "Ghost".to_string(),
        }]
    );

    // The valid reference still merged.
    let order = schema.model("Order").unwrap();
    assert!(order.property("items").is_some());
    assert!(order.property("ghosts").is_none());
}

#[test]
fn unknown_column_type_still_emits_property() {
    let models = vec![model("Order", &[("mystery", "EXOTIC", false)])];

    let mut diagnostics = Diagnostics::new();
    let schema = Builder::new().build(&models, &mut diagnostics);

    assert_eq!(
        diagnostics.warnings(),
        &[Warning::UnhandledColumnType {
            model: "Order".to_string(),
            column: "mystery".to_string(),
            native_type: "EXOTIC".to_string(),
        }]
    );
    assert_eq!(
        schema.model("Order").unwrap().property("mystery").unwrap().ty,
        PropertyType::String
    );
}

#[test]
fn snake_case_alias_and_key_are_camelized() {
    let mut order = model("Order", &[("id", "INTEGER", false)]);
    order.associations.insert(
        "line_items".to_string(),
        has_many("Order", "line_items", "Item"),
    );
    let item = model("Item", &[("id", "INTEGER", false)]);

    let mut diagnostics = Diagnostics::new();
    let schema = Builder::new().build(&vec![order, item], &mut diagnostics);

    let order = schema.model("Order").unwrap();
    let relation = order.property("lineItems").unwrap();
    assert_eq!(relation.config.foreign_key.as_deref(), Some("lineItemsIds"));
    assert!(order.property("lineItemsIds").is_some());
}
