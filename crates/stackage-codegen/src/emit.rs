use heck::ToSnakeCase;
use stackage_core::schema::{ModelDescriptor, PropertyConfig, PropertyType};

const DISCLAIMER: &str =
    "//This file was generated by stackage, do not modify directly as your changes will be lost.";

/// Render one model descriptor to generated source text.
///
/// Deterministic and idempotent: the same descriptor always yields
/// byte-identical text. Generated files carry CRLF line endings.
pub fn emit_model(model: &ModelDescriptor, prefix: Option<&str>) -> String {
    let mut text = String::new();
    let full_name = &model.full_name;

    push_line(&mut text, DISCLAIMER);
    push_line(&mut text, "import Model from 'stackage-js/data-types/model';");
    for associated in &model.associated_models {
        push_line(
            &mut text,
            &format!("import {associated} from '../models/{associated}.js';"),
        );
    }

    push_line(&mut text, &format!("class {full_name} extends Model {{"));
    push_line(&mut text, "    constructor(record, config = {}){");
    push_line(&mut text, "        super(record, config);");
    push_line(&mut text, "    }");
    push_line(&mut text, "");

    push_line(&mut text, &format!("    static name = '{full_name}';"));
    if let Some(prefix) = prefix {
        push_line(&mut text, &format!("    static prefix = '{prefix}';"));
    }
    push_line(
        &mut text,
        &format!("    static source = '{}';", source_name(&model.name)),
    );
    push_line(&mut text, "    static dto = false;");
    push_line(&mut text, "");

    // The property map is computed once; redefining `properties` with the
    // computed value replaces this accessor, so repeated reads return the
    // identical object.
    push_line(&mut text, "    static get properties() {");
    push_line(&mut text, "        const value = {");
    for property in &model.properties {
        push_line(
            &mut text,
            &format!(
                "            '{}': {{type: {}, config: {}}},",
                property.name,
                type_expr(&property.ty),
                config_expr(&property.config),
            ),
        );
    }
    push_line(&mut text, "        };");
    push_line(
        &mut text,
        "        Object.defineProperty(this, 'properties', {value});",
    );
    push_line(&mut text, "        return value;");
    push_line(&mut text, "    }");
    push_line(&mut text, "}");
    push_line(&mut text, "");

    text.push_str(&format!("export default {full_name};"));
    text
}

fn push_line(text: &mut String, line: &str) {
    text.push_str(line);
    text.push_str("\r\n");
}

/// Table identifier in lowercase underscore form with underscores replaced
/// by hyphens.
fn source_name(table: &str) -> String {
    table.to_snake_case().replace('_', "-")
}

/// Render a semantic type as the expression used in the property map.
fn type_expr(ty: &PropertyType) -> String {
    match ty {
        PropertyType::Number => "NUMBER".to_string(),
        PropertyType::String => "STRING".to_string(),
        PropertyType::Date => "DATE".to_string(),
        PropertyType::Model(name) => name.clone(),
        PropertyType::List(item) => format!("[{}]", type_expr(item)),
    }
}

fn config_expr(config: &PropertyConfig) -> String {
    serde_json::to_string(config).expect("property config serializes")
}
