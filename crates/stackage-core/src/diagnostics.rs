use std::fmt;

/// A non-fatal condition observed during a generation run.
///
/// Generation is best-effort by design: partial metadata degrades to a
/// warning plus a documented fallback, never a failed run. Warnings are
/// accumulated in order into a [`Diagnostics`] and reported at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// No output directory was configured; nothing was written.
    MissingOutputDir,

    /// A column's native type is outside the mapped families. The column is
    /// still emitted, typed STRING.
    UnhandledColumnType {
        model: String,
        column: String,
        native_type: String,
    },

    /// An association kind tag the resolver does not classify. The
    /// association is dropped from the generated schema.
    UnknownAssociationKind {
        model: String,
        alias: String,
        kind: String,
    },

    /// A many-to-many association through a join table carrying user-declared
    /// columns. Decomposing these is unsupported; the association is dropped.
    UnsupportedThroughTable {
        model: String,
        alias: String,
        through: String,
    },

    /// A many-to-many association with no join-table metadata at all. The
    /// association is dropped.
    MissingThroughTable { model: String, alias: String },

    /// A reference whose declaring or target model is missing from the
    /// collected schema. That single reference is skipped.
    DanglingReference {
        model: String,
        alias: String,
        target: String,
    },

    /// A derived property's name collides with an existing property on the
    /// model. The derived property is appended regardless.
    PropertyCollision { model: String, property: String },

    /// Writing one generated file failed. Sibling writes proceed.
    WriteFailed { path: String, message: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingOutputDir => {
                write!(f, "must define an output directory; nothing was written")
            }
            Warning::UnhandledColumnType {
                model,
                column,
                native_type,
            } => write!(
                f,
                "unhandled data type `{native_type}` on `{model}.{column}`; falling back to STRING"
            ),
            Warning::UnknownAssociationKind { model, alias, kind } => write!(
                f,
                "unhandled association kind `{kind}` for `{model}.{alias}`; association dropped"
            ),
            Warning::UnsupportedThroughTable {
                model,
                alias,
                through,
            } => write!(
                f,
                "association `{model}.{alias}` goes through `{through}` which declares its own \
                 columns; decomposed many-to-many relations are not supported, association dropped"
            ),
            Warning::MissingThroughTable { model, alias } => write!(
                f,
                "association `{model}.{alias}` is many-to-many but reports no join table; \
                 association dropped"
            ),
            Warning::DanglingReference {
                model,
                alias,
                target,
            } => write!(
                f,
                "cannot find model for reference `{model}.{alias}` -> `{target}`; reference skipped"
            ),
            Warning::PropertyCollision { model, property } => {
                write!(f, "property `{property}` already exists on `{model}`")
            }
            Warning::WriteFailed { path, message } => {
                write!(f, "failed to write `{path}`: {message}")
            }
        }
    }
}

/// Ordered collection of [`Warning`]s produced by a run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display_names_the_subject() {
        let warning = Warning::UnhandledColumnType {
            model: "Order".to_string(),
            column: "total".to_string(),
            native_type: "EXOTIC".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("EXOTIC"), "{msg}");
        assert!(msg.contains("Order.total"), "{msg}");
        assert!(msg.contains("STRING"), "{msg}");
    }

    #[test]
    fn diagnostics_preserve_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn(Warning::MissingOutputDir);
        diagnostics.warn(Warning::PropertyCollision {
            model: "Order".to_string(),
            property: "items".to_string(),
        });

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.warnings()[0], Warning::MissingOutputDir);
    }
}
