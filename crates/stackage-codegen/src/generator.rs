use std::path::PathBuf;

use stackage_core::{Builder, Diagnostics, Introspect, Warning};

use crate::emit;
use crate::registry::{GeneratedModel, ModelRegistry};
use crate::writer;

/// Entry point for a generation run.
///
/// Translates introspected model metadata into generated model-class files.
/// A run never fails: every gap in the metadata and every per-file write
/// error degrades to a warning in the returned [`Report`].
#[derive(Debug, Default)]
pub struct Generator {
    /// If set, prefix every generated class and file name with this string.
    prefix: Option<String>,

    /// Where to write generated files. Absence aborts the run at the
    /// precondition check, before any processing.
    out_dir: Option<PathBuf>,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct Generation {
    /// Generated artifacts, keyed by class name.
    pub registry: ModelRegistry,

    /// Written paths and accumulated warnings.
    pub report: Report,
}

/// Aggregated outcome of a run, reported at the end rather than
/// first-error abort.
#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<PathBuf>,
    pub diagnostics: Diagnostics,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(&mut self, prefix: &str) -> &mut Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn out_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.out_dir = Some(dir.into());
        self
    }

    pub fn run(&self, source: &dyn Introspect) -> Generation {
        let mut diagnostics = Diagnostics::new();

        let Some(out_dir) = &self.out_dir else {
            diagnostics.warn(Warning::MissingOutputDir);
            return Generation {
                registry: ModelRegistry::new(),
                report: Report {
                    written: vec![],
                    diagnostics,
                },
            };
        };

        let mut builder = Builder::new();
        if let Some(prefix) = &self.prefix {
            builder.prefix(prefix);
        }
        let schema = builder.build(source, &mut diagnostics);

        let mut registry = ModelRegistry::new();
        for model in schema.models() {
            registry.insert(GeneratedModel {
                full_name: model.full_name.clone(),
                file_name: format!("{}.js", model.full_name),
                text: emit::emit_model(model, self.prefix.as_deref()),
            });
        }

        let written = writer::write_models(out_dir, &registry, &mut diagnostics);

        Generation {
            registry,
            report: Report {
                written,
                diagnostics,
            },
        }
    }
}
