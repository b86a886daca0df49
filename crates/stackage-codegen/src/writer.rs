use std::fs;
use std::path::{Path, PathBuf};

use stackage_core::{Diagnostics, Warning};

use crate::registry::ModelRegistry;

/// Materialize every artifact in the registry under `<dir>/models/`.
///
/// The directory tree is created as needed and existing files are
/// overwritten. Generation is an all-attempted batch: a failed write is
/// recorded as a warning and sibling writes proceed. Returns the paths that
/// were written.
pub fn write_models(
    dir: &Path,
    registry: &ModelRegistry,
    diagnostics: &mut Diagnostics,
) -> Vec<PathBuf> {
    let models_dir = dir.join("models");

    if let Err(err) = fs::create_dir_all(&models_dir) {
        diagnostics.warn(Warning::WriteFailed {
            path: models_dir.display().to_string(),
            message: err.to_string(),
        });
        return vec![];
    }

    let mut written = Vec::with_capacity(registry.len());
    for model in registry.models() {
        let path = models_dir.join(&model.file_name);
        match fs::write(&path, &model.text) {
            Ok(()) => written.push(path),
            Err(err) => diagnostics.warn(Warning::WriteFailed {
                path: path.display().to_string(),
                message: err.to_string(),
            }),
        }
    }

    written
}
