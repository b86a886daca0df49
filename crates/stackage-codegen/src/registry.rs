use indexmap::IndexMap;

/// One emitted artifact: a generated model class and the file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModel {
    /// Prefixed export name; also the registry key.
    pub full_name: String,

    /// File name relative to the output `models/` directory.
    pub file_name: String,

    /// Complete generated source text.
    pub text: String,
}

/// Caller-owned mapping from generated class name to its artifact.
///
/// This is the explicit replacement for registering generated classes in a
/// process-wide lookup table: every run returns its own registry and nothing
/// is mutated as a side effect.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: IndexMap<String, GeneratedModel>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, model: GeneratedModel) {
        self.models.insert(model.full_name.clone(), model);
    }

    pub fn get(&self, full_name: &str) -> Option<&GeneratedModel> {
        self.models.get(full_name)
    }

    /// Artifacts in generation order.
    pub fn models(&self) -> impl Iterator<Item = &GeneratedModel> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
