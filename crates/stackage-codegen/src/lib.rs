mod emit;
pub use emit::emit_model;

mod generator;
pub use generator::{Generation, Generator, Report};

mod registry;
pub use registry::{GeneratedModel, ModelRegistry};

mod writer;
pub use writer::write_models;
