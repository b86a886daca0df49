mod error;
pub use error::Error;

pub mod diagnostics;
pub use diagnostics::{Diagnostics, Warning};

pub mod introspect;
pub use introspect::{Introspect, MetadataDump};

pub mod schema;
pub use schema::Schema;

pub mod builder;
pub use builder::Builder;

pub mod mapper;
pub mod resolver;

/// A Result type alias that uses Stackage's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
