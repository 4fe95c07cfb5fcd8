//! Migration edge declarations for schema version graphs
//!
//! A [`MigrationEdge`] declares which version(s) and schema a migration step
//! may start from and which version and schema it produces. Every
//! declaration is validated in full at construction time and collected in an
//! [`EdgeRegistry`] for an external resolver to walk.

mod edge;
mod error;
mod registry;
mod source;

pub use edge::MigrationEdge;
pub use error::{EdgeError, ErrorKind};
pub use registry::EdgeRegistry;
pub use source::SourceSpec;
