//! Signature normalization from printed C++ types to documentation patterns.
//!
//! Two steps: [`parser`] understands the type, [`render`] turns the typed
//! form into a pattern that tolerates the pages' spelling conventions.

pub mod parser;
pub mod render;

pub use parser::{parse_type, TypeExpr};
pub use render::type_pattern;
