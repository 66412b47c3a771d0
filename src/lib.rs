//! qtdoc attaches Qt reference documentation to parsed C++ declarations.
//!
//! A [`DocumentationStore`] holds the module's reference pages as plain
//! text. [`Documentation`] builds a search pattern per declaration from its
//! name and normalized signature, runs it against the page the declaration
//! belongs on, and writes the captured paragraph into the declaration's
//! comment slot. Declarations that cannot be matched are left alone.
//!
//! ```no_run
//! use qtdoc::{Documentation, DocumentationStore, Model};
//! use std::path::Path;
//!
//! let mut model = Model::default();
//! // ... populate from a header parser ...
//! let store = DocumentationStore::load(Path::new("/usr/share/qt5/doc"), "Core");
//! let docs = Documentation::for_model(store, &model);
//! for id in model.function_ids() {
//!     docs.document_function(&mut model, id);
//! }
//! ```

pub mod config;
pub mod document;
pub mod model;
pub mod page;
pub mod pattern;
pub mod signature;
pub mod store;
pub mod strip;
pub mod typedefs;

pub use config::{MatchConfig, PageNames};
pub use document::Documentation;
pub use model::{
    Comment, Deprecation, EnumId, FunctionId, Model, ModelError, PropertyId, ScopeId, ScopeKind,
};
pub use store::{DocumentationStore, StoreError};
pub use typedefs::TypedefRegistry;
