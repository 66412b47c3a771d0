//! Page keys: which stored page documents a scope.
//!
//! Mirrors the documentation site's file naming: `qwidget.html` for a
//! class, `qabstractitemmodel-index.html`-style names for nested types,
//! and a fixed page for the global scope.

use crate::config::PageNames;
use crate::model::{Model, ScopeId, ScopeKind};

/// Page documenting the members of `scope`.
pub fn page_key(model: &Model, scope: ScopeId, pages: &PageNames) -> String {
    let decl = model.scope(scope);
    if decl.name.is_empty() {
        return pages.global.clone();
    }

    let mut key = decl.name.to_lowercase();
    if decl.is_interface() {
        // interfaces are named IFoo; their page is foo.html
        key.remove(0);
    }
    if let Some(parent) = decl.parent.map(|id| model.scope(id)) {
        if parent.is_class() {
            key.insert_str(0, &format!("{}-", parent.name.to_lowercase()));
        }
    }
    key.push_str(&pages.suffix);
    key
}

/// The companion page listing a scope's obsolete members.
pub fn obsolete_key(key: &str, pages: &PageNames) -> String {
    match key.strip_suffix(pages.suffix.as_str()) {
        Some(stem) => format!("{stem}{}", pages.obsolete_suffix),
        None => format!("{key}{}", pages.obsolete_suffix),
    }
}

/// Pages consulted before the scope page for free functions of a few
/// utility headers.
pub fn alternate_keys<'p>(model: &Model, scope: ScopeId, pages: &'p PageNames) -> &'p [String] {
    match &model.scope(scope).kind {
        ScopeKind::TranslationUnit { file_name } if file_name.contains("qmath") => &pages.math,
        ScopeKind::TranslationUnit { file_name } if file_name.contains("qalgorithms") => {
            &pages.algorithms
        }
        _ => &[],
    }
}
