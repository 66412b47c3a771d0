//! Typedef aliases per type.
//!
//! The declaration model resolves typedefs to their underlying type, but
//! the reference pages keep writing `qreal` or `QStringList`. The registry
//! maps the canonical spelling of an underlying type to every typedef name
//! that denotes it, so the signature patterns can accept either.

use crate::model::{TypeIdentity, TypeRef, Typedef};
use crate::signature::parser::parse_type;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TypedefRegistry {
    aliases: HashMap<String, Vec<String>>,
}

impl TypedefRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from every typedef of a model.
    pub fn from_typedefs<'a>(typedefs: impl IntoIterator<Item = &'a Typedef>) -> Self {
        let mut registry = Self::new();
        for typedef in typedefs {
            registry.insert(&typedef.underlying, &typedef.name);
        }
        registry
    }

    /// Register `alias` as another name for `underlying`.
    ///
    /// Dependent and injected types have no stable printed identity and
    /// are ignored, as is an alias that spells the type itself.
    pub fn insert(&mut self, underlying: &TypeRef, alias: &str) {
        if underlying.identity != TypeIdentity::Resolved {
            return;
        }
        let key = canonical_key(&underlying.printed);
        let alias = alias.trim();
        if alias.is_empty() || canonical_key(alias) == key {
            return;
        }
        let entry = self.aliases.entry(key).or_default();
        if !entry.iter().any(|known| known == alias) {
            entry.push(alias.to_string());
        }
    }

    /// Typedef names for the canonical type name, in registration order.
    pub fn aliases(&self, type_name: &str) -> &[String] {
        self.aliases
            .get(&canonical_key(type_name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn canonical_key(printed: &str) -> String {
    parse_type(printed).to_string()
}
