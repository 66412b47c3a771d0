//! Declaration model for the C++ API surface documentation is attached to.
//!
//! Declarations live in flat arenas and refer to each other by id: a
//! function names its scope, a nested class names its parent, a property
//! names its getter and setter. Nothing owns anything else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumId(pub usize);

/// Documentation attached to a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub brief: String,
    /// Extended description (only types carry one today)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Comment {
    pub fn brief(brief: impl Into<String>) -> Self {
        Self {
            brief: brief.into(),
            text: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScopeKind {
    TranslationUnit { file_name: String },
    Namespace,
    Class {
        #[serde(default)]
        is_interface: bool,
    },
}

/// A declaration context: translation unit, namespace or class.
///
/// Classes double as the Type declarations of the model; their comment
/// slot is the class documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub name: String,
    pub kind: ScopeKind,
    #[serde(default)]
    pub parent: Option<ScopeId>,
    /// Raw text of the macro expansions found directly in this scope
    #[serde(default)]
    pub macro_expansions: Vec<String>,
    #[serde(default)]
    pub comment: Option<Comment>,
}

impl Scope {
    pub fn is_class(&self) -> bool {
        matches!(self.kind, ScopeKind::Class { .. })
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, ScopeKind::Class { is_interface: true })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    #[default]
    Regular,
    ImplicitThis,
    Variadic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// C++ spelling of the type, e.g. `const QString &`
    pub type_name: String,
    #[serde(default)]
    pub kind: ParameterKind,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: ParameterKind::Regular,
        }
    }

    /// Generated names for anonymous parameters look like `_0`, `_1`, ...
    pub fn has_placeholder_name(&self) -> bool {
        let mut chars = self.name.chars();
        chars.next() == Some('_') && chars.next().is_some_and(|c| c.is_ascii_digit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeprecationKind {
    Obsolete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    pub kind: DeprecationKind,
    #[serde(default)]
    pub message: Option<String>,
}

impl Deprecation {
    pub fn obsolete(message: Option<String>) -> Self {
        Self {
            kind: DeprecationKind::Obsolete,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// Name before any renaming done for the bindings
    #[serde(default)]
    pub original_name: String,
    pub scope: ScopeId,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub deprecation: Option<Deprecation>,
}

impl Function {
    /// The C++ name the reference documentation uses.
    pub fn lookup_name(&self) -> &str {
        if self.original_name.is_empty() {
            &self.name
        } else {
            &self.original_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub type_name: String,
    pub scope: ScopeId,
    pub getter: FunctionId,
    #[serde(default)]
    pub setter: Option<FunctionId>,
    /// Backed by a field rather than accessor methods
    #[serde(default)]
    pub has_field: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumItem {
    pub name: String,
    #[serde(default)]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumeration {
    pub name: String,
    pub scope: ScopeId,
    #[serde(default)]
    pub items: Vec<EnumItem>,
    #[serde(default)]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeIdentity {
    #[default]
    Resolved,
    /// `typename T::value_type` and friends
    Dependent,
    /// The injected class name inside a template
    Injected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub printed: String,
    #[serde(default)]
    pub identity: TypeIdentity,
}

/// `typedef <underlying> <name>;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    pub underlying: TypeRef,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("{owner} refers to missing scope #{id}")]
    MissingScope { owner: String, id: usize },
    #[error("property {property} refers to missing accessor #{id}")]
    MissingAccessor { property: String, id: usize },
}

/// All declarations of one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub scopes: Vec<Scope>,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub enums: Vec<Enumeration>,
    #[serde(default)]
    pub typedefs: Vec<Typedef>,
}

impl Model {
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    pub fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }

    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.0]
    }

    pub fn function_mut(&mut self, id: FunctionId) -> &mut Function {
        &mut self.functions[id.0]
    }

    pub fn property(&self, id: PropertyId) -> &Property {
        &self.properties[id.0]
    }

    pub fn property_mut(&mut self, id: PropertyId) -> &mut Property {
        &mut self.properties[id.0]
    }

    pub fn enumeration(&self, id: EnumId) -> &Enumeration {
        &self.enums[id.0]
    }

    pub fn enumeration_mut(&mut self, id: EnumId) -> &mut Enumeration {
        &mut self.enums[id.0]
    }

    pub fn function_ids(&self) -> impl Iterator<Item = FunctionId> {
        (0..self.functions.len()).map(FunctionId)
    }

    pub fn property_ids(&self) -> impl Iterator<Item = PropertyId> {
        (0..self.properties.len()).map(PropertyId)
    }

    pub fn enum_ids(&self) -> impl Iterator<Item = EnumId> {
        (0..self.enums.len()).map(EnumId)
    }

    /// Scopes that are classes, i.e. the Type declarations.
    pub fn class_ids(&self) -> impl Iterator<Item = ScopeId> + '_ {
        self.scopes
            .iter()
            .enumerate()
            .filter(|(_, scope)| scope.is_class())
            .map(|(i, _)| ScopeId(i))
    }

    pub fn add_scope(&mut self, name: impl Into<String>, kind: ScopeKind, parent: Option<ScopeId>) -> ScopeId {
        self.scopes.push(Scope {
            name: name.into(),
            kind,
            parent,
            macro_expansions: Vec::new(),
            comment: None,
        });
        ScopeId(self.scopes.len() - 1)
    }

    pub fn add_function(&mut self, name: impl Into<String>, scope: ScopeId, parameters: Vec<Parameter>) -> FunctionId {
        let name = name.into();
        self.functions.push(Function {
            original_name: name.clone(),
            name,
            scope,
            parameters,
            comment: None,
            deprecation: None,
        });
        FunctionId(self.functions.len() - 1)
    }

    pub fn add_property(&mut self, property: Property) -> PropertyId {
        self.properties.push(property);
        PropertyId(self.properties.len() - 1)
    }

    pub fn add_enum(&mut self, name: impl Into<String>, scope: ScopeId, items: &[&str]) -> EnumId {
        self.enums.push(Enumeration {
            name: name.into(),
            scope,
            items: items
                .iter()
                .map(|item| EnumItem {
                    name: item.to_string(),
                    comment: None,
                })
                .collect(),
            comment: None,
        });
        EnumId(self.enums.len() - 1)
    }

    /// Check that every id in the model points at an existing declaration.
    pub fn validate(&self) -> Result<(), ModelError> {
        let scope_ok = |id: ScopeId| id.0 < self.scopes.len();
        for scope in &self.scopes {
            if let Some(parent) = scope.parent.filter(|p| !scope_ok(*p)) {
                return Err(ModelError::MissingScope {
                    owner: scope.name.clone(),
                    id: parent.0,
                });
            }
        }
        for function in &self.functions {
            if !scope_ok(function.scope) {
                return Err(ModelError::MissingScope {
                    owner: function.name.clone(),
                    id: function.scope.0,
                });
            }
        }
        for property in &self.properties {
            if !scope_ok(property.scope) {
                return Err(ModelError::MissingScope {
                    owner: property.name.clone(),
                    id: property.scope.0,
                });
            }
            for accessor in std::iter::once(property.getter).chain(property.setter) {
                if accessor.0 >= self.functions.len() {
                    return Err(ModelError::MissingAccessor {
                        property: property.name.clone(),
                        id: accessor.0,
                    });
                }
            }
        }
        for e in &self.enums {
            if !scope_ok(e.scope) {
                return Err(ModelError::MissingScope {
                    owner: e.name.clone(),
                    id: e.scope.0,
                });
            }
        }
        Ok(())
    }
}

/// Words the generated bindings cannot use as identifiers.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Turn an arbitrary name into an identifier the bindings can use.
///
/// Invalid characters become `_`, a leading digit gets a `_` prefix and
/// reserved words are prefixed with `@`.
pub fn safe_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if RESERVED_WORDS.contains(&ident.as_str()) {
        ident.insert(0, '@');
    }
    ident
}
