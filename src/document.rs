//! Matching engine attaching reference documentation to declarations.
//!
//! Each `document_*` call looks up the page of the declaration's scope,
//! builds the pattern for its kind and, on a match, writes the captured
//! text back onto the declaration. A failed match leaves the declaration
//! untouched; it is the common case and is not reported.

use crate::config::MatchConfig;
use crate::model::*;
use crate::page::{alternate_keys, obsolete_key, page_key};
use crate::pattern::{class_pattern, enum_item_pattern, enum_pattern, function_pattern, property_pattern};
use crate::store::DocumentationStore;
use crate::typedefs::TypedefRegistry;
use regex::{Captures, Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::{debug, trace};

static RE_QFLAGS_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"The \S+ type is a typedef for QFlags<\S+>\. It stores an OR combination of \S+ values\.")
        .unwrap()
});

static RE_VALUE_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)ConstantValue(?:Description)?.*?(?:\n{2}|$)").unwrap());

/// Macros whose expansion declares a documented property.
const PROPERTY_MARKERS: &[&str] = &["Q_PROPERTY", "QDOC_PROPERTY"];

/// Stands in for the implicit left operand of operators documented as
/// free functions, so documented argument names line up with parameters.
const IMPLICIT_OPERAND: &str = "one";

/// What a member pattern captured.
struct MatchResult {
    brief: String,
    args: String,
}

/// The documentation pass for one module.
///
/// Holds the read-only page store and typedef registry; it can be shared
/// across threads documenting disjoint declarations.
#[derive(Debug, Clone)]
pub struct Documentation {
    store: DocumentationStore,
    typedefs: TypedefRegistry,
    config: MatchConfig,
}

impl Documentation {
    pub fn new(store: DocumentationStore, typedefs: TypedefRegistry) -> Self {
        Self {
            store,
            typedefs,
            config: MatchConfig::default(),
        }
    }

    /// Engine over `store` with aliases taken from the model's typedefs.
    pub fn for_model(store: DocumentationStore, model: &Model) -> Self {
        Self::new(store, TypedefRegistry::from_typedefs(&model.typedefs))
    }

    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn store(&self) -> &DocumentationStore {
        &self.store
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn page_key(&self, model: &Model, scope: ScopeId) -> String {
        page_key(model, scope, &self.config.pages)
    }

    // -- Functions ------------------------------------------------------------

    /// Document a function from its scope's page, falling back to the
    /// obsolete-members page. Returns whether a match was found.
    pub fn document_function(&self, model: &mut Model, id: FunctionId) -> bool {
        let scope = model.function(id).scope;
        for key in alternate_keys(model, scope, &self.config.pages) {
            if self.try_match_function(model, id, key, false, true) {
                return true;
            }
        }

        let key = self.page_key(model, scope);
        if self.try_match_function(model, id, &key, false, true) {
            return true;
        }
        // obsolete pages format signatures less consistently
        let obsolete = obsolete_key(&key, &self.config.pages);
        self.try_match_function(model, id, &obsolete, true, false)
    }

    fn try_match_function(
        &self,
        model: &mut Model,
        id: FunctionId,
        key: &str,
        mark_obsolete: bool,
        complete_signature: bool,
    ) -> bool {
        let Some(page) = self.store.page(key) else {
            return false;
        };
        let pattern = {
            let function = model.function(id);
            let types: Vec<&str> = function
                .parameters
                .iter()
                .filter(|p| p.kind == ParameterKind::Regular)
                .map(|p| p.type_name.as_str())
                .collect();
            function_pattern(
                &model.scope(function.scope).name,
                function.lookup_name(),
                &types,
                &self.typedefs,
                complete_signature,
                &self.config,
            )
        };
        let Some(found) = self.captures(&pattern, page).map(|caps| MatchResult {
            brief: group(&caps, "docs").to_string(),
            args: group(&caps, "args").to_string(),
        }) else {
            return false;
        };
        trace!(function = %model.function(id).name, page = key, "matched function");

        let function = model.function_mut(id);
        fill_missing_parameter_names(function, &found.args);
        if mark_obsolete {
            function.deprecation = Some(Deprecation::obsolete(obsolete_message(&found.brief)));
        }
        function.comment = Some(Comment::brief(found.brief));
        true
    }

    // -- Properties -----------------------------------------------------------

    /// Document a property, either from its `Q_PROPERTY` block or, for
    /// accessor-only properties, from the getter's and setter's text.
    pub fn document_property(&self, model: &mut Model, id: PropertyId) -> bool {
        let property = model.property(id);
        let declared = declared_property_name(
            &model.scope(property.scope).macro_expansions,
            &property.name,
        );
        if let Some(name) = declared {
            model.property_mut(id).name = name;
            return self.document_declared_property(model, id);
        }

        let property = model.property(id);
        if property.has_field {
            return false;
        }
        let (getter, setter) = (property.getter, property.setter);
        let mut brief = self.accessor_brief(model, getter);
        if let Some(setter) = setter {
            let setter_brief = self.accessor_brief(model, setter);
            if !brief.is_empty() && !setter_brief.is_empty() {
                brief.push('\n');
            }
            brief.push_str(&setter_brief);
        }
        if brief.is_empty() {
            return false;
        }
        model.property_mut(id).comment = Some(Comment::brief(brief));
        true
    }

    fn document_declared_property(&self, model: &mut Model, id: PropertyId) -> bool {
        let property = model.property(id);
        let key = self.page_key(model, property.scope);
        let Some(page) = self.store.page(&key) else {
            return false;
        };
        let pattern = property_pattern(&property.name, &property.type_name, &self.typedefs);
        let Some(brief) = self.captures(&pattern, page).map(|caps| group(&caps, "docs").to_string()) else {
            return false;
        };
        model.property_mut(id).comment = Some(Comment::brief(brief));
        true
    }

    fn accessor_brief(&self, model: &mut Model, id: FunctionId) -> String {
        if model.function(id).comment.is_none() {
            self.document_function(model, id);
        }
        model
            .function(id)
            .comment
            .as_ref()
            .map(|c| c.brief.clone())
            .unwrap_or_default()
    }

    // -- Types ----------------------------------------------------------------

    /// Document a class from its own page: the summary becomes the brief
    /// text, the detailed description (minus the summary) the full text.
    pub fn document_type(&self, model: &mut Model, id: ScopeId) -> bool {
        let key = self.page_key(model, id);
        let Some(page) = self.store.page(&key) else {
            return false;
        };
        let pattern = class_pattern(&model.scope(id).name, &self.config);
        let Some(comment) = self.captures(&pattern, page).map(|caps| {
            let brief = group(&caps, "class").trim().to_string();
            let detailed = group(&caps, "detailed").replace(&brief, "").trim().to_string();
            Comment {
                brief,
                text: (!detailed.is_empty()).then_some(detailed),
            }
        }) else {
            return false;
        };
        model.scope_mut(id).comment = Some(comment);
        true
    }

    // -- Enumerations ---------------------------------------------------------

    /// Document an enumeration and each of its items.
    pub fn document_enum(&self, model: &mut Model, id: EnumId) -> bool {
        let documented = self.document_enum_block(model, id);
        for index in 0..model.enumeration(id).items.len() {
            self.document_enum_item(model, id, index);
        }
        documented
    }

    fn document_enum_block(&self, model: &mut Model, id: EnumId) -> bool {
        let e = model.enumeration(id);
        let scope_name = &model.scope(e.scope).name;
        let key = self.page_key(model, e.scope);
        let Some(page) = self.store.page(&key) else {
            return false;
        };
        let pattern = enum_pattern(scope_name, &qualify(scope_name, &e.name), &self.config);
        let Some(doc) = self.captures(&pattern, page).map(|caps| clean_enum_docs(group(&caps, "docs"))) else {
            return false;
        };
        if doc.is_empty() {
            return false;
        }
        model.enumeration_mut(id).comment = Some(Comment::brief(doc));
        true
    }

    /// Document one item from the value table of its enumeration.
    pub fn document_enum_item(&self, model: &mut Model, id: EnumId, index: usize) -> bool {
        let e = model.enumeration(id);
        let Some(item) = e.items.get(index) else {
            return false;
        };
        let scope_name = &model.scope(e.scope).name;
        let key = self.page_key(model, e.scope);
        let Some(page) = self.store.page(&key) else {
            return false;
        };
        let pattern = enum_item_pattern(&qualify(scope_name, &e.name), &qualify(scope_name, &item.name));
        let Some(doc) = self.captures(&pattern, page).map(|caps| group(&caps, "docs").trim().to_string()) else {
            return false;
        };
        if doc.is_empty() {
            return false;
        }
        model.enumeration_mut(id).items[index].comment = Some(Comment::brief(doc));
        true
    }

    // -- Helpers --------------------------------------------------------------

    fn captures<'p>(&self, pattern: &str, page: &'p str) -> Option<Captures<'p>> {
        let regex = match RegexBuilder::new(pattern)
            .size_limit(self.config.regex_size_limit)
            .build()
        {
            Ok(regex) => regex,
            Err(e) => {
                debug!(error = %e, "skipping pattern that does not compile");
                return None;
            }
        };
        regex.captures(page)
    }
}

fn group<'p>(caps: &Captures<'p>, name: &str) -> &'p str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// `Scope::name`, or just `name` at global scope.
fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}::{name}")
    }
}

/// Drop the `QFlags` boilerplate and the value table from enum docs.
fn clean_enum_docs(raw: &str) -> String {
    let doc = raw.trim();
    if doc.is_empty() {
        return String::new();
    }
    let doc = RE_QFLAGS_NOTE.replace_all(doc, "");
    RE_VALUE_TABLE.replace_all(&doc, "").trim().to_string()
}

/// First line of an obsolete member's docs that points at a replacement.
fn obsolete_message(brief: &str) -> Option<String> {
    brief
        .split(['\r', '\n'])
        .find(|line| line.contains("instead") || line.contains("deprecated"))
        .map(str::to_string)
}

/// Name under which a `Q_PROPERTY` in the scope declares this property,
/// trying `isFoo` for a property called `foo`.
fn declared_property_name(expansions: &[String], name: &str) -> Option<String> {
    let alternative = if name.chars().count() == 1 {
        name.to_string()
    } else {
        format!("is{}", uppercase_first(name))
    };
    expansions
        .iter()
        .filter_map(|text| {
            let marker = PROPERTY_MARKERS.iter().find_map(|m| text.find(m).map(|i| i + m.len()))?;
            property_macro_name(&text[marker..])
        })
        .find(|declared| *declared == name || *declared == alternative)
        .map(str::to_string)
}

/// The property name in `(Type name READ ...)`: the token after the
/// declared type, which may itself contain spaces inside `<...>`.
fn property_macro_name(args: &str) -> Option<&str> {
    let mut tokens = args.trim_start_matches(|c: char| c == '(' || c.is_whitespace()).split_whitespace();
    let mut depth = 0i32;
    for token in tokens.by_ref() {
        depth += token.matches('<').count() as i32 - token.matches('>').count() as i32;
        if depth <= 0 {
            break;
        }
    }
    let name = tokens.next()?.trim_start_matches(['*', '&']);
    (!name.is_empty()).then_some(name)
}

fn uppercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Adopt documented argument names for anonymous parameters.
fn fill_missing_parameter_names(function: &mut Function, args: &str) {
    let mut fragments = split_arguments(args);
    if fragments.len() + 1 == function.parameters.len() {
        fragments.insert(0, IMPLICIT_OPERAND);
    }
    for (parameter, fragment) in function.parameters.iter_mut().zip(fragments) {
        if !parameter.has_placeholder_name() {
            continue;
        }
        if let Some(name) = argument_name(fragment) {
            parameter.name = safe_identifier(name);
        }
    }
}

/// Split an argument list on commas outside brackets.
fn split_arguments(args: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in args.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth -= 1,
            ',' if depth <= 0 => {
                fragments.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fragments.push(&args[start..]);
    fragments
}

/// The name in `type name = default`; `None` when only a type is given.
fn argument_name(fragment: &str) -> Option<&str> {
    let declaration = fragment.split('=').next().unwrap_or(fragment).trim();
    let start = declaration
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map_or(declaration.len(), |(i, _)| i);
    let (ty, name) = declaration.split_at(start);
    if name.is_empty() || ty.trim().is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(model: &mut Model, name: &str) -> ScopeId {
        model.add_scope(name, ScopeKind::Class { is_interface: false }, None)
    }

    fn engine(pages: &[(&str, &str)]) -> Documentation {
        Documentation::new(
            DocumentationStore::from_pages(pages.iter().map(|(k, v)| (k.to_string(), v.to_string()))),
            TypedefRegistry::new(),
        )
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Documentation>();
    }

    #[test]
    fn function_matched_and_names_backfilled() {
        let docs = engine(&[("qtglobal.html", "\n\nvoid foo(int x, long y = 0)\nDoes foo things.\n\n\n\n")]);
        let mut model = Model::default();
        let global = model.add_scope("", ScopeKind::Namespace, None);
        let foo = model.add_function(
            "foo",
            global,
            vec![Parameter::new("_0", "int"), Parameter::new("_1", "int")],
        );

        assert!(docs.document_function(&mut model, foo));
        let function = model.function(foo);
        assert_eq!(function.comment.as_ref().unwrap().brief, "Does foo things.");
        assert_eq!(function.parameters[0].name, "x");
        assert_eq!(function.parameters[1].name, "y");
        assert!(function.deprecation.is_none());
    }

    #[test]
    fn function_idempotent() {
        let docs = engine(&[("qfoo.html", "\n\nvoid QFoo::bar(int value)\nBars the foo.\n\n\n\n")]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let bar = model.add_function("bar", scope, vec![Parameter::new("_0", "int")]);

        assert!(docs.document_function(&mut model, bar));
        let first = model.function(bar).clone();
        assert!(docs.document_function(&mut model, bar));
        assert_eq!(model.function(bar), &first);
    }

    #[test]
    fn named_parameters_kept() {
        let docs = engine(&[("qfoo.html", "\n\nvoid QFoo::bar(int value)\nBars.\n\n\n\n")]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let bar = model.add_function("bar", scope, vec![Parameter::new("amount", "int")]);
        assert!(docs.document_function(&mut model, bar));
        assert_eq!(model.function(bar).parameters[0].name, "amount");
    }

    #[test]
    fn implicit_this_excluded_from_signature() {
        let docs = engine(&[("qfoo.html", "\n\nvoid QFoo::bar(int value)\nBars.\n\n\n\n")]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let mut this = Parameter::new("self", "QFoo *");
        this.kind = ParameterKind::ImplicitThis;
        let bar = model.add_function("bar", scope, vec![this, Parameter::new("_1", "int")]);
        assert!(docs.document_function(&mut model, bar));
        // one documented argument for two parameters: realigned past `self`
        assert_eq!(model.function(bar).parameters[1].name, "value");
    }

    #[test]
    fn obsolete_page_marks_deprecation() {
        let docs = engine(&[(
            "qfoo-obsolete.html",
            "\n\nvoid QFoo::bar(const QString &text)\nUse baz() instead.\nIt was slow.\n\n\n\n",
        )]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let bar = model.add_function("bar", scope, vec![Parameter::new("_0", "const QString &")]);

        assert!(docs.document_function(&mut model, bar));
        let function = model.function(bar);
        assert_eq!(
            function.deprecation,
            Some(Deprecation::obsolete(Some("Use baz() instead.".to_string())))
        );
        assert_eq!(function.parameters[0].name, "text");
    }

    #[test]
    fn obsolete_without_hint() {
        let docs = engine(&[("qfoo-obsolete.html", "\n\nvoid QFoo::bar()\nDoes nothing.\n\n\n\n")]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let bar = model.add_function("bar", scope, vec![]);
        assert!(docs.document_function(&mut model, bar));
        assert_eq!(model.function(bar).deprecation, Some(Deprecation::obsolete(None)));
    }

    #[test]
    fn math_functions_use_math_page() {
        let docs = engine(&[(
            "qtcore-qmath-h.html",
            "\n\nint qCeil(qreal v)\nReturns the ceiling of v.\n\n\n\n",
        )]);
        let mut model = Model::default();
        model.typedefs.push(Typedef {
            name: "qreal".to_string(),
            underlying: TypeRef {
                printed: "double".to_string(),
                identity: TypeIdentity::Resolved,
            },
        });
        let docs = Documentation::for_model(docs.store().clone(), &model);
        let unit = model.add_scope(
            "",
            ScopeKind::TranslationUnit {
                file_name: "qmath.h".to_string(),
            },
            None,
        );
        let ceil = model.add_function("qCeil", unit, vec![Parameter::new("_0", "double")]);
        assert!(docs.document_function(&mut model, ceil));
        assert_eq!(model.function(ceil).parameters[0].name, "v");
    }

    #[test]
    fn no_page_no_comment() {
        let docs = engine(&[]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let bar = model.add_function("bar", scope, vec![]);
        assert!(!docs.document_function(&mut model, bar));
        assert!(model.function(bar).comment.is_none());
    }

    #[test]
    fn implicit_property_borrows_getter() {
        let docs = engine(&[("qfoo.html", "\n\nint QFoo::value() const\nReturns the value.\n\n\n\n")]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let getter = model.add_function("value", scope, vec![]);
        let property = model.add_property(Property {
            name: "value".to_string(),
            type_name: "int".to_string(),
            scope,
            getter,
            setter: None,
            has_field: false,
            comment: None,
        });

        assert!(docs.document_property(&mut model, property));
        assert_eq!(
            model.property(property).comment.as_ref().unwrap().brief,
            "Returns the value."
        );
    }

    #[test]
    fn implicit_property_joins_accessors() {
        let page = "\n\nint QFoo::value() const\nReturns the value.\n\n\n\nvoid QFoo::setValue(int value)\nSets the value.\n\n\n\n";
        let docs = engine(&[("qfoo.html", page)]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let getter = model.add_function("value", scope, vec![]);
        let setter = model.add_function("setValue", scope, vec![Parameter::new("_0", "int")]);
        let property = model.add_property(Property {
            name: "value".to_string(),
            type_name: "int".to_string(),
            scope,
            getter,
            setter: Some(setter),
            has_field: false,
            comment: None,
        });

        assert!(docs.document_property(&mut model, property));
        assert_eq!(
            model.property(property).comment.as_ref().unwrap().brief,
            "Returns the value.\nSets the value."
        );
        assert_eq!(model.function(setter).parameters[0].name, "value");
    }

    #[test]
    fn undocumented_accessors_leave_property_bare() {
        let docs = engine(&[("qfoo.html", "nothing here")]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let getter = model.add_function("value", scope, vec![]);
        let property = model.add_property(Property {
            name: "value".to_string(),
            type_name: "int".to_string(),
            scope,
            getter,
            setter: None,
            has_field: false,
            comment: None,
        });
        assert!(!docs.document_property(&mut model, property));
        assert!(model.property(property).comment.is_none());
    }

    #[test]
    fn declared_property_uses_property_block() {
        let page = "Property Documentation\n\nvisible : bool\nThis property holds whether the widget is visible.\nAccess functions:\n";
        let docs = engine(&[("qfoo.html", page)]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        model
            .scope_mut(scope)
            .macro_expansions
            .push("Q_PROPERTY(bool visible READ isVisible WRITE setVisible)".to_string());
        let getter = model.add_function("isVisible", scope, vec![]);
        let property = model.add_property(Property {
            name: "visible".to_string(),
            type_name: "bool".to_string(),
            scope,
            getter,
            setter: None,
            has_field: false,
            comment: None,
        });

        assert!(docs.document_property(&mut model, property));
        assert_eq!(
            model.property(property).comment.as_ref().unwrap().brief,
            "This property holds whether the widget is visible."
        );
        // the getter was not consulted
        assert!(model.function(getter).comment.is_none());
    }

    #[test]
    fn declared_property_adopts_is_name() {
        let expansions = vec!["Q_PROPERTY(bool isEnabled READ isEnabled)".to_string()];
        assert_eq!(
            declared_property_name(&expansions, "enabled").as_deref(),
            Some("isEnabled")
        );
        let expansions = vec!["Q_PROPERTY(int isX READ x)".to_string()];
        assert_eq!(declared_property_name(&expansions, "x"), None);
    }

    #[test]
    fn property_macro_name_tokens() {
        assert_eq!(property_macro_name("(QString text READ text)"), Some("text"));
        assert_eq!(property_macro_name("(QWidget *widget READ widget)"), Some("widget"));
        assert_eq!(
            property_macro_name("(QMap<QString, int> map READ map)"),
            Some("map")
        );
        assert_eq!(property_macro_name("(QString)"), None);
    }

    #[test]
    fn type_documentation() {
        let page = "The QFoo class frobs. More...\n\nHeader: #include <QFoo>\nDetailed Description\nThe QFoo class frobs.\nIt is great.\n\n\n\n";
        let docs = engine(&[("qfoo.html", page)]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");

        assert!(docs.document_type(&mut model, scope));
        let comment = model.scope(scope).comment.as_ref().unwrap();
        assert_eq!(comment.brief, "The QFoo class frobs.");
        assert_eq!(comment.text.as_deref(), Some("It is great."));
    }

    #[test]
    fn enum_and_items() {
        let page = "enum QFoo::Flag\nflags QFoo::Flags\nDescribes flags.\nThe Flags type is a typedef for QFlags<Flag>. It stores an OR combination of Flag values.\n\nConstantValueDescription\nQFoo::A\t0x1\tfirst\nQFoo::B\t0x2\tsecond&nbsp;\n\n\n";
        let docs = engine(&[("qfoo.html", page)]);
        let mut model = Model::default();
        let scope = class(&mut model, "QFoo");
        let flag = model.add_enum("Flag", scope, &["A", "B", "C"]);

        assert!(docs.document_enum(&mut model, flag));
        let e = model.enumeration(flag);
        assert_eq!(e.comment.as_ref().unwrap().brief, "Describes flags.");
        assert_eq!(e.items[0].comment.as_ref().unwrap().brief, "first");
        assert_eq!(e.items[1].comment.as_ref().unwrap().brief, "second");
        assert!(e.items[2].comment.is_none());
    }

    #[test]
    fn global_enum_without_prose() {
        let page = "enum Flag\n\nConstantValueDescription\nA\t1\tfirst\n\n\n";
        let docs = engine(&[("qtglobal.html", page)]);
        let mut model = Model::default();
        let global = model.add_scope("", ScopeKind::Namespace, None);
        let flag = model.add_enum("Flag", global, &["A"]);

        assert!(!docs.document_enum(&mut model, flag));
        let e = model.enumeration(flag);
        assert!(e.comment.is_none());
        assert_eq!(e.items[0].comment.as_ref().unwrap().brief, "first");
    }

    #[test]
    fn argument_names() {
        assert_eq!(argument_name("int x"), Some("x"));
        assert_eq!(argument_name(" const QString &text = QString()"), Some("text"));
        assert_eq!(argument_name("int"), None);
        assert_eq!(argument_name("const QString &"), None);
        assert_eq!(argument_name(""), None);
    }

    #[test]
    fn arguments_split_outside_brackets() {
        assert_eq!(
            split_arguments("const QMap<QString, int> &map, int x"),
            vec!["const QMap<QString, int> &map", " int x"]
        );
        assert_eq!(split_arguments(""), vec![""]);
    }

    #[test]
    fn obsolete_message_line() {
        assert_eq!(
            obsolete_message("This function is deprecated.\nUse bar() instead."),
            Some("This function is deprecated.".to_string())
        );
        assert_eq!(obsolete_message("Nothing to see."), None);
    }
}
