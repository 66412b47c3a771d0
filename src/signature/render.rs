//! Render a parsed type as a pattern that accepts its documented spellings.
//!
//! The reference pages spell types independently of the declaration
//! model: qualifiers may be dropped, typedef names used, `*` written as
//! `[]`, whitespace placed anywhere. The rendered pattern accepts all of
//! that while still rejecting unrelated types.

use super::parser::{parse_type, Decoration, NamedType, Segment, Sign, TypeExpr};
use crate::typedefs::TypedefRegistry;

/// Alias expansion stops below this nesting level so that a typedef whose
/// spelling mentions its own underlying type cannot recurse forever.
const MAX_ALIAS_DEPTH: usize = 4;

const POINTER: &str = r"\s*(?:\*|\[\])";
const POINTERS: &str = r"\s*(?:\*|\[\])+\s*";
const ANY_DECORATION: &str = r"(?:\s*(?:&&?|(?:\*|\[\])+)\s*)?";

/// Build the pattern for a printed type.
///
/// With `complete_signature` the outermost pointer or reference must be
/// present; without it any decoration is optional, which suits the less
/// carefully formatted obsolete pages.
pub fn type_pattern(type_name: &str, typedefs: &TypedefRegistry, complete_signature: bool) -> String {
    render_type(&parse_type(type_name), typedefs, complete_signature, 0)
}

fn render_type(expr: &TypeExpr, typedefs: &TypedefRegistry, complete: bool, depth: usize) -> String {
    let named = match expr {
        TypeExpr::Named(named) => named,
        TypeExpr::Opaque(text) => return render_opaque(text),
    };

    let mut out = String::from(r"(?:const\s+)?(?:(?:(?:\w+::)?");
    out.push_str(&render_name(named, typedefs, depth));
    out.push(')');

    if depth < MAX_ALIAS_DEPTH {
        for alias in typedefs.aliases(&named.bare().to_string()) {
            out.push_str("|(?:");
            out.push_str(&render_alias(&parse_type(alias), typedefs, depth + 1));
            out.push(')');
        }
    }
    if let Some(synonym) = legacy_synonym(named) {
        out.push_str("|(?:");
        out.push_str(synonym);
        out.push(')');
    }
    out.push(')');

    out.push_str(&render_decorations(&named.decorations, complete));
    out
}

/// Sign prefix, optional qualifiers and the base name with its template
/// arguments. Top-level `const` and decorations are left to the caller.
fn render_name(named: &NamedType, typedefs: &TypedefRegistry, depth: usize) -> String {
    let mut out = String::new();
    match named.sign {
        Some(Sign::Signed) => out.push_str(r"(?:signed\s+)?"),
        Some(Sign::Unsigned) => out.push_str(r"(?:unsigned\s+)?"),
        None => {}
    }
    for qualifier in named.qualifiers() {
        out.push_str("(?:");
        out.push_str(&render_segment(qualifier, typedefs, depth));
        out.push_str("::)?");
    }
    out.push_str(&render_segment(named.base(), typedefs, depth));
    out
}

fn render_segment(segment: &Segment, typedefs: &TypedefRegistry, depth: usize) -> String {
    let mut out = segment
        .words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join(r"\s+");
    if let Some(args) = &segment.args {
        out.push_str(r"\s*<\s*");
        let args: Vec<String> = args
            .iter()
            .map(|arg| render_type(arg, typedefs, true, depth + 1))
            .collect();
        out.push_str(&args.join(r"\s*,\s*"));
        out.push_str(r"\s*>");
    }
    out
}

/// An alias is matched by its own name plus whatever decorations its
/// spelling carries; no further alias expansion happens at this level.
fn render_alias(alias: &TypeExpr, typedefs: &TypedefRegistry, depth: usize) -> String {
    match alias {
        TypeExpr::Named(named) => {
            let mut out = render_name(named, typedefs, depth);
            out.push_str(&render_decorations(&named.decorations, true));
            out
        }
        TypeExpr::Opaque(text) => render_opaque(text),
    }
}

/// The declaration model maps C++ `long` onto `int`, and the wide-char
/// types onto `char`; the pages keep the original spelling.
fn legacy_synonym(named: &NamedType) -> Option<&'static str> {
    if !named.qualifiers().is_empty() || !matches!(named.plain_pointer_depth(), Some(0 | 1)) {
        return None;
    }
    let base = named.base();
    match named.sign {
        None if base.is_word("int") => Some("long"),
        Some(Sign::Unsigned) if base.is_word("int") => Some(r"unsigned\s+long"),
        None if base.is_word("char") => Some("wchar_t"),
        _ => None,
    }
}

fn render_decorations(decorations: &[Decoration], complete: bool) -> String {
    // trailing `const` never matters for matching
    let trailing_const = decorations
        .iter()
        .rev()
        .take_while(|d| **d == Decoration::Const)
        .count();
    let decorations = &decorations[..decorations.len() - trailing_const];

    let outer_len = match decorations.last() {
        Some(Decoration::Reference | Decoration::RvalueReference) => 1,
        Some(Decoration::Pointer | Decoration::Array) => decorations
            .iter()
            .rev()
            .take_while(|d| matches!(d, Decoration::Pointer | Decoration::Array))
            .count(),
        _ => 0,
    };
    let (inner, outer) = decorations.split_at(decorations.len() - outer_len);

    let mut out = String::new();
    for decoration in inner {
        out.push_str(match decoration {
            Decoration::Pointer | Decoration::Array => POINTER,
            Decoration::Reference => r"\s*&",
            Decoration::RvalueReference => r"\s*&&",
            Decoration::Const => r"(?:\s*const\b)?",
        });
    }

    if !complete {
        out.push_str(ANY_DECORATION);
    } else {
        match outer.first() {
            Some(Decoration::Reference) => out.push_str(r"\s*&\s*"),
            Some(Decoration::RvalueReference) => out.push_str(r"\s*&&\s*"),
            Some(_) => out.push_str(POINTERS),
            None => {}
        }
    }
    if trailing_const > 0 {
        out.push_str(r"(?:\s*const\b)?");
    }
    out
}

/// Text the parser gave up on: escape it, keep whitespace flexible around
/// punctuation and accept `[]` for `*`.
fn render_opaque(text: &str) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        let word_char = c.is_alphanumeric() || c == '_';
        if pending_space && word_char && out.ends_with(|p: char| p.is_alphanumeric() || p == '_') {
            out.push_str(r"\s+");
        }
        pending_space = false;
        match c {
            '*' => out.push_str(POINTER),
            _ if word_char => out.push(c),
            _ => {
                out.push_str(r"\s*");
                out.push_str(&regex::escape(&c.to_string()));
                out.push_str(r"\s*");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeIdentity, TypeRef};
    use regex::Regex;

    fn matcher(type_name: &str, typedefs: &TypedefRegistry, complete: bool) -> Regex {
        let pattern = type_pattern(type_name, typedefs, complete);
        Regex::new(&format!("^(?:{pattern})$")).unwrap()
    }

    fn registry(entries: &[(&str, &str)]) -> TypedefRegistry {
        let mut registry = TypedefRegistry::new();
        for (underlying, alias) in entries {
            registry.insert(
                &TypeRef {
                    printed: underlying.to_string(),
                    identity: TypeIdentity::Resolved,
                },
                alias,
            );
        }
        registry
    }

    #[test]
    fn matches_own_spelling() {
        let none = TypedefRegistry::new();
        for t in [
            "int",
            "QString",
            "const QString &",
            "QWidget *",
            "const char *",
            "unsigned int",
            "Qt::AlignmentFlag",
            "QList<QString>",
            "const QMap<QString, QVariant> &",
            "char **",
        ] {
            assert!(matcher(t, &none, true).is_match(t), "{t}");
        }
    }

    #[test]
    fn rejects_unrelated() {
        let none = TypedefRegistry::new();
        assert!(!matcher("int", &none, true).is_match("QString"));
        assert!(!matcher("QString", &none, true).is_match("QStringView"));
        assert!(!matcher("QList<int>", &none, true).is_match("QList<QString>"));
        assert!(!matcher("const QString &", &none, true).is_match("const QString"));
    }

    #[test]
    fn flexible_spelling() {
        let none = TypedefRegistry::new();
        let re = matcher("const QString &", &none, true);
        assert!(re.is_match("QString&"));
        assert!(re.is_match("const QString&"));
        let re = matcher("QWidget *", &none, true);
        assert!(re.is_match("QWidget*"));
        assert!(re.is_match("QWidget []"));
        let re = matcher("Qt::AlignmentFlag", &none, true);
        assert!(re.is_match("AlignmentFlag"));
        assert!(re.is_match("Qt::AlignmentFlag"));
        let re = matcher("AlignmentFlag", &none, true);
        assert!(re.is_match("Qt::AlignmentFlag"));
    }

    #[test]
    fn legacy_numeric_synonyms() {
        let none = TypedefRegistry::new();
        assert!(matcher("int", &none, true).is_match("long"));
        assert!(matcher("int *", &none, true).is_match("long *"));
        assert!(matcher("unsigned int", &none, true).is_match("unsigned long"));
        assert!(matcher("char", &none, true).is_match("wchar_t"));
        assert!(matcher("const char *", &none, true).is_match("const wchar_t*"));
        assert!(!matcher("int &", &none, true).is_match("long &"));
        assert!(!matcher("double", &none, true).is_match("long"));
    }

    #[test]
    fn typedef_aliases() {
        let typedefs = registry(&[("QList<QString>", "QStringList"), ("double", "qreal")]);
        let re = matcher("const QList<QString> &", &typedefs, true);
        assert!(re.is_match("const QList<QString> &"));
        assert!(re.is_match("const QStringList &"));
        assert!(!re.is_match("const QStringView &"));
        assert!(matcher("double", &typedefs, true).is_match("qreal"));
    }

    #[test]
    fn aliases_inside_template_arguments() {
        let typedefs = registry(&[("double", "qreal")]);
        let re = matcher("QVector<double>", &typedefs, true);
        assert!(re.is_match("QVector<qreal>"));
    }

    #[test]
    fn nested_templates() {
        let none = TypedefRegistry::new();
        let re = matcher("const QList<QMap<QString, QVariant>*> &", &none, true);
        assert!(re.is_match("const QList<QMap<QString,QVariant> *> &"));
        assert!(re.is_match("const QList< QMap<QString, QVariant>* > &"));
        assert!(!re.is_match("const QList<QMap<QString, QVariant>> &"));
    }

    #[test]
    fn incomplete_signature_relaxes_decoration() {
        let none = TypedefRegistry::new();
        let re = matcher("const QString &", &none, false);
        assert!(re.is_match("const QString"));
        assert!(re.is_match("QString &"));
        assert!(re.is_match("QString *"));
    }

    #[test]
    fn self_referential_alias_terminates() {
        let typedefs = registry(&[("QString", "QList<QString>")]);
        let pattern = type_pattern("QString", &typedefs, true);
        assert!(Regex::new(&pattern).is_ok());
    }

    #[test]
    fn opaque_types() {
        let none = TypedefRegistry::new();
        let re = matcher("void (*)(int)", &none, true);
        assert!(re.is_match("void (*)(int)"));
        assert!(re.is_match("void(*)( int )"));
    }
}
