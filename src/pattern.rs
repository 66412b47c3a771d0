//! Search patterns over stripped reference pages, one per declaration kind.
//!
//! Every builder returns pattern text; the named groups (`docs`, `args`,
//! `class`, `detailed`) are what the matcher extracts.

use crate::config::MatchConfig;
use crate::signature::type_pattern;
use crate::typedefs::TypedefRegistry;

/// Optional parameter name and default value following a parameter type.
const PARAMETER_TAIL: &str = r"(?:\s*\b\w+(?:\s*=\s*[^,\r\n]+(?:\(\s*\))?)?)?";

/// `type name = value` fragments the pages list for defaulted trailing
/// parameters the declaration may not have.
const DEFAULTED_PARAMETER: &str = r"[\w :*&<>]+\s*=\s*[^,\r\n]+(?:\(\s*\))?(?:,\s*)?";

/// Member function block.
///
/// Matches the detailed-description heading of the member, e.g.
/// `QWidget *QWidget::childAt(int x, int y) const [virtual]`, and
/// captures its first paragraph as `docs` and the documented argument
/// list as `args`.
pub fn function_pattern(
    scope: &str,
    name: &str,
    parameter_types: &[&str],
    typedefs: &TypedefRegistry,
    complete_signature: bool,
    config: &MatchConfig,
) -> String {
    let parameters: Vec<String> = parameter_types
        .iter()
        .map(|t| format!("{}{PARAMETER_TAIL}", type_pattern(t, typedefs, complete_signature)))
        .collect();

    let mut signature = format!(r"{}\s*\(\s*(?P<args>", regex::escape(name));
    if parameters.is_empty() {
        signature.push_str(&format!("(?:{DEFAULTED_PARAMETER})*"));
    } else {
        signature.push_str(&parameters.join(r",\s*"));
        signature.push_str(&format!(r"(?:,\s*{DEFAULTED_PARAMETER})*"));
    }
    signature.push_str(r")\s*\)\s*");

    format!(
        r"(?s)(?:^|(?: --)|\n)\n(?:[\w :*&<>,]+)?(?:(?:{scope}(?:\s*&)?::)| ){signature}(?:const)?(?: \[(?:\w+\s*)+\])?\n(?P<docs>\w.*?)(?:\n\s*){{{min},{max}}}(?:(?:&?\S* --)|(?:(?:\n\s*){{{brk}}}))",
        scope = regex::escape(scope),
        min = config.member_gap_min,
        max = config.member_gap_max.max(config.member_gap_min),
        brk = config.member_break,
    )
}

/// `Q_PROPERTY` block: `name : type` up to the `Access functions:` list.
pub fn property_pattern(name: &str, type_name: &str, typedefs: &TypedefRegistry) -> String {
    format!(
        r"(?s)Property Documentation.*?\b{name} : {ty}(?:\s+const)?\n(?P<docs>.*?)\nAccess functions:",
        name = regex::escape(name),
        ty = type_pattern(type_name, typedefs, true),
    )
}

/// Class overview: the summary paragraph ending in `More...` and the
/// detailed description that follows.
pub fn class_pattern(name: &str, config: &MatchConfig) -> String {
    format!(
        r"(?s)(?P<class>(?:(?:The {name}\b)|(?:This class)).+?)More\.\.\..*?\nDetailed Description\s+(?P<detailed>.*?)\n{{{brk},}}",
        name = regex::escape(name),
        brk = config.class_break,
    )
}

/// Enum block, with the `flags` line that follows `QFlags` enums.
pub fn enum_pattern(scope: &str, qualified_name: &str, config: &MatchConfig) -> String {
    format!(
        r"(?s)enum {name}\b(?:\s*flags {scope}::\w+\s+)?(?P<docs>.*?)\n{{{brk}}}",
        name = regex::escape(qualified_name),
        scope = regex::escape(scope),
        brk = config.enum_break,
    )
}

/// One `name\tvalue\tdescription` row of an enum's value table.
pub fn enum_item_pattern(qualified_enum: &str, qualified_item: &str) -> String {
    format!(
        r"(?s)enum {name}\b.*?\b{item}\t[^\t\n]+\t(?P<docs>.*?)(?:&\w+;)?\n",
        name = regex::escape(qualified_enum),
        item = regex::escape(qualified_item),
    )
}
