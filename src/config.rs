//! Tunables for the block-capture patterns and page naming.
//!
//! The blank-line counts below were read off real Qt reference pages, not
//! derived from any grammar; they are kept here so they can be adjusted
//! against other documentation builds without touching the patterns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum line breaks closing a member's first paragraph
    pub member_gap_min: usize,
    /// Maximum line breaks closing a member's first paragraph
    pub member_gap_max: usize,
    /// Further line breaks that separate one member block from the next
    pub member_break: usize,
    /// Line breaks ending an enum block
    pub enum_break: usize,
    /// Minimum line breaks ending a class's detailed description
    pub class_break: usize,
    /// Upper bound on compiled pattern size, in bytes
    pub regex_size_limit: usize,
    pub pages: PageNames,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            member_gap_min: 1,
            member_gap_max: 2,
            member_break: 2,
            enum_break: 3,
            class_break: 3,
            regex_size_limit: 64 * (1 << 20),
            pages: PageNames::default(),
        }
    }
}

/// Naming conventions of the documentation site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageNames {
    /// Page for declarations at global scope
    pub global: String,
    pub suffix: String,
    /// Replaces `suffix` for the page listing obsolete members
    pub obsolete_suffix: String,
    /// Tried for functions declared in `qmath`
    pub math: Vec<String>,
    /// Tried for functions declared in `qalgorithms`
    pub algorithms: Vec<String>,
}

impl Default for PageNames {
    fn default() -> Self {
        Self {
            global: "qtglobal.html".to_string(),
            suffix: ".html".to_string(),
            obsolete_suffix: "-obsolete.html".to_string(),
            math: vec!["qtmath.html".to_string(), "qtcore-qmath-h.html".to_string()],
            algorithms: vec!["qtalgorithms.html".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"enum_break": 4, "pages": {"global": "global.html"}}"#).unwrap();
        assert_eq!(config.enum_break, 4);
        assert_eq!(config.member_gap_max, 2);
        assert_eq!(config.pages.global, "global.html");
        assert_eq!(config.pages.suffix, ".html");
    }
}
