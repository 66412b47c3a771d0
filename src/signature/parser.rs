//! Recursive-descent parser for printed C++ type names.
//!
//! Understands the shapes the type printer emits: cv/sign prefixes,
//! `::`-qualified and templated names, and trailing pointer, reference,
//! array and `const` decorations. Anything else (function pointers,
//! member pointers, `decltype`) becomes [`TypeExpr::Opaque`], so parsing
//! never fails.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named(NamedType),
    /// Whitespace-normalized text the parser could not make sense of
    Opaque(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub is_const: bool,
    pub sign: Option<Sign>,
    /// Qualifiers followed by the base name; never empty
    pub path: Vec<Segment>,
    pub decorations: Vec<Decoration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// One or more words, e.g. `QString` or `long long`
    pub words: Vec<String>,
    pub args: Option<Vec<TypeExpr>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Signed,
    Unsigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Pointer,
    Array,
    Reference,
    RvalueReference,
    Const,
}

impl NamedType {
    /// The same type without top-level `const` and decorations.
    pub fn bare(&self) -> NamedType {
        NamedType {
            is_const: false,
            sign: self.sign,
            path: self.path.clone(),
            decorations: Vec::new(),
        }
    }

    pub fn base(&self) -> &Segment {
        // path is non-empty by construction
        &self.path[self.path.len() - 1]
    }

    pub fn qualifiers(&self) -> &[Segment] {
        &self.path[..self.path.len() - 1]
    }

    /// Number of pointer/array levels, or `None` if references or
    /// trailing const are involved.
    pub fn plain_pointer_depth(&self) -> Option<usize> {
        self.decorations
            .iter()
            .all(|d| matches!(d, Decoration::Pointer | Decoration::Array))
            .then_some(self.decorations.len())
    }
}

impl Segment {
    pub fn is_word(&self, word: &str) -> bool {
        self.args.is_none() && self.words.len() == 1 && self.words[0] == word
    }
}

impl TypeExpr {
    /// Canonical spelling used as the typedef registry key.
    pub fn bare_name(&self) -> String {
        match self {
            TypeExpr::Named(named) => named.bare().to_string(),
            TypeExpr::Opaque(text) => text.clone(),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(named) => named.fmt(f),
            TypeExpr::Opaque(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const {
            f.write_str("const ")?;
        }
        match self.sign {
            Some(Sign::Signed) => f.write_str("signed ")?,
            Some(Sign::Unsigned) => f.write_str("unsigned ")?,
            None => {}
        }
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str("::")?;
            }
            f.write_str(&segment.words.join(" "))?;
            if let Some(args) = &segment.args {
                f.write_str("<")?;
                for (j, arg) in args.iter().enumerate() {
                    if j > 0 {
                        f.write_str(", ")?;
                    }
                    arg.fmt(f)?;
                }
                f.write_str(">")?;
            }
        }
        for decoration in &self.decorations {
            f.write_str(match decoration {
                Decoration::Pointer => "*",
                Decoration::Array => "[]",
                Decoration::Reference => "&",
                Decoration::RvalueReference => "&&",
                Decoration::Const => " const",
            })?;
        }
        Ok(())
    }
}

// -- Tokens -------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tok<'a> {
    Word(&'a str),
    Scope,
    Lt,
    Gt,
    Comma,
    Star,
    Amp,
    AmpAmp,
    LBracket,
    RBracket,
    Other(char),
}

fn tokenize(input: &str) -> Vec<Tok<'_>> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < input.len() {
        let c = input[i..].chars().next().unwrap_or(' ');
        if c.is_whitespace() {
            i += c.len_utf8();
            continue;
        }
        if c.is_alphanumeric() || c == '_' {
            let start = i;
            while let Some(c) = input[i..].chars().next() {
                if !(c.is_alphanumeric() || c == '_') {
                    break;
                }
                i += c.len_utf8();
            }
            tokens.push(Tok::Word(&input[start..i]));
            continue;
        }
        let next = bytes.get(i + 1).copied();
        let (tok, len) = match (c, next) {
            (':', Some(b':')) => (Tok::Scope, 2),
            ('&', Some(b'&')) => (Tok::AmpAmp, 2),
            ('<', _) => (Tok::Lt, 1),
            ('>', _) => (Tok::Gt, 1),
            (',', _) => (Tok::Comma, 1),
            ('*', _) => (Tok::Star, 1),
            ('&', _) => (Tok::Amp, 1),
            ('[', _) => (Tok::LBracket, 1),
            (']', _) => (Tok::RBracket, 1),
            _ => (Tok::Other(c), c.len_utf8()),
        };
        tokens.push(tok);
        i += len;
    }
    tokens
}

// -- Parser -------------------------------------------------------------------

/// Parse a printed type. Never fails; unparseable input is opaque.
pub fn parse_type(input: &str) -> TypeExpr {
    let tokens = tokenize(input);
    parse_tokens(&tokens).unwrap_or_else(|| TypeExpr::Opaque(normalize_space(input)))
}

fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_tokens(tokens: &[Tok<'_>]) -> Option<TypeExpr> {
    let mut parser = Parser { tokens, pos: 0 };
    let named = parser.named_type()?;
    if parser.pos == tokens.len() {
        Some(TypeExpr::Named(named))
    } else {
        None
    }
}

struct Parser<'t, 'a> {
    tokens: &'t [Tok<'a>],
    pos: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn peek(&self) -> Option<Tok<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Tok<'a>> {
        let tok = self.peek();
        self.pos += 1;
        tok
    }

    fn named_type(&mut self) -> Option<NamedType> {
        let mut is_const = false;
        let mut sign = None;

        // cv, sign and elaborated-type keywords, in any order
        while let Some(Tok::Word(word)) = self.peek() {
            match word {
                "const" => is_const = true,
                "signed" => sign = Some(Sign::Signed),
                "unsigned" => sign = Some(Sign::Unsigned),
                "volatile" | "struct" | "class" | "enum" | "typename" | "union" => {}
                _ => break,
            }
            self.pos += 1;
        }
        if self.peek() == Some(Tok::Scope) {
            self.pos += 1;
        }

        let mut path = Vec::new();
        loop {
            let mut words = Vec::new();
            while let Some(Tok::Word(word)) = self.peek() {
                if word == "const" || word == "volatile" {
                    break;
                }
                words.push(word.to_string());
                self.pos += 1;
            }
            if words.is_empty() {
                if sign.is_some() && path.is_empty() {
                    // bare `unsigned` means `unsigned int`
                    words.push("int".to_string());
                } else {
                    return None;
                }
            }
            let args = if self.peek() == Some(Tok::Lt) {
                Some(self.template_args()?)
            } else {
                None
            };
            path.push(Segment { words, args });
            if self.peek() == Some(Tok::Scope) {
                self.pos += 1;
                continue;
            }
            break;
        }

        let mut decorations = Vec::new();
        while let Some(tok) = self.peek() {
            let decoration = match tok {
                Tok::Star => Decoration::Pointer,
                Tok::Amp => Decoration::Reference,
                Tok::AmpAmp => Decoration::RvalueReference,
                Tok::Word("const") => Decoration::Const,
                Tok::Word("volatile") => {
                    self.pos += 1;
                    continue;
                }
                Tok::LBracket => {
                    self.pos += 1;
                    if let Some(Tok::Word(_)) = self.peek() {
                        self.pos += 1;
                    }
                    if self.peek() != Some(Tok::RBracket) {
                        return None;
                    }
                    Decoration::Array
                }
                _ => break,
            };
            self.pos += 1;
            decorations.push(decoration);
        }

        Some(NamedType {
            is_const,
            sign,
            path,
            decorations,
        })
    }

    /// Parse `<...>` starting at the `<`, splitting on top-level commas.
    /// Each argument is parsed on its own; a bad argument turns opaque
    /// without spoiling its siblings.
    fn template_args(&mut self) -> Option<Vec<TypeExpr>> {
        if self.bump() != Some(Tok::Lt) {
            return None;
        }
        let mut args = Vec::new();
        let mut depth = 0usize;
        let mut start = self.pos;
        loop {
            match self.bump()? {
                Tok::Lt => depth += 1,
                Tok::Gt if depth > 0 => depth -= 1,
                Tok::Gt => {
                    let arg = &self.tokens[start..self.pos - 1];
                    if !arg.is_empty() || !args.is_empty() {
                        args.push(argument(arg));
                    }
                    return Some(args);
                }
                Tok::Comma if depth == 0 => {
                    args.push(argument(&self.tokens[start..self.pos - 1]));
                    start = self.pos;
                }
                _ => {}
            }
        }
    }
}

fn argument(tokens: &[Tok<'_>]) -> TypeExpr {
    parse_tokens(tokens).unwrap_or_else(|| TypeExpr::Opaque(render_tokens(tokens)))
}

/// Re-spell tokens for an opaque argument, keeping a space only between
/// adjacent words.
fn render_tokens(tokens: &[Tok<'_>]) -> String {
    let mut out = String::new();
    for tok in tokens {
        let text = match tok {
            Tok::Word(word) => {
                if out.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
                    out.push(' ');
                }
                word
            }
            Tok::Scope => "::",
            Tok::Lt => "<",
            Tok::Gt => ">",
            Tok::Comma => ", ",
            Tok::Star => "*",
            Tok::Amp => "&",
            Tok::AmpAmp => "&&",
            Tok::LBracket => "[",
            Tok::RBracket => "]",
            Tok::Other(c) => {
                out.push(*c);
                continue;
            }
        };
        out.push_str(text);
    }
    out
}
