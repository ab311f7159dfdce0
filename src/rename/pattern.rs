//! Pattern matching and name sanitising

use regex::Regex;

/// How the pattern text is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Regular expression; the replacement may reference groups (`$1`, `${name}`)
    #[default]
    Pattern,
    /// Plain case-sensitive substring
    Literal,
}

impl MatchMode {
    pub fn toggle(self) -> Self {
        match self {
            MatchMode::Pattern => MatchMode::Literal,
            MatchMode::Literal => MatchMode::Pattern,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MatchMode::Pattern => "regex",
            MatchMode::Literal => "literal",
        }
    }
}

/// Byte range of one match inside an original name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub len: usize,
}

impl MatchSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Characters that cannot appear in a file name on common platforms
const ILLEGAL_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// A compiled pattern ready to be applied to many names
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Empty pattern: every name is echoed
    Echo,
    /// Pattern failed to compile: every name is echoed
    Invalid(String),
    Regex { regex: Regex, replacement: String },
    Literal { needle: String, replacement: String },
}

impl Matcher {
    /// Compile `pattern` for `mode`; never fails
    pub fn compile(pattern: &str, replacement: &str, mode: MatchMode) -> Self {
        if pattern.trim().is_empty() {
            return Matcher::Echo;
        }
        match mode {
            MatchMode::Literal => Matcher::Literal {
                needle: pattern.to_string(),
                replacement: replacement.to_string(),
            },
            MatchMode::Pattern => match Regex::new(pattern) {
                Ok(regex) => Matcher::Regex {
                    regex,
                    replacement: replacement.to_string(),
                },
                Err(e) => Matcher::Invalid(e.to_string()),
            },
        }
    }

    /// Compile error, when the pattern is invalid
    pub fn error(&self) -> Option<&str> {
        match self {
            Matcher::Invalid(msg) => Some(msg),
            _ => None,
        }
    }

    /// Apply to `name`: the raw replaced text and the spans that matched
    ///
    /// Returns `None` when nothing matched.
    pub fn apply(&self, name: &str) -> Option<(String, Vec<MatchSpan>)> {
        match self {
            Matcher::Echo | Matcher::Invalid(_) => None,
            Matcher::Regex { regex, replacement } => {
                let spans: Vec<MatchSpan> = regex
                    .find_iter(name)
                    .map(|m| MatchSpan {
                        start: m.start(),
                        len: m.len(),
                    })
                    .collect();
                if spans.is_empty() {
                    return None;
                }
                let replaced = regex.replace_all(name, replacement.as_str()).into_owned();
                Some((replaced, spans))
            }
            Matcher::Literal {
                needle,
                replacement,
            } => {
                let spans: Vec<MatchSpan> = name
                    .match_indices(needle.as_str())
                    .map(|(start, m)| MatchSpan {
                        start,
                        len: m.len(),
                    })
                    .collect();
                if spans.is_empty() {
                    return None;
                }
                Some((name.replace(needle.as_str(), replacement), spans))
            }
        }
    }
}

/// Collapse whitespace runs, trim, and replace illegal characters with `_`
pub fn sanitize_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .map(|c| {
            if c.is_control() || ILLEGAL_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}
