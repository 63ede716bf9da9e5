//! Positional text templates.
//!
//! A template is literal text with `{N}` placeholders, where `N` is a
//! zero-based parameter index. A placeholder may carry a format suffix
//! (`{0,number}` or `{0,date,short}`), which is accepted and ignored: every
//! parameter is substituted as text. `{{` and `}}` stand for literal braces.

use crate::error::TemplateError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Placeholder { index: usize, raw: String },
}

/// A parsed, validated template.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|(_, next)| *next == '{') => {
                    chars.next();
                    literal.push('{');
                },
                '{' => {
                    let close = source[offset + 1..]
                        .find(['{', '}'])
                        .map(|pos| offset + 1 + pos)
                        .filter(|&pos| source.as_bytes()[pos] == b'}')
                        .ok_or(TemplateError::UnclosedPlaceholder { offset })?;

                    let inner = &source[offset + 1..close];
                    let index_text = inner.split(',').next().unwrap_or_default().trim();
                    let index = parse_index(index_text).ok_or_else(|| {
                        TemplateError::InvalidIndex {
                            offset,
                            found: index_text.to_string(),
                        }
                    })?;

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder {
                        index,
                        raw: source[offset..=close].to_string(),
                    });

                    while chars.peek().is_some_and(|(pos, _)| *pos <= close) {
                        chars.next();
                    }
                },
                '}' if chars.peek().is_some_and(|(_, next)| *next == '}') => {
                    chars.next();
                    literal.push('}');
                },
                '}' => return Err(TemplateError::UnmatchedClosingBrace { offset }),
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// One past the highest placeholder index, or zero without placeholders.
    pub fn arity(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder { index, .. } => Some(index + 1),
                Segment::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Substitutes `params` positionally.
    ///
    /// Placeholders without a matching parameter are emitted as written and
    /// surplus parameters are ignored.
    pub fn format<S: AsRef<str>>(&self, params: &[S]) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { index, raw } => match params.get(*index) {
                    Some(param) => out.push_str(param.as_ref()),
                    None => out.push_str(raw),
                },
            }
        }
        out
    }
}

fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}
