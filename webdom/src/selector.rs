//! A small CSS selector engine.
//!
//! Supported: type (`div`, `*`), `#id`, `.class`, `[attr]`, `[attr=value]`
//! with optional quotes, descendant combinators (whitespace) and selector
//! lists (`,`).

use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use crate::document::Document;
use crate::element::{Element, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,
    #[error("unexpected `{found}` at position {position}")]
    Unexpected { found: char, position: usize },
    #[error("unexpected end of selector")]
    UnexpectedEnd,
    #[error("unterminated attribute selector")]
    UnterminatedAttribute,
    #[error("unterminated string in attribute selector")]
    UnterminatedString,
}

/// A parsed, comma-separated selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

/// Compound selectors joined by descendant combinators, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex(Vec<Compound>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeMatch {
    name: String,
    value: Option<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut parser = Parser {
            chars: input.char_indices().peekable(),
        };
        let mut alternatives = Vec::new();
        loop {
            alternatives.push(parser.complex()?);
            match parser.chars.next() {
                None => break,
                Some((_, ',')) => continue,
                Some((position, found)) => {
                    return Err(SelectorError::Unexpected { found, position })
                }
            }
        }
        Ok(Self { alternatives })
    }

    /// Whether `node` matches any alternative of this selector.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.alternatives
            .iter()
            .any(|complex| complex.matches(doc, node))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Complex {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((subject, outer)) = self.0.split_last() else {
            return false;
        };
        if !doc.get(node).is_some_and(|el| subject.matches(el)) {
            return false;
        }

        // Descendant-only combinators: a greedy walk up the ancestors is exact.
        let mut pending = outer.iter().rev().peekable();
        for ancestor in doc.ancestors(node) {
            let Some(compound) = pending.peek() else {
                break;
            };
            if doc.get(ancestor).is_some_and(|el| compound.matches(el)) {
                pending.next();
            }
        }
        pending.peek().is_none()
    }
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.is(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id_attr() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        self.attributes.iter().all(|attr| match &attr.value {
            None => element.has_attribute(&attr.name),
            Some(expected) => element.attribute_value(&attr.name).as_deref() == Some(expected),
        })
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
    }
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn complex(&mut self) -> Result<Complex, SelectorError> {
        self.skip_whitespace();
        let mut compounds = Vec::new();
        loop {
            compounds.push(self.compound()?);
            let had_whitespace = self.skip_whitespace();
            match self.chars.peek() {
                None | Some((_, ',')) => break,
                Some(_) if had_whitespace => continue,
                Some(&(position, found)) => {
                    return Err(SelectorError::Unexpected { found, position })
                }
            }
        }
        Ok(Complex(compounds))
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();
        let mut universal = false;

        match self.chars.peek() {
            Some((_, '*')) => {
                self.chars.next();
                universal = true;
            }
            Some(&(_, ch)) if is_ident_char(ch) => {
                compound.tag = Some(self.ident()?.to_ascii_lowercase());
            }
            _ => {}
        }

        while let Some(&(position, ch)) = self.chars.peek() {
            match ch {
                '#' => {
                    self.chars.next();
                    compound.id = Some(self.ident()?);
                }
                '.' => {
                    self.chars.next();
                    compound.classes.push(self.ident()?);
                }
                '[' => {
                    self.chars.next();
                    compound.attributes.push(self.attribute()?);
                }
                ',' => break,
                c if c.is_whitespace() => break,
                found => return Err(SelectorError::Unexpected { found, position }),
            }
        }

        if compound.is_empty() && !universal {
            return match self.chars.peek() {
                Some(&(position, found)) => Err(SelectorError::Unexpected { found, position }),
                None => Err(SelectorError::UnexpectedEnd),
            };
        }
        Ok(compound)
    }

    fn attribute(&mut self) -> Result<AttributeMatch, SelectorError> {
        self.skip_whitespace();
        let name = self.ident().map_err(|err| match err {
            SelectorError::UnexpectedEnd => SelectorError::UnterminatedAttribute,
            other => other,
        })?;
        self.skip_whitespace();

        let value = match self.chars.next() {
            Some((_, ']')) => {
                return Ok(AttributeMatch {
                    name: name.to_ascii_lowercase(),
                    value: None,
                })
            }
            Some((_, '=')) => {
                self.skip_whitespace();
                match self.chars.peek() {
                    Some(&(_, quote @ ('"' | '\''))) => {
                        self.chars.next();
                        self.quoted(quote)?
                    }
                    Some(_) => self.unquoted(),
                    None => return Err(SelectorError::UnterminatedAttribute),
                }
            }
            Some((position, found)) => return Err(SelectorError::Unexpected { found, position }),
            None => return Err(SelectorError::UnterminatedAttribute),
        };

        self.skip_whitespace();
        match self.chars.next() {
            Some((_, ']')) => Ok(AttributeMatch {
                name: name.to_ascii_lowercase(),
                value: Some(value),
            }),
            Some((position, found)) => Err(SelectorError::Unexpected { found, position }),
            None => Err(SelectorError::UnterminatedAttribute),
        }
    }

    fn quoted(&mut self, quote: char) -> Result<String, SelectorError> {
        let mut value = String::new();
        for (_, ch) in self.chars.by_ref() {
            if ch == quote {
                return Ok(value);
            }
            value.push(ch);
        }
        Err(SelectorError::UnterminatedString)
    }

    fn unquoted(&mut self) -> String {
        let mut value = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == ']' || ch.is_whitespace() {
                break;
            }
            value.push(ch);
            self.chars.next();
        }
        value
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let mut ident = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if !is_ident_char(ch) {
                break;
            }
            ident.push(ch);
            self.chars.next();
        }
        if !ident.is_empty() {
            return Ok(ident);
        }
        match self.chars.peek() {
            Some(&(position, found)) => Err(SelectorError::Unexpected { found, position }),
            None => Err(SelectorError::UnexpectedEnd),
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;
        while self.chars.next_if(|(_, ch)| ch.is_whitespace()).is_some() {
            skipped = true;
        }
        skipped
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}
