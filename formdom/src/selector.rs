//! A small CSS selector subset.
//!
//! Supported: comma-separated compound selectors built from `*`, a tag name,
//! `#id`, `.class`, `[attr]` and `[attr=value]` (value optionally quoted).
//! Combinators and pseudo classes are rejected.

use crate::document::{Document, NodeId};
use crate::error::DomError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrMatch {
    Exists(String),
    Equals(String, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(tag) = doc.tag_name(node) else {
            return false;
        };
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if doc.attribute(node, "id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| doc.has_class(node, class)) {
            return false;
        }
        self.attrs.iter().all(|attr| match attr {
            AttrMatch::Exists(name) => doc.has_attribute(node, name),
            AttrMatch::Equals(name, value) => doc.attribute(node, name) == Some(value.as_str()),
        })
    }
}

/// A parsed selector group list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    groups: Vec<Compound>,
}

impl SelectorList {
    pub fn parse(selector: &str) -> Result<Self, DomError> {
        let unsupported = || DomError::UnsupportedSelector(selector.to_string());

        let groups = selector
            .split(',')
            .map(|group| parse_compound(group.trim()).ok_or_else(unsupported))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { groups })
    }

    /// Returns true if any group matches the element.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.groups.iter().any(|group| group.matches(doc, node))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &[char], pos: &mut usize) -> Option<String> {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    (*pos > start).then(|| chars[start..*pos].iter().collect())
}

fn parse_compound(input: &str) -> Option<Compound> {
    if input.is_empty() {
        return None;
    }

    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0;
    let mut compound = Compound::default();

    if chars[0] == '*' {
        pos = 1;
    } else if is_ident_char(chars[0]) {
        compound.tag = Some(take_ident(&chars, &mut pos)?);
    }

    while pos < chars.len() {
        match chars[pos] {
            '#' => {
                pos += 1;
                compound.id = Some(take_ident(&chars, &mut pos)?);
            }
            '.' => {
                pos += 1;
                compound.classes.push(take_ident(&chars, &mut pos)?);
            }
            '[' => {
                pos += 1;
                compound.attrs.push(parse_attr(&chars, &mut pos)?);
            }
            _ => return None,
        }
    }

    Some(compound)
}

fn parse_attr(chars: &[char], pos: &mut usize) -> Option<AttrMatch> {
    let name = take_ident(chars, pos)?;
    match chars.get(*pos)? {
        ']' => {
            *pos += 1;
            Some(AttrMatch::Exists(name))
        }
        '=' => {
            *pos += 1;
            let value = match chars.get(*pos)? {
                quote @ ('"' | '\'') => {
                    let quote = *quote;
                    *pos += 1;
                    let start = *pos;
                    while chars.get(*pos)? != &quote {
                        *pos += 1;
                    }
                    let value: String = chars[start..*pos].iter().collect();
                    *pos += 1;
                    value
                }
                _ => take_ident(chars, pos)?,
            };
            if chars.get(*pos)? != &']' {
                return None;
            }
            *pos += 1;
            Some(AttrMatch::Equals(name, value))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_class_selector() {
        let list = SelectorList::parse(".move-option").unwrap();
        assert_eq!(list.groups.len(), 1);
        assert_eq!(list.groups[0].classes, vec!["move-option".to_string()]);
        assert_eq!(list.groups[0].tag, None);
    }

    #[test]
    fn parses_compound_with_attributes() {
        let list = SelectorList::parse("button.btn#add[data-target='tags_1'][disabled]").unwrap();
        let group = &list.groups[0];
        assert_eq!(group.tag.as_deref(), Some("button"));
        assert_eq!(group.id.as_deref(), Some("add"));
        assert_eq!(group.classes, vec!["btn".to_string()]);
        assert_eq!(
            group.attrs,
            vec![
                AttrMatch::Equals("data-target".into(), "tags_1".into()),
                AttrMatch::Exists("disabled".into()),
            ]
        );
    }

    #[test]
    fn parses_selector_groups() {
        let list = SelectorList::parse("select, option.x").unwrap();
        assert_eq!(list.groups.len(), 2);
        assert_eq!(list.groups[1].tag.as_deref(), Some("option"));
    }

    #[test]
    fn rejects_combinators_and_pseudo_classes() {
        assert!(SelectorList::parse("form select").is_err());
        assert!(SelectorList::parse("div > span").is_err());
        assert!(SelectorList::parse("option:checked").is_err());
        assert!(SelectorList::parse("").is_err());
        assert!(SelectorList::parse("a,").is_err());
        assert!(SelectorList::parse("[data-x=\"open").is_err());
    }
}
