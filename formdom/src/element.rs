use crate::document::{Document, NodeId};
use crate::error::DomError;

#[derive(Debug, Clone)]
enum Child {
    Element(ElementSpec),
    Text(String),
}

/// Declarative description of an element subtree, mounted with
/// [`Document::mount`].
#[derive(Debug, Clone)]
pub struct ElementSpec {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
    selected: bool,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            selected: false,
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    /// An `<option value=..>label</option>`.
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("option").attr("value", value).text(label)
    }

    /// A `<button type="button">` with a text label.
    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").attr("type", "button").text(label)
    }

    // Attributes
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Append a class to the `class` attribute.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        match self.attrs.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(&class);
            }
            None => self.attrs.push(("class".to_string(), class)),
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    pub fn multiple(self) -> Self {
        self.attr("multiple", "")
    }

    pub fn disabled(self) -> Self {
        self.attr("disabled", "")
    }

    /// Mark an option as selected when mounted.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    // Children
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.children
            .extend(children.into_iter().map(Child::Element));
        self
    }
}

impl Document {
    /// Build the subtree described by `spec` and append it to `parent`.
    pub fn mount(&mut self, parent: NodeId, spec: ElementSpec) -> Result<NodeId, DomError> {
        let node = self.build(spec)?;
        self.append_child(parent, node)
    }

    fn build(&mut self, spec: ElementSpec) -> Result<NodeId, DomError> {
        let node = self.create_element(&spec.tag);
        for (name, value) in spec.attrs {
            self.set_attribute(node, name, value)?;
        }

        for child in spec.children {
            let child = match child {
                Child::Element(spec) => self.build(spec)?,
                Child::Text(text) => self.create_text(text),
            };
            self.append_child(node, child)?;
        }

        if spec.selected || self.has_attribute(node, "selected") {
            if let Some(data) = self.element_mut(node) {
                data.selected = true;
            }
        }
        Ok(node)
    }
}
