//! Declarative element-tree construction

use indexmap::IndexMap;
use tracing::warn;

use crate::error::{Error, ErrorKind, Result, Span};
use crate::xml::model::Element;

/// Declarative description of one element subtree.
///
/// An empty `tag` means "no tag given"; the builder skips such a spec with a
/// diagnostic instead of failing the whole build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementSpec {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    fn tag_name(&self) -> Result<&str> {
        if self.tag.is_empty() {
            Err(Error::new(ErrorKind::MissingTag, Span::empty()))
        } else {
            Ok(&self.tag)
        }
    }
}

/// Build an element tree under a fresh root named `root_tag`.
///
/// Each spec attaches as a child of the root, recursively. A spec without a
/// tag is skipped along with its whole subtree; its siblings still attach.
/// An empty spec list yields a childless root.
pub fn build(root_tag: &str, specs: Vec<ElementSpec>) -> Element {
    let mut root = Element::new(root_tag);
    for spec in specs {
        attach(&mut root, spec);
    }
    root
}

fn attach(parent: &mut Element, spec: ElementSpec) {
    let tag = match spec.tag_name() {
        Ok(tag) => tag.to_string(),
        Err(err) => {
            warn!("skipping element: {}", err.message());
            return;
        }
    };

    let mut element = Element::new(tag);
    element.attributes = spec.attributes;
    element.text = spec.text;
    for child in spec.children {
        attach(&mut element, child);
    }
    parent.children.push(element);
}
