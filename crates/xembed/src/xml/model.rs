//! XML data model

use indexmap::IndexMap;

/// Declaration header metadata (`<?xml version='..' encoding='..'?>`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub version: String,
    pub encoding: String,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: "utf-8".to_string(),
        }
    }
}

/// XML document: declaration metadata plus exactly one root element
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub declaration: Option<Declaration>,
    pub root: Element,
}

impl Document {
    /// Document with the default declaration header
    pub fn new(root: Element) -> Self {
        Self {
            declaration: Some(Declaration::default()),
            root,
        }
    }

    /// Document serialized without a declaration line
    pub const fn without_declaration(root: Element) -> Self {
        Self {
            declaration: None,
            root,
        }
    }
}

/// XML element
///
/// `text` distinguishes "no text content set" (`None`) from an explicit
/// empty string. Children are exclusively owned by their parent.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }
}
