//! Document serialization

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::xml::model::{Document, Element};

/// Serialize a document to XML text.
///
/// Depth-first, attribute and child order preserved. Reserved characters are
/// escaped in text and attribute values. Elements with neither text nor
/// children render self-closing.
pub fn serialize(doc: &Document) -> String {
    let mut output = String::new();
    if let Some(decl) = &doc.declaration {
        output.push_str("<?xml version='");
        output.push_str(&decl.version);
        output.push_str("' encoding='");
        output.push_str(&decl.encoding);
        output.push_str("'?>\n");
    }
    serialize_element(&doc.root, &mut output);
    output
}

/// Serialize and write a document to `path` as UTF-8 bytes.
pub fn write_file(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serialize(doc)).map_err(|err| Error::io(path, &err))
}

fn serialize_element(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.name);

    for (key, value) in &element.attributes {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        output.push_str(&escape_xml(value));
        output.push('"');
    }

    if element.text.is_none() && element.children.is_empty() {
        output.push_str(" />");
        return;
    }

    output.push('>');
    if let Some(text) = &element.text {
        output.push_str(&escape_xml(text));
    }
    for child in &element.children {
        serialize_element(child, output);
    }
    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
