//! xembed - embed binary image payloads in XML documents and extract them back
//!
//! # Quick Start
//!
//! ```
//! use xembed::{build, serialize, Document, ElementSpec};
//!
//! let root = build(
//!     "root",
//!     vec![ElementSpec::new("item")
//!         .with_attr("id", "1")
//!         .with_text("hello")],
//! );
//! let text = serialize(&Document::without_declaration(root));
//! assert_eq!(text, "<root><item id=\"1\">hello</item></root>");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod codec;
pub mod embed;
pub mod extract;
pub mod utils;
pub mod xml;

pub use extract::{ExtractedPayload, PAYLOAD_THRESHOLD};
pub use xml::builder::{build, ElementSpec};
pub use xml::model::{Declaration, Document, Element};
pub use xml::parser::Parser;
pub use xml::writer::{serialize, write_file};

/// Parse an XML document from a string
pub fn parse_str(s: &str) -> Result<Document> {
    Parser::new(s.as_bytes()).parse()
}

/// Parse an XML document from bytes
pub fn parse_bytes(bytes: &[u8]) -> Result<Document> {
    Parser::new(bytes).parse()
}
