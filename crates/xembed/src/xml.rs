//! XML tree model, construction, parsing, and serialization

pub mod builder;
pub mod cursor;
pub mod model;
pub mod parser;
pub mod writer;

pub use builder::{build, ElementSpec};
pub use model::{Declaration, Document, Element};
pub use parser::Parser;
pub use writer::{serialize, write_file};
