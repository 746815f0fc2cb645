//! Canonical image-embedding layout

use std::path::Path;

use tracing::warn;

use crate::codec;
use crate::utils;
use crate::xml::builder::{self, ElementSpec};
use crate::xml::model::Document;

/// Element layout for a single embedded image.
///
/// The attributed group element keeps the payload two levels below the
/// document root, which is where the scanner looks for it. A `None` payload
/// leaves the `image_string` element textless.
pub fn image_specs(image_file: &str, payload: Option<String>) -> Vec<ElementSpec> {
    let mut image_string = ElementSpec::new("image_string")
        .with_attr("id", "2")
        .with_attr("type", "binary");
    if let Some(payload) = payload {
        image_string = image_string.with_text(payload);
    }

    vec![ElementSpec::new("root")
        .with_attr("version", "1.0")
        .with_attr("encoding", "UTF-8")
        .with_child(
            ElementSpec::new("image_title")
                .with_attr("id", "1")
                .with_attr("type", "image")
                .with_text(format!("{image_file}.")),
        )
        .with_child(image_string)
        .with_child(ElementSpec::new("end_tag"))]
}

/// Load and encode an image, then build the document that embeds it.
///
/// A failed load is reported and still yields a document, with no payload
/// text in it.
pub fn document_for_image(image_path: impl AsRef<Path>) -> Document {
    let image_path = image_path.as_ref();
    let payload = match utils::read_bytes(image_path) {
        Ok(bytes) => Some(codec::encode(&bytes)),
        Err(err) => {
            warn!("{err}");
            None
        }
    };

    let specs = image_specs(&image_path.display().to_string(), payload);
    Document::new(builder::build("root", specs))
}
