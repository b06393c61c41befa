//! In-memory package builders shared by unit tests.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub(crate) const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

pub(crate) const IMAGE_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Collects parts and writes them into a stored ZIP archive.
pub(crate) struct PackageBuilder {
    parts: Vec<(String, Vec<u8>)>,
}

impl PackageBuilder {
    pub(crate) fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub(crate) fn text(self, name: &str, content: &str) -> Self {
        self.binary(name, content.as_bytes())
    }

    pub(crate) fn binary(mut self, name: &str, data: &[u8]) -> Self {
        self.parts.push((name.to_string(), data.to_vec()));
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, data) in self.parts {
            zip.start_file(name, options).unwrap();
            zip.write_all(&data).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }
}

/// Wrap shape-tree content (and an optional `<p:bg>`) in a slide document.
pub(crate) fn slide_xml(background: &str, shapes: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {NS}><p:cSld>{background}<p:spTree><p:nvGrpSpPr/><p:grpSpPr/>{shapes}</p:spTree></p:cSld></p:sld>"#
    )
}

pub(crate) fn solid_background(hex: &str) -> String {
    format!(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{hex}"/></a:solidFill></p:bgPr></p:bg>"#)
}

pub(crate) fn image_background(rel_id: &str) -> String {
    format!(r#"<p:bg><p:bgPr><a:blipFill><a:blip r:embed="{rel_id}"/></a:blipFill></p:bgPr></p:bg>"#)
}

/// A `<p:sp>` text shape with one run per paragraph.
pub(crate) fn text_shape(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<a:p><a:r><a:rPr lang=\"en-US\"/><a:t>{p}</a:t></a:r></a:p>"))
        .collect();
    format!("<p:sp><p:nvSpPr/><p:spPr/><p:txBody><a:bodyPr/>{body}</p:txBody></p:sp>")
}

pub(crate) fn picture_shape(rel_id: &str) -> String {
    format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="4" name="Picture 3"/></p:nvPicPr><p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr/></p:pic>"#
    )
}

/// A relationships part from `(id, type, target)` triples.
pub(crate) fn rels_xml(entries: &[(&str, &str, &str)]) -> String {
    let body: String = entries
        .iter()
        .map(|(id, ty, target)| {
            format!(r#"<Relationship Id="{id}" Type="{ty}" Target="{target}"/>"#)
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{body}</Relationships>"#
    )
}
