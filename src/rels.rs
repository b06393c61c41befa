//! Part relationships (`_rels/*.rels`) and target resolution.

use crate::error::Result;
use crate::package::Package;
use crate::xml::XmlNode;
use std::collections::HashMap;

/// A relationship entry from a .rels file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative or absolute)
    pub target: String,
    /// Whether the target is external
    pub external: bool,
}

/// Collection of relationships parsed from a .rels file.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Map from relationship ID to relationship data
    pub by_id: HashMap<String, Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the XML text of a relationships part.
    ///
    /// Entries missing an `Id` or a `Target` are skipped.
    pub fn parse(xml: &str) -> Result<Self> {
        let root = XmlNode::parse(xml)?;
        let mut rels = Self::new();

        for node in root.children("Relationship") {
            let (Some(id), Some(target)) = (node.attr("Id"), node.attr("Target")) else {
                continue;
            };
            if id.is_empty() || target.is_empty() {
                continue;
            }
            rels.add(Relationship {
                id: id.to_string(),
                rel_type: node.attr("Type").unwrap_or_default().to_string(),
                target: target.to_string(),
                external: node
                    .attr("TargetMode")
                    .is_some_and(|mode| mode.eq_ignore_ascii_case("external")),
            });
        }

        Ok(rels)
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id)
    }

    /// Add a relationship, replacing any earlier one with the same ID.
    pub fn add(&mut self, rel: Relationship) {
        self.by_id.insert(rel.id.clone(), rel);
    }

    /// Absolute part path an internal relationship points at.
    ///
    /// `base_part` is the part that owns this table. Unknown IDs and
    /// external targets give `None`.
    pub fn target_path(&self, id: &str, base_part: &str) -> Option<String> {
        let rel = self.get(id).filter(|rel| !rel.external)?;
        Some(resolve_target(base_part, &rel.target))
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Relationships part path for a part.
///
/// `ppt/slides/slide1.xml` becomes `ppt/slides/_rels/slide1.xml.rels`.
pub fn rels_path_for(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part),
    }
}

/// Load the relationships of `part`.
///
/// A missing relationships part is an empty table. So is a malformed one,
/// since it only costs the slide its media.
pub fn resolve(package: &Package, part: &str) -> Relationships {
    let rels_path = rels_path_for(part);
    if !package.exists(&rels_path) {
        return Relationships::new();
    }

    match package
        .read_text(&rels_path)
        .and_then(|xml| Relationships::parse(&xml))
    {
        Ok(rels) => rels,
        Err(err) => {
            tracing::warn!(part = %rels_path, error = %err, "ignoring unreadable relationships");
            Relationships::new()
        }
    }
}

/// Resolve a relationship target against the part that references it.
///
/// Absolute targets drop their leading slash. Relative targets are joined
/// to the base part's directory, with `..` removing a segment.
pub fn resolve_target(base_part: &str, target: &str) -> String {
    if let Some(stripped) = target.strip_prefix('/') {
        return stripped.to_string();
    }

    let mut segments: Vec<&str> = match base_part.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').filter(|s| !s.is_empty()).collect(),
        None => Vec::new(),
    };

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{rels_xml, PackageBuilder, IMAGE_REL};

    #[test]
    fn test_rels_path_for() {
        assert_eq!(
            rels_path_for("ppt/slides/slide1.xml"),
            "ppt/slides/_rels/slide1.xml.rels"
        );
        assert_eq!(rels_path_for("slide1.xml"), "_rels/slide1.xml.rels");
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            resolve_target("ppt/slides/slide1.xml", "../media/image1.png"),
            "ppt/media/image1.png"
        );
        assert_eq!(
            resolve_target("ppt/slides/slide1.xml", "/ppt/media/image1.png"),
            "ppt/media/image1.png"
        );
        assert_eq!(
            resolve_target("ppt/slides/slide1.xml", "./image2.png"),
            "ppt/slides/image2.png"
        );
        assert_eq!(
            resolve_target("ppt/slides/deep/slide1.xml", "../../media/a.jpeg"),
            "ppt/media/a.jpeg"
        );
        assert_eq!(resolve_target("slide1.xml", "../media/x.png"), "media/x.png");
    }

    #[test]
    fn test_parse_skips_incomplete_entries() {
        let xml = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="t/image" Target="../media/image1.png"/>
  <Relationship Type="t/image" Target="../media/orphan.png"/>
  <Relationship Id="rId3" Type="t/image"/>
  <Relationship Id="rId4" Type="t/hyperlink" Target="https://example.com" TargetMode="External"/>
</Relationships>"#;
        let rels = Relationships::parse(xml).unwrap();

        assert_eq!(rels.len(), 2);
        assert!(rels.get("rId1").is_some());
        assert!(rels.get("rId3").is_none());
        assert!(rels.get("rId4").unwrap().external);
        assert_eq!(rels.get("rId1").unwrap().rel_type, "t/image");
    }

    #[test]
    fn test_target_path() {
        let xml = rels_xml(&[
            ("rId2", IMAGE_REL, "../media/image1.png"),
            ("rId3", "t/hyperlink", "https://example.com"),
        ]);
        let mut rels = Relationships::parse(&xml).unwrap();
        rels.by_id.get_mut("rId3").unwrap().external = true;

        assert_eq!(
            rels.target_path("rId2", "ppt/slides/slide1.xml").as_deref(),
            Some("ppt/media/image1.png")
        );
        assert_eq!(rels.target_path("rId3", "ppt/slides/slide1.xml"), None);
        assert_eq!(rels.target_path("rId9", "ppt/slides/slide1.xml"), None);
    }

    #[test]
    fn test_resolve_missing_and_malformed() {
        let bytes = PackageBuilder::new()
            .text("ppt/slides/slide1.xml", "<p:sld/>")
            .text("ppt/slides/slide2.xml", "<p:sld/>")
            .text("ppt/slides/_rels/slide2.xml.rels", "<Relationships><oops>")
            .build();
        let package = Package::from_bytes(bytes).unwrap();

        assert!(resolve(&package, "ppt/slides/slide1.xml").is_empty());
        assert!(resolve(&package, "ppt/slides/slide2.xml").is_empty());
    }

    #[test]
    fn test_resolve_reads_table() {
        let bytes = PackageBuilder::new()
            .text(
                "ppt/slides/_rels/slide1.xml.rels",
                &rels_xml(&[("rId2", IMAGE_REL, "../media/image1.png")]),
            )
            .build();
        let package = Package::from_bytes(bytes).unwrap();

        let rels = resolve(&package, "ppt/slides/slide1.xml");
        assert_eq!(rels.get("rId2").unwrap().target, "../media/image1.png");
    }
}
