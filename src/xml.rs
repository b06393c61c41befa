//! Generic XML element tree with lookup helpers.
//!
//! Slide parts are deeply nested and loosely populated, so every lookup
//! here returns an `Option` or an empty iterator. The only failure is a
//! document that cannot be parsed at all.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Deepest element nesting accepted by [`XmlNode::parse`].
///
/// Real slide parts stay well under a hundred levels.
pub const MAX_DEPTH: usize = 512;

/// One element of a parsed XML part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Qualified tag name, e.g. `p:sld`
    pub name: String,
    /// Attributes in document order, keyed by qualified name
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlNode>,
    /// Character data directly inside this element
    pub text: String,
}

impl XmlNode {
    /// Parse an XML document and return its root element.
    ///
    /// # Example
    ///
    /// ```
    /// use pptdeck::xml::XmlNode;
    ///
    /// let root = XmlNode::parse(r#"<a:p><a:r><a:t>Hi</a:t></a:r></a:p>"#)?;
    /// assert_eq!(root.path(&["r", "t"]).map(|t| t.text()), Some("Hi"));
    /// # Ok::<(), pptdeck::Error>(())
    /// ```
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if root.is_none() {
                        if stack.len() >= MAX_DEPTH {
                            return Err(Error::MalformedXml(format!(
                                "element nesting exceeds {} levels",
                                MAX_DEPTH
                            )));
                        }
                        stack.push(Self::from_start(&e)?);
                    } else {
                        // Content after the root element is ignored, but must still balance
                        reader.read_to_end(e.name())?;
                    }
                }
                Event::Empty(e) => {
                    if root.is_none() {
                        let node = Self::from_start(&e)?;
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(node),
                            None => root = Some(node),
                        }
                    }
                }
                Event::End(_) => {
                    let node = stack.pop().ok_or_else(|| {
                        Error::MalformedXml("unexpected closing tag".to_string())
                    })?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => root = Some(node),
                    }
                }
                Event::Text(e) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::MalformedXml(format!(
                "unclosed element <{}>",
                open.name
            )));
        }
        root.ok_or_else(|| Error::MalformedXml("document has no root element".to_string()))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| Error::MalformedXml(err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    /// Tag name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local(&self.name)
    }

    /// First child element with the given local name.
    pub fn child<'a>(&'a self, name: &str) -> Option<&'a XmlNode> {
        let wanted = local(name);
        self.children.iter().find(|c| c.local_name() == wanted)
    }

    /// All child elements with the given local name, in document order.
    ///
    /// One matching child and many matching children are returned the same
    /// way; no match is an empty iterator.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        let wanted = local(name);
        self.children
            .iter()
            .filter(move |c| c.local_name() == wanted)
    }

    /// Follow a chain of first-child lookups.
    pub fn path(&self, names: &[&str]) -> Option<&XmlNode> {
        names.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Attribute value by qualified key (`r:embed`) or bare local name (`embed`).
    pub fn attr(&self, name: &str) -> Option<&str> {
        let qualified = name.contains(':');
        self.attributes
            .iter()
            .find(|(key, _)| {
                if qualified {
                    key == name
                } else {
                    key == name || local(key) == name
                }
            })
            .map(|(_, value)| value.as_str())
    }

    /// Character data directly inside this element.
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn local(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}
