//! Slides and decks.

use super::{ImageAsset, ObjectKind, VisualObject};

/// One slide: a size and its objects in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Slide identifier (e.g. `slide-1`)
    pub id: String,
    /// Numeric suffix of the source part name (`slide7.xml` is 7)
    pub index: u32,
    /// Source part path, when the slide came from a package
    pub source: Option<String>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Objects in paint order; a background, if any, comes first
    pub objects: Vec<VisualObject>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new(id: impl Into<String>, index: u32, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            index,
            source: None,
            width,
            height,
            objects: Vec::new(),
        }
    }

    pub fn push(&mut self, object: VisualObject) {
        self.objects.push(object);
    }

    /// The background object, if the slide has one.
    pub fn background(&self) -> Option<&VisualObject> {
        self.objects.first().filter(|o| o.is_background())
    }

    /// Objects of one kind, in paint order.
    pub fn objects_of(&self, kind: ObjectKind) -> impl Iterator<Item = &VisualObject> {
        self.objects.iter().filter(move |o| o.kind() == kind)
    }

    /// Look up an object by id.
    pub fn object(&self, id: &str) -> Option<&VisualObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Mutable lookup by id, for editors applying changes in place.
    pub fn object_mut(&mut self, id: &str) -> Option<&mut VisualObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Text of all text blocks, one block per line.
    pub fn plain_text(&self) -> String {
        self.objects
            .iter()
            .filter_map(|o| match o {
                VisualObject::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An ordered sequence of slides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Total number of objects over all slides.
    pub fn object_count(&self) -> usize {
        self.slides.iter().map(|s| s.objects.len()).sum()
    }

    /// Every image in the deck with the id of the object that uses it.
    pub fn images(&self) -> impl Iterator<Item = (&str, &ImageAsset)> {
        self.slides
            .iter()
            .flat_map(|s| s.objects.iter())
            .filter_map(|o| o.image().map(|image| (o.id(), image)))
    }

    /// Text of every slide, separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.slides
            .iter()
            .map(Slide::plain_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
