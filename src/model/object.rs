//! Visual objects placed on a slide.

use super::{Color, ImageAsset};

/// Kind of a [`VisualObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Background,
    Text,
    Picture,
    Rect,
}

/// How a slide background is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Flat color over the whole slide
    Solid(Color),
    /// Image stretched over the whole slide
    Image(ImageAsset),
}

/// Full-slide background. Always painted first.
///
/// Extraction places it at the origin unrotated; an editor may move it
/// like any other object.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Fill,
    pub rotation: f64,
}

/// A block of text. Paragraphs are separated by `\n`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub rotation: f64,
}

/// An embedded picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub image: ImageAsset,
}

/// A filled rectangle.
///
/// Never produced from a package; decks edited elsewhere and loaded back
/// from a snapshot may contain them.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub rotation: f64,
}

/// One drawable object on a slide.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualObject {
    Background(Background),
    Text(TextBlock),
    Picture(Picture),
    Rect(RectShape),
}

impl VisualObject {
    /// Identifier, unique within the deck.
    pub fn id(&self) -> &str {
        match self {
            VisualObject::Background(b) => &b.id,
            VisualObject::Text(t) => &t.id,
            VisualObject::Picture(p) => &p.id,
            VisualObject::Rect(r) => &r.id,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            VisualObject::Background(_) => ObjectKind::Background,
            VisualObject::Text(_) => ObjectKind::Text,
            VisualObject::Picture(_) => ObjectKind::Picture,
            VisualObject::Rect(_) => ObjectKind::Rect,
        }
    }

    /// Top-left corner in slide pixels.
    pub fn position(&self) -> (f64, f64) {
        match self {
            VisualObject::Background(b) => (b.x, b.y),
            VisualObject::Text(t) => (t.x, t.y),
            VisualObject::Picture(p) => (p.x, p.y),
            VisualObject::Rect(r) => (r.x, r.y),
        }
    }

    /// Image referenced by this object, if any.
    pub fn image(&self) -> Option<&ImageAsset> {
        match self {
            VisualObject::Background(Background {
                fill: Fill::Image(image),
                ..
            }) => Some(image),
            VisualObject::Picture(p) => Some(&p.image),
            _ => None,
        }
    }

    pub fn is_background(&self) -> bool {
        matches!(self, VisualObject::Background(_))
    }
}

/// Allocates object identifiers for one slide.
///
/// Identifiers look like `txt-3-2`: kind prefix, slide ordinal within the
/// deck, then a per-slide sequence number. Distinct ordinals keep them
/// unique across the deck, and the same package always yields the same ids.
#[derive(Debug)]
pub struct IdGenerator {
    slide: usize,
    seq: usize,
}

impl IdGenerator {
    pub fn new(slide: usize) -> Self {
        Self { slide, seq: 0 }
    }

    /// Identifier of the slide itself.
    pub fn slide_id(&self) -> String {
        format!("slide-{}", self.slide)
    }

    /// Next object identifier with the given kind prefix.
    pub fn allocate(&mut self, prefix: &str) -> String {
        self.seq += 1;
        format!("{}-{}-{}", prefix, self.slide, self.seq)
    }
}
