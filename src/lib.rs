//! # pptdeck
//!
//! Parse PowerPoint (.pptx) packages into an editable slide-deck model.
//!
//! Each slide becomes a flat, paint-ordered list of objects: an optional
//! full-slide background (solid color or image), text blocks, and
//! pictures with their image bytes. The result is meant for a canvas
//! editor, not for faithful rendering: shape geometry, layouts, masters,
//! tables, charts and grouped shapes are not interpreted.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pptdeck::{parse_file, VisualObject};
//!
//! let deck = parse_file("slides.pptx")?;
//! for slide in &deck.slides {
//!     for object in &slide.objects {
//!         if let VisualObject::Text(text) = object {
//!             println!("{}: {}", slide.id, text.text);
//!         }
//!     }
//! }
//!
//! // Save an editor snapshot
//! let json = pptdeck::snapshot::to_json_default(&deck)?;
//! std::fs::write("slides.json", json)?;
//! # Ok::<(), pptdeck::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: [`parse_file_async`] on the Tokio blocking pool

pub mod error;
pub mod model;
pub mod options;
pub mod package;
pub mod pptx;
pub mod rels;
pub mod snapshot;
pub mod xml;

#[cfg(test)]
mod fixtures;

// Re-exports
pub use error::{Error, Result};
pub use model::{
    Background, Color, Deck, Fill, IdGenerator, ImageAsset, ObjectKind, Picture, RectShape, Slide,
    TextBlock, VisualObject,
};
pub use options::{Frame, ParseOptions};
pub use package::Package;
pub use pptx::{assemble, DeckParser};
pub use rels::{Relationship, Relationships};

use std::path::Path;

/// Parse a presentation file with default options.
///
/// # Example
///
/// ```no_run
/// let deck = pptdeck::parse_file("slides.pptx")?;
/// println!("Slides: {}", deck.len());
/// # Ok::<(), pptdeck::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Deck> {
    DeckParser::open(path)?.parse()
}

/// Parse a presentation file with the given options.
pub fn parse_file_with_options(path: impl AsRef<Path>, options: ParseOptions) -> Result<Deck> {
    DeckParser::open(path)?.with_options(options).parse()
}

/// Parse a presentation from bytes.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("slides.pptx")?;
/// let deck = pptdeck::parse_bytes(&data)?;
/// # Ok::<(), pptdeck::Error>(())
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Deck> {
    parse_bytes_with_options(data, ParseOptions::default())
}

/// Parse a presentation from bytes with the given options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Deck> {
    DeckParser::from_bytes(data.to_vec())?
        .with_options(options)
        .parse()
}

/// Parse a presentation file without blocking the async runtime.
///
/// The file is read with `tokio::fs` and parsed on the blocking pool. Wrap
/// the call in `tokio::time::timeout` to bound it; a timed-out parse
/// yields nothing.
#[cfg(feature = "async")]
pub async fn parse_file_async(path: impl AsRef<Path>, options: ParseOptions) -> Result<Deck> {
    let data = tokio::fs::read(path.as_ref()).await?;
    tokio::task::spawn_blocking(move || DeckParser::from_bytes(data)?.with_options(options).parse())
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}
