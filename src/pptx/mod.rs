//! PPTX (PowerPoint) presentation parsing.
//!
//! [`deck`] finds the slide parts of a package and orders them;
//! [`slide`] turns each slide part into backgrounds, text blocks and
//! pictures.

pub mod deck;
pub mod slide;

pub use deck::{
    assemble, assemble_with_options, slide_index, slide_parts, DeckParser, SlidePart,
};
pub use slide::SlideExtractor;
