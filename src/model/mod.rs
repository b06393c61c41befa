//! Slide-deck model.
//!
//! A [`Deck`] is a list of [`Slide`]s, and each slide is a flat list of
//! [`VisualObject`]s in paint order. The model carries only what a canvas
//! needs to draw and edit objects: position, size, rotation, text, fill and
//! image bytes.

mod color;
mod deck;
mod image;
mod object;

pub use color::*;
pub use deck::*;
pub use image::*;
pub use object::*;
