//! Slide discovery and deck assembly.

use crate::error::{Error, Result};
use crate::model::{Deck, Slide};
use crate::options::{ParseOptions, PARALLEL_THRESHOLD};
use crate::package::Package;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::path::Path;

use super::slide::SlideExtractor;

const SLIDE_PREFIX: &str = "ppt/slides/slide";
const SLIDE_SUFFIX: &str = ".xml";

/// A slide part and the index embedded in its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePart {
    /// Numeric suffix of the file name (`slide12.xml` is 12)
    pub index: u32,
    /// Part path within the package
    pub path: String,
}

fn slide_digits(path: &str) -> Option<&str> {
    let digits = path
        .strip_prefix(SLIDE_PREFIX)?
        .strip_suffix(SLIDE_SUFFIX)?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

/// Index of a slide part path, or `None` if the path is not a slide part.
///
/// Only `ppt/slides/slide<digits>.xml` qualifies. Numbers too large for a
/// `u32` saturate to `u32::MAX`; the part is still a slide.
pub fn slide_index(path: &str) -> Option<u32> {
    slide_digits(path).map(|digits| digits.parse().unwrap_or(u32::MAX))
}

/// Compare two digit strings by numeric value, at any length.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// All slide parts in the package, ordered by slide index.
///
/// Archive entry order carries no meaning, and a string sort would put
/// `slide10.xml` before `slide2.xml`, so parts are sorted numerically.
pub fn slide_parts(package: &Package) -> Vec<SlidePart> {
    let mut parts: Vec<SlidePart> = package
        .part_names_with_prefix(SLIDE_PREFIX)
        .into_iter()
        .filter_map(|path| slide_index(&path).map(|index| SlidePart { index, path }))
        .collect();
    parts.sort_by(|a, b| {
        let (da, db) = (slide_digits(&a.path), slide_digits(&b.path));
        cmp_digits(da.unwrap_or_default(), db.unwrap_or_default())
            .then_with(|| a.path.cmp(&b.path))
    });
    parts
}

/// Assemble a deck with slides of the given pixel size.
pub fn assemble(package: &Package, width: u32, height: u32) -> Result<Deck> {
    assemble_with_options(package, &ParseOptions::new().with_slide_size(width, height))
}

/// Assemble a deck.
///
/// Fails with [`Error::NoSlidesFound`] when the package has no slide
/// parts. Problems inside a slide never fail the deck.
pub fn assemble_with_options(package: &Package, options: &ParseOptions) -> Result<Deck> {
    let parts = slide_parts(package);
    if parts.is_empty() {
        return Err(Error::NoSlidesFound);
    }

    let extractor = SlideExtractor::new(package, options);
    let slides: Vec<Slide> = if options.parallel && parts.len() >= PARALLEL_THRESHOLD {
        parts
            .par_iter()
            .enumerate()
            .map(|(i, part)| extractor.extract(part, i + 1))
            .collect()
    } else {
        parts
            .iter()
            .enumerate()
            .map(|(i, part)| extractor.extract(part, i + 1))
            .collect()
    };

    let deck = Deck { slides };
    tracing::info!(
        slides = deck.len(),
        objects = deck.object_count(),
        "assembled deck"
    );
    Ok(deck)
}

/// Parser for PPTX (PowerPoint) presentations.
///
/// # Example
///
/// ```no_run
/// use pptdeck::{DeckParser, ParseOptions};
///
/// let deck = DeckParser::open("slides.pptx")?
///     .with_options(ParseOptions::new().with_slide_size(1280, 720))
///     .parse()?;
/// println!("{} slides", deck.len());
/// # Ok::<(), pptdeck::Error>(())
/// ```
#[derive(Debug)]
pub struct DeckParser {
    package: Package,
    options: ParseOptions,
}

impl DeckParser {
    /// Open a PPTX file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_package(Package::open(path)?))
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self::from_package(Package::from_bytes(data)?))
    }

    /// Create a parser over an opened package.
    pub fn from_package(package: Package) -> Self {
        Self {
            package,
            options: ParseOptions::default(),
        }
    }

    /// Replace the parse options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Get a reference to the underlying package.
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Number of slide parts in the package.
    pub fn slide_count(&self) -> usize {
        slide_parts(&self.package).len()
    }

    /// Parse the presentation into a deck.
    pub fn parse(&self) -> Result<Deck> {
        assemble_with_options(&self.package, &self.options)
    }
}
