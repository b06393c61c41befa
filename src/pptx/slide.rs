//! Slide part extraction.

use crate::model::{
    Background, Color, Fill, IdGenerator, ImageAsset, Picture, Slide, TextBlock, VisualObject,
};
use crate::options::ParseOptions;
use crate::package::Package;
use crate::rels::{self, Relationships};
use crate::xml::XmlNode;
use unicode_normalization::UnicodeNormalization;

use super::deck::SlidePart;

/// `spTree` children that describe the tree itself rather than content.
const TREE_PROPERTIES: &[&str] = &["nvGrpSpPr", "grpSpPr", "extLst"];

/// Turns one slide part into a [`Slide`].
///
/// Extraction never fails. Anything that cannot be read or understood is
/// left out of the slide, down to returning a slide with no objects.
pub struct SlideExtractor<'a> {
    package: &'a Package,
    options: &'a ParseOptions,
}

impl<'a> SlideExtractor<'a> {
    pub fn new(package: &'a Package, options: &'a ParseOptions) -> Self {
        Self { package, options }
    }

    /// Extract `part`, which is slide number `ordinal` (1-based) of the deck.
    ///
    /// Objects are ordered background first, then text blocks, then
    /// pictures, each group in document order.
    pub fn extract(&self, part: &SlidePart, ordinal: usize) -> Slide {
        let mut ids = IdGenerator::new(ordinal);
        let mut slide = Slide::new(
            ids.slide_id(),
            part.index,
            self.options.slide_width,
            self.options.slide_height,
        );
        slide.source = Some(part.path.clone());

        let root = match self
            .package
            .read_text(&part.path)
            .and_then(|xml| XmlNode::parse(&xml))
        {
            Ok(root) => root,
            Err(err) => {
                tracing::warn!(part = %part.path, error = %err, "slide part unreadable, leaving it empty");
                return slide;
            }
        };

        let Some(common) = root.child("cSld") else {
            tracing::debug!(part = %part.path, "slide has no common slide data");
            return slide;
        };

        let rels = rels::resolve(self.package, &part.path);

        if let Some(background) = self.background(common, &rels, &part.path, &mut ids) {
            slide.push(background);
        }

        let Some(tree) = common.child("spTree") else {
            return slide;
        };

        for shape in tree.children("sp") {
            if let Some(text) = self.text_block(shape, &mut ids) {
                slide.push(text);
            }
        }

        for pic in tree.children("pic") {
            if let Some(picture) = self.picture(pic, &rels, &part.path, &mut ids) {
                slide.push(picture);
            }
        }

        let unsupported = tree
            .children
            .iter()
            .filter(|c| {
                let name = c.local_name();
                name != "sp" && name != "pic" && !TREE_PROPERTIES.contains(&name)
            })
            .count();
        if unsupported > 0 {
            tracing::debug!(part = %part.path, count = unsupported, "skipped unsupported shapes");
        }

        slide
    }

    /// Background from `<p:bg><p:bgPr>`. An image fill is checked before a
    /// solid fill; if the image cannot be loaded there is no background.
    fn background(
        &self,
        common: &XmlNode,
        rels: &Relationships,
        part: &str,
        ids: &mut IdGenerator,
    ) -> Option<VisualObject> {
        let properties = common.path(&["bg", "bgPr"])?;

        let fill = if let Some(blip) = properties.path(&["blipFill", "blip"]) {
            Fill::Image(self.load_image(blip, rels, part)?)
        } else {
            Fill::Solid(solid_color(properties.child("solidFill")?)?)
        };

        let prefix = match fill {
            Fill::Image(_) => "bg",
            Fill::Solid(_) => "bgcolor",
        };

        Some(VisualObject::Background(Background {
            id: ids.allocate(prefix),
            x: 0.0,
            y: 0.0,
            width: f64::from(self.options.slide_width),
            height: f64::from(self.options.slide_height),
            fill,
            rotation: 0.0,
        }))
    }

    /// Text block from a `<p:sp>` with a text body. Paragraph runs are
    /// concatenated and paragraphs joined with newlines; blank text gives
    /// no object.
    fn text_block(&self, shape: &XmlNode, ids: &mut IdGenerator) -> Option<VisualObject> {
        let body = shape.child("txBody")?;

        let text = body
            .children("p")
            .map(|paragraph| {
                paragraph
                    .children("r")
                    .filter_map(|run| run.child("t"))
                    .map(XmlNode::text)
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return None;
        }

        let (x, y) = self.options.text_origin;
        Some(VisualObject::Text(TextBlock {
            id: ids.allocate("txt"),
            x,
            y,
            text: text.nfc().collect(),
            font_size: self.options.font_size,
            rotation: 0.0,
        }))
    }

    fn picture(
        &self,
        pic: &XmlNode,
        rels: &Relationships,
        part: &str,
        ids: &mut IdGenerator,
    ) -> Option<VisualObject> {
        let blip = pic.path(&["blipFill", "blip"])?;
        let image = self.load_image(blip, rels, part)?;
        let frame = self.options.picture_frame;

        Some(VisualObject::Picture(Picture {
            id: ids.allocate("img"),
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            rotation: 0.0,
            image,
        }))
    }

    /// Follow an `<a:blip r:embed>` reference to the image bytes.
    fn load_image(&self, blip: &XmlNode, rels: &Relationships, part: &str) -> Option<ImageAsset> {
        let embed = blip.attr("embed")?;
        let Some(target) = rels.target_path(embed, part) else {
            tracing::debug!(part, rel_id = embed, "image relationship not found");
            return None;
        };

        match self.package.read_bytes(&target) {
            Ok(data) => Some(ImageAsset::from_part(target, data)),
            Err(err) => {
                tracing::debug!(part, target = %target, error = %err, "image part not loaded");
                None
            }
        }
    }
}

/// Color of an `<a:solidFill>`: an explicit RGB value, or the last
/// computed value of a system color.
fn solid_color(fill: &XmlNode) -> Option<Color> {
    let hex = if let Some(rgb) = fill.child("srgbClr") {
        rgb.attr("val")?
    } else {
        fill.child("sysClr")?.attr("lastClr")?
    };

    match Color::from_hex(hex) {
        Ok(color) => Some(color),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring background color");
            None
        }
    }
}
